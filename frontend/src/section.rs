use yew::NodeRef;

/// Scroll targets on the landing page.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Section {
    Home,
    About,
    Status,
    Book,
    Team,
}

/// Navbar entries in display order.
pub const NAV_ITEMS: &[(&str, Section)] = &[
    ("Home", Section::Home),
    ("About Disease", Section::About),
    ("Status", Section::Status),
    ("Book", Section::Book),
];

/// Footer links; "Contact" lands on the booking form.
pub const FOOTER_ITEMS: &[(&str, Section)] = &[
    ("Home", Section::Home),
    ("About", Section::About),
    ("Status", Section::Status),
    ("Book", Section::Book),
    ("Contact", Section::Book),
];

/// One `NodeRef` per scroll target, owned by the page.
#[derive(Clone, Default, PartialEq)]
pub struct SectionRefs {
    pub home: NodeRef,
    pub about: NodeRef,
    pub status: NodeRef,
    pub book: NodeRef,
    pub team: NodeRef,
}

impl SectionRefs {
    pub fn get(&self, section: Section) -> &NodeRef {
        match section {
            Section::Home => &self.home,
            Section::About => &self.about,
            Section::Status => &self.status,
            Section::Book => &self.book,
            Section::Team => &self.team,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_nav_items_target_distinct_sections() {
        for (i, (_, a)) in NAV_ITEMS.iter().enumerate() {
            for (_, b) in &NAV_ITEMS[i + 1..] {
                assert_ne!(a, b);
            }
        }
        assert_eq!(NAV_ITEMS[0], ("Home", Section::Home));
    }

    #[test]
    fn test_each_section_has_its_own_target() {
        let refs = SectionRefs::default();
        let all = [Section::Home, Section::About, Section::Status, Section::Book, Section::Team];
        for (i, a) in all.iter().enumerate() {
            for b in &all[i + 1..] {
                assert!(refs.get(*a) != refs.get(*b), "{:?} and {:?} share a target", a, b);
            }
        }
    }

    #[test]
    fn test_contact_scrolls_to_booking() {
        let contact = FOOTER_ITEMS.iter().find(|(label, _)| *label == "Contact");
        assert_eq!(contact.map(|(_, s)| *s), Some(Section::Book));
    }
}
