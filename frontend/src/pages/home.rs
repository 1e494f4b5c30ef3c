use web_sys::Element;
use yew::prelude::*;

use crate::components::footer::Footer;
use crate::components::navbar::Navbar;
use crate::dom::{self, DomError};
use crate::section::{Section, SectionRefs};
use crate::sections::{
    about::AboutBioLife, book::Book, hero::HeroSection, status::ExoSkeletonStatus,
    team::TeamShowcase, timeline::JourneyTimeline, why::WhyBioLife,
};

/// Home scrolls to the very top; every other section scrolls into view.
pub fn scroll_to(refs: &SectionRefs, section: Section) -> Result<(), DomError> {
    match section {
        Section::Home => dom::scroll_to_top(),
        other => dom::scroll_into_view(refs.get(other).cast::<Element>()),
    }
}

#[derive(Properties, PartialEq)]
pub struct HomeProps {
    /// Section to bring into view once the page has mounted.
    #[prop_or_default]
    pub focus: Option<Section>,
}

#[function_component(Home)]
pub fn home(props: &HomeProps) -> Html {
    let refs = SectionRefs {
        home: use_node_ref(),
        about: use_node_ref(),
        status: use_node_ref(),
        book: use_node_ref(),
        team: use_node_ref(),
    };

    {
        let refs = refs.clone();
        use_effect_with_deps(move |focus| {
            if let Some(section) = *focus {
                if let Err(e) = scroll_to(&refs, section) {
                    log::warn!("Could not focus {:?}: {}", section, e);
                }
            }
            || ()
        }, props.focus);
    }

    let on_navigate = {
        let refs = refs.clone();
        Callback::from(move |section: Section| {
            log::info!("Navigating to {:?}", section);
            if let Err(e) = scroll_to(&refs, section) {
                log::warn!("Could not scroll to {:?}: {}", section, e);
            }
        })
    };

    html! {
        <div class="landing">
            <Navbar on_navigate={on_navigate.clone()} />
            <div ref={refs.home.clone()}>
                <HeroSection />
            </div>
            <div ref={refs.about.clone()}>
                <AboutBioLife />
            </div>
            <WhyBioLife />
            <div ref={refs.status.clone()}>
                <ExoSkeletonStatus />
            </div>
            <JourneyTimeline />
            <div ref={refs.team.clone()}>
                <TeamShowcase />
            </div>
            <div ref={refs.book.clone()}>
                <Book />
            </div>
            <Footer {on_navigate} />
        </div>
    }
}
