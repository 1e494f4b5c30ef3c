use yew::prelude::*;
use web_sys::Element;

use crate::dom;

/// Fraction of the viewport height an element's top must rise above before it reveals.
const REVEAL_LINE: f64 = 0.9;

pub fn is_in_view(top: f64, viewport_height: f64) -> bool {
    top < viewport_height * REVEAL_LINE
}

#[derive(Properties, PartialEq)]
pub struct RevealProps {
    #[prop_or_default]
    pub children: Children,
    #[prop_or_default]
    pub class: Classes,
    /// Stagger offset for cards revealed as a group.
    #[prop_or_default]
    pub delay_ms: u32,
}

/// Fades its children up the first time they scroll into view.
#[function_component(Reveal)]
pub fn reveal(props: &RevealProps) -> Html {
    let node = use_node_ref();
    let visible = use_state_eq(|| false);

    {
        let node = node.clone();
        let visible = visible.clone();
        use_effect_with_deps(move |_| {
            let check = move || {
                let rect = dom::bounding_rect(node.cast::<Element>());
                if let (Ok(rect), Ok(height)) = (rect, dom::viewport_height()) {
                    if is_in_view(rect.top(), height) {
                        visible.set(true);
                    }
                }
            };
            check();
            let listener = dom::listen_window("scroll", move |_| check());
            move || drop(listener)
        }, ());
    }

    html! {
        <div
            ref={node}
            class={classes!("reveal", (*visible).then(|| "visible"), props.class.clone())}
            style={format!("transition-delay: {}ms;", props.delay_ms)}
        >
            { for props.children.iter() }
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reveal_line() {
        assert!(is_in_view(100.0, 800.0));
        assert!(is_in_view(-400.0, 800.0));
        assert!(!is_in_view(720.0, 800.0));
        assert!(!is_in_view(1500.0, 800.0));
    }
}
