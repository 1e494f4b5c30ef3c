use yew::prelude::*;
use yew_router::prelude::*;

use crate::components::footer::Footer;
use crate::components::info_card::{CardContent, InfoGrid, Theme};
use crate::components::navbar::Navbar;
use crate::config;
use crate::section::Section;
use crate::Route;

const PRODUCT_CARDS: &[CardContent] = &[
    CardContent {
        icon: "🧠",
        title: "Neural Signal Decoder",
        desc: "Picks up brain signals and converts them into precise motion patterns.",
    },
    CardContent {
        icon: "🤖",
        title: "Adaptive AI",
        desc: "Learns patient gait and dynamically adjusts movement support.",
    },
    CardContent {
        icon: "🛡️",
        title: "Smart Safety",
        desc: "Auto-correction and fallback systems ensure secure walking at all times.",
    },
];

/// Route that shows a landing section when clicked from outside the landing page.
pub fn route_for(section: Section) -> Route {
    match section {
        Section::Book => Route::Book,
        Section::Team => Route::Team,
        Section::Home | Section::About | Section::Status => Route::Home,
    }
}

const SOLUTION_CSS: &str = r#"
    .value-prop {
        padding: 9rem 2rem 6rem;
        text-align: center;
        background: linear-gradient(to bottom right, #f0f9ff, #fff, #e0f2fe);
    }
    .value-prop h2 {
        color: #0284c7;
        font-size: 3rem;
        font-weight: 800;
        margin: 0 0 1.5rem 0;
    }
    .value-prop p, .product-details > p {
        max-width: 48rem;
        margin: 0 auto;
        color: #334155;
        font-size: 1.25rem;
        line-height: 1.7;
    }
    .get-demo {
        display: inline-block;
        margin-top: 2.5rem;
        padding: 0.75rem 2rem;
        border-radius: 0.75rem;
        background: #0284c7;
        color: #fff;
        font-weight: 600;
        text-decoration: none;
        transition: background 0.2s ease;
    }
    .get-demo:hover { background: #0369a1; }
    .product-details {
        padding: 6rem 2rem;
        text-align: center;
        background: #f0f9ff;
    }
    .product-details h2 { color: #0284c7; font-size: 2.25rem; margin: 0 0 1.5rem 0; }
    .product-details > p { font-size: 1.125rem; margin-bottom: 2.5rem; }
    .demo-video h3 { color: #475569; font-size: 1.25rem; margin: 4rem 0 1rem 0; }
    .video-frame {
        width: 100%;
        max-width: 56rem;
        aspect-ratio: 16 / 9;
        margin: 0 auto;
        border-radius: 0.75rem;
        overflow: hidden;
        border: 2px solid #bae6fd;
    }
    .video-frame iframe { width: 100%; height: 100%; border: 0; }
"#;

#[function_component(ValueProposition)]
pub fn value_proposition() -> Html {
    html! {
        <section class="value-prop">
            <h2>{"Empowering Mobility with Intelligent Neuro-Exosuits"}</h2>
            <p>
                {"BioLife creates AI-driven, mind-controlled exoskeletons to restore independence for those \
                  with muscular dystrophy. Our smart wearable system translates neural signals into movement, \
                  enabling a future where thought leads action."}
            </p>
            <Link<Route> to={Route::Book} classes="get-demo">{"Get a Demo"}</Link<Route>>
        </section>
    }
}

#[function_component(ProductDetails)]
pub fn product_details() -> Html {
    html! {
        <section class="product-details">
            <h2>{"Our Innovation"}</h2>
            <p>
                {"BioLife Exosuit is a lightweight, AI-powered wearable that responds to brain signals using \
                  embedded neural sensors. Designed for patients with neuromuscular diseases, it adapts in \
                  real-time for safe and intuitive walking."}
            </p>
            <InfoGrid cards={PRODUCT_CARDS} theme={Theme::Light} />
            <div class="demo-video">
                <h3>{"Experience Our Solution"}</h3>
                <div class="video-frame">
                    <iframe
                        src={config::DEMO_VIDEO_URL}
                        title="BioLife Demo"
                        allow="accelerometer; autoplay; clipboard-write; encrypted-media; gyroscope; picture-in-picture"
                        allowfullscreen=true
                    ></iframe>
                </div>
            </div>
        </section>
    }
}

#[function_component(SolutionPage)]
pub fn solution_page() -> Html {
    let navigator = use_navigator();

    let on_navigate = Callback::from(move |section: Section| {
        match &navigator {
            Some(navigator) => navigator.push(&route_for(section)),
            None => log::warn!("No router available for {:?}", section),
        }
    });

    html! {
        <>
            <style>{SOLUTION_CSS}</style>
            <Navbar on_navigate={on_navigate.clone()} />
            <ValueProposition />
            <ProductDetails />
            <Footer {on_navigate} />
        </>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_booking_links_land_on_booking_route() {
        assert!(route_for(Section::Book) == Route::Book);
        assert!(route_for(Section::Team) == Route::Team);
        assert!(route_for(Section::Status) == Route::Home);
        assert!(route_for(Section::Home) == Route::Home);
    }
}
