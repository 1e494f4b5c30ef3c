use yew::prelude::*;

use crate::components::info_card::{CardContent, InfoGrid, Theme};
use crate::components::reveal::Reveal;

const REASONS: &[CardContent] = &[
    CardContent {
        icon: "🧠",
        title: "Mind-Powered Movement",
        desc: "BioLife decodes neural signals to create motion, making your thoughts the key to movement.",
    },
    CardContent {
        icon: "🖥️",
        title: "AI-Driven Precision",
        desc: "Advanced adaptive AI learns user behavior to ensure smoother, natural, and precise assistance.",
    },
    CardContent {
        icon: "💓",
        title: "Rehabilitation & Recovery",
        desc: "Rebuild strength and confidence through controlled muscle engagement and movement training.",
    },
    CardContent {
        icon: "⚡",
        title: "Energy Smart Design",
        desc: "BioLife optimizes energy usage for longer operation: efficient, sustainable, and powerful.",
    },
    CardContent {
        icon: "🛡️",
        title: "Safety You Can Trust",
        desc: "Integrated stability and overload protection ensure a secure, balanced experience every time.",
    },
    CardContent {
        icon: "📈",
        title: "Real-Time Insights",
        desc: "Live data tracking of power, balance, and neural responses keeps you in full control.",
    },
];

const WHY_CSS: &str = r#"
    .why-section {
        position: relative;
        width: 100%;
        padding: 6rem 2.5rem;
        background: linear-gradient(to bottom right, #050505, #0a0a0a, #101010);
        color: #e5e7eb;
        overflow: hidden;
        box-sizing: border-box;
    }
    .why-glow {
        position: absolute;
        inset: 0;
        background: radial-gradient(circle at 30% 50%, rgba(34, 197, 94, 0.07), transparent 70%);
        filter: blur(48px);
        pointer-events: none;
    }
    .why-intro {
        max-width: 48rem;
        margin: 0 auto 4rem;
        text-align: center;
        font-size: 1.125rem;
        color: #9ca3af;
        line-height: 1.7;
    }
    .why-intro strong { color: #4ade80; }
"#;

#[function_component(WhyBioLife)]
pub fn why_biolife() -> Html {
    html! {
        <section class="why-section">
            <style>{WHY_CSS}</style>
            <div class="why-glow"></div>

            <Reveal>
                <h2 class="section-title green">{"Why Choose BioLife?"}</h2>
            </Reveal>
            <Reveal delay_ms={150}>
                <p class="why-intro">
                    {"BioLife isn't just a medical device, it's a revolution in human mobility. Designed for "}
                    <strong>{"Muscular Dystrophy"}</strong>
                    {" patients, it transforms neural activity into real motion, empowering independence, \
                      confidence, and a new definition of freedom."}
                </p>
            </Reveal>

            <InfoGrid cards={REASONS} theme={Theme::Dark} />

            <Reveal>
                <p class="closing-quote dark">
                    {"\"BioLife: where technology meets compassion, and movement becomes hope.\""}
                </p>
            </Reveal>
        </section>
    }
}
