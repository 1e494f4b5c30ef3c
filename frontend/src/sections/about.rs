use yew::prelude::*;

use crate::components::info_card::{CardContent, InfoGrid, Theme};
use crate::components::reveal::Reveal;

const ABOUT_CARDS: &[CardContent] = &[
    CardContent {
        icon: "💓",
        title: "Progressive Muscle Weakness",
        desc: "MD causes muscles to lose strength over time, often beginning in the legs and spreading to other parts of the body.",
    },
    CardContent {
        icon: "🧠",
        title: "Neural Connection Remains Intact",
        desc: "The brain continues to send movement signals, but the weakened muscles can't respond properly.",
    },
    CardContent {
        icon: "📈",
        title: "Multiple Types",
        desc: "There are over 30 types of muscular dystrophy, such as Duchenne and Becker, each affecting muscles differently.",
    },
    CardContent {
        icon: "🤝",
        title: "Impact on Daily Life",
        desc: "People may experience mobility loss, fatigue, and dependence on assistance for basic movements.",
    },
    CardContent {
        icon: "💓",
        title: "No Permanent Cure, Yet",
        desc: "While research is ongoing, supportive technology like BioLife offers functional independence and renewed hope.",
    },
    CardContent {
        icon: "📈",
        title: "Empowering the Future",
        desc: "By combining neuroscience and robotics, BioLife helps patients regain movement and improve quality of life.",
    },
];

const ABOUT_CSS: &str = r#"
    .about-section {
        position: relative;
        width: 100%;
        padding: 6rem 2.5rem;
        background: linear-gradient(to bottom right, #f9fafb, #eef7fa, #e3f2fd);
        color: #374151;
        overflow: hidden;
        box-sizing: border-box;
    }
    .about-glow {
        position: absolute;
        inset: 0;
        background: radial-gradient(circle at 70% 40%, rgba(56, 189, 248, 0.15), transparent 60%);
        filter: blur(48px);
        pointer-events: none;
    }
    .about-intro {
        max-width: 56rem;
        margin: 0 auto 3rem;
        text-align: center;
        font-size: 1.125rem;
        color: #475569;
        line-height: 1.7;
    }
    .about-intro strong { color: #0284c7; }
"#;

#[function_component(AboutBioLife)]
pub fn about_biolife() -> Html {
    html! {
        <section class="about-section">
            <style>{ABOUT_CSS}</style>
            <div class="about-glow"></div>

            <Reveal>
                <h2 class="section-title sky">{"What is Muscular Dystrophy?"}</h2>
            </Reveal>

            <Reveal delay_ms={150}>
                <p class="about-intro">
                    <strong>{"Muscular Dystrophy (MD)"}</strong>
                    {" is a group of genetic disorders that gradually weaken the body's muscles. \
                      Over time, muscle fibers break down and are replaced by fat or scar tissue, \
                      making everyday actions like walking, lifting, or even breathing difficult."}
                </p>
            </Reveal>

            <InfoGrid cards={ABOUT_CARDS} theme={Theme::Light} />

            <Reveal delay_ms={300}>
                <p class="closing-quote">
                    {"\"Understanding Muscular Dystrophy is the first step toward compassion, \
                      innovation, and restoring movement through technology.\""}
                </p>
            </Reveal>
        </section>
    }
}
