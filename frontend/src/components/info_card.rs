use yew::prelude::*;

use crate::components::reveal::Reveal;

/// Icon, title and blurb for the about/why/product grids.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CardContent {
    pub icon: &'static str,
    pub title: &'static str,
    pub desc: &'static str,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Theme {
    Light,
    Dark,
}

impl Theme {
    fn class(self) -> &'static str {
        match self {
            Theme::Light => "info-card light",
            Theme::Dark => "info-card dark",
        }
    }
}

const CARD_CSS: &str = r#"
    .info-grid {
        position: relative;
        z-index: 10;
        display: grid;
        grid-template-columns: repeat(3, 1fr);
        gap: 2.5rem;
        max-width: 72rem;
        margin: 0 auto;
    }
    .info-card {
        height: 100%;
        box-sizing: border-box;
        border-radius: 1.5rem;
        padding: 2rem;
        display: flex;
        flex-direction: column;
        align-items: center;
        text-align: center;
        gap: 1rem;
        transition: transform 0.5s ease, box-shadow 0.5s ease;
    }
    .info-card:hover { transform: translateY(-0.5rem); }
    .info-card .icon {
        font-size: 2.25rem;
        padding: 0.75rem;
        border-radius: 1rem;
        transition: transform 0.3s ease;
    }
    .info-card:hover .icon { transform: scale(1.1); }
    .info-card h3 { font-size: 1.5rem; font-weight: 700; margin: 0; }
    .info-card p { line-height: 1.6; margin: 0; }
    .info-card.light {
        background: #fff;
        border: 1px solid #bae6fd;
        box-shadow: 0 0 25px rgba(56, 189, 248, 0.08);
    }
    .info-card.light:hover { box-shadow: 0 0 45px rgba(56, 189, 248, 0.25); }
    .info-card.light .icon { background: #e0f2fe; border: 1px solid #bae6fd; }
    .info-card.light h3 { color: #0284c7; }
    .info-card.light p { color: #475569; }
    .info-card.dark {
        background: rgba(255, 255, 255, 0.05);
        border: 1px solid rgba(34, 197, 94, 0.2);
        box-shadow: 0 0 25px rgba(0, 255, 128, 0.08);
    }
    .info-card.dark:hover { box-shadow: 0 0 45px rgba(0, 255, 128, 0.25); }
    .info-card.dark .icon { background: rgba(74, 222, 128, 0.1); border: 1px solid rgba(74, 222, 128, 0.2); }
    .info-card.dark h3 { color: #4ade80; }
    .info-card.dark p { color: #9ca3af; }
    @media (max-width: 1024px) { .info-grid { grid-template-columns: repeat(2, 1fr); } }
    @media (max-width: 640px) { .info-grid { grid-template-columns: 1fr; } }
"#;

#[derive(Properties, PartialEq)]
pub struct InfoGridProps {
    pub cards: &'static [CardContent],
    pub theme: Theme,
}

/// Staggered grid of cards; each card reveals 150 ms after the previous one.
#[function_component(InfoGrid)]
pub fn info_grid(props: &InfoGridProps) -> Html {
    let class = props.theme.class();
    html! {
        <div class="info-grid">
            <style>{CARD_CSS}</style>
            { for props.cards.iter().enumerate().map(|(i, card)| html! {
                <Reveal delay_ms={150 * i as u32}>
                    <div class={class}>
                        <div class="icon">{card.icon}</div>
                        <h3>{card.title}</h3>
                        <p>{card.desc}</p>
                    </div>
                </Reveal>
            }) }
        </div>
    }
}
