use chrono::Datelike;
use yew::prelude::*;
use yew_hooks::prelude::*;

use crate::config;
use crate::dom;
use crate::section::{Section, FOOTER_ITEMS};

pub fn show_go_to_top(scroll_y: f64) -> bool {
    scroll_y > config::GO_TOP_THRESHOLD
}

const FOOTER_CSS: &str = r#"
    .site-footer {
        position: relative;
        width: 100%;
        padding: 3rem 2rem;
        background: linear-gradient(to bottom right, #050505, #0a0a0a, #101010);
        color: #d1d5db;
        overflow: hidden;
        box-sizing: border-box;
    }
    .footer-glow {
        position: absolute;
        inset: 0;
        background: radial-gradient(circle at 50% 0%, rgba(34, 197, 94, 0.1), transparent 70%);
        filter: blur(40px);
        pointer-events: none;
    }
    .footer-row {
        position: relative;
        z-index: 10;
        max-width: 72rem;
        margin: 0 auto;
        display: flex;
        justify-content: space-between;
        align-items: center;
        gap: 2.5rem;
    }
    .footer-brand h1 {
        color: #4ade80;
        font-size: 1.875rem;
        letter-spacing: 0.025em;
        margin: 0 0 0.75rem 0;
        transition: text-shadow 0.3s ease, transform 0.3s ease;
    }
    .footer-brand h1:hover {
        text-shadow: 0 0 10px #34d399, 0 0 20px #10b981;
        transform: scale(1.05);
    }
    .footer-brand p { color: #9ca3af; max-width: 24rem; line-height: 1.6; margin: 0; }
    .footer-brand span { color: #4ade80; font-weight: 600; }
    .footer-links {
        display: flex;
        gap: 2rem;
        list-style: none;
        padding: 0;
        margin: 0;
    }
    .footer-links li {
        color: #9ca3af;
        font-weight: 500;
        cursor: pointer;
        transition: color 0.3s ease, text-shadow 0.3s ease;
    }
    .footer-links li:hover { color: #34d399; text-shadow: 0 0 6px #34d399; }
    .footer-socials { display: flex; gap: 1.25rem; }
    .footer-socials a {
        color: #9ca3af;
        text-decoration: none;
        font-size: 0.875rem;
        transition: color 0.3s ease, transform 0.3s ease;
    }
    .footer-socials a:hover { color: #4ade80; transform: scale(1.2); }
    .footer-divider {
        width: 100%;
        height: 1px;
        margin: 2rem 0;
        background: linear-gradient(to right, transparent, rgba(34, 197, 94, 0.3), transparent);
    }
    .footer-copy { text-align: center; font-size: 0.875rem; color: #6b7280; }
    .footer-copy span { color: #4ade80; font-weight: 600; }
    .go-top {
        position: fixed;
        bottom: 1.5rem;
        right: 1.5rem;
        z-index: 50;
        width: 3.25rem;
        height: 3.25rem;
        border-radius: 9999px;
        border: 1px solid rgba(74, 222, 128, 0.3);
        background: rgba(255, 255, 255, 0.1);
        backdrop-filter: blur(24px);
        color: #4ade80;
        font-size: 1.5rem;
        cursor: pointer;
        box-shadow: 0 0 20px rgba(0, 255, 128, 0.25);
        animation: goTopIn 0.4s ease;
        transition: background 0.3s ease, box-shadow 0.3s ease;
    }
    .go-top:hover { background: rgba(34, 197, 94, 0.2); box-shadow: 0 0 30px rgba(0, 255, 128, 0.4); }
    @keyframes goTopIn {
        from { opacity: 0; transform: translateY(50px) scale(0.8); }
        to { opacity: 1; transform: translateY(0) scale(1); }
    }
    @media (max-width: 768px) {
        .footer-row { flex-direction: column; text-align: center; }
        .footer-links { flex-direction: column; gap: 0.75rem; }
    }
"#;

#[derive(Properties, PartialEq)]
pub struct FooterProps {
    pub on_navigate: Callback<Section>,
}

#[function_component(Footer)]
pub fn footer(props: &FooterProps) -> Html {
    let (_, scroll_y) = use_window_scroll();
    let year = chrono::Local::now().year();

    let go_to_top = Callback::from(|_: MouseEvent| {
        if let Err(e) = dom::scroll_to_top() {
            log::warn!("Could not scroll to top: {}", e);
        }
    });

    let socials = [
        ("Facebook", "#".to_string()),
        ("Twitter", "#".to_string()),
        ("LinkedIn", "#".to_string()),
        ("Instagram", "#".to_string()),
        ("Mail", format!("mailto:{}", config::CONTACT_EMAIL)),
    ];

    html! {
        <footer class="site-footer">
            <style>{FOOTER_CSS}</style>
            <div class="footer-glow"></div>

            <div class="footer-row">
                <div class="footer-brand">
                    <h1>{"BioLife"}</h1>
                    <p>
                        {"Empowering lives through "}
                        <span>{"neuro-robotic innovation"}</span>
                        {". We redefine motion, mobility, and independence."}
                    </p>
                </div>

                <ul class="footer-links">
                    { for FOOTER_ITEMS.iter().map(|(label, section)| {
                        let section = *section;
                        html! {
                            <li onclick={props.on_navigate.reform(move |_: MouseEvent| section)}>
                                {*label}
                            </li>
                        }
                    }) }
                </ul>

                <div class="footer-socials">
                    { for socials.into_iter().map(|(name, href)| html! {
                        <a {href} target="_blank" rel="noopener noreferrer">{name}</a>
                    }) }
                </div>
            </div>

            <div class="footer-divider"></div>

            <div class="footer-copy">
                {format!("© {} ", year)}
                <span>{"BioLife Technologies"}</span>
                {". All rights reserved."}
            </div>

            if show_go_to_top(scroll_y) {
                <button class="go-top" onclick={go_to_top} aria-label="Go to top">{"↑"}</button>
            }
        </footer>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_go_to_top_threshold() {
        assert!(!show_go_to_top(0.0));
        assert!(!show_go_to_top(300.0));
        assert!(show_go_to_top(300.5));
        assert!(show_go_to_top(2_000.0));
    }
}
