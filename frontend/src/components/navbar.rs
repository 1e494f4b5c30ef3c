use yew::prelude::*;
use yew_router::prelude::*;
use web_sys::MouseEvent;

use crate::config;
use crate::Route;
use crate::dom;
use crate::section::{Section, NAV_ITEMS};

#[derive(Properties, PartialEq)]
pub struct NavbarProps {
    pub on_navigate: Callback<Section>,
}

const NAV_CSS: &str = r#"
    .top-nav {
        position: fixed;
        top: 0.75rem;
        left: 1.25rem;
        right: 1.25rem;
        z-index: 50;
        border-radius: 1rem;
        background: rgba(55, 65, 81, 0.6);
        backdrop-filter: blur(16px);
        border: 1px solid rgba(255, 255, 255, 0.2);
        box-shadow: 0 10px 25px rgba(0, 0, 0, 0.15);
        animation: navDrop 0.8s ease-out;
        transition: background 0.3s ease, padding 0.3s ease;
    }
    .top-nav.scrolled {
        background: rgba(31, 41, 55, 0.85);
    }
    @keyframes navDrop {
        from { transform: translateY(-80px); opacity: 0; }
        to { transform: translateY(0); opacity: 1; }
    }
    .nav-content {
        display: flex;
        justify-content: space-between;
        align-items: center;
        padding: 0.75rem 1.5rem;
    }
    .nav-logo {
        font-size: 1.875rem;
        font-weight: 700;
        color: #4ade80;
        letter-spacing: 0.025em;
        cursor: pointer;
        transition: transform 0.2s ease, text-shadow 0.2s ease;
    }
    .nav-logo:hover {
        transform: scale(1.05);
        text-shadow: 0 0 6px #6ee7b7, 0 0 10px #34d399;
    }
    .nav-links {
        display: flex;
        gap: 2rem;
        list-style: none;
        margin: 0;
        padding: 0;
    }
    .nav-link {
        position: relative;
        color: #d1fae5;
        font-weight: 600;
        font-size: 1.125rem;
        cursor: pointer;
        text-decoration: none;
        transition: color 0.2s ease, transform 0.2s ease, text-shadow 0.2s ease;
    }
    .nav-link::after {
        content: '';
        position: absolute;
        left: 0;
        right: 0;
        bottom: -4px;
        height: 2px;
        border-radius: 9999px;
        background: rgba(74, 222, 128, 0.7);
        transform: scaleX(0);
        transform-origin: left;
        transition: transform 0.3s ease-out;
    }
    .nav-link:hover {
        color: #ffffff;
        transform: scale(1.05);
        text-shadow: 0 0 4px #6ee7b7, 0 0 8px #34d399;
    }
    .nav-link:hover::after {
        transform: scaleX(1);
    }
    .burger-menu {
        display: none;
        background: none;
        border: none;
        cursor: pointer;
        padding: 0.25rem;
    }
    .burger-menu span {
        display: block;
        width: 24px;
        height: 2px;
        margin: 5px 0;
        background: #d1fae5;
    }
    @media (max-width: 768px) {
        .burger-menu {
            display: block;
        }
        .nav-links {
            display: none;
            position: absolute;
            top: 100%;
            left: 0;
            right: 0;
            flex-direction: column;
            gap: 1rem;
            padding: 1rem 1.5rem;
            background: rgba(31, 41, 55, 0.95);
            border-radius: 0 0 1rem 1rem;
        }
        .nav-links.mobile-menu-open {
            display: flex;
        }
    }
"#;

#[function_component(Navbar)]
pub fn navbar(props: &NavbarProps) -> Html {
    let menu_open = use_state(|| false);
    let is_scrolled = use_state_eq(|| false);

    {
        let is_scrolled = is_scrolled.clone();
        use_effect_with_deps(move |_| {
            let listener = dom::listen_window("scroll", move |_| {
                if let Ok(offset) = dom::scroll_y() {
                    is_scrolled.set(offset > config::NAV_SCROLLED_THRESHOLD);
                }
            });
            move || drop(listener)
        }, ());
    }

    let toggle_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            menu_open.set(!*menu_open);
        })
    };

    let navigate = {
        let menu_open = menu_open.clone();
        let on_navigate = props.on_navigate.clone();
        Callback::from(move |section: Section| {
            menu_open.set(false);
            on_navigate.emit(section);
        })
    };

    let close_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |_: MouseEvent| menu_open.set(false))
    };

    let menu_class = if *menu_open {
        "nav-links mobile-menu-open"
    } else {
        "nav-links"
    };

    html! {
        <nav class={classes!("top-nav", (*is_scrolled).then(|| "scrolled"))}>
            <style>{NAV_CSS}</style>
            <div class="nav-content">
                <div class="nav-logo" onclick={navigate.reform(|_: MouseEvent| Section::Home)}>
                    {"BioLife"}
                </div>

                <button class="burger-menu" onclick={toggle_menu}>
                    <span></span>
                    <span></span>
                    <span></span>
                </button>
                <ul class={menu_class}>
                    { for NAV_ITEMS.iter().map(|&(label, section)| html! {
                        <li class="nav-link" onclick={navigate.reform(move |_: MouseEvent| section)}>
                            {label}
                        </li>
                    }) }
                    <li onclick={close_menu}>
                        <Link<Route> to={Route::Solution} classes="nav-link">
                            {"Solution"}
                        </Link<Route>>
                    </li>
                </ul>
            </div>
        </nav>
    }
}
