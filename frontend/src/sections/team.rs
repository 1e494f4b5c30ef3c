use std::rc::Rc;

use gloo_timers::callback::Interval;
use stylist::yew::styled_component;
use yew::prelude::*;

use crate::carousel::{Carousel, LOOP_COPIES};
use crate::components::reveal::Reveal;
use crate::config;
use crate::dom;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Member {
    pub name: &'static str,
    pub role: &'static str,
    pub image: &'static str,
    pub linkedin: &'static str,
}

pub const MEMBERS: [Member; 6] = [
    Member {
        name: "Aditya Gambhire",
        role: "Designer, Ideation",
        image: "/assets/images/aditya.jpg",
        linkedin: "https://www.linkedin.com/in/aditya-gambhire-ba1294315",
    },
    Member {
        name: "Trisha Adki",
        role: "Designer, Researcher",
        image: "/assets/images/trisha.jpg",
        linkedin: "https://www.linkedin.com/in/trisha-adki-a959bb350",
    },
    Member {
        name: "Sidramappa Potdar",
        role: "Programmer, Marketing",
        image: "/assets/images/sid.jpg",
        linkedin: "https://www.linkedin.com/in/sidramappa-potdar",
    },
    Member {
        name: "Ritesh Kulkarni",
        role: "Circuit Designer, Ideation",
        image: "/assets/images/sanju.jpg",
        linkedin: "https://www.linkedin.com/in/ritesh-kulkarni-56b346311",
    },
    Member {
        name: "Dr. Shrinivas Metan",
        role: "Mentor",
        image: "/assets/images/metansir.jpg",
        linkedin: "https://www.linkedin.com/in/dr-shriniwas-metan-a1791124",
    },
    Member {
        name: "Dr. Viteshkumar Gaikwad",
        role: "Guide",
        image: "/assets/images/gaikwadsir.jpg",
        linkedin: "https://www.linkedin.com/in/dr-viteshkumar-gaikwad",
    },
];

/// The member list repeated `LOOP_COPIES` times, so the track can wrap without a visible seam.
pub fn looped_members() -> impl Iterator<Item = (usize, &'static Member)> {
    std::iter::repeat(&MEMBERS).take(LOOP_COPIES).flatten().enumerate()
}

pub enum CarouselAction {
    Advance(f64),
    Hover(usize),
    Leave,
}

impl Reducible for Carousel {
    type Action = CarouselAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut next = (*self).clone();
        match action {
            CarouselAction::Advance(elapsed_ms) => {
                if next.is_paused() {
                    return self;
                }
                next.advance(elapsed_ms);
            }
            CarouselAction::Hover(index) => next.hover(index),
            CarouselAction::Leave => next.leave(),
        }
        next.into()
    }
}

#[styled_component(TeamShowcase)]
pub fn team_showcase() -> Html {
    let carousel = use_reducer(|| Carousel::new(config::CAROUSEL_CYCLE_MS));

    {
        let carousel = carousel.clone();
        use_effect_with_deps(move |_| {
            let interval = Interval::new(config::FRAME_MS, move || {
                carousel.dispatch(CarouselAction::Advance(config::FRAME_MS as f64));
            });
            move || drop(interval)
        }, ());
    }

    let section = css!(
        r#"
        position: relative;
        width: 100%;
        min-height: 140vh;
        padding: 11rem 2.5rem;
        background: linear-gradient(to bottom right, #f0f9ff, #e0f2fe, #e0f7ff);
        color: #1e3a8a;
        overflow: hidden;
        box-sizing: border-box;

        .viewport {
            position: relative;
            overflow: hidden;
            height: 650px;
        }
        .track {
            display: flex;
            width: max-content;
            gap: 4rem;
            padding-top: 3rem;
            padding-right: 4rem;
        }
        .member {
            position: relative;
            flex-shrink: 0;
            min-width: 320px;
            height: 420px;
            border-radius: 1.5rem;
            overflow: hidden;
            cursor: pointer;
            background: rgba(255, 255, 255, 0.7);
            border: 1px solid #7dd3fc;
            box-shadow: 0 0 40px rgba(56, 189, 248, 0.15);
            transition: transform 0.5s ease, box-shadow 0.5s ease;
            z-index: 1;
        }
        .member.hovered {
            transform: translateY(-20px) scale(1.18);
            box-shadow: 0 0 80px rgba(56, 189, 248, 0.3);
            z-index: 50;
        }
        .member img {
            position: absolute;
            inset: 0;
            width: 100%;
            height: 100%;
            object-fit: cover;
            filter: brightness(0.9);
            transition: transform 0.7s ease, filter 0.7s ease;
        }
        .member.hovered img {
            transform: scale(1.25);
            filter: brightness(1.1) contrast(1.05);
        }
        .caption {
            position: absolute;
            bottom: 0;
            width: 100%;
            padding: 1.5rem;
            box-sizing: border-box;
            text-align: center;
            background: linear-gradient(to top, rgba(255, 255, 255, 0.9), rgba(255, 255, 255, 0.6), transparent);
            opacity: 0.85;
            transform: translateY(20px);
            transition: opacity 0.4s ease, transform 0.4s ease;
        }
        .member.hovered .caption {
            opacity: 1;
            transform: translateY(0);
        }
        .caption h3 { color: #0284c7; font-size: 1.25rem; margin: 0; }
        .caption p { color: #334155; font-size: 0.875rem; margin: 0.25rem 0 0 0; }
        .fade {
            position: absolute;
            top: 0;
            height: 100%;
            width: 10rem;
            pointer-events: none;
        }
        .fade.left { left: 0; background: linear-gradient(to right, #f0f9ff, transparent); }
        .fade.right { right: 0; background: linear-gradient(to left, #f0f9ff, transparent); }
        "#
    );

    let on_leave = {
        let carousel = carousel.clone();
        Callback::from(move |_: MouseEvent| carousel.dispatch(CarouselAction::Leave))
    };

    let hovered = carousel.hovered();

    html! {
        <section class={section}>
            <Reveal>
                <h2 class="section-title sky">{"Meet Our Innovators"}</h2>
            </Reveal>

            <div class="viewport">
                <div class="track" style={format!("transform: translateX({:.3}%);", carousel.translate_percent())}>
                    { for looped_members().map(|(i, member)| {
                        let on_enter = {
                            let carousel = carousel.clone();
                            Callback::from(move |_: MouseEvent| carousel.dispatch(CarouselAction::Hover(i)))
                        };
                        let onclick = Callback::from(move |_: MouseEvent| {
                            if let Err(e) = dom::open_in_new_tab(member.linkedin) {
                                log::warn!("Could not open profile for {}: {}", member.name, e);
                            }
                        });
                        html! {
                            <div
                                key={i}
                                class={classes!("member", (hovered == Some(i)).then(|| "hovered"))}
                                onmouseenter={on_enter}
                                onmouseleave={on_leave.clone()}
                                {onclick}
                            >
                                <img src={member.image} alt={member.name} />
                                <div class="caption">
                                    <h3>{member.name}</h3>
                                    <p>{member.role}</p>
                                </div>
                            </div>
                        }
                    }) }
                </div>
            </div>

            <div class="fade left"></div>
            <div class="fade right"></div>
        </section>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_members_repeat_once_for_seamless_loop() {
        let looped: Vec<_> = looped_members().collect();
        assert_eq!(looped.len(), MEMBERS.len() * LOOP_COPIES);
        for (i, member) in looped.iter().take(MEMBERS.len()) {
            assert_eq!(member.name, looped[i + MEMBERS.len()].1.name);
        }
    }

    #[test]
    fn test_profiles_link_to_linkedin() {
        assert!(MEMBERS.iter().all(|m| m.linkedin.starts_with("https://www.linkedin.com/in/")));
    }
}
