use yew::prelude::*;

use crate::components::reveal::Reveal;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct JourneyStep {
    pub title: &'static str,
    pub desc: &'static str,
    pub image: &'static str,
    pub details: &'static str,
}

pub const STEPS: [JourneyStep; 6] = [
    JourneyStep {
        title: "Problem Identified",
        desc: "Observed challenges faced by Muscular Dystrophy patients, forming the foundation of BioLife's mission.",
        image: "/assets/images/problem.jpg",
        details: "Through research and patient interviews we recognized the lack of affordable assistive mobility technology.",
    },
    JourneyStep {
        title: "Research",
        desc: "Explored neuroscience, AI, and robotics to develop a brain-controlled exoskeleton.",
        image: "/assets/images/research.jpg",
        details: "Studied EEG patterns and actuator control systems to map neural activity to motion.",
    },
    JourneyStep {
        title: "Concept Design",
        desc: "Created early blueprints focusing on comfort, flexibility, and precision.",
        image: "/assets/images/concept.jpg",
        details: "Used CAD and human-factor design to ensure realistic limb motion and ergonomics.",
    },
    JourneyStep {
        title: "Material Selection",
        desc: "Used lightweight yet strong materials for durability and comfort.",
        image: "/assets/images/material.jpg",
        details: "Selected aluminum alloy and carbon-fiber composites for optimum weight and strength.",
    },
    JourneyStep {
        title: "Detailed Design",
        desc: "Full-scale 3D modeling, actuator layout, and simulation in CAD tools.",
        image: "/assets/images/detailed.jpg",
        details: "Performed motion and load analysis before final prototype development.",
    },
    JourneyStep {
        title: "Prototype & Testing",
        desc: "Integrated sensors, control units, and neural mapping for live testing.",
        image: "/assets/images/prototype.jpg",
        details: "Built a working model that successfully translated EEG signals into limb motion.",
    },
];

/// Even steps sit above the line, odd steps below.
pub fn placement(index: usize) -> &'static str {
    if index % 2 == 0 {
        "above"
    } else {
        "below"
    }
}

const TIMELINE_CSS: &str = r#"
    .timeline-section {
        position: relative;
        width: 100%;
        padding: 9rem 2.5rem;
        background: linear-gradient(to bottom right, #050505, #0a0a0a, #101010);
        color: #e5e7eb;
        overflow: hidden;
        box-sizing: border-box;
    }
    .timeline-section .section-title { margin-bottom: 7rem; }
    .timeline-track {
        position: relative;
        display: flex;
        justify-content: space-between;
        align-items: center;
        max-width: 72rem;
        margin: 0 auto;
    }
    .timeline-line {
        position: absolute;
        top: 50%;
        left: 0;
        width: 100%;
        height: 4px;
        background: linear-gradient(to right, transparent, rgba(34, 197, 94, 0.7), transparent);
        box-shadow: 0 0 25px rgba(34, 197, 94, 0.6);
    }
    .timeline-step {
        position: relative;
        z-index: 10;
        width: 16%;
        min-width: 160px;
        display: flex;
        justify-content: center;
        cursor: pointer;
    }
    .step-card {
        width: 12rem;
        padding: 1.25rem;
        text-align: center;
        border-radius: 1.5rem;
        background: rgba(255, 255, 255, 0.05);
        border: 1px solid rgba(34, 197, 94, 0.2);
        box-shadow: 0 0 20px rgba(0, 255, 128, 0.08);
        transition: box-shadow 0.5s ease;
    }
    .step-card:hover { box-shadow: 0 0 35px rgba(0, 255, 128, 0.25); }
    .step-card.above { margin-bottom: 14rem; transform: translateY(-2.5rem); }
    .step-card.below { margin-top: 14rem; transform: translateY(2.5rem); }
    .step-card img {
        width: 100%;
        height: 6rem;
        object-fit: cover;
        border-radius: 1rem;
        margin-bottom: 0.75rem;
    }
    .step-card h3 { color: #4ade80; font-size: 1rem; margin: 0 0 0.25rem 0; }
    .step-card p { color: #9ca3af; font-size: 0.875rem; line-height: 1.6; margin: 0; }
    .journey-backdrop {
        position: fixed;
        inset: 0;
        z-index: 50;
        display: flex;
        justify-content: center;
        align-items: center;
        padding: 1.5rem;
        background: rgba(0, 0, 0, 0.8);
        backdrop-filter: blur(16px);
        animation: popIn 0.4s ease;
    }
    .journey-popup {
        position: relative;
        width: 100%;
        max-width: 28rem;
        padding: 2rem;
        border-radius: 1.5rem;
        background: linear-gradient(to bottom right, rgba(10, 10, 10, 0.9), rgba(15, 35, 21, 0.8));
        border: 1px solid rgba(74, 222, 128, 0.3);
        box-shadow: 0 0 60px rgba(0, 255, 128, 0.25);
        text-align: center;
    }
    .journey-popup img {
        width: 100%;
        height: 12rem;
        object-fit: cover;
        border-radius: 1rem;
        margin-bottom: 1.5rem;
    }
    .journey-popup h3 { color: #4ade80; font-size: 1.875rem; margin: 0 0 0.75rem 0; }
    .journey-popup p { color: #d1d5db; line-height: 1.7; }
    .journey-close {
        position: absolute;
        top: 1rem;
        right: 1.5rem;
        border: none;
        background: none;
        color: #9ca3af;
        font-size: 1.875rem;
        font-weight: 700;
        cursor: pointer;
    }
    .journey-close:hover { color: #4ade80; }
    @keyframes popIn {
        from { opacity: 0; transform: scale(0.85); }
        to { opacity: 1; transform: scale(1); }
    }
    @media (max-width: 900px) {
        .timeline-track { flex-direction: column; gap: 2rem; }
        .timeline-line { display: none; }
        .timeline-step { width: 100%; }
        .step-card.above, .step-card.below { margin: 0; transform: none; }
    }
"#;

#[function_component(JourneyTimeline)]
pub fn journey_timeline() -> Html {
    let selected = use_state_eq(|| None::<usize>);

    let close = {
        let selected = selected.clone();
        Callback::from(move |_: MouseEvent| selected.set(None))
    };
    // Clicks inside the card must not reach the backdrop.
    let keep_open = Callback::from(|e: MouseEvent| e.stop_propagation());

    let popup = (*selected).and_then(|i| STEPS.get(i)).map(|step| html! {
        <div class="journey-backdrop" onclick={close.clone()}>
            <div class="journey-popup" onclick={keep_open}>
                <img src={step.image} alt={step.title} />
                <h3>{step.title}</h3>
                <p>{step.details}</p>
                <button class="journey-close" onclick={close.clone()}>{"✕"}</button>
            </div>
        </div>
    });

    html! {
        <section class="timeline-section">
            <style>{TIMELINE_CSS}</style>
            <Reveal>
                <h2 class="section-title green">{"Our Journey"}</h2>
            </Reveal>

            <div class="timeline-track">
                <div class="timeline-line"></div>
                { for STEPS.iter().enumerate().map(|(i, step)| {
                    let onclick = {
                        let selected = selected.clone();
                        Callback::from(move |_: MouseEvent| selected.set(Some(i)))
                    };
                    html! {
                        <Reveal class={classes!("timeline-step")} delay_ms={150 * i as u32}>
                            <div class={classes!("step-card", placement(i))} {onclick}>
                                <img src={step.image} alt={step.title} />
                                <h3>{step.title}</h3>
                                <p>{step.desc}</p>
                            </div>
                        </Reveal>
                    }
                }) }
            </div>

            { for popup }
        </section>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_steps_alternate_around_line() {
        let sides: Vec<_> = (0..STEPS.len()).map(placement).collect();
        assert_eq!(sides, vec!["above", "below", "above", "below", "above", "below"]);
    }

    #[test]
    fn test_every_step_has_image_and_details() {
        for step in STEPS.iter() {
            assert!(step.image.starts_with("/assets/images/"));
            assert!(!step.details.is_empty());
        }
    }
}
