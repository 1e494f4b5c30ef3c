use gloo_timers::callback::Timeout;
use yew::prelude::*;

use crate::components::model_viewer::ModelViewer;
use crate::config;

const HERO_CSS: &str = r#"
    .hero {
        position: relative;
        display: flex;
        align-items: center;
        justify-content: space-between;
        gap: 3rem;
        min-height: 90vh;
        width: 100%;
        padding: 7rem 2.5rem 3rem;
        background: linear-gradient(to right, #f0f9ff, #e0f2fe, #e0f7ff);
        overflow: hidden;
        box-sizing: border-box;
    }
    .hero-orb {
        position: absolute;
        border-radius: 9999px;
        pointer-events: none;
        animation: pulse 2s cubic-bezier(0.4, 0, 0.6, 1) infinite;
    }
    .hero-orb.top { top: 0; left: 0; width: 500px; height: 500px; background: rgba(56, 189, 248, 0.2); filter: blur(180px); }
    .hero-orb.bottom { bottom: 0; right: 0; width: 400px; height: 400px; background: rgba(103, 232, 249, 0.2); filter: blur(160px); }
    .hero-text {
        position: relative;
        z-index: 10;
        width: 60%;
    }
    .hero-text > * {
        opacity: 0;
        animation: heroIn 1.2s ease-out forwards;
    }
    .hero-text > *:nth-child(2) { animation-delay: 0.25s; }
    .hero-text > *:nth-child(3) { animation-delay: 0.5s; }
    @keyframes heroIn {
        from { opacity: 0; transform: translateY(40px); filter: blur(5px); }
        to { opacity: 1; transform: translateY(0); filter: blur(0); }
    }
    .hero h1 {
        font-size: clamp(3rem, 6vw, 4.5rem);
        font-weight: 800;
        line-height: 1.15;
        margin: 0 0 2rem 0;
        background: linear-gradient(to right, #0ea5e9, #06b6d4, #3b82f6);
        -webkit-background-clip: text;
        -webkit-text-fill-color: transparent;
    }
    .hero-pitch {
        font-size: 1.25rem;
        color: #475569;
        line-height: 1.7;
        max-width: 32rem;
    }
    .hero-pitch strong { color: #0284c7; }
    .hero-actions {
        display: flex;
        flex-wrap: wrap;
        align-items: center;
        gap: 1.25rem;
        padding-top: 1rem;
    }
    .demo-button {
        padding: 0.75rem 2rem;
        border: 2px solid #38bdf8;
        border-radius: 0.75rem;
        background: transparent;
        color: #0284c7;
        font-size: 1.125rem;
        font-weight: 600;
        cursor: pointer;
        box-shadow: 0 0 20px rgba(56, 189, 248, 0.3);
        transition: all 0.3s ease;
    }
    .demo-button:hover {
        background: #0ea5e9;
        color: #fff;
        box-shadow: 0 0 35px rgba(56, 189, 248, 0.45);
    }
    .feedback-note { color: #475569; }
    .feedback-note a { color: #0284c7; font-weight: 600; }
    .hero-model {
        position: relative;
        width: 40%;
        min-height: 480px;
        padding: 1.25rem;
        border-radius: 1.5rem;
        background: rgba(255, 255, 255, 0.6);
        border: 1px solid #e0f2fe;
        box-shadow: 0 0 40px rgba(56, 189, 248, 0.2);
        box-sizing: border-box;
    }
    .demo-backdrop {
        position: fixed;
        inset: 0;
        z-index: 50;
        display: flex;
        justify-content: center;
        align-items: center;
        background: rgba(8, 47, 73, 0.7);
        backdrop-filter: blur(12px);
    }
    .demo-modal {
        position: relative;
        width: 75%;
        height: 80vh;
        border-radius: 1.5rem;
        overflow: hidden;
        border: 1px solid rgba(125, 211, 252, 0.4);
        background: linear-gradient(to bottom right, rgba(240, 249, 255, 0.95), rgba(224, 242, 254, 0.9));
        box-shadow: 0 0 50px rgba(56, 189, 248, 0.35);
        animation: modalIn 1s ease-out;
    }
    .demo-modal.closing {
        animation: modalOut 0.6s ease-in-out forwards;
    }
    @keyframes modalIn {
        from { opacity: 0; transform: translateY(50px) scale(0.9); filter: blur(10px); }
        to { opacity: 1; transform: translateY(0) scale(1); filter: blur(0); }
    }
    @keyframes modalOut {
        from { opacity: 1; transform: translateY(0) scale(1); filter: blur(0); }
        to { opacity: 0; transform: translateY(40px) scale(0.85); filter: blur(8px); }
    }
    .demo-close {
        position: absolute;
        top: 1.25rem;
        right: 1.5rem;
        z-index: 20;
        border: none;
        background: none;
        color: #64748b;
        font-size: 2.25rem;
        font-weight: 700;
        cursor: pointer;
    }
    .demo-close:hover { color: #0284c7; }
    .demo-caption {
        position: absolute;
        bottom: 1.5rem;
        width: 100%;
        text-align: center;
        color: #0284c7;
        font-size: 0.875rem;
        letter-spacing: 0.025em;
    }
    @media (max-width: 900px) {
        .hero { flex-direction: column; }
        .hero-text, .hero-model { width: 100%; }
        .demo-modal { width: 90%; }
    }
"#;

/// Demo modal lifecycle: closed, open, or playing its exit animation.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum DemoModal {
    Closed,
    Open,
    Closing,
}

#[function_component(HeroSection)]
pub fn hero_section() -> Html {
    let modal = use_state_eq(|| DemoModal::Closed);
    let close_timer = use_mut_ref(|| None::<Timeout>);

    let open_demo = {
        let modal = modal.clone();
        Callback::from(move |_: MouseEvent| {
            log::info!("Opening demo modal");
            modal.set(DemoModal::Open);
        })
    };

    let close_demo = {
        let modal = modal.clone();
        let close_timer = close_timer.clone();
        Callback::from(move |_: MouseEvent| {
            if *modal != DemoModal::Open {
                return;
            }
            log::info!("Closing demo modal");
            modal.set(DemoModal::Closing);
            let modal = modal.clone();
            *close_timer.borrow_mut() = Some(Timeout::new(config::MODAL_CLOSE_MS, move || {
                modal.set(DemoModal::Closed);
            }));
        })
    };

    html! {
        <section class="hero">
            <style>{HERO_CSS}</style>
            <div class="hero-orb top"></div>
            <div class="hero-orb bottom"></div>

            <div class="hero-text">
                <h1>
                    {"Empowering Mobility,"}
                    <br />
                    {"Restoring Hope."}
                </h1>
                <p class="hero-pitch">
                    <strong>{"BioLife"}</strong>{" is a "}
                    <strong>{"brain-controlled AI exoskeleton"}</strong>
                    {" designed for "}
                    <strong>{"Muscular Dystrophy"}</strong>
                    {" patients, converting "}
                    <strong>{"neural signals"}</strong>
                    {" into motion, empowering independence and redefining mobility."}
                </p>
                <div class="hero-actions">
                    <button class="demo-button" onclick={open_demo}>{"Watch Demo"}</button>
                    <p class="feedback-note">
                        {"Have feedback? "}
                        <a href={config::FEEDBACK_FORM_URL} target="_blank" rel="noopener noreferrer">
                            {"Click here"}
                        </a>
                        {" to let us know."}
                    </p>
                </div>
            </div>

            <div class="hero-model">
                <ModelViewer />
            </div>

            if *modal != DemoModal::Closed {
                <div class="demo-backdrop">
                    <div class={classes!("demo-modal", (*modal == DemoModal::Closing).then(|| "closing"))}>
                        <button class="demo-close" onclick={close_demo}>{"✕"}</button>
                        <ModelViewer />
                        <div class="demo-caption">
                            <strong>{"Interactive 3D Mode"}</strong>
                            {": move your cursor over the exoskeleton, scroll the wheel to zoom"}
                        </div>
                    </div>
                </div>
            }
        </section>
    }
}
