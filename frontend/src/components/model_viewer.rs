use gloo_timers::callback::Interval;
use wasm_bindgen::JsCast;
use web_sys::{Element, MouseEvent, WheelEvent};
use yew::prelude::*;

use crate::config;
use crate::dom::{self, EventListener};
use crate::viewer::{Bounds, ViewState};

const VIEWER_CSS: &str = r#"
    .model-viewer {
        position: relative;
        width: 100%;
        height: 100%;
        min-height: 420px;
        display: flex;
        justify-content: center;
        align-items: center;
        border-radius: 1.5rem;
        background: rgba(255, 255, 255, 0.1);
        backdrop-filter: blur(16px);
        border: 1px solid rgba(255, 255, 255, 0.2);
        box-shadow: 0 0 40px 5px rgba(0, 255, 128, 0.15);
        overflow: hidden;
    }
    .model-glow {
        position: absolute;
        inset: 0;
        border-radius: 1.5rem;
        border: 1px solid rgba(74, 222, 128, 0.4);
        filter: blur(8px);
        opacity: 0.6;
        animation: pulse 2s cubic-bezier(0.4, 0, 0.6, 1) infinite;
        pointer-events: none;
    }
    .model-image {
        max-height: 90%;
        max-width: 80%;
        transform-style: preserve-3d;
        user-select: none;
        transition: filter 0.4s ease;
        filter: drop-shadow(0 20px 30px rgba(14, 165, 233, 0.25));
    }
    .model-image.following {
        filter: drop-shadow(0 24px 40px rgba(14, 165, 233, 0.45));
    }
"#;

fn bounds_of(node: &NodeRef) -> Option<Bounds> {
    let rect = dom::bounding_rect(node.cast::<Element>()).ok()?;
    Some(Bounds {
        left: rect.left(),
        top: rect.top(),
        width: rect.width(),
        height: rect.height(),
    })
}

/// The exoskeleton render: turns toward the cursor, scales with scroll, zooms on wheel.
#[function_component(ModelViewer)]
pub fn model_viewer() -> Html {
    let container = use_node_ref();
    let view = use_mut_ref(ViewState::default);
    let transform = use_state_eq(|| ViewState::default().css_transform());
    let following = use_state_eq(|| false);
    let resetting = use_state_eq(|| false);

    {
        let container = container.clone();
        let view = view.clone();
        let transform = transform.clone();
        let following = following.clone();
        let resetting = resetting.clone();
        use_effect_with_deps(move |_| {
            let publish = {
                let view = view.clone();
                let transform = transform.clone();
                move || transform.set(view.borrow().css_transform())
            };

            let scroll = {
                let view = view.clone();
                let publish = publish.clone();
                dom::listen_window("scroll", move |_| {
                    if let Ok(offset) = dom::scroll_y() {
                        view.borrow_mut().set_scroll(offset);
                        publish();
                    }
                })
            };

            let pointer = {
                let view = view.clone();
                let publish = publish.clone();
                let container = container.clone();
                dom::listen_window("mousemove", move |event| {
                    let Some(event) = event.dyn_ref::<MouseEvent>() else { return };
                    let Some(bounds) = bounds_of(&container) else { return };
                    let mut state = view.borrow_mut();
                    if state.pointer_moved(event.client_x() as f64, event.client_y() as f64, &bounds) {
                        following.set(state.is_following());
                        resetting.set(state.is_resetting());
                    }
                    let tracking = state.is_following();
                    drop(state);
                    if tracking {
                        publish();
                    }
                })
            };

            let wheel = {
                let view = view.clone();
                let publish = publish.clone();
                let target = container
                    .cast::<Element>()
                    .ok_or(dom::DomError::NotMounted)
                    .and_then(|element| {
                        EventListener::new_active(element.into(), "wheel", move |event| {
                            if let Some(event) = event.dyn_ref::<WheelEvent>() {
                                event.prevent_default();
                                view.borrow_mut().zoom(event.delta_y());
                                publish();
                            }
                        })
                    });
                match target {
                    Ok(listener) => Some(listener),
                    Err(e) => {
                        log::warn!("model viewer zoom disabled: {}", e);
                        None
                    }
                }
            };

            if let Ok(offset) = dom::scroll_y() {
                view.borrow_mut().set_scroll(offset);
                transform.set(view.borrow().css_transform());
            }

            move || {
                drop(wheel);
                drop(pointer);
                drop(scroll);
            }
        }, ());
    }

    // Frames only run while the model eases back to its resting angle.
    {
        let view = view.clone();
        let transform = transform.clone();
        let resetting = resetting.clone();
        let deps = *resetting;
        use_effect_with_deps(move |&active| {
            let frames = active.then(|| {
                Interval::new(config::FRAME_MS, move || {
                    let running = view.borrow_mut().step(config::FRAME_MS as f64);
                    transform.set(view.borrow().css_transform());
                    if !running {
                        resetting.set(false);
                    }
                })
            });
            move || drop(frames)
        }, deps);
    }

    html! {
        <div ref={container} class="model-viewer">
            <style>{VIEWER_CSS}</style>
            <div class="model-glow"></div>
            <img
                class={classes!("model-image", (*following).then(|| "following"))}
                src={config::MODEL_IMAGE}
                alt="BioLife exoskeleton"
                draggable="false"
                style={format!("transform: {};", *transform)}
            />
        </div>
    }
}
