use std::rc::Rc;

use gloo_timers::callback::Interval;
use web_sys::{HtmlInputElement, HtmlSelectElement, HtmlTextAreaElement};
use yew::prelude::*;

use crate::booking::{Booking, BookingMode, Field, FieldSpec, InputKind, Submission, SHARED_FIELDS};
use crate::components::reveal::Reveal;
use crate::config;

pub enum BookingAction {
    SelectMode(BookingMode),
    Update(Field, String),
    Submit,
    Elapse(u32),
}

impl Reducible for Booking {
    type Action = BookingAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut next = (*self).clone();
        match action {
            BookingAction::SelectMode(mode) => next.select_mode(mode),
            BookingAction::Update(field, value) => next.update(field, value),
            BookingAction::Submit => {
                next.submit();
            }
            BookingAction::Elapse(elapsed_ms) => {
                if !next.toast_visible() {
                    return self;
                }
                next.elapse(elapsed_ms);
            }
        }
        next.into()
    }
}

fn log_submission(submission: &Submission) {
    gloo_console::log!("Submitted Tab:", submission.mode.id());
    match serde_wasm_bindgen::to_value(&submission.form) {
        Ok(form) => gloo_console::log!("Submitted Form Data:", form),
        Err(e) => log::warn!("could not convert booking form for the console: {}", e),
    }
    match serde_json::to_string(submission) {
        Ok(json) => log::info!("Booking submitted: {}", json),
        Err(e) => log::warn!("could not serialize booking: {}", e),
    }
}

const BOOK_CSS: &str = r#"
    .book-section {
        position: relative;
        width: 100%;
        min-height: 100vh;
        display: flex;
        flex-direction: column;
        align-items: center;
        padding: 5rem 1.5rem;
        background: linear-gradient(to bottom right, #f0f9ff, #e0f2fe, #e0f7ff);
        color: #374151;
        overflow: hidden;
        box-sizing: border-box;
    }
    .book-glow {
        position: absolute;
        inset: 0;
        background: radial-gradient(circle at 60% 40%, rgba(14, 165, 233, 0.12), transparent 60%);
        filter: blur(48px);
        pointer-events: none;
    }
    .mode-select-wrap {
        position: relative;
        max-width: 36rem;
        width: 100%;
        margin-bottom: 3rem;
    }
    .mode-select {
        width: 100%;
        appearance: none;
        background: rgba(255, 255, 255, 0.7);
        border: 2px solid #7dd3fc;
        color: #0369a1;
        border-radius: 9999px;
        padding: 0.75rem 1.5rem;
        font-size: 1.125rem;
        font-weight: 600;
        cursor: pointer;
    }
    .mode-select-wrap::after {
        content: '▾';
        position: absolute;
        right: 1.25rem;
        top: 50%;
        transform: translateY(-50%);
        color: #0ea5e9;
        pointer-events: none;
    }
    .booking-card {
        position: relative;
        max-width: 36rem;
        width: 100%;
        background: #fff;
        border: 1px solid #bae6fd;
        border-radius: 1.5rem;
        padding: 2.5rem;
        box-shadow: 0 0 40px rgba(56, 189, 248, 0.1);
        transition: box-shadow 0.5s ease;
        box-sizing: border-box;
    }
    .booking-card:hover {
        box-shadow: 0 0 60px rgba(56, 189, 248, 0.25);
    }
    .booking-card h3 {
        text-align: center;
        color: #0284c7;
        font-size: 1.5rem;
        margin: 0 0 1.5rem 0;
    }
    .field-grid {
        display: grid;
        grid-template-columns: repeat(2, 1fr);
        gap: 1.5rem;
    }
    .mode-fields {
        margin-top: 1.5rem;
        animation: fieldsIn 0.3s ease;
    }
    @keyframes fieldsIn {
        from { opacity: 0; transform: translateY(10px); }
        to { opacity: 1; transform: translateY(0); }
    }
    .form-field {
        display: flex;
        flex-direction: column;
    }
    .form-field label {
        font-size: 0.875rem;
        color: #475569;
        margin-bottom: 0.5rem;
    }
    .form-field input, .form-field textarea {
        background: #f0f9ff;
        border: 1px solid #e0f2fe;
        border-radius: 0.75rem;
        padding: 0.75rem 1rem;
        color: #334155;
        outline: none;
        font: inherit;
    }
    .form-field input:focus, .form-field textarea:focus {
        border-color: #38bdf8;
        box-shadow: 0 0 0 1px #38bdf8;
    }
    .submit-button {
        margin-top: 2rem;
        width: 100%;
        padding: 0.75rem;
        border: none;
        border-radius: 0.75rem;
        background: linear-gradient(to right, #0ea5e9, #06b6d4);
        color: #fff;
        font-size: 1.125rem;
        font-weight: 600;
        cursor: pointer;
        box-shadow: 0 0 25px rgba(56, 189, 248, 0.3);
        transition: transform 0.2s ease;
    }
    .submit-button:hover { transform: scale(1.03); }
    .submit-button:active { transform: scale(0.97); }
    .toast {
        position: fixed;
        bottom: 1.5rem;
        right: 1.5rem;
        z-index: 50;
        display: flex;
        align-items: center;
        gap: 0.75rem;
        padding: 0.75rem 1.5rem;
        border-radius: 1rem;
        color: #fff;
        background: linear-gradient(to right, rgba(14, 165, 233, 0.9), rgba(8, 145, 178, 0.9));
        box-shadow: 0 0 30px rgba(56, 189, 248, 0.3);
        animation: toastIn 0.3s ease;
    }
    @keyframes toastIn {
        from { opacity: 0; transform: translateY(50px); }
        to { opacity: 1; transform: translateY(0); }
    }
    @media (max-width: 640px) {
        .field-grid { grid-template-columns: 1fr; }
    }
"#;

#[function_component(Book)]
pub fn book() -> Html {
    let booking = use_reducer(Booking::default);
    let toast_visible = booking.toast_visible();

    // The countdown only ticks while the toast is up; a resubmit resets it in `Booking`.
    {
        let booking = booking.clone();
        use_effect_with_deps(move |&visible| {
            let interval = visible.then(|| {
                Interval::new(config::TOAST_TICK_MS, move || {
                    booking.dispatch(BookingAction::Elapse(config::TOAST_TICK_MS));
                })
            });
            move || drop(interval)
        }, toast_visible);
    }

    let on_mode_change = {
        let booking = booking.clone();
        Callback::from(move |e: Event| {
            let select: HtmlSelectElement = e.target_unchecked_into();
            if let Some(mode) = BookingMode::from_id(&select.value()) {
                log::debug!("Booking mode changed to {}", mode.id());
                booking.dispatch(BookingAction::SelectMode(mode));
            }
        })
    };

    let onsubmit = {
        let booking = booking.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            let mut snapshot = (*booking).clone();
            log_submission(&snapshot.submit());
            booking.dispatch(BookingAction::Submit);
        })
    };

    let render_field = |spec: &FieldSpec| -> Html {
        let field = spec.field;
        let required = booking.mode.is_required(field);
        let value = booking.form.get(field).to_string();
        let oninput = {
            let booking = booking.clone();
            match spec.kind {
                InputKind::TextArea => Callback::from(move |e: InputEvent| {
                    let input: HtmlTextAreaElement = e.target_unchecked_into();
                    booking.dispatch(BookingAction::Update(field, input.value()));
                }),
                _ => Callback::from(move |e: InputEvent| {
                    let input: HtmlInputElement = e.target_unchecked_into();
                    booking.dispatch(BookingAction::Update(field, input.value()));
                }),
            }
        };

        html! {
            <div class="form-field">
                <label>{format!("{} {}", spec.icon, spec.label)}</label>
                {
                    if spec.kind == InputKind::TextArea {
                        html! {
                            <textarea
                                name={field.html_name()}
                                rows="3"
                                placeholder={spec.placeholder}
                                {required}
                                {value}
                                {oninput}
                            />
                        }
                    } else {
                        html! {
                            <input
                                type={spec.kind.html_type()}
                                name={field.html_name()}
                                placeholder={spec.placeholder}
                                {required}
                                {value}
                                {oninput}
                            />
                        }
                    }
                }
            </div>
        }
    };

    let mode = booking.mode;
    let extra_class = match mode {
        BookingMode::Purchase => "mode-fields",
        BookingMode::Rent => "mode-fields field-grid",
        BookingMode::Doctor => "mode-fields doctor-fields",
    };

    html! {
        <section class="book-section">
            <style>{BOOK_CSS}</style>
            <div class="book-glow"></div>

            <Reveal>
                <h2 class="section-title sky">{"Get Started with BioLife"}</h2>
            </Reveal>

            <div class="mode-select-wrap">
                <select class="mode-select" onchange={on_mode_change}>
                    { for BookingMode::ALL.iter().map(|option| html! {
                        <option value={option.id()} selected={*option == mode}>{option.label()}</option>
                    }) }
                </select>
            </div>

            <div class="booking-card">
                <h3>{format!("{} Details", mode.label())}</h3>
                <form {onsubmit}>
                    <div class="field-grid">
                        { for SHARED_FIELDS.iter().map(&render_field) }
                    </div>
                    <div key={mode.id()} class={extra_class}>
                        { for mode.extra_fields().iter().map(&render_field) }
                    </div>
                    <button type="submit" class="submit-button">
                        {format!("➤ {}", mode.submit_label())}
                    </button>
                </form>
            </div>

            if toast_visible {
                <div class="toast">
                    <span>{"✔"}</span>
                    <span>{"Form submitted successfully! We'll be in touch!"}</span>
                </div>
            }
        </section>
    }
}
