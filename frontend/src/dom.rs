//! Thin wrappers over the handful of browser calls the page makes.
//!
//! Everything here returns `Result<_, DomError>` so components can log a
//! failure and keep rendering instead of panicking inside an effect.

use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{
    AddEventListenerOptions, DomRect, Element, Event, EventTarget, ScrollBehavior,
    ScrollIntoViewOptions, ScrollLogicalPosition, ScrollToOptions, Window,
};

#[derive(Debug, thiserror::Error)]
pub enum DomError {
    #[error("no global window object")]
    NoWindow,

    #[error("element is not mounted")]
    NotMounted,

    #[error("javascript error: {0}")]
    Js(String),

    #[error("chart drawing failed: {0}")]
    Chart(String),
}

impl From<JsValue> for DomError {
    fn from(value: JsValue) -> Self {
        DomError::Js(value.as_string().unwrap_or_else(|| format!("{:?}", value)))
    }
}

pub fn window() -> Result<Window, DomError> {
    web_sys::window().ok_or(DomError::NoWindow)
}

pub fn scroll_y() -> Result<f64, DomError> {
    Ok(window()?.scroll_y()?)
}

pub fn scroll_to_top() -> Result<(), DomError> {
    let options = ScrollToOptions::new();
    options.set_top(0.0);
    options.set_behavior(ScrollBehavior::Smooth);
    window()?.scroll_to_with_scroll_to_options(&options);
    Ok(())
}

/// Smoothly brings `element` to the top of the viewport.
pub fn scroll_into_view(element: Option<Element>) -> Result<(), DomError> {
    let element = element.ok_or(DomError::NotMounted)?;
    let options = ScrollIntoViewOptions::new();
    options.set_behavior(ScrollBehavior::Smooth);
    options.set_block(ScrollLogicalPosition::Start);
    element.scroll_into_view_with_scroll_into_view_options(&options);
    Ok(())
}

pub fn viewport_height() -> Result<f64, DomError> {
    window()?
        .inner_height()?
        .as_f64()
        .ok_or_else(|| DomError::Js("innerHeight is not a number".to_string()))
}

pub fn bounding_rect(element: Option<Element>) -> Result<DomRect, DomError> {
    Ok(element.ok_or(DomError::NotMounted)?.get_bounding_client_rect())
}

pub fn open_in_new_tab(url: &str) -> Result<(), DomError> {
    window()?.open_with_url_and_target(url, "_blank")?;
    Ok(())
}

/// An event listener that unregisters itself when dropped.
///
/// Effects return a closure that drops this, which ties the listener's
/// lifetime to the component that installed it.
pub struct EventListener {
    target: EventTarget,
    event: &'static str,
    callback: Closure<dyn FnMut(Event)>,
}

impl EventListener {
    pub fn new<F>(target: EventTarget, event: &'static str, handler: F) -> Result<Self, DomError>
    where
        F: FnMut(Event) + 'static,
    {
        let callback = Closure::wrap(Box::new(handler) as Box<dyn FnMut(Event)>);
        target.add_event_listener_with_callback(event, callback.as_ref().unchecked_ref())?;
        Ok(Self { target, event, callback })
    }

    /// Registers with `passive: false` so the handler may call `prevent_default`.
    pub fn new_active<F>(target: EventTarget, event: &'static str, handler: F) -> Result<Self, DomError>
    where
        F: FnMut(Event) + 'static,
    {
        let callback = Closure::wrap(Box::new(handler) as Box<dyn FnMut(Event)>);
        let options = AddEventListenerOptions::new();
        options.set_passive(false);
        target.add_event_listener_with_callback_and_add_event_listener_options(
            event,
            callback.as_ref().unchecked_ref(),
            &options,
        )?;
        Ok(Self { target, event, callback })
    }
}

impl Drop for EventListener {
    fn drop(&mut self) {
        if let Err(e) = self
            .target
            .remove_event_listener_with_callback(self.event, self.callback.as_ref().unchecked_ref())
        {
            log::warn!("failed to remove {} listener: {:?}", self.event, e);
        }
    }
}

/// Listens on `window`, logging instead of failing when the browser refuses.
pub fn listen_window<F>(event: &'static str, handler: F) -> Option<EventListener>
where
    F: FnMut(Event) + 'static,
{
    match window().and_then(|w| EventListener::new(w.into(), event, handler)) {
        Ok(listener) => Some(listener),
        Err(e) => {
            log::warn!("could not listen for {}: {}", event, e);
            None
        }
    }
}
