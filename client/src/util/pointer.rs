//! Pointer event mapping helpers.

/// Selector for elements inside a card that keep their own pointer handling.
pub const CARD_CONTROL_SELECTOR: &str = "textarea, button";

/// Page-space position of a pointer event.
#[cfg(feature = "hydrate")]
pub fn pointer_point(ev: &leptos::ev::PointerEvent) -> overlay::geom::Point {
    overlay::geom::Point::new(f64::from(ev.page_x()), f64::from(ev.page_y()))
}

/// Whether the event target is, or sits inside, an element matching `selector`.
#[cfg(feature = "hydrate")]
pub fn pointer_event_hits_control(ev: &leptos::ev::PointerEvent, selector: &str) -> bool {
    use wasm_bindgen::JsCast;

    ev.target()
        .and_then(|t| t.dyn_into::<web_sys::Element>().ok())
        .and_then(|el| el.closest(selector).ok().flatten())
        .is_some()
}
