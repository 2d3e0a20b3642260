//! Layout measurement for the document viewer.

/// Rendered scroll height of an element in CSS pixels.
#[cfg(feature = "hydrate")]
pub fn scroll_height(el: &web_sys::HtmlElement) -> f64 {
    f64::from(el.scroll_height())
}
