// Helper functions for finding page elements and hooking events onto them.
// Lookups return `SetupError` so callers can `?` and let `start` decide
// whether a missing element is worth mentioning.

use crate::error::SetupError;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::{
    CanvasRenderingContext2d, Document, Element, EventTarget, HtmlCanvasElement, HtmlElement,
    Window,
};

pub fn window() -> Result<Window, SetupError> {
    web_sys::window().ok_or(SetupError::MissingWindow)
}

pub fn document() -> Result<Document, SetupError> {
    window()?.document().ok_or(SetupError::MissingDocument)
}

pub fn element_by_id<T: JsCast>(document: &Document, id: &str) -> Result<T, SetupError> {
    document
        .get_element_by_id(id)
        .and_then(|el| el.dyn_into::<T>().ok())
        .ok_or_else(|| SetupError::MissingElement(format!("#{}", id)))
}

/// Every element matching `selector` under `root`, in document order.
pub fn query_all(root: &Element, selector: &str) -> Result<Vec<HtmlElement>, SetupError> {
    let nodes = root.query_selector_all(selector)?;
    Ok(collect_html(&nodes))
}

pub fn query_all_in_document(
    document: &Document,
    selector: &str,
) -> Result<Vec<HtmlElement>, SetupError> {
    let nodes = document.query_selector_all(selector)?;
    Ok(collect_html(&nodes))
}

fn collect_html(nodes: &web_sys::NodeList) -> Vec<HtmlElement> {
    (0..nodes.length())
        .filter_map(|i| nodes.get(i))
        .filter_map(|node| node.dyn_into::<HtmlElement>().ok())
        .collect()
}

pub fn create_html(document: &Document, tag: &str) -> Result<HtmlElement, SetupError> {
    document
        .create_element(tag)?
        .dyn_into::<HtmlElement>()
        .map_err(|_| SetupError::Js(format!("<{}> is not an HtmlElement", tag)))
}

pub fn canvas_context_2d(canvas: &HtmlCanvasElement) -> Result<CanvasRenderingContext2d, SetupError> {
    canvas
        .get_context("2d")?
        .ok_or(SetupError::ContextUnavailable)?
        .dyn_into::<CanvasRenderingContext2d>()
        .map_err(|_| SetupError::ContextUnavailable)
}

/// Match the canvas' pixel buffer to its rendered size. Returns the new size.
pub fn fit_canvas(canvas: &HtmlCanvasElement) -> (f64, f64) {
    let width = canvas.offset_width().max(0) as u32;
    let height = canvas.offset_height().max(0) as u32;
    canvas.set_width(width);
    canvas.set_height(height);
    (width as f64, height as f64)
}

/// An event listener that unregisters itself when dropped.
pub struct Listener {
    target: EventTarget,
    event: &'static str,
    callback: Closure<dyn FnMut(web_sys::Event)>,
}

impl Listener {
    pub fn new<F>(target: &EventTarget, event: &'static str, handler: F) -> Result<Listener, SetupError>
    where
        F: FnMut(web_sys::Event) + 'static,
    {
        let callback = Closure::wrap(Box::new(handler) as Box<dyn FnMut(web_sys::Event)>);
        target.add_event_listener_with_callback(event, callback.as_ref().unchecked_ref())?;
        Ok(Listener {
            target: target.clone(),
            event,
            callback,
        })
    }

    /// Keep the listener registered for the lifetime of the page.
    pub fn forget(self) {
        std::mem::forget(self);
    }
}

impl Drop for Listener {
    fn drop(&mut self) {
        let _ = self
            .target
            .remove_event_listener_with_callback(self.event, self.callback.as_ref().unchecked_ref());
    }
}

/// Leading integer of an attribute or CSS value ("72px" -> 72), the way
/// `parseInt` reads it. Anything unreadable counts as 0.
pub fn parse_int_prefix(value: &str) -> i64 {
    let trimmed = value.trim_start();
    let (sign, digits) = match trimmed.strip_prefix('-') {
        Some(rest) => (-1, rest),
        None => (1, trimmed.strip_prefix('+').unwrap_or(trimmed)),
    };
    let end = digits
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or_else(|| digits.len());
    digits[..end].parse::<i64>().map(|n| sign * n).unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reads_leading_integer() {
        assert_eq!(parse_int_prefix("72px"), 72);
        assert_eq!(parse_int_prefix(" 15"), 15);
        assert_eq!(parse_int_prefix("-8rem"), -8);
        assert_eq!(parse_int_prefix("+3"), 3);
        assert_eq!(parse_int_prefix("250.9"), 250);
    }

    #[test]
    fn unreadable_is_zero() {
        assert_eq!(parse_int_prefix(""), 0);
        assert_eq!(parse_int_prefix("auto"), 0);
        assert_eq!(parse_int_prefix("-"), 0);
    }
}
