//! Entrance effects: reveal-on-scroll, staggered transition delays, the
//! skill tag cascade, and smooth scrolling for in-page anchors.

use crate::config::{
    CERT_STAGGER_S, REVEAL_ROOT_MARGIN, REVEAL_THRESHOLD, SKILL_TAG_REVEAL_STEP_MS,
    SKILL_TAG_STAGGER_S, SKILL_THRESHOLD, TIMELINE_STAGGER_S,
};
use crate::dom_helpers::{self, Listener};
use crate::error::SetupError;
use gloo_timers::callback::Timeout;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{
    Document, Element, HtmlElement, IntersectionObserver, IntersectionObserverEntry,
    IntersectionObserverInit, ScrollBehavior, ScrollToOptions, Window,
};

pub const SKILL_TAG_HIDDEN_TRANSFORM: &str = "translateY(10px) scale(0.95)";
pub const SKILL_TAG_SHOWN_TRANSFORM: &str = "translateY(0) scale(1)";
pub const SKILL_TAG_TRANSITION: &str = "all 0.4s cubic-bezier(0.16, 1, 0.3, 1)";

/// CSS `transition-delay` for the `index`th item of a staggered group.
pub fn stagger_delay(index: usize, step_seconds: f64) -> String {
    format!("{}ms", (index as f64 * step_seconds * 1000.0).round())
}

/// Scroll target for an anchor: its top minus the fixed navbar's height.
pub fn anchor_scroll_top(target_top: f64, nav_height: &str) -> f64 {
    target_top - dom_helpers::parse_int_prefix(nav_height) as f64
}

/// Observe every element in `targets` and call `on_enter` each time one
/// starts intersecting.
pub fn on_intersect<F>(
    targets: &[HtmlElement],
    threshold: f64,
    root_margin: Option<&str>,
    mut on_enter: F,
) -> Result<IntersectionObserver, SetupError>
where
    F: FnMut(Element, &IntersectionObserver) + 'static,
{
    let callback = Closure::wrap(Box::new(
        move |entries: js_sys::Array, observer: IntersectionObserver| {
            for entry in entries.iter() {
                if let Ok(entry) = entry.dyn_into::<IntersectionObserverEntry>() {
                    if entry.is_intersecting() {
                        on_enter(entry.target(), &observer);
                    }
                }
            }
        },
    ) as Box<dyn FnMut(js_sys::Array, IntersectionObserver)>);

    let init = observer_options(threshold, root_margin);
    let observer =
        IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &init)?;
    callback.forget();

    for target in targets {
        observer.observe(target);
    }
    Ok(observer)
}

#[allow(deprecated)]
fn observer_options(threshold: f64, root_margin: Option<&str>) -> IntersectionObserverInit {
    let mut init = IntersectionObserverInit::new();
    init.threshold(&JsValue::from_f64(threshold));
    if let Some(margin) = root_margin {
        init.root_margin(margin);
    }
    init
}

#[allow(deprecated)]
pub fn smooth_scroll_to(window: &Window, top: f64) {
    let mut options = ScrollToOptions::new();
    options.top(top);
    options.behavior(ScrollBehavior::Smooth);
    window.scroll_to_with_scroll_to_options(&options);
}

fn setup_reveal(document: &Document) -> Result<(), SetupError> {
    let targets = dom_helpers::query_all_in_document(document, ".reveal")?;
    // Entries stay observed so the class is re-added if something strips it.
    on_intersect(
        &targets,
        REVEAL_THRESHOLD,
        Some(REVEAL_ROOT_MARGIN),
        |target, _| {
            let _ = target.class_list().add_1("revealed");
        },
    )?;
    Ok(())
}

fn set_stagger(elements: &[HtmlElement], step_seconds: f64) -> Result<(), SetupError> {
    for (index, element) in elements.iter().enumerate() {
        element
            .style()
            .set_property("transition-delay", &stagger_delay(index, step_seconds))?;
    }
    Ok(())
}

fn setup_stagger(document: &Document) -> Result<(), SetupError> {
    set_stagger(
        &dom_helpers::query_all_in_document(document, ".timeline-item")?,
        TIMELINE_STAGGER_S,
    )?;
    set_stagger(
        &dom_helpers::query_all_in_document(document, ".cert-card")?,
        CERT_STAGGER_S,
    )?;
    Ok(())
}

fn reveal_skill_tags(category: &Element) -> Result<(), SetupError> {
    for (index, tag) in dom_helpers::query_all(category, ".skill-tag")?
        .into_iter()
        .enumerate()
    {
        let delay = index as u32 * SKILL_TAG_REVEAL_STEP_MS;
        Timeout::new(delay, move || {
            let style = tag.style();
            let _ = style.set_property("opacity", "1");
            let _ = style.set_property("transform", SKILL_TAG_SHOWN_TRANSFORM);
            let _ = style.set_property("transition", SKILL_TAG_TRANSITION);
        })
        .forget();
    }
    Ok(())
}

fn setup_skill_tags(document: &Document) -> Result<(), SetupError> {
    let categories = dom_helpers::query_all_in_document(document, ".skill-category")?;
    for category in &categories {
        for (index, tag) in dom_helpers::query_all(category, ".skill-tag")?
            .iter()
            .enumerate()
        {
            let style = tag.style();
            style.set_property("transition-delay", &stagger_delay(index, SKILL_TAG_STAGGER_S))?;
            style.set_property("opacity", "0")?;
            style.set_property("transform", SKILL_TAG_HIDDEN_TRANSFORM)?;
        }
    }

    on_intersect(&categories, SKILL_THRESHOLD, None, |category, observer| {
        if let Err(err) = reveal_skill_tags(&category) {
            log::warn!("revealing skill tags: {}", err);
        }
        observer.unobserve(&category);
    })?;
    Ok(())
}

fn setup_smooth_anchors(window: &Window, document: &Document) -> Result<(), SetupError> {
    for anchor in dom_helpers::query_all_in_document(document, "a[href^=\"#\"]")? {
        let window = window.clone();
        let document = document.clone();
        let href = anchor.get_attribute("href").unwrap_or_default();
        Listener::new(&anchor, "click", move |event| {
            event.prevent_default();
            // a bare "#" is not a valid selector; nothing to scroll to
            let target = match document.query_selector(&href) {
                Ok(Some(target)) => target,
                _ => return,
            };
            let target = match target.dyn_into::<HtmlElement>() {
                Ok(target) => target,
                Err(_) => return,
            };
            let nav_height = document
                .document_element()
                .and_then(|root| window.get_computed_style(&root).ok().flatten())
                .and_then(|style| style.get_property_value("--nav-height").ok())
                .unwrap_or_default();
            let top = anchor_scroll_top(target.offset_top() as f64, &nav_height);
            smooth_scroll_to(&window, top);
        })?
        .forget();
    }
    Ok(())
}

/// Wire every entrance effect whose elements are on the page.
pub fn setup(window: &Window, document: &Document) -> Vec<SetupError> {
    let results = vec![
        setup_reveal(document),
        setup_stagger(document),
        setup_skill_tags(document),
        setup_smooth_anchors(window, document),
    ];
    results.into_iter().filter_map(Result::err).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stagger_delays_scale_with_index() {
        assert_eq!(stagger_delay(0, TIMELINE_STAGGER_S), "0ms");
        assert_eq!(stagger_delay(3, TIMELINE_STAGGER_S), "300ms");
        assert_eq!(stagger_delay(5, CERT_STAGGER_S), "400ms");
        assert_eq!(stagger_delay(7, SKILL_TAG_STAGGER_S), "210ms");
    }

    #[test]
    fn anchor_offset_subtracts_nav_height() {
        assert_eq!(anchor_scroll_top(1200.0, " 72px"), 1128.0);
        assert_eq!(anchor_scroll_top(1200.0, ""), 1200.0);
    }
}
