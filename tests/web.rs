//! Browser tests: attach effects to real DOM nodes.
//! Run with `wasm-pack test --headless --firefox`.

#![cfg(target_arch = "wasm32")]

use portfolio_effects::dom_helpers;
use portfolio_effects::nav::ScrollEffects;
use portfolio_effects::typewriter::{self, Typewriter};
use portfolio_effects::{FieldConfig, ParticleAnimator, SetupError};
use gloo_timers::future::TimeoutFuture;
use portfolio_effects::config::RESIZE_DEBOUNCE_MS;
use wasm_bindgen::JsCast;
use wasm_bindgen_test::*;
use web_sys::{HtmlCanvasElement, HtmlElement};

wasm_bindgen_test_configure!(run_in_browser);

fn canvas(width: u32, height: u32) -> HtmlCanvasElement {
    let document = dom_helpers::document().unwrap();
    let canvas = document
        .create_element("canvas")
        .unwrap()
        .dyn_into::<HtmlCanvasElement>()
        .unwrap();
    canvas
        .style()
        .set_property("display", "block")
        .unwrap();
    canvas
        .style()
        .set_property("width", &format!("{}px", width))
        .unwrap();
    canvas
        .style()
        .set_property("height", &format!("{}px", height))
        .unwrap();
    document.body().unwrap().append_child(&canvas).unwrap();
    canvas
}

#[wasm_bindgen_test]
fn animator_sizes_field_from_rendered_canvas() {
    let canvas = canvas(1000, 600);
    let mut animator = ParticleAnimator::on_canvas(canvas.clone(), FieldConfig::default()).unwrap();
    assert_eq!(canvas.width(), 1000);
    assert_eq!(canvas.height(), 600);
    assert_eq!(animator.particle_count(), 50);
    assert!(animator.is_running());

    animator.stop();
    assert!(!animator.is_running());
    canvas.remove();
}

#[wasm_bindgen_test]
async fn resize_burst_rebuilds_field_once() {
    let canvas = canvas(1000, 600);
    let mut animator = ParticleAnimator::on_canvas(canvas.clone(), FieldConfig::default()).unwrap();
    let window = dom_helpers::window().unwrap();

    canvas.style().set_property("width", "2000px").unwrap();
    for _ in 0..5 {
        let event = web_sys::Event::new("resize").unwrap();
        window.dispatch_event(&event).unwrap();
        TimeoutFuture::new(20).await;
    }
    // pixel size follows at once, the field waits for the quiet window
    assert_eq!(canvas.width(), 2000);
    assert_eq!(animator.rebuilds(), 0);
    assert_eq!(animator.particle_count(), 50);

    TimeoutFuture::new(RESIZE_DEBOUNCE_MS + 100).await;
    assert_eq!(animator.rebuilds(), 1);
    assert_eq!(animator.particle_count(), 100);

    animator.stop();
    canvas.remove();
}

#[wasm_bindgen_test]
fn zero_area_canvas_runs_empty() {
    let canvas = canvas(0, 0);
    let mut animator = ParticleAnimator::on_canvas(canvas.clone(), FieldConfig::default()).unwrap();
    assert_eq!(animator.particle_count(), 0);
    animator.stop();
    canvas.remove();
}

#[wasm_bindgen_test]
fn missing_canvas_is_reported_not_thrown() {
    let document = dom_helpers::document().unwrap();
    let err = dom_helpers::element_by_id::<HtmlCanvasElement>(&document, "noSuchCanvas")
        .err()
        .unwrap();
    assert_eq!(err, SetupError::MissingElement("#noSuchCanvas".to_owned()));
    assert!(ParticleAnimator::attach("noSuchCanvas").is_err());
}

#[wasm_bindgen_test]
fn typewriter_setup_needs_its_element() {
    let document = dom_helpers::document().unwrap();
    assert!(typewriter::setup(&document).unwrap_err().is_missing());

    let span = dom_helpers::create_html(&document, "span").unwrap();
    typewriter::attach(span.clone(), Typewriter::new(vec!["hi"]));
    // the first step only runs after the start delay
    assert_eq!(span.text_content().unwrap_or_default(), "");
}

#[wasm_bindgen_test]
fn scroll_effects_match_classes() {
    let document = dom_helpers::document().unwrap();
    let navbar: HtmlElement = dom_helpers::create_html(&document, "nav").unwrap();
    let effects = ScrollEffects::at(120.0);
    navbar
        .class_list()
        .toggle_with_force("scrolled", effects.navbar_scrolled)
        .unwrap();
    assert!(navbar.class_list().contains("scrolled"));
    assert!(!effects.back_to_top_visible);
}
