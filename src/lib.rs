mod utils;

pub mod animator;
pub mod color;
pub mod config;
pub mod counter;
pub mod debounce;
pub mod dom_helpers;
pub mod error;
pub mod field;
pub mod frame_loop;
pub mod nav;
pub mod particle;
pub mod pointer;
pub mod renderer;
pub mod reveal;
pub mod typewriter;

use wasm_bindgen::prelude::*;
use web_sys::{console, Document, HtmlCanvasElement, Window};

pub use animator::ParticleAnimator;
pub use config::FieldConfig;
pub use error::SetupError;
pub use field::ParticleField;
pub use pointer::Pointer;

pub const PARTICLE_CANVAS_ID: &str = "particleCanvas";

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    utils::set_panic_hook();
    utils::init_logging();

    let window = dom_helpers::window()?;
    let document = dom_helpers::document()?;
    if document.ready_state() == "loading" {
        let ready_window = window.clone();
        let ready_document = document.clone();
        dom_helpers::Listener::new(&document, "DOMContentLoaded", move |_| {
            setup_page(&ready_window, &ready_document);
        })?
        .forget();
    } else {
        setup_page(&window, &document);
    }
    Ok(())
}

/// Start every effect that has its elements on the page. A missing element
/// only switches its own effect off.
fn setup_page(window: &Window, document: &Document) {
    let mut errors = Vec::new();

    match dom_helpers::element_by_id::<HtmlCanvasElement>(document, PARTICLE_CANVAS_ID)
        .and_then(|canvas| ParticleAnimator::on_canvas(canvas, FieldConfig::default()))
    {
        Ok(animator) => animator.detach(),
        Err(err) => errors.push(err),
    }
    if let Err(err) = typewriter::setup(document) {
        errors.push(err);
    }
    errors.extend(nav::setup(window, document));
    if let Err(err) = counter::setup(document) {
        errors.push(err);
    }
    errors.extend(reveal::setup(window, document));

    for err in errors {
        if err.is_missing() {
            log::debug!("effect skipped: {}", err);
        } else {
            log::warn!("effect failed to start: {}", err);
        }
    }
    log::info!("page effects ready");
}

/// Measures the time between creation and drop in the browser console.
pub struct Timer<'a> {
    name: &'a str,
}

impl<'a> Timer<'a> {
    pub fn new(name: &'a str) -> Timer<'a> {
        console::time_with_label(name);
        Timer { name }
    }
}

impl<'a> Drop for Timer<'a> {
    fn drop(&mut self) {
        console::time_end_with_label(self.name);
    }
}
