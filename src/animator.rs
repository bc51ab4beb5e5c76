//! Particle Field Animator: binds a `ParticleField` to a canvas element.
//!
//! Owns everything the page script used to keep in globals: the field, the
//! pointer, the renderer, the resize debounce and the frame loop. Events and
//! frames interleave on the one UI thread, so shared state is plain
//! `Rc<RefCell<_>>`.

use crate::config::{FieldConfig, RESIZE_DEBOUNCE_MS};
use crate::debounce::Debouncer;
use crate::dom_helpers::{self, Listener};
use crate::error::SetupError;
use crate::field::ParticleField;
use crate::frame_loop::FrameLoop;
use crate::pointer::Pointer;
use crate::renderer::CanvasRenderer;
use crate::Timer;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{HtmlCanvasElement, MouseEvent};

struct AnimatorState {
    canvas: HtmlCanvasElement,
    renderer: CanvasRenderer,
    field: ParticleField,
    pointer: Pointer,
    rebuilds: u32,
}

impl AnimatorState {
    fn frame(&mut self) {
        self.field.step(&self.pointer, &mut self.renderer);
    }

    fn rebuild_field(&mut self) {
        let _timer = Timer::new("ParticleField::reinitialize");
        let (width, height) = dom_helpers::fit_canvas(&self.canvas);
        self.field
            .reinitialize(&mut rand::thread_rng(), width, height);
        self.rebuilds += 1;
        log::debug!(
            "particle field rebuilt: {}x{} with {} particles",
            width,
            height,
            self.field.len()
        );
    }
}

#[wasm_bindgen]
pub struct ParticleAnimator {
    state: Rc<RefCell<AnimatorState>>,
    frame_loop: FrameLoop,
    listeners: Vec<Listener>,
    debouncer: Rc<RefCell<Debouncer>>,
}

#[wasm_bindgen]
impl ParticleAnimator {
    /// Start animating the canvas with the given id.
    pub fn attach(canvas_id: &str) -> Result<ParticleAnimator, JsValue> {
        let document = dom_helpers::document()?;
        let canvas = dom_helpers::element_by_id::<HtmlCanvasElement>(&document, canvas_id)?;
        Ok(ParticleAnimator::on_canvas(canvas, FieldConfig::default())?)
    }

    pub fn particle_count(&self) -> usize {
        self.state.borrow().field.len()
    }

    /// How many times the field has been recreated after a resize.
    pub fn rebuilds(&self) -> u32 {
        self.state.borrow().rebuilds
    }

    pub fn is_running(&self) -> bool {
        self.frame_loop.is_running()
    }

    /// Stop drawing and unhook every listener.
    pub fn stop(&mut self) {
        self.frame_loop.cancel();
        self.debouncer.borrow_mut().cancel();
        self.listeners.clear();
    }
}

impl ParticleAnimator {
    pub fn on_canvas(
        canvas: HtmlCanvasElement,
        config: FieldConfig,
    ) -> Result<ParticleAnimator, SetupError> {
        let window = dom_helpers::window()?;
        let context = dom_helpers::canvas_context_2d(&canvas)?;

        let (width, height) = dom_helpers::fit_canvas(&canvas);
        let field = ParticleField::new(&mut rand::thread_rng(), width, height, config);
        log::debug!(
            "particle field: {}x{} with {} particles",
            width,
            height,
            field.len()
        );

        let state = Rc::new(RefCell::new(AnimatorState {
            canvas: canvas.clone(),
            renderer: CanvasRenderer::new(context),
            field,
            pointer: Pointer::default(),
            rebuilds: 0,
        }));
        let debouncer = Rc::new(RefCell::new(Debouncer::new(RESIZE_DEBOUNCE_MS)));
        let mut listeners = Vec::with_capacity(3);

        {
            let state = Rc::clone(&state);
            listeners.push(Listener::new(&canvas, "mousemove", move |event| {
                if let Some(event) = event.dyn_ref::<MouseEvent>() {
                    let mut state = state.borrow_mut();
                    let rect = state.canvas.get_bounding_client_rect();
                    state.pointer.move_to(
                        [event.client_x() as f64, event.client_y() as f64],
                        [rect.left(), rect.top()],
                    );
                }
            })?);
        }

        {
            let state = Rc::clone(&state);
            listeners.push(Listener::new(&canvas, "mouseleave", move |_| {
                state.borrow_mut().pointer.leave();
            })?);
        }

        {
            let state = Rc::clone(&state);
            let resize_debouncer = Rc::clone(&debouncer);
            listeners.push(Listener::new(&window, "resize", move |_| {
                {
                    let mut state = state.borrow_mut();
                    let (width, height) = dom_helpers::fit_canvas(&state.canvas);
                    state.field.set_bounds(width, height);
                }
                let rebuild = Rc::clone(&state);
                resize_debouncer
                    .borrow_mut()
                    .call(move || rebuild.borrow_mut().rebuild_field());
            })?);
        }

        let frame_state = Rc::clone(&state);
        let frame_loop = FrameLoop::start(&window, move || frame_state.borrow_mut().frame())?;

        Ok(ParticleAnimator {
            state,
            frame_loop,
            listeners,
            debouncer,
        })
    }

    /// Leave the animation running for the rest of the page's life.
    pub fn detach(self) {
        std::mem::forget(self);
    }
}
