// requestAnimationFrame loop. The callback re-requests itself after each
// frame; the latest request id is kept so the loop can be cancelled.

use crate::error::SetupError;
use std::cell::{Cell, RefCell};
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::Window;

type FrameCallback = Rc<RefCell<Option<Closure<dyn FnMut()>>>>;

pub struct FrameLoop {
    window: Window,
    request_id: Rc<Cell<Option<i32>>>,
    callback: FrameCallback,
}

impl FrameLoop {
    pub fn start<F>(window: &Window, mut frame: F) -> Result<FrameLoop, SetupError>
    where
        F: FnMut() + 'static,
    {
        let request_id = Rc::new(Cell::new(None));
        let callback: FrameCallback = Rc::new(RefCell::new(None));

        let next_window = window.clone();
        let next_id = Rc::clone(&request_id);
        let next_callback = Rc::clone(&callback);
        *callback.borrow_mut() = Some(Closure::wrap(Box::new(move || {
            if next_id.get().is_none() {
                return;
            }
            frame();
            if let Some(cb) = next_callback.borrow().as_ref() {
                match next_window.request_animation_frame(cb.as_ref().unchecked_ref()) {
                    Ok(id) => next_id.set(Some(id)),
                    Err(err) => {
                        log::warn!("frame loop stopped: {:?}", err);
                        next_id.set(None);
                    }
                }
            }
        }) as Box<dyn FnMut()>));

        let first = match callback.borrow().as_ref() {
            Some(cb) => window.request_animation_frame(cb.as_ref().unchecked_ref())?,
            None => return Err(SetupError::Js("frame callback missing".to_owned())),
        };
        request_id.set(Some(first));

        Ok(FrameLoop {
            window: window.clone(),
            request_id,
            callback,
        })
    }

    pub fn is_running(&self) -> bool {
        self.request_id.get().is_some()
    }

    /// Stop the loop. Must not be called from inside the frame callback.
    pub fn cancel(&mut self) {
        if let Some(id) = self.request_id.take() {
            let _ = self.window.cancel_animation_frame(id);
        }
        // breaks the closure's reference cycle back to itself
        self.callback.borrow_mut().take();
    }
}
