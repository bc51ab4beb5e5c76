//! Typewriter effect for the hero subtitle: types a word out, holds it,
//! deletes it, moves on to the next word, forever.

use crate::config::{
    DELETE_DELAY_MS, HOLD_DELAY_MS, NEXT_WORD_DELAY_MS, TYPED_WORDS, TYPE_DELAY_MS,
    TYPE_START_DELAY_MS,
};
use crate::dom_helpers;
use crate::error::SetupError;
use gloo_timers::callback::Timeout;
use std::cell::RefCell;
use std::rc::Rc;
use web_sys::HtmlElement;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Frame {
    pub text: String,
    /// Delay before the next step, in ms.
    pub delay_ms: u32,
}

#[derive(Debug, Clone)]
pub struct Typewriter {
    words: Vec<String>,
    word_index: usize,
    char_index: usize,
    deleting: bool,
}

impl Typewriter {
    pub fn new<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Typewriter {
            words: words.into_iter().map(Into::into).collect(),
            word_index: 0,
            char_index: 0,
            deleting: false,
        }
    }

    pub fn word_index(&self) -> usize {
        self.word_index
    }

    /// Next visible text and how long to wait after showing it.
    /// `None` when there is nothing to type.
    pub fn step(&mut self) -> Option<Frame> {
        let word = self.words.get(self.word_index)?;
        let word_len = word.chars().count();

        let mut delay_ms = if self.deleting {
            self.char_index = self.char_index.saturating_sub(1);
            DELETE_DELAY_MS
        } else {
            self.char_index = (self.char_index + 1).min(word_len);
            TYPE_DELAY_MS
        };
        let text: String = word.chars().take(self.char_index).collect();

        if !self.deleting && self.char_index == word_len {
            delay_ms = HOLD_DELAY_MS;
            self.deleting = true;
        } else if self.deleting && self.char_index == 0 {
            self.deleting = false;
            self.word_index = (self.word_index + 1) % self.words.len();
            delay_ms = NEXT_WORD_DELAY_MS;
        }

        Some(Frame { text, delay_ms })
    }
}

impl Default for Typewriter {
    fn default() -> Self {
        Typewriter::new(TYPED_WORDS.iter().copied())
    }
}

/// Drive `typewriter` into `element`, rescheduling itself after every step.
pub fn attach(element: HtmlElement, typewriter: Typewriter) {
    let state = Rc::new(RefCell::new(typewriter));
    schedule(element, state, TYPE_START_DELAY_MS);
}

fn schedule(element: HtmlElement, state: Rc<RefCell<Typewriter>>, delay_ms: u32) {
    Timeout::new(delay_ms, move || {
        let frame = state.borrow_mut().step();
        if let Some(frame) = frame {
            element.set_text_content(Some(&frame.text));
            schedule(element, state, frame.delay_ms);
        }
    })
    .forget();
}

pub fn setup(document: &web_sys::Document) -> Result<(), SetupError> {
    let element = dom_helpers::element_by_id::<HtmlElement>(document, "typedText")?;
    attach(element, Typewriter::default());
    Ok(())
}
