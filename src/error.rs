//! Errors raised while wiring effects to the page.
//!
//! None of these ever reach the visitor: `start` logs them and moves on to
//! the next effect, so a page missing an element just loses that effect.

use std::fmt;
use wasm_bindgen::JsValue;

#[derive(Debug, Clone, PartialEq)]
pub enum SetupError {
    /// No global `window` (not running in a browser).
    MissingWindow,
    MissingDocument,
    /// Element looked up by id or selector was not on the page.
    MissingElement(String),
    /// The canvas exists but refused to hand out a 2D context.
    ContextUnavailable,
    /// A DOM call threw.
    Js(String),
}

impl fmt::Display for SetupError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SetupError::MissingWindow => write!(f, "no global `window` exists"),
            SetupError::MissingDocument => write!(f, "window has no document"),
            SetupError::MissingElement(what) => write!(f, "element not found: {}", what),
            SetupError::ContextUnavailable => write!(f, "2d canvas context unavailable"),
            SetupError::Js(msg) => write!(f, "DOM call failed: {}", msg),
        }
    }
}

impl std::error::Error for SetupError {}

impl From<JsValue> for SetupError {
    fn from(value: JsValue) -> Self {
        SetupError::Js(value.as_string().unwrap_or_else(|| format!("{:?}", value)))
    }
}

impl From<SetupError> for JsValue {
    fn from(err: SetupError) -> Self {
        JsValue::from_str(&err.to_string())
    }
}

impl SetupError {
    /// Missing elements are expected on pages that skip a section.
    pub fn is_missing(&self) -> bool {
        matches!(
            self,
            SetupError::MissingElement(_) | SetupError::ContextUnavailable
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_names_the_element() {
        let err = SetupError::MissingElement("#typedText".to_owned());
        assert_eq!(err.to_string(), "element not found: #typedText");
        assert!(err.is_missing());
        assert!(!SetupError::MissingWindow.is_missing());
    }
}
