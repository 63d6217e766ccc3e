//! Errors raised while attaching the backdrop to a page.
//!
//! The simulation itself cannot fail; everything here comes from looking up
//! the canvas and talking to the browser.

use std::fmt;
use wasm_bindgen::JsValue;

#[derive(Debug)]
pub enum BackgroundError {
    /// No global `window` (e.g. running inside a worker).
    NoWindow,
    /// The window has no document.
    NoDocument,
    /// No element with the given id.
    CanvasNotFound(String),
    /// The element exists but is not a `<canvas>`.
    NotACanvas(String),
    /// The canvas refused to hand out a 2d context.
    ContextUnavailable,
    /// Any other exception thrown by a browser API.
    Js(JsValue),
}

impl fmt::Display for BackgroundError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BackgroundError::NoWindow => write!(f, "No global window object available"),
            BackgroundError::NoDocument => write!(f, "Window has no document"),
            BackgroundError::CanvasNotFound(id) => write!(f, "No element with id '{}'", id),
            BackgroundError::NotACanvas(id) => write!(f, "Element '{}' is not a canvas", id),
            BackgroundError::ContextUnavailable => write!(f, "Failed to get a 2d rendering context"),
            BackgroundError::Js(value) => match value.as_string() {
                Some(msg) => write!(f, "Browser error: {}", msg),
                None => write!(f, "Browser error: {:?}", value),
            },
        }
    }
}

impl std::error::Error for BackgroundError {}

impl From<JsValue> for BackgroundError {
    fn from(value: JsValue) -> Self {
        BackgroundError::Js(value)
    }
}

impl From<BackgroundError> for JsValue {
    fn from(err: BackgroundError) -> Self {
        match err {
            BackgroundError::Js(value) => value,
            other => js_sys::Error::new(&other.to_string()).into(),
        }
    }
}
