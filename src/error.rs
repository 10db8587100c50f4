use web_sys::wasm_bindgen;

/// Custom error implementation.
#[derive(thiserror::Error, Debug)]
pub enum Error {
    /// Unable to retrieve window.
    ///
    /// This error occurs when [`web_sys::window()`] returns `None`.
    #[error("Unable to retrieve window")]
    UnableToRetrieveWindow,

    /// Unable to retrieve document.
    ///
    /// This error occurs when `window.document()` returns `None`.
    #[error("Unable to retrieve document")]
    UnableToRetrieveDocument,

    /// Unable to retrieve body.
    ///
    /// This error occurs when `document.body()` returns `None`.
    #[error("Unable to retrieve body")]
    UnableToRetrieveBody,

    /// No canvas element matches the configured selector.
    ///
    /// This error occurs when `document.query_selector` finds nothing, or
    /// finds an element that is not a `<canvas>`.
    #[error("No canvas element matches selector {0:?}")]
    CanvasNotFound(String),

    /// The browser does not support WebGL.
    ///
    /// This error occurs when `canvas.get_context("webgl")` returns `None`.
    /// It is fatal: the viewer cannot be constructed without a context.
    #[error("WebGL is not supported")]
    WebGlUnsupported,

    /// A WebGL object could not be created.
    #[error("WebGL error: {0}")]
    WebGl(String),

    /// The image sequence contains no frames.
    #[error("The image sequence is empty")]
    EmptySequence,

    /// JS value error.
    #[error("JS value error: {0:?}")]
    JsValue(wasm_bindgen::JsValue),
}

/// Convert [`wasm_bindgen::JsValue`] to [`Error`].
impl From<wasm_bindgen::JsValue> for Error {
    fn from(value: wasm_bindgen::JsValue) -> Self {
        Self::JsValue(value)
    }
}

/// Convert [`Error`] to [`std::io::Error`].
impl From<Error> for std::io::Error {
    fn from(error: Error) -> Self {
        std::io::Error::new(std::io::ErrorKind::Other, error.to_string())
    }
}
