use web_sys::{
    wasm_bindgen::{JsCast, JsValue},
    window, Document, HtmlCanvasElement, HtmlElement, Window,
};

use crate::{error::Error, scroll::ScrollMetrics};

pub(crate) fn get_window() -> Result<Window, Error> {
    window().ok_or(Error::UnableToRetrieveWindow)
}

pub(crate) fn get_document() -> Result<Document, Error> {
    get_window()?
        .document()
        .ok_or(Error::UnableToRetrieveDocument)
}

pub(crate) fn get_body() -> Result<HtmlElement, Error> {
    get_document()?.body().ok_or(Error::UnableToRetrieveBody)
}

/// Finds the canvas element matching the given CSS selector.
pub(crate) fn get_canvas_by_selector(selector: &str) -> Result<HtmlCanvasElement, Error> {
    get_document()?
        .query_selector(selector)?
        .ok_or_else(|| Error::CanvasNotFound(selector.to_string()))?
        .dyn_into::<HtmlCanvasElement>()
        .map_err(|_| Error::CanvasNotFound(selector.to_string()))
}

/// Viewport size in pixels.
pub(crate) fn get_raw_window_size() -> (u32, u32) {
    fn js_val_to_int(val: JsValue) -> Option<u32> {
        val.as_f64().map(|value| value as u32)
    }

    window()
        .and_then(|w| {
            w.inner_width()
                .ok()
                .and_then(js_val_to_int)
                .zip(w.inner_height().ok().and_then(js_val_to_int))
        })
        .unwrap_or((0, 0))
}

/// Samples the scroll state used to derive the display index.
///
/// Values the platform cannot provide read as zero, which the mapper
/// treats as a non-scrollable page.
pub(crate) fn sample_scroll_metrics() -> ScrollMetrics {
    let window = window();
    let scroll_y = window
        .as_ref()
        .and_then(|w| w.scroll_y().ok())
        .unwrap_or(0.0);
    let viewport_height = window
        .as_ref()
        .and_then(|w| w.inner_height().ok())
        .and_then(|value| value.as_f64())
        .unwrap_or(0.0);
    let document_height = get_body()
        .map(|body| f64::from(body.scroll_height()))
        .unwrap_or(0.0);

    ScrollMetrics {
        scroll_y,
        document_height,
        viewport_height,
    }
}
