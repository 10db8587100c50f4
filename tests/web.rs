#![cfg(target_arch = "wasm32")]

use skrolla::{Error, FrameSequence, WebGlViewer};
use wasm_bindgen_test::*;

wasm_bindgen_test_configure!(run_in_browser);

#[wasm_bindgen_test]
fn empty_sequence_is_rejected() {
    let err = WebGlViewer::new(FrameSequence::new(Vec::<String>::new())).unwrap_err();
    assert!(matches!(err, Error::EmptySequence));
}

#[wasm_bindgen_test]
fn missing_canvas_is_reported() {
    // The test harness page carries no canvas matching the default selector.
    let err = WebGlViewer::new(FrameSequence::new(["drift_1.jpg"])).unwrap_err();
    assert!(matches!(err, Error::CanvasNotFound(_)));
}
