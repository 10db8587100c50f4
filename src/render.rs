//! Continuous redraw loop.

use std::cell::RefCell;
use std::rc::Rc;

use web_sys::{
    wasm_bindgen::{closure::Closure, JsCast},
    window, WebGlRenderingContext as GL,
};

/// Requests an animation frame.
fn request_animation_frame(f: &Closure<dyn FnMut()>) {
    window()
        .unwrap()
        .request_animation_frame(f.as_ref().unchecked_ref())
        .unwrap();
}

/// Starts the per-frame redraw loop.
///
/// Issues one draw call per display refresh against whatever texture the
/// swapper last bound. The loop changes no state and reschedules itself
/// forever; it holds its own closure through the usual
/// `Rc<RefCell<Option<Closure>>>` knot so it can re-register from within
/// itself.
pub(crate) fn start_render_loop(gl: GL, vertex_count: i32) {
    let callback: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
    *callback.borrow_mut() = Some(Closure::wrap(Box::new({
        let callback = callback.clone();
        move || {
            gl.draw_arrays(GL::TRIANGLES, 0, vertex_count);
            request_animation_frame(callback.borrow().as_ref().unwrap());
        }
    }) as Box<dyn FnMut()>));
    request_animation_frame(callback.borrow().as_ref().unwrap());
}
