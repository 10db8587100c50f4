//! The single scrub texture and the frame swapper that feeds it.

use std::rc::Rc;

use web_sys::{
    wasm_bindgen::{closure::Closure, JsCast, JsValue},
    HtmlImageElement, WebGlRenderingContext as GL, WebGlTexture,
};

use crate::{sequence::FrameSequence, viewer::FetchMode};

/// Swaps the displayed frame on the one texture object the viewer owns.
///
/// The texture is overwritten in place on every swap; nothing accumulates,
/// so rebinding the same display index twice produces the same output.
#[derive(Debug, Clone)]
pub(crate) struct FrameSwapper {
    gl: GL,
    texture: WebGlTexture,
    sequence: Rc<FrameSequence>,
    /// Eagerly created `<img>` elements, index-aligned with the sequence.
    /// Empty in [`FetchMode::OnDemand`].
    preloaded: Rc<Vec<HtmlImageElement>>,
    fetch_mode: FetchMode,
}

impl FrameSwapper {
    pub(crate) fn new(
        gl: GL,
        texture: WebGlTexture,
        sequence: Rc<FrameSequence>,
        preloaded: Rc<Vec<HtmlImageElement>>,
        fetch_mode: FetchMode,
    ) -> Self {
        Self {
            gl,
            texture,
            sequence,
            preloaded,
            fetch_mode,
        }
    }

    pub(crate) fn frame_count(&self) -> usize {
        self.sequence.len()
    }

    /// Binds the frame at the 1-based `display_index` to the scrub texture.
    ///
    /// Indices outside the sequence are a no-op: the previously bound frame
    /// stays visible. Overscroll at either end of the page lands here.
    ///
    /// In [`FetchMode::OnDemand`] the fetch started by a tick races any
    /// still in-flight neighbors; the last one to complete wins the bind.
    pub(crate) fn swap(&self, display_index: usize) {
        let Some(url) = self.sequence.get(display_index) else {
            return;
        };

        match self.fetch_mode {
            FetchMode::Preload => {
                if let Some(image) = self.preloaded.get(display_index - 1) {
                    self.upload_when_complete(image, url);
                }
            }
            FetchMode::OnDemand => self.fetch_and_upload(url),
        }
    }

    /// Decodes the first frame, binds it, and signals readiness.
    ///
    /// This is the one-way loading → ready transition: `on_ready` fires
    /// exactly once, after the initial bind. A decode failure is logged and
    /// leaves the viewer in the loading state with a blank canvas.
    pub(crate) fn bind_initial(&self, on_ready: impl FnOnce() + 'static) {
        let Some(url) = self.sequence.first() else {
            return;
        };
        let image = match HtmlImageElement::new() {
            Ok(image) => image,
            Err(err) => {
                web_sys::console::error_1(&err);
                return;
            }
        };
        log_decode_failure(&image, url);

        let closure = Closure::once({
            let gl = self.gl.clone();
            let texture = self.texture.clone();
            let image = image.clone();
            move || {
                upload_image(&gl, &texture, &image);
                on_ready();
            }
        });
        image.set_onload(Some(closure.as_ref().unchecked_ref()));
        closure.forget();
        image.set_src(url);
    }

    /// Fetches `url` into a fresh `Image` and binds it once decoded.
    fn fetch_and_upload(&self, url: &str) {
        let image = match HtmlImageElement::new() {
            Ok(image) => image,
            Err(err) => {
                web_sys::console::error_1(&err);
                return;
            }
        };
        self.upload_on_load(&image, url);
        image.set_src(url);
    }

    /// Binds an eagerly created element, synchronously when it has already
    /// decoded, otherwise when its load completes.
    fn upload_when_complete(&self, image: &HtmlImageElement, url: &str) {
        if image.complete() {
            upload_image(&self.gl, &self.texture, image);
        } else {
            self.upload_on_load(image, url);
        }
    }

    fn upload_on_load(&self, image: &HtmlImageElement, url: &str) {
        log_decode_failure(image, url);
        let closure = Closure::wrap(Box::new({
            let gl = self.gl.clone();
            let texture = self.texture.clone();
            let image = image.clone();
            move || upload_image(&gl, &texture, &image)
        }) as Box<dyn FnMut()>);
        image.set_onload(Some(closure.as_ref().unchecked_ref()));
        closure.forget();
    }
}

/// Uploads `image` into the currently configured scrub texture.
///
/// Mipmaps are regenerated when both dimensions are powers of two.
/// Otherwise WebGL 1 requires clamp-to-edge wrapping and a non-mipmap
/// minification filter for the texture to be complete, so those are set
/// instead. An upload failure is reported on the browser console and
/// leaves the previous texel data bound.
fn upload_image(gl: &GL, texture: &WebGlTexture, image: &HtmlImageElement) {
    gl.bind_texture(GL::TEXTURE_2D, Some(texture));
    if let Err(err) = gl.tex_image_2d_with_u32_and_u32_and_image(
        GL::TEXTURE_2D,
        0,
        GL::RGBA as i32,
        GL::RGBA,
        GL::UNSIGNED_BYTE,
        image,
    ) {
        web_sys::console::error_1(&err);
        return;
    }

    if uses_mipmaps(image.natural_width(), image.natural_height()) {
        gl.generate_mipmap(GL::TEXTURE_2D);
    } else {
        gl.tex_parameteri(GL::TEXTURE_2D, GL::TEXTURE_WRAP_S, GL::CLAMP_TO_EDGE as i32);
        gl.tex_parameteri(GL::TEXTURE_2D, GL::TEXTURE_WRAP_T, GL::CLAMP_TO_EDGE as i32);
        gl.tex_parameteri(GL::TEXTURE_2D, GL::TEXTURE_MIN_FILTER, GL::LINEAR as i32);
    }
}

/// Logs a decode failure for `url`; the previous frame stays bound.
pub(crate) fn log_decode_failure(image: &HtmlImageElement, url: &str) {
    let message = JsValue::from_str(&format!("failed to load image at {url:?}"));
    let closure = Closure::wrap(Box::new(move || {
        web_sys::console::error_1(&message);
    }) as Box<dyn FnMut()>);
    image.set_onerror(Some(closure.as_ref().unchecked_ref()));
    closure.forget();
}

/// Whether the mipmap path applies: both dimensions are powers of two.
fn uses_mipmaps(width: u32, height: u32) -> bool {
    is_power_of_two(width) && is_power_of_two(height)
}

fn is_power_of_two(value: u32) -> bool {
    value & value.wrapping_sub(1) == 0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_power_of_two_dimensions_take_the_mipmap_path() {
        assert!(uses_mipmaps(256, 256));
        assert!(uses_mipmaps(1, 1));
        assert!(uses_mipmaps(1024, 512));
    }

    #[test]
    fn test_npot_dimensions_take_the_clamp_path() {
        assert!(!uses_mipmaps(300, 200));
        assert!(!uses_mipmaps(256, 300));
        assert!(!uses_mipmaps(1920, 1080));
    }

    #[test]
    fn test_is_power_of_two() {
        for exponent in 0..16 {
            assert!(is_power_of_two(1 << exponent));
        }
        assert!(!is_power_of_two(3));
        assert!(!is_power_of_two(12));
        assert!(!is_power_of_two(255));
    }
}
