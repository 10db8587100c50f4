use std::rc::Rc;

use web_sys::{
    js_sys::Float32Array,
    wasm_bindgen::{closure::Closure, JsCast, JsValue},
    HtmlCanvasElement, HtmlImageElement, WebGlBuffer, WebGlProgram,
    WebGlRenderingContext as GL, WebGlShader, WebGlTexture,
};

use crate::{
    error::Error,
    render,
    sequence::FrameSequence,
    utils,
    viewer::{geometry, shaders, texture, texture::FrameSwapper, FetchMode},
};

/// Canvas selector used when none is configured.
pub const DEFAULT_CANVAS_SELECTOR: &str = ".skrolla";

/// Options for the [`WebGlViewer`].
#[derive(Debug, Default)]
pub struct ViewerOptions {
    /// CSS selector locating the canvas element.
    canvas_selector: Option<String>,
    /// Override the automatically detected canvas size.
    size: Option<(u32, u32)>,
    /// When frame image bytes are fetched.
    fetch_mode: FetchMode,
}

impl ViewerOptions {
    /// Constructs a new [`ViewerOptions`].
    pub fn new() -> Self {
        Default::default()
    }

    /// Sets the CSS selector used to locate the canvas element.
    ///
    /// Defaults to [`DEFAULT_CANVAS_SELECTOR`].
    pub fn canvas_selector(mut self, selector: &str) -> Self {
        self.canvas_selector = Some(selector.to_string());
        self
    }

    /// Sets the size of the canvas, in pixels.
    ///
    /// Defaults to the viewport size.
    pub fn size(mut self, size: (u32, u32)) -> Self {
        self.size = Some(size);
        self
    }

    /// Sets when frame image bytes are fetched.
    pub fn fetch_mode(mut self, fetch_mode: FetchMode) -> Self {
        self.fetch_mode = fetch_mode;
        self
    }
}

/// WebGL scrub viewer.
///
/// Renders the current sequence frame onto a full-canvas quad and derives
/// which frame to show from the window scroll position. All GPU resources
/// are created once here and never freed; the page owns them for its
/// lifetime.
#[derive(Debug)]
pub struct WebGlViewer {
    /// Target canvas.
    canvas: HtmlCanvasElement,
    /// WebGL context.
    gl: GL,
    /// The single scrub texture.
    texture: WebGlTexture,
    /// Ordered frame URLs.
    sequence: Rc<FrameSequence>,
    /// Eagerly created `<img>` elements ([`FetchMode::Preload`] only).
    preloaded: Rc<Vec<HtmlImageElement>>,
    /// When frame image bytes are fetched.
    fetch_mode: FetchMode,
}

impl WebGlViewer {
    /// Constructs a new [`WebGlViewer`] over `sequence`.
    pub fn new(sequence: FrameSequence) -> Result<Self, Error> {
        Self::new_with_options(sequence, ViewerOptions::default())
    }

    /// Constructs a new [`WebGlViewer`] with the given options.
    ///
    /// Performs the whole one-time renderer setup: locates and sizes the
    /// canvas, acquires the `"webgl"` context (fatal if unsupported),
    /// uploads the static quad geometry, compiles and links the shader
    /// program, and creates the texture object the frames are swapped on.
    pub fn new_with_options(
        sequence: FrameSequence,
        options: ViewerOptions,
    ) -> Result<Self, Error> {
        if sequence.is_empty() {
            return Err(Error::EmptySequence);
        }

        let selector = options
            .canvas_selector
            .as_deref()
            .unwrap_or(DEFAULT_CANVAS_SELECTOR);
        let canvas = utils::get_canvas_by_selector(selector)?;

        let (width, height) = options.size.unwrap_or_else(utils::get_raw_window_size);
        canvas.set_width(width);
        canvas.set_height(height);

        let gl = get_webgl_context(&canvas)?;

        let plane_buffer = create_static_buffer(&gl, &geometry::PLANE_VERTICES)?;
        let uv_buffer = create_static_buffer(&gl, &geometry::PLANE_UVS)?;

        let program = link_quad_program(&gl)?;
        gl.use_program(Some(&program));
        gl.enable(GL::DEPTH_TEST);

        enable_attribute(&gl, &program, "position", &plane_buffer, 3);
        enable_attribute(&gl, &program, "uv", &uv_buffer, 2);

        // The fragment sampler reads from texture unit 0, where the scrub
        // texture stays bound for the lifetime of the page.
        let location = gl.get_uniform_location(&program, "textureID");
        gl.uniform1i(location.as_ref(), 0);

        gl.pixel_storei(GL::UNPACK_FLIP_Y_WEBGL, 1);
        let texture = gl
            .create_texture()
            .ok_or_else(|| Error::WebGl("failed to create texture".to_string()))?;

        let preloaded = match options.fetch_mode {
            FetchMode::Preload => preload_frames(&sequence)?,
            FetchMode::OnDemand => Vec::new(),
        };

        Ok(Self {
            canvas,
            gl,
            texture,
            sequence: Rc::new(sequence),
            preloaded: Rc::new(preloaded),
            fetch_mode: options.fetch_mode,
        })
    }

    /// Number of frames in the sequence.
    pub fn frame_count(&self) -> usize {
        self.sequence.len()
    }

    /// Wires the window listeners and starts the redraw loop.
    ///
    /// The first frame is decoded asynchronously; the draw loop starts
    /// once it has been bound and then runs until the page unloads.
    /// Listener and frame closures are intentionally leaked — the viewer
    /// lives for the page.
    pub fn run(self) -> Result<(), Error> {
        let window = utils::get_window()?;

        // Resize keeps the drawing surface and the GL viewport at exactly
        // the new viewport dimensions.
        let on_resize = {
            let canvas = self.canvas.clone();
            let gl = self.gl.clone();
            Closure::wrap(Box::new(move || {
                let (width, height) = utils::get_raw_window_size();
                canvas.set_width(width);
                canvas.set_height(height);
                gl.viewport(0, 0, width as i32, height as i32);
            }) as Box<dyn FnMut()>)
        };
        window.add_event_listener_with_callback("resize", on_resize.as_ref().unchecked_ref())?;
        on_resize.forget();

        let swapper = self.swapper();
        let on_scroll = {
            let swapper = swapper.clone();
            Closure::wrap(Box::new(move || {
                let metrics = utils::sample_scroll_metrics();
                swapper.swap(metrics.display_index(swapper.frame_count()));
            }) as Box<dyn FnMut()>)
        };
        window.add_event_listener_with_callback("scroll", on_scroll.as_ref().unchecked_ref())?;
        on_scroll.forget();

        let gl = self.gl.clone();
        swapper.bind_initial(move || {
            render::start_render_loop(gl, geometry::VERTEX_COUNT);
        });

        Ok(())
    }

    fn swapper(&self) -> FrameSwapper {
        FrameSwapper::new(
            self.gl.clone(),
            self.texture.clone(),
            self.sequence.clone(),
            self.preloaded.clone(),
            self.fetch_mode,
        )
    }
}

/// Acquires the `"webgl"` context.
///
/// Missing WebGL support is fatal; nothing below can run without it.
fn get_webgl_context(canvas: &HtmlCanvasElement) -> Result<GL, Error> {
    canvas
        .get_context("webgl")
        .map_err(Error::from)?
        .ok_or(Error::WebGlUnsupported)?
        .dyn_into::<GL>()
        .map_err(|_| Error::WebGlUnsupported)
}

/// Creates a buffer and uploads `data` once with `STATIC_DRAW`.
fn create_static_buffer(gl: &GL, data: &[f32]) -> Result<WebGlBuffer, Error> {
    let buffer = gl
        .create_buffer()
        .ok_or_else(|| Error::WebGl("failed to create buffer".to_string()))?;
    gl.bind_buffer(GL::ARRAY_BUFFER, Some(&buffer));
    gl.buffer_data_with_array_buffer_view(
        GL::ARRAY_BUFFER,
        &Float32Array::from(data),
        GL::STATIC_DRAW,
    );
    Ok(buffer)
}

/// Compiles one shader stage.
///
/// A failed compile is reported on the browser console and yields `None`.
/// The caller links with whatever compiled, which can produce a blank draw
/// instead of an abort.
fn compile_shader(gl: &GL, shader_type: u32, source: &str) -> Option<WebGlShader> {
    let shader = gl.create_shader(shader_type)?;
    gl.shader_source(&shader, source);
    gl.compile_shader(&shader);

    if gl
        .get_shader_parameter(&shader, GL::COMPILE_STATUS)
        .as_bool()
        .unwrap_or(false)
    {
        return Some(shader);
    }

    let log = gl
        .get_shader_info_log(&shader)
        .unwrap_or_else(|| "unknown shader compile error".to_string());
    web_sys::console::error_1(&JsValue::from_str(&log));
    gl.delete_shader(Some(&shader));
    None
}

/// Compiles both quad shader stages and links them into a program.
fn link_quad_program(gl: &GL) -> Result<WebGlProgram, Error> {
    let vertex = compile_shader(gl, GL::VERTEX_SHADER, shaders::VERTEX_SHADER);
    let fragment = compile_shader(gl, GL::FRAGMENT_SHADER, shaders::FRAGMENT_SHADER);

    let program = gl
        .create_program()
        .ok_or_else(|| Error::WebGl("failed to create program".to_string()))?;
    if let Some(shader) = &vertex {
        gl.attach_shader(&program, shader);
    }
    if let Some(shader) = &fragment {
        gl.attach_shader(&program, shader);
    }
    gl.link_program(&program);
    Ok(program)
}

/// Points the named attribute at `buffer` and enables it.
///
/// An attribute the linker discarded comes back as -1 and is skipped.
fn enable_attribute(gl: &GL, program: &WebGlProgram, name: &str, buffer: &WebGlBuffer, size: i32) {
    let location = gl.get_attrib_location(program, name);
    if location < 0 {
        return;
    }
    let location = location as u32;
    gl.enable_vertex_attrib_array(location);
    gl.bind_buffer(GL::ARRAY_BUFFER, Some(buffer));
    gl.vertex_attrib_pointer_with_i32(location, size, GL::FLOAT, false, 0, 0);
}

/// Creates an `<img>` element per frame inside a hidden container on
/// `<body>`.
///
/// The browser starts fetching immediately, so scroll ticks can swap from
/// already decoded elements. A frame that fails to decode is reported on
/// the console; scrolling onto it keeps the previously bound frame.
fn preload_frames(sequence: &FrameSequence) -> Result<Vec<HtmlImageElement>, Error> {
    let document = utils::get_document()?;
    let container = document.create_element("div")?;
    container.set_attribute("style", "display: none;")?;
    utils::get_body()?.append_child(&container)?;

    let mut elements = Vec::with_capacity(sequence.len());
    for url in sequence.iter() {
        let image = HtmlImageElement::new()?;
        texture::log_decode_failure(&image, url);
        image.set_src(url);
        container.append_child(&image)?;
        elements.push(image);
    }
    Ok(elements)
}
