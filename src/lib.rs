//! Scroll-driven image-sequence scrubbing for the web.
//!
//! **skrolla** renders a numbered image sequence onto a full-window canvas
//! through WebGL and swaps the displayed frame from the vertical scroll
//! position — the faux-video "scrub" effect common on marketing pages.
//!
//! The moving parts are deliberately few: a [`FrameSequence`] orders the
//! frame URLs numerically, a [`WebGlViewer`] uploads one quad and two
//! trivial shaders once, a scroll listener maps the scroll fraction onto a
//! 1-based frame index, and a `requestAnimationFrame` loop presents
//! whatever frame was bound last. See the [`viewer`] module for the two
//! fetch modes and their trade-offs.
//!
//! ## Usage
//!
//! Point the viewer at a canvas and hand it the frame URLs:
//!
//! ```no_run
//! use skrolla::{FetchMode, FrameSequence, ViewerOptions, WebGlViewer};
//!
//! fn main() -> std::io::Result<()> {
//!     let frames = FrameSequence::new((1..=179).map(|i| format!("assets/drift_{i}.jpg")));
//!
//!     let viewer = WebGlViewer::new_with_options(
//!         frames,
//!         ViewerOptions::new()
//!             .canvas_selector(".skrolla")
//!             .fetch_mode(FetchMode::Preload),
//!     )?;
//!     viewer.run()?;
//!
//!     Ok(())
//! }
//! ```
//!
//! The page supplies the scroll range (a tall body) and the canvas; the
//! viewer owns everything behind the canvas.

/// Error implementation.
pub mod error;

/// Scroll position to frame index mapping.
pub mod scroll;

/// Ordered frame sequences.
pub mod sequence;

/// Viewer backends and fetch modes.
pub mod viewer;

/// Redraw loop.
mod render;

/// DOM helpers.
mod utils;

pub use error::Error;
pub use scroll::ScrollMetrics;
pub use sequence::FrameSequence;
pub use viewer::webgl::{ViewerOptions, WebGlViewer, DEFAULT_CANVAS_SELECTOR};
pub use viewer::FetchMode;
