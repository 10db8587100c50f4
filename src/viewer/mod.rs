//! ## Viewer
//!
//! The viewer draws one full-canvas textured quad and swaps the texture as
//! the page scrolls. The two fetch modes differ only in *when* the frame
//! bytes are fetched, not in how they are drawn:
//!
//! - [`FetchMode::OnDemand`]: each scroll tick fetches the target frame and
//!   binds it once decoded. Nothing is held in memory beyond the current
//!   frame, but every tick pays network/decode latency and concurrent
//!   fetches race (last completion wins).
//!
//! - [`FetchMode::Preload`]: every frame is requested up front through
//!   hidden `<img>` elements; a scroll tick swaps synchronously from the
//!   decoded element.
//!
//! ## Fetch Mode Comparison
//!
//! | Property              | `OnDemand`              | `Preload`          |
//! |-----------------------|-------------------------|--------------------|
//! | **Scroll latency**    | fetch + decode per tick | synchronous swap   |
//! | **Memory**            | current frame only      | whole sequence     |
//! | **Network**           | request per tick        | burst at startup   |
//! | **Racing fetches**    | yes, last wins          | none after startup |
//!
//! ## Choosing a mode
//!
//! - **Preload**: preferred for the scrub effect — swaps never stall, which
//!   is what makes the animation read as video
//! - **OnDemand**: when the sequence is too large to hold decoded, or
//!   scrubbing is rare enough that per-tick latency is acceptable

/// WebGL viewer.
pub mod webgl;

/// Static quad geometry.
pub(crate) mod geometry;

/// Embedded shader sources.
pub(crate) mod shaders;

/// Texture upload and frame swapping.
pub(crate) mod texture;

/// When frame image bytes are fetched.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum FetchMode {
    /// Fetch each frame when a scroll tick asks for it.
    #[default]
    OnDemand,
    /// Fetch every frame up front as hidden `<img>` elements.
    Preload,
}
