//! Shader sources embedded at build time.

/// Passthrough vertex stage: position straight to clip space, UV to the
/// fragment stage.
pub(crate) const VERTEX_SHADER: &str = include_str!("shaders/scrub.vert");

/// Fragment stage: one `sampler2D` lookup, nothing else.
pub(crate) const FRAGMENT_SHADER: &str = include_str!("shaders/scrub.frag");
