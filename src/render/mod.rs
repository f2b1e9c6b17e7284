//! Rendering capability consumed by the filter loop.

mod math;

use thiserror::Error;

pub use math::KatexRenderer;

/// Structured errors surfaced by a renderer. A rejected line is recovered by
/// the filter loop, so these never terminate the process.
#[derive(Debug, Clone, Error)]
pub enum RenderError {
    #[error("failed to build render options: {message}")]
    Options { message: String },
    #[error("rendering failed: {message}")]
    Render { message: String },
}

/// Capability that turns one source expression into a markup fragment.
/// Implementations must be deterministic: given the same source, they return
/// identical markup or errors.
pub trait Renderer: Send + Sync {
    fn render(&self, source: &str) -> Result<String, RenderError>;
}
