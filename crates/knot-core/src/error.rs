use thiserror::Error;

/// Why a frame could not be presented.
#[derive(Debug, Error)]
pub enum RenderError {
    #[error("surface lost or outdated; it will be reconfigured")]
    SurfaceLost,
    #[error("timed out acquiring the next surface texture")]
    Timeout,
    #[error("out of GPU memory")]
    OutOfMemory,
    #[error("render backend error: {0}")]
    Backend(String),
}

impl RenderError {
    /// Errors that go away on their own after a resize or the next frame.
    pub fn is_transient(&self) -> bool {
        matches!(self, RenderError::SurfaceLost | RenderError::Timeout)
    }
}
