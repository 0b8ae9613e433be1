//! Render loop errors.

use thiserror::Error;

/// Boxed cause from a display backend.
pub type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Failures reported by a display surface backend.
///
/// Both variants are terminal for the process: there is no retry and no
/// degraded mode.
#[derive(Debug, Error)]
pub enum SurfaceError {
    /// The backend could not be created.
    #[error("display surface failed to initialize")]
    Init(#[source] BoxError),

    /// Presenting a finished frame failed.
    #[error("failed to submit frame")]
    Submit(#[source] BoxError),
}

impl SurfaceError {
    pub fn init(cause: impl Into<BoxError>) -> Self {
        SurfaceError::Init(cause.into())
    }

    pub fn submit(cause: impl Into<BoxError>) -> Self {
        SurfaceError::Submit(cause.into())
    }
}
