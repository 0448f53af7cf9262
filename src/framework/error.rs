//! # Framework Errors
//!
//! Transport-level failures shared by every service actor and client.

/// Errors that can occur between a client and a hosted service.
#[derive(Debug, thiserror::Error)]
pub enum FrameworkError {
    #[error("Actor closed")]
    ActorClosed,
    #[error("Actor dropped response channel")]
    ActorDropped,
    #[error("Service error: {0}")]
    ServiceError(Box<dyn std::error::Error + Send + Sync>),
}

impl FrameworkError {
    /// Wraps a service-level failure.
    pub fn service(e: impl std::error::Error + Send + Sync + 'static) -> Self {
        FrameworkError::ServiceError(Box::new(e))
    }
}
