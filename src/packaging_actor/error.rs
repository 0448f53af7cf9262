//! Error types for the Packaging actor.

use crate::printing_actor::PrintingError;
use thiserror::Error;

/// Errors that can occur during packaging operations.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum PackagingError {
    /// The wrapping material is not one of the known packing types.
    #[error("Unknown wrapping type: {0}")]
    UnknownWrappingType(String),

    /// The shirt stream being wrapped failed before it finished.
    #[error("Shirt stream failed: {0}")]
    StreamFailed(#[from] PrintingError),

    /// Not enough material left to wrap every shirt.
    #[error("Insufficient material: need {needed}, available {available}")]
    InsufficientMaterial { needed: u32, available: u32 },

    /// The packaging service replied with something other than what was asked for.
    #[error("Unexpected reply to {0}")]
    UnexpectedReply(&'static str),

    /// An error occurred while communicating with the actor system.
    #[error("Actor communication error: {0}")]
    ActorCommunicationError(String),
}

impl From<String> for PackagingError {
    fn from(msg: String) -> Self {
        PackagingError::ActorCommunicationError(msg)
    }
}
