//! Error types for the Printing actor.

use thiserror::Error;

/// Errors that can occur during printing operations.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum PrintingError {
    /// The style to print has no name.
    #[error("Invalid style: {0:?}")]
    InvalidStyle(String),

    /// The color is not registered with the printer.
    #[error("Unknown color: {0}")]
    UnknownColor(String),

    /// Ink ran out before the requested quantity was printed.
    #[error("Out of ink: requested {requested}, printed {printed}")]
    OutOfInk { requested: u32, printed: u32 },

    /// The printing service replied with something other than what was asked for.
    #[error("Unexpected reply to {0}")]
    UnexpectedReply(&'static str),

    /// An error occurred while communicating with the actor system.
    #[error("Actor communication error: {0}")]
    ActorCommunicationError(String),
}

impl From<String> for PrintingError {
    fn from(msg: String) -> Self {
        PrintingError::ActorCommunicationError(msg)
    }
}
