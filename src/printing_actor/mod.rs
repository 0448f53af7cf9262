//! # Printing Actor
//!
//! The printing collaborator: registers colors, keeps an ink reservoir and prints shirts.
//!
//! ## Structure
//!
//! - [`service`] - [`ServiceHandler`](crate::framework::ServiceHandler) implementation
//! - [`actions`] - [`PrintingAction`] and [`PrintingActionResult`]
//! - [`stream`] - [`ShirtStream`], the lazy output of a print request
//! - [`error`] - [`PrintingError`]
//! - [`new()`] - Factory function that creates the actor and its client
//!
//! ## Streaming
//!
//! A print request is answered immediately with a [`ShirtStream`]. Shirts are produced by a
//! background task while the consumer drains the stream, so the printing actor is free to
//! serve other requests in the meantime.

pub mod actions;
pub mod error;
pub mod service;
pub mod stream;

pub use actions::*;
pub use error::*;
pub use service::PrintingService;
pub use stream::*;

use crate::framework::{ServiceActor, ServiceClient};
use serde::Deserialize;

/// Printing service tuning.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct PrintingConfig {
    /// Mailbox capacity of the actor.
    pub mailbox_capacity: usize,
    /// How many printed shirts may wait unconsumed on a stream.
    pub stream_capacity: usize,
    /// Ink units; one unit prints one shirt.
    pub ink_capacity: u32,
}

impl Default for PrintingConfig {
    fn default() -> Self {
        Self {
            mailbox_capacity: 32,
            stream_capacity: 8,
            ink_capacity: 1000,
        }
    }
}

/// Creates a new Printing actor and its client.
pub fn new(config: &PrintingConfig) -> (ServiceActor<PrintingService>, ServiceClient<PrintingService>) {
    ServiceActor::new(PrintingService::new(config), config.mailbox_capacity.max(1))
}
