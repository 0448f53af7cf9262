//! Generic actor framework for hosting collaborator services.
//!
//! This module provides the building blocks for running a service as an isolated Tokio task
//! and talking to it through a typed, cloneable client.
//!
//! # Main Components
//!
//! - [`ServiceHandler`] - Trait a service implements to be hosted
//! - [`ServiceActor`] - Generic actor that owns a service and drains its mailbox
//! - [`ServiceClient`] - Type-safe client for sending actions to an actor
//! - [`FrameworkError`] - Transport-level failures (closed mailbox, dropped reply, service error)
//!
//! # Testing
//!
//! See [`mock`] module for utilities to test clients without spawning full actors.

pub mod actor;
pub mod client;
pub mod error;
pub mod message;
pub mod mock;
pub mod service;

// Re-export core types for convenience
pub use actor::ServiceActor;
pub use client::ServiceClient;
pub use error::FrameworkError;
pub use message::{Response, ServiceRequest};
pub use service::{NamedOperation, ServiceHandler};
