//! # Service Handler
//!
//! The contract a collaborator service implements to be hosted by a [`ServiceActor`](super::ServiceActor).

use async_trait::async_trait;
use std::fmt::Debug;

/// Names the operation a request performs.
///
/// The actor uses it for structured log fields and the mock framework uses it to
/// match expectations and record call order, so it must be stable for a given variant.
pub trait NamedOperation {
    fn operation(&self) -> &'static str;
}

/// Trait that any collaborator service must implement to be hosted by a `ServiceActor`.
///
/// # Architecture Note
/// A service owns its state exclusively. The hosting actor calls [`handle_action`](Self::handle_action)
/// for one request at a time, so implementations mutate `self` freely without locks.
///
/// # Async & Context
/// The trait is `#[async_trait]` so handlers can await (e.g. drain a stream handed to them).
/// `Context` carries late-bound dependencies passed to `run()` instead of `new()`.
#[async_trait]
pub trait ServiceHandler: Send + 'static {
    /// Enum of the operations this service accepts.
    type Action: NamedOperation + Send + Debug;

    /// Result returned by a successful action. Variants normally mirror `Action` 1:1.
    type ActionResult: Send + Debug;

    /// The runtime context (dependencies) injected into the actor.
    /// Use `()` if no dependencies are needed.
    type Context: Send + Sync;

    /// The error type for this service.
    type Error: std::error::Error + Send + Sync + 'static;

    /// Called once before the first request is processed.
    async fn on_start(&mut self, _ctx: &Self::Context) -> Result<(), Self::Error> {
        Ok(())
    }

    /// Handle a single request.
    async fn handle_action(
        &mut self,
        action: Self::Action,
        ctx: &Self::Context,
    ) -> Result<Self::ActionResult, Self::Error>;
}
