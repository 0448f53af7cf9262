//! # Generic Client
//!
//! The client half of a hosted service.

use super::error::FrameworkError;
use super::message::ServiceRequest;
use super::service::ServiceHandler;
use tokio::sync::{mpsc, oneshot};

/// A type-safe client for interacting with a `ServiceActor`.
///
/// * **Cloneable** – holds only a sender, so cloning is inexpensive.
/// * **Async API** – every call resolves to `Result<…, FrameworkError>`.
pub struct ServiceClient<S: ServiceHandler> {
    sender: mpsc::Sender<ServiceRequest<S>>,
}

// Manual impl: `S` itself is not `Clone`, only the sender is.
impl<S: ServiceHandler> Clone for ServiceClient<S> {
    fn clone(&self) -> Self {
        Self {
            sender: self.sender.clone(),
        }
    }
}

impl<S: ServiceHandler> ServiceClient<S> {
    pub fn new(sender: mpsc::Sender<ServiceRequest<S>>) -> Self {
        Self { sender }
    }

    /// Sends `action` to the actor and waits for its result.
    pub async fn perform_action(&self, action: S::Action) -> Result<S::ActionResult, FrameworkError> {
        let (respond_to, response) = oneshot::channel();
        self.sender
            .send(ServiceRequest { action, respond_to })
            .await
            .map_err(|_| FrameworkError::ActorClosed)?;
        response.await.map_err(|_| FrameworkError::ActorDropped)?
    }
}
