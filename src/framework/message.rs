//! # Generic Messages
//!
//! The envelope exchanged between a `ServiceClient` and a `ServiceActor`.

use super::error::FrameworkError;
use super::service::ServiceHandler;
use tokio::sync::oneshot;

/// Type alias for the one-shot response channel used by actors.
pub type Response<T> = oneshot::Sender<Result<T, FrameworkError>>;

/// A request in flight: the action plus the channel its result goes back on.
///
/// This type is generic over `S: ServiceHandler`, so a printing action can never be
/// delivered to the packaging actor.
#[derive(Debug)]
pub struct ServiceRequest<S: ServiceHandler> {
    pub action: S::Action,
    pub respond_to: Response<S::ActionResult>,
}
