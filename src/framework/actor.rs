//! # Generic Service Actor
//!
//! The server half of a hosted collaborator. It owns the service state and the receiving
//! end of the mailbox, and processes requests strictly one at a time.

use super::client::ServiceClient;
use super::error::FrameworkError;
use super::message::ServiceRequest;
use super::service::{NamedOperation, ServiceHandler};
use tokio::sync::mpsc;
use tracing::{debug, info, warn};

/// The generic actor hosting a single service instance.
///
/// **Concurrency Model**:
/// Any number of clients may send concurrently, but the actor drains its mailbox
/// sequentially. The service therefore never needs a `Mutex` for its own state.
///
/// # Usage Pattern
///
/// 1.  **Create**: `ServiceActor::new(service, buffer_size)` returns the actor and a client.
/// 2.  **Run**: spawn `actor.run(ctx)` on the runtime.
/// 3.  **Use**: clone the client freely; dropping every clone stops the actor.
pub struct ServiceActor<S: ServiceHandler> {
    service: S,
    receiver: mpsc::Receiver<ServiceRequest<S>>,
    handled: u64,
}

impl<S: ServiceHandler> ServiceActor<S> {
    /// Creates a new `ServiceActor` and its associated `ServiceClient`.
    ///
    /// # Arguments
    ///
    /// * `service` - The service state this actor hosts.
    /// * `buffer_size` - Mailbox capacity. When full, client calls wait for space.
    pub fn new(service: S, buffer_size: usize) -> (Self, ServiceClient<S>) {
        let (sender, receiver) = mpsc::channel(buffer_size);
        let actor = Self {
            service,
            receiver,
            handled: 0,
        };
        (actor, ServiceClient::new(sender))
    }

    /// Runs the actor's event loop, processing messages until the channel closes.
    pub async fn run(mut self, context: S::Context) {
        // Extract just the type name (e.g., "PrintingService" instead of the full path)
        let service_type = std::any::type_name::<S>()
            .split("::")
            .last()
            .unwrap_or("Unknown");
        info!(service_type, "Actor started");

        if let Err(e) = self.service.on_start(&context).await {
            warn!(service_type, error = %e, "on_start failed");
            return;
        }

        while let Some(ServiceRequest { action, respond_to }) = self.receiver.recv().await {
            let operation = action.operation();
            debug!(service_type, operation, ?action, "Action");

            let result = self
                .service
                .handle_action(action, &context)
                .await
                .map_err(FrameworkError::service);
            self.handled += 1;

            match &result {
                Ok(_) => info!(service_type, operation, "Action ok"),
                Err(e) => warn!(service_type, operation, error = %e, "Action failed"),
            }
            // The caller may have given up waiting; nothing to do then.
            let _ = respond_to.send(result);
        }

        info!(service_type, handled = self.handled, "Shutdown");
    }
}
