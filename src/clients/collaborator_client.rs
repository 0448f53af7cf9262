use crate::framework::{FrameworkError, ServiceClient, ServiceHandler};
use async_trait::async_trait;

/// Trait for collaborator-specific clients to share the request plumbing.
///
/// Implementors supply the inner generic client and an error mapping; [`call`](Self::call)
/// then sends any action and converts transport failures into the collaborator's error type.
#[async_trait]
pub trait CollaboratorClient<S: ServiceHandler>: Send + Sync {
    /// The collaborator-specific error type.
    type Error: From<String> + Send + Sync;

    /// Access the inner generic ServiceClient.
    fn inner(&self) -> &ServiceClient<S>;

    /// Map framework errors to the specific collaborator error type.
    fn map_error(e: FrameworkError) -> Self::Error;

    /// Send an action and wait for its result.
    #[tracing::instrument(skip(self))]
    async fn call(&self, action: S::Action) -> Result<S::ActionResult, Self::Error> {
        tracing::debug!("Sending request");
        self.inner().perform_action(action).await.map_err(Self::map_error)
    }
}
