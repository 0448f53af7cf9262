//! # Packaging Client
//!
//! Adapter between the orchestrator and the packaging collaborator.
use crate::clients::collaborator_client::CollaboratorClient;
use crate::framework::{FrameworkError, ServiceClient};
use crate::model::WrappingType;
use crate::packaging_actor::{
    PackagingAction, PackagingActionResult, PackagingError, PackagingService, WrapReceipt,
    WrapRequest,
};
use crate::printing_actor::ShirtStream;
use async_trait::async_trait;
use tracing::instrument;

/// Client for interacting with the Packaging actor.
#[derive(Clone)]
pub struct PackagingClient {
    inner: ServiceClient<PackagingService>,
}

impl PackagingClient {
    pub fn new(inner: ServiceClient<PackagingService>) -> Self {
        Self { inner }
    }
}

#[async_trait]
impl CollaboratorClient<PackagingService> for PackagingClient {
    type Error = PackagingError;

    fn inner(&self) -> &ServiceClient<PackagingService> {
        &self.inner
    }

    fn map_error(e: FrameworkError) -> Self::Error {
        match e {
            FrameworkError::ServiceError(inner) => match inner.downcast::<PackagingError>() {
                Ok(err) => *err,
                Err(other) => PackagingError::ActorCommunicationError(other.to_string()),
            },
            other => PackagingError::ActorCommunicationError(other.to_string()),
        }
    }
}

impl PackagingClient {
    #[instrument(skip(self))]
    pub async fn list_packing_types(&self) -> Result<Vec<WrappingType>, PackagingError> {
        match self.call(PackagingAction::ListPackingTypes).await? {
            PackagingActionResult::PackingTypes(types) => Ok(types),
            _ => Err(PackagingError::UnexpectedReply("list_packing_types")),
        }
    }

    /// Standard wrapping. The stream is moved into the request and drained by the service.
    #[instrument(skip(self))]
    pub async fn wrap_shirts(&self, shirts: ShirtStream) -> Result<WrapReceipt, PackagingError> {
        match self.call(PackagingAction::Wrap(WrapRequest { shirts })).await? {
            PackagingActionResult::Wrapped(receipt) => Ok(receipt),
            _ => Err(PackagingError::UnexpectedReply("wrap_shirts")),
        }
    }

    /// Gift wrapping. The stream is moved into the request and drained by the service.
    #[instrument(skip(self))]
    pub async fn gift_wrap(&self, shirts: ShirtStream) -> Result<WrapReceipt, PackagingError> {
        match self.call(PackagingAction::GiftWrap(WrapRequest { shirts })).await? {
            PackagingActionResult::GiftWrapped(receipt) => Ok(receipt),
            _ => Err(PackagingError::UnexpectedReply("gift_wrap")),
        }
    }

    #[instrument(skip(self))]
    pub async fn restock_material(&self, wrapping: WrappingType) -> Result<(), PackagingError> {
        match self.call(PackagingAction::RestockMaterial(wrapping)).await? {
            PackagingActionResult::MaterialRestocked => Ok(()),
            _ => Err(PackagingError::UnexpectedReply("restock_material")),
        }
    }
}
