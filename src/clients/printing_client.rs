//! # Printing Client
//!
//! Adapter between the orchestrator and the printing collaborator. It wraps a
//! `ServiceClient<PrintingService>` and exposes one method per printing operation.
//! No retries: a failed call is returned to the caller as is.
use crate::clients::collaborator_client::CollaboratorClient;
use crate::framework::{FrameworkError, ServiceClient};
use crate::model::{Color, StyleDescriptor};
use crate::printing_actor::{
    PrintRequest, PrintingAction, PrintingActionResult, PrintingError, PrintingService, ShirtStream,
};
use async_trait::async_trait;
use tracing::{debug, instrument};

/// Client for interacting with the Printing actor.
#[derive(Clone)]
pub struct PrintingClient {
    inner: ServiceClient<PrintingService>,
}

impl PrintingClient {
    pub fn new(inner: ServiceClient<PrintingService>) -> Self {
        Self { inner }
    }
}

#[async_trait]
impl CollaboratorClient<PrintingService> for PrintingClient {
    type Error = PrintingError;

    fn inner(&self) -> &ServiceClient<PrintingService> {
        &self.inner
    }

    fn map_error(e: FrameworkError) -> Self::Error {
        match e {
            FrameworkError::ServiceError(inner) => match inner.downcast::<PrintingError>() {
                Ok(err) => *err,
                Err(other) => PrintingError::ActorCommunicationError(other.to_string()),
            },
            other => PrintingError::ActorCommunicationError(other.to_string()),
        }
    }
}

impl PrintingClient {
    /// Lists the colors the printer knows.
    #[instrument(skip(self))]
    pub async fn list_colors(&self) -> Result<Vec<Color>, PrintingError> {
        match self.call(PrintingAction::ListColors).await? {
            PrintingActionResult::Colors(colors) => Ok(colors),
            _ => Err(PrintingError::UnexpectedReply("list_colors")),
        }
    }

    #[instrument(skip(self))]
    pub async fn add_color(&self, color: Color) -> Result<(), PrintingError> {
        match self.call(PrintingAction::AddColor(color)).await? {
            PrintingActionResult::ColorAdded => Ok(()),
            _ => Err(PrintingError::UnexpectedReply("add_color")),
        }
    }

    #[instrument(skip(self))]
    pub async fn restock_color(&self, color: Color) -> Result<(), PrintingError> {
        match self.call(PrintingAction::RestockColor(color)).await? {
            PrintingActionResult::ColorRestocked => Ok(()),
            _ => Err(PrintingError::UnexpectedReply("restock_color")),
        }
    }

    /// Starts a print run and returns the lazy stream of shirts it produces.
    ///
    /// The stream yields `quantity` shirts unless printing fails part-way, in which case it
    /// ends with an error item.
    #[instrument(skip(self, style), fields(style = %style.name))]
    pub async fn print_shirts(
        &self,
        style: StyleDescriptor,
        quantity: u32,
    ) -> Result<ShirtStream, PrintingError> {
        debug!("Requesting print run");
        let request = PrintRequest { style, quantity };
        match self.call(PrintingAction::PrintShirts(request)).await? {
            PrintingActionResult::Shirts(stream) => Ok(stream),
            _ => Err(PrintingError::UnexpectedReply("print_shirts")),
        }
    }
}
