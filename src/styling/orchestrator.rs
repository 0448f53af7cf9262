//! # Styling Orchestrator
//!
//! Takes style and shirt orders and fulfils them by calling the printing and packaging
//! collaborators in a fixed order.
//!
//! | Operation | Downstream sequence (each call preceded by a hop) |
//! |-----------|---------------------------------------------------|
//! | `list_styles` | printing `list_colors`, packaging `list_packing_types`, hop, catalog |
//! | `make_shirts` | printing `print_shirts`, packaging `wrap_shirts` or `gift_wrap`, hop |
//! | `add_style` | printing `add_color`, hop |
//! | `restock_style` | printing `restock_color`, packaging `restock_material` |
//!
//! Calls are awaited one after the other; an operation never has two downstream calls in
//! flight. The first failure aborts the operation, is logged once, and is returned as an
//! [`OrchestrationError`]. There is no retry and no partial result.

use super::catalog::Catalog;
use super::error::{FailureCause, OrchestrationError, Operation};
use super::latency::{HopProfile, LatencySimulator};
use super::policy::{WrapRoute, PLACEHOLDER_COLOR, PLACEHOLDER_WRAPPING_TYPE};
use crate::clients::{PackagingClient, PrintingClient};
use crate::model::{Color, PackedShirts, StyleDescriptor, WrappingType};
use std::sync::Arc;
use tracing::{debug, info, instrument, warn};

/// Entry point for the four inbound operations.
///
/// Cheap to clone; each inbound request may run on its own task with its own clone.
#[derive(Clone)]
pub struct StylingOrchestrator {
    printing: PrintingClient,
    packaging: PackagingClient,
    catalog: Arc<Catalog>,
    latency: Arc<dyn LatencySimulator>,
    hop: HopProfile,
}

impl StylingOrchestrator {
    pub fn new(
        printing: PrintingClient,
        packaging: PackagingClient,
        catalog: Catalog,
        latency: Arc<dyn LatencySimulator>,
    ) -> Self {
        Self {
            printing,
            packaging,
            catalog: Arc::new(catalog),
            latency,
            hop: HopProfile::DEFAULT,
        }
    }

    /// Overrides the delay shape used for every hop.
    pub fn with_hop_profile(mut self, hop: HopProfile) -> Self {
        self.hop = hop;
        self
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// Lists the catalog after confirming both collaborators respond.
    ///
    /// The collaborator answers are discarded; they only serve as health checks.
    #[instrument(skip(self))]
    pub async fn list_styles(&self) -> Result<Vec<StyleDescriptor>, OrchestrationError> {
        self.try_list_styles()
            .await
            .map_err(|cause| failed(Operation::ListStyles, cause))
    }

    /// Prints `quantity` shirts of `style_id` and has them wrapped.
    ///
    /// Orders below [`GIFT_WRAP_THRESHOLD`](super::policy::GIFT_WRAP_THRESHOLD) go to standard
    /// wrapping, the rest to gift wrapping. The returned shirts are built from `style_id`
    /// itself, not looked up in the catalog, and always number exactly `quantity`.
    #[instrument(skip(self))]
    pub async fn make_shirts(
        &self,
        style_id: &str,
        quantity: u32,
    ) -> Result<PackedShirts, OrchestrationError> {
        self.try_make_shirts(style_id, quantity)
            .await
            .map_err(|cause| failed(Operation::MakeShirts, cause))
    }

    /// Registers the placeholder color with the printer. `id` is not sent downstream.
    #[instrument(skip(self))]
    pub async fn add_style(&self, id: &str) -> Result<(), OrchestrationError> {
        self.try_add_style()
            .await
            .map_err(|cause| failed(Operation::AddStyle, cause))
    }

    /// Restocks the placeholder color, then the placeholder wrapping material.
    #[instrument(skip(self))]
    pub async fn restock_style(&self, id: &str) -> Result<(), OrchestrationError> {
        self.try_restock_style()
            .await
            .map_err(|cause| failed(Operation::RestockStyle, cause))
    }

    async fn hop(&self) -> Result<(), FailureCause> {
        let waited = self.latency.simulate_hop(self.hop).await?;
        debug!(waited_ms = waited.as_millis() as u64, "Hop");
        Ok(())
    }

    async fn try_list_styles(&self) -> Result<Vec<StyleDescriptor>, FailureCause> {
        self.hop().await?;
        self.printing.list_colors().await?;
        self.hop().await?;
        self.packaging.list_packing_types().await?;
        self.hop().await?;
        Ok(self.catalog.styles().to_vec())
    }

    async fn try_make_shirts(
        &self,
        style_id: &str,
        quantity: u32,
    ) -> Result<PackedShirts, FailureCause> {
        let style = StyleDescriptor::from_style_id(style_id);

        self.hop().await?;
        let shirts = self.printing.print_shirts(style.clone(), quantity).await?;

        self.hop().await?;
        let route = WrapRoute::for_quantity(quantity);
        let receipt = match route {
            WrapRoute::Standard => self.packaging.wrap_shirts(shirts).await?,
            WrapRoute::Gift => self.packaging.gift_wrap(shirts).await?,
        };
        // The receipt's count is informational only.
        debug!(?route, ?receipt, "Packaging acknowledged");

        self.hop().await?;
        info!(quantity, ?route, "Shirts packed");
        Ok(PackedShirts::uniform(&style, quantity))
    }

    async fn try_add_style(&self) -> Result<(), FailureCause> {
        self.hop().await?;
        self.printing.add_color(Color::new(PLACEHOLDER_COLOR)).await?;
        self.hop().await?;
        Ok(())
    }

    async fn try_restock_style(&self) -> Result<(), FailureCause> {
        self.hop().await?;
        self.printing
            .restock_color(Color::new(PLACEHOLDER_COLOR))
            .await?;
        self.hop().await?;
        self.packaging
            .restock_material(WrappingType::new(PLACEHOLDER_WRAPPING_TYPE))
            .await?;
        Ok(())
    }
}

fn failed(operation: Operation, cause: FailureCause) -> OrchestrationError {
    warn!(%operation, error = %cause, "Operation failed");
    OrchestrationError { operation, cause }
}
