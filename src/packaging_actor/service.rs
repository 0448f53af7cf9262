//! [`ServiceHandler`] implementation for the packaging service.

use super::actions::{PackagingAction, PackagingActionResult, WrapKind, WrapReceipt, WrapRequest};
use super::error::PackagingError;
use super::PackagingConfig;
use crate::framework::ServiceHandler;
use crate::model::WrappingType;
use async_trait::async_trait;
use tracing::{debug, info};

/// Packing types every packaging line offers.
pub const PACKING_TYPES: &[&str] = &["wrap", "giftWrap"];

/// In-memory packaging line with one shared material reservoir.
#[derive(Debug)]
pub struct PackagingService {
    packing_types: Vec<WrappingType>,
    material: u32,
    material_capacity: u32,
}

impl PackagingService {
    pub fn new(config: &PackagingConfig) -> Self {
        Self {
            packing_types: PACKING_TYPES.iter().map(|t| WrappingType::new(*t)).collect(),
            material: config.material_capacity,
            material_capacity: config.material_capacity,
        }
    }

    pub fn material(&self) -> u32 {
        self.material
    }

    /// Drains the whole stream before touching material, so a failed stream consumes nothing.
    async fn wrap(&mut self, request: WrapRequest, kind: WrapKind) -> Result<WrapReceipt, PackagingError> {
        let expected = request.shirts.expected();
        let count = request.shirts.drain().await?;
        debug!(?kind, expected, count, "Stream drained");

        if count > self.material {
            return Err(PackagingError::InsufficientMaterial {
                needed: count,
                available: self.material,
            });
        }
        self.material -= count;
        Ok(WrapReceipt { kind, count })
    }
}

#[async_trait]
impl ServiceHandler for PackagingService {
    type Action = PackagingAction;
    type ActionResult = PackagingActionResult;
    type Context = ();
    type Error = PackagingError;

    async fn on_start(&mut self, _ctx: &Self::Context) -> Result<(), PackagingError> {
        info!(packing_types = ?self.packing_types, material = self.material, "Packaging line ready");
        Ok(())
    }

    async fn handle_action(
        &mut self,
        action: PackagingAction,
        _ctx: &Self::Context,
    ) -> Result<PackagingActionResult, PackagingError> {
        match action {
            PackagingAction::ListPackingTypes => {
                Ok(PackagingActionResult::PackingTypes(self.packing_types.clone()))
            }
            PackagingAction::Wrap(request) => self
                .wrap(request, WrapKind::Standard)
                .await
                .map(PackagingActionResult::Wrapped),
            PackagingAction::GiftWrap(request) => self
                .wrap(request, WrapKind::Gift)
                .await
                .map(PackagingActionResult::GiftWrapped),
            PackagingAction::RestockMaterial(wrapping) => {
                if !self.packing_types.contains(&wrapping) {
                    return Err(PackagingError::UnknownWrappingType(wrapping.0));
                }
                self.material = self.material_capacity;
                Ok(PackagingActionResult::MaterialRestocked)
            }
        }
    }
}
