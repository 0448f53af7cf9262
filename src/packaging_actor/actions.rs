//! Actions accepted by the Packaging actor.

use crate::framework::NamedOperation;
use crate::model::WrappingType;
use crate::printing_actor::ShirtStream;
use serde::{Deserialize, Serialize};

/// Shirts handed over for wrapping. Owns the stream, so it can only be wrapped once.
#[derive(Debug)]
pub struct WrapRequest {
    pub shirts: ShirtStream,
}

/// Which wrapping line handled an order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum WrapKind {
    Standard,
    Gift,
}

/// What the packaging service reports after wrapping.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WrapReceipt {
    pub kind: WrapKind,
    pub count: u32,
}

/// Operations the packaging service supports.
#[derive(Debug)]
pub enum PackagingAction {
    /// Lists the packing types on offer.
    ListPackingTypes,
    /// Standard wrapping. Drains the stream fully.
    Wrap(WrapRequest),
    /// Premium wrapping. Drains the stream fully.
    GiftWrap(WrapRequest),
    /// Refills wrapping material.
    ///
    /// # Errors
    /// Fails if the wrapping type is not a known packing type.
    RestockMaterial(WrappingType),
}

impl NamedOperation for PackagingAction {
    fn operation(&self) -> &'static str {
        match self {
            PackagingAction::ListPackingTypes => "list_packing_types",
            PackagingAction::Wrap(_) => "wrap_shirts",
            PackagingAction::GiftWrap(_) => "gift_wrap",
            PackagingAction::RestockMaterial(_) => "restock_material",
        }
    }
}

/// Results from PackagingActions - variants match 1:1 with PackagingAction
#[derive(Debug, Clone, PartialEq)]
pub enum PackagingActionResult {
    PackingTypes(Vec<WrappingType>),
    Wrapped(WrapReceipt),
    GiftWrapped(WrapReceipt),
    MaterialRestocked,
}
