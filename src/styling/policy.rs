//! Routing policy and the fixed attribute values the orchestrator sends downstream.

/// Orders of at least this many shirts are gift wrapped.
pub const GIFT_WRAP_THRESHOLD: u32 = 30;

/// Color sent to the printer when a style is added or restocked.
pub const PLACEHOLDER_COLOR: &str = "rgb";

/// Wrapping material restocked alongside a style.
pub const PLACEHOLDER_WRAPPING_TYPE: &str = "wrap";

/// Which packaging operation handles an order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WrapRoute {
    Standard,
    Gift,
}

impl WrapRoute {
    /// `quantity < GIFT_WRAP_THRESHOLD` is standard, anything else is gift.
    pub fn for_quantity(quantity: u32) -> Self {
        if quantity < GIFT_WRAP_THRESHOLD {
            WrapRoute::Standard
        } else {
            WrapRoute::Gift
        }
    }
}
