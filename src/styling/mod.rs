//! Styling orchestrator and its supporting pieces.
//!
//! - [`StylingOrchestrator`] - The four inbound operations
//! - [`Catalog`] - Fixed style catalog served by `list_styles`
//! - [`LatencySimulator`] - Simulated network delay before every downstream call
//! - [`WrapRoute`] - Quantity based choice between standard and gift wrapping
//! - [`OrchestrationError`] - The only failure callers see

pub mod catalog;
pub mod error;
pub mod latency;
pub mod orchestrator;
pub mod policy;

pub use catalog::{Catalog, SEED_STYLES};
pub use error::{Collaborator, FailureCause, Operation, OrchestrationError};
pub use latency::{HopInterrupted, HopProfile, LatencySimulator, NoLatency, SeededLatency};
pub use orchestrator::StylingOrchestrator;
pub use policy::{WrapRoute, GIFT_WRAP_THRESHOLD, PLACEHOLDER_COLOR, PLACEHOLDER_WRAPPING_TYPE};
