//! System wiring: configuration, tracing setup, and the start/stop of the running system.

pub mod config;
pub mod styling_system;
pub mod tracing;

pub use self::config::{LatencyConfig, StylingConfig};
pub use styling_system::{StylingSystem, SystemError};
pub use self::tracing::setup_tracing;
