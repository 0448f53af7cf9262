//! # Packaging Actor
//!
//! The packaging collaborator: wraps streams of shirts on a standard or a gift line and
//! tracks wrapping material.
//!
//! Both wrapping actions take ownership of a [`ShirtStream`](crate::printing_actor::ShirtStream)
//! and drain it to the end before answering. A stream that fails part-way fails the wrap.

pub mod actions;
pub mod error;
pub mod service;

pub use actions::*;
pub use error::*;
pub use service::PackagingService;

use crate::framework::{ServiceActor, ServiceClient};
use serde::Deserialize;

/// Packaging service tuning.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct PackagingConfig {
    /// Mailbox capacity of the actor.
    pub mailbox_capacity: usize,
    /// Material units; one unit wraps one shirt.
    pub material_capacity: u32,
}

impl Default for PackagingConfig {
    fn default() -> Self {
        Self {
            mailbox_capacity: 32,
            material_capacity: 1000,
        }
    }
}

/// Creates a new Packaging actor and its client.
pub fn new(config: &PackagingConfig) -> (ServiceActor<PackagingService>, ServiceClient<PackagingService>) {
    ServiceActor::new(PackagingService::new(config), config.mailbox_capacity.max(1))
}
