//! Type-safe adapters around [`ServiceClient`](crate::framework::ServiceClient) for each collaborator.

pub mod collaborator_client;
pub mod packaging_client;
pub mod printing_client;

pub use collaborator_client::*;
pub use packaging_client::*;
pub use printing_client::*;
