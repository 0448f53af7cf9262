//! Pure data structures shared by the orchestrator and the collaborator services.

pub mod attributes;
pub mod shirt;
pub mod style;

pub use attributes::*;
pub use shirt::*;
pub use style::*;
