//! Error types for the styling orchestrator.
//!
//! Callers only ever see [`OrchestrationError`]. The [`FailureCause`] inside it exists for
//! logs and diagnostics; every cause is reported to the caller the same way.

use super::latency::HopInterrupted;
use crate::packaging_actor::PackagingError;
use crate::printing_actor::PrintingError;
use std::fmt::Display;
use thiserror::Error;

/// The four inbound operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    ListStyles,
    MakeShirts,
    AddStyle,
    RestockStyle,
}

impl Display for Operation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            Operation::ListStyles => "list_styles",
            Operation::MakeShirts => "make_shirts",
            Operation::AddStyle => "add_style",
            Operation::RestockStyle => "restock_style",
        })
    }
}

/// The downstream services.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Collaborator {
    Printing,
    Packaging,
}

impl Display for Collaborator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            Collaborator::Printing => "printing",
            Collaborator::Packaging => "packaging",
        })
    }
}

/// Why an operation was aborted.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FailureCause {
    /// A collaborator call did not complete.
    #[error("{collaborator} collaborator unavailable: {message}")]
    CollaboratorUnavailable {
        collaborator: Collaborator,
        message: String,
    },

    /// A simulated latency wait was interrupted.
    #[error("simulated latency wait interrupted")]
    InterruptedWait,
}

impl FailureCause {
    pub fn collaborator(&self) -> Option<Collaborator> {
        match self {
            FailureCause::CollaboratorUnavailable { collaborator, .. } => Some(*collaborator),
            FailureCause::InterruptedWait => None,
        }
    }
}

impl From<PrintingError> for FailureCause {
    fn from(e: PrintingError) -> Self {
        FailureCause::CollaboratorUnavailable {
            collaborator: Collaborator::Printing,
            message: e.to_string(),
        }
    }
}

impl From<PackagingError> for FailureCause {
    fn from(e: PackagingError) -> Self {
        match e {
            // The print run broke while packaging was reading it.
            PackagingError::StreamFailed(printing) => FailureCause::from(printing),
            other => FailureCause::CollaboratorUnavailable {
                collaborator: Collaborator::Packaging,
                message: other.to_string(),
            },
        }
    }
}

impl From<HopInterrupted> for FailureCause {
    fn from(_: HopInterrupted) -> Self {
        FailureCause::InterruptedWait
    }
}

/// The single failure signalled to callers of the orchestrator.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{operation} failed: {cause}")]
pub struct OrchestrationError {
    pub operation: Operation,
    #[source]
    pub cause: FailureCause,
}
