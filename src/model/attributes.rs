//! Opaque attributes passed through to the collaborators.

use serde::{Deserialize, Serialize};
use std::fmt::Display;

/// A print color understood by the printing service.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Color(pub String);

impl Color {
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }
}

impl Display for Color {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// A wrapping material understood by the packaging service.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct WrappingType(pub String);

impl WrappingType {
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }
}

impl Display for WrappingType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}
