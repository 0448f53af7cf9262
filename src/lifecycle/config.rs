//! # Configuration
//!
//! Every setting has a default, so an empty configuration is valid. Sources are layered in
//! this order, later ones winning:
//!
//! 1. Built-in defaults
//! 2. An optional TOML file
//! 3. `STYLING__*` environment variables, e.g. `STYLING__LATENCY__SEED=7`
//!
//! ```toml
//! [latency]
//! base_ms = 20
//! jitter_ms = 10
//! seed = 0
//!
//! [printing]
//! mailbox_capacity = 32
//! stream_capacity = 8
//! ink_capacity = 1000
//!
//! [packaging]
//! mailbox_capacity = 32
//! material_capacity = 1000
//! ```

use crate::packaging_actor::PackagingConfig;
use crate::printing_actor::PrintingConfig;
use crate::styling::HopProfile;
use ::config::{Config, ConfigError, Environment, File, FileFormat};
use serde::Deserialize;
use std::path::Path;

const ENV_PREFIX: &str = "STYLING";

/// Simulated network delay.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct LatencyConfig {
    pub base_ms: u64,
    pub jitter_ms: u64,
    /// Seed for the delay generator.
    pub seed: u64,
}

impl LatencyConfig {
    pub fn hop_profile(&self) -> HopProfile {
        HopProfile::from_millis(self.base_ms, self.jitter_ms)
    }
}

impl Default for LatencyConfig {
    fn default() -> Self {
        Self {
            base_ms: 20,
            jitter_ms: 10,
            seed: 0,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct StylingConfig {
    pub latency: LatencyConfig,
    pub printing: PrintingConfig,
    pub packaging: PackagingConfig,
}

impl StylingConfig {
    /// Loads defaults, then `path` if it exists, then the environment.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        let mut builder = Config::builder();
        if let Some(path) = path {
            builder = builder.add_source(File::from(path).required(false));
        }
        builder
            .add_source(
                Environment::with_prefix(ENV_PREFIX)
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?
            .try_deserialize()
    }

    /// Parses inline TOML over the defaults. Environment variables are not consulted.
    pub fn from_toml(toml: &str) -> Result<Self, ConfigError> {
        Config::builder()
            .add_source(File::from_str(toml, FileFormat::Toml))
            .build()?
            .try_deserialize()
    }
}
