//! # Observability & Tracing
//!
//! [`setup_tracing`] installs a compact `tracing` subscriber for the whole system. The
//! crate/module prefix is hidden (`with_target(false)`); spans show the request path inline.
//!
//! ## Usage Examples
//!
//! ```bash
//! # Operation outcomes and actor lifecycle (default)
//! RUST_LOG=info cargo run
//!
//! # Every action payload and every simulated hop
//! RUST_LOG=debug cargo run
//!
//! # Only the orchestrator
//! RUST_LOG=beachshirts_styling::styling=debug cargo run
//! ```
//!
//! ## What Gets Traced
//!
//! - **Actor Lifecycle**: `Actor started` and `Shutdown` with the number of handled actions
//! - **Actions**: `Action` at debug with the payload, `Action ok` / `Action failed` afterwards
//! - **Orchestration**: one span per inbound operation, one `Operation failed` warning per failure
//!
//! A failing `make_shirts` at `info` looks like:
//!
//! ```text
//! WARN Action failed service_type="PrintingService" operation="print_shirts" error=Invalid style: ""
//! WARN make_shirts: Operation failed operation=make_shirts error=printing collaborator unavailable: Invalid style: "" style_id="" quantity=1
//! ```

use tracing_subscriber::EnvFilter;

/// Installs the global subscriber. Falls back to `info` when `RUST_LOG` is unset or invalid.
///
/// Panics if a global subscriber is already installed.
pub fn setup_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .compact()
        .init();
}
