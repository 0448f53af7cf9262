#![doc(html_logo_url = "https://www.rust-lang.org/logos/rust-logo-128x128.png")]
#![doc(html_favicon_url = "https://www.rust-lang.org/favicon.ico")]
//! # BeachShirts Styling
//!
//! > **The fulfillment front door of the BeachShirts shop.**
//!
//! This crate hosts the styling orchestrator: it lists the style catalog, takes shirt orders
//! and forwards catalog maintenance, by calling two collaborators, a printing service and a
//! packaging service. Both collaborators run as in-process actors on Tokio.
//!
//! ## 🏗️ Design Philosophy
//!
//! ### Orchestrator + Actors
//!
//! - **Orchestrator**: Stateless apart from the fixed catalog. Every inbound operation is a
//!   fixed, strictly sequential sequence of downstream calls.
//! - **Actors**: Each collaborator owns its state (colors and ink, packing types and material)
//!   and processes requests one at a time. No locks around service state.
//!
//! ### Lazy Shirt Streams
//! Printing does not return a finished batch. It returns a [`ShirtStream`](printing_actor::ShirtStream)
//! that a producer task fills while packaging drains it. The stream is moved, never cloned, so
//! exactly one packaging call consumes it, once.
//!
//! ### Simulated Latency
//! Every downstream call is preceded by a simulated network hop drawn from a seeded generator.
//! See [`styling::latency`].
//!
//! ## 👩‍💻 Architecture Notes
//!
//! ### 1. Type-Safe Error Handling
//! Each collaborator has its own error type (`PrintingError`, `PackagingError`). The orchestrator
//! logs the first failure once and turns it into the single
//! [`OrchestrationError`](styling::OrchestrationError) callers see.
//!
//! ### 2. Concurrency Model
//! The orchestrator is cloned per request and may serve any number of requests concurrently.
//! Inside one request, downstream calls never overlap.
//!
//! ### 3. Observability
//! `tracing` everywhere, with one span per inbound operation.
//! See the [`lifecycle::tracing`] module for details.
//!
//! ## 🗺️ Module Tour
//!
//! ### 1. The Engine ([`framework`])
//! The generic [`ServiceActor`](framework::ServiceActor) that hosts a collaborator, its
//! client, and the mocks used in tests.
//!
//! ### 2. The Orchestrator ([`styling`])
//! [`StylingOrchestrator`](styling::StylingOrchestrator) and the catalog, wrap routing and
//! latency pieces it is built from.
//!
//! ### 3. The Interface ([`clients`])
//! [`PrintingClient`](clients::PrintingClient) and [`PackagingClient`](clients::PackagingClient)
//! wrap the raw service clients in one method per collaborator operation.
//!
//! ### 4. The Collaborators ([`printing_actor`], [`packaging_actor`])
//! Simulated printing and packaging services.
//!
//! ### 5. Wiring ([`lifecycle`])
//! Configuration, tracing setup, and [`StylingSystem`](lifecycle::StylingSystem) start/stop.
//!
//! ## 🚀 Quick Start
//!
//! ```bash
//! # Run the demo with info logs
//! RUST_LOG=info cargo run
//!
//! # Reproducible delays with another seed
//! STYLING__LATENCY__SEED=7 cargo run
//! ```
//!
//! ### Running Tests
//!
//! ```bash
//! cargo test
//! ```

pub mod clients;
pub mod framework;
pub mod lifecycle;
pub mod model;
pub mod packaging_actor;
pub mod printing_actor;
pub mod styling;
