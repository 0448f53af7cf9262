//! # Mock Framework
//!
//! Utilities for testing code that talks to services without spawning the real services.
//!
//! `MockClient<S>` hands out a real [`ServiceClient<S>`], but the requests are answered from a
//! queue of expectations instead of a running service. Several mocks can share one
//! [`CallJournal`], which records every request in arrival order across all of them. That is
//! what lets an orchestration test assert that one collaborator was contacted before another.
//!
//! ## When to use Mocks vs Real Actors
//!
//! | Feature | MockClient | Real Actor |
//! |---------|------------|------------|
//! | **Speed** | Instant (in-memory) | Fast (but involves tokio spawn) |
//! | **Determinism** | 100% Deterministic | Subject to scheduler |
//! | **Error Injection** | Easy (`return_err`) | Hard (requires specific state) |
//! | **Call Order** | Recorded in a shared journal | Only visible in logs |
//!
//! ## Example
//!
//! ```rust,ignore
//! let journal = CallJournal::default();
//! let mut printing = MockClient::<PrintingService>::with_journal("printing", journal.clone());
//! printing.expect("list_colors").return_ok(PrintingActionResult::Colors(vec![]));
//!
//! let client = PrintingClient::new(printing.client());
//! client.list_colors().await?;
//!
//! printing.verify();
//! assert_eq!(journal.operations(), vec!["printing.list_colors"]);
//! ```
//!
//! Use [`create_mock_client`] plus [`expect_action`] when a test needs to inspect the request
//! payload itself or answer it by hand.

use super::client::ServiceClient;
use super::error::FrameworkError;
use super::message::{Response, ServiceRequest};
use super::service::{NamedOperation, ServiceHandler};
use std::collections::VecDeque;
use std::sync::{Arc, Mutex};
use tokio::sync::mpsc;

// =============================================================================
// CALL JOURNAL
// =============================================================================

/// One request observed by a mock.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordedCall {
    pub service: &'static str,
    pub operation: &'static str,
}

/// Shared, ordered record of requests seen by any number of mocks.
#[derive(Debug, Clone, Default)]
pub struct CallJournal {
    calls: Arc<Mutex<Vec<RecordedCall>>>,
}

impl CallJournal {
    /// Appends a call. Mocks do this on every request; tests may record their own events
    /// to interleave them with the requests.
    pub fn record(&self, call: RecordedCall) {
        self.calls.lock().unwrap().push(call);
    }

    /// All calls recorded so far, in arrival order.
    pub fn calls(&self) -> Vec<RecordedCall> {
        self.calls.lock().unwrap().clone()
    }

    /// Calls formatted as `service.operation`.
    pub fn operations(&self) -> Vec<String> {
        self.calls()
            .iter()
            .map(|c| format!("{}.{}", c.service, c.operation))
            .collect()
    }

    /// Number of calls recorded for `service`.
    pub fn count_for(&self, service: &str) -> usize {
        self.calls().iter().filter(|c| c.service == service).count()
    }
}

// =============================================================================
// EXPECTATION BUILDER API
// =============================================================================

/// An expected request and the response it should receive.
struct Expectation<S: ServiceHandler> {
    operation: &'static str,
    response: Result<S::ActionResult, FrameworkError>,
}

type ExpectationQueue<S> = Arc<Mutex<VecDeque<Expectation<S>>>>;

/// A mock client with expectation tracking for fluent testing.
///
/// Requests must arrive in the order their expectations were queued. A request with no
/// matching expectation makes the mock's background task panic, which drops the reply
/// channel and surfaces as [`FrameworkError::ActorDropped`] at the call site.
pub struct MockClient<S: ServiceHandler> {
    client: ServiceClient<S>,
    expectations: ExpectationQueue<S>,
    received: Arc<Mutex<Vec<&'static str>>>,
    _handle: tokio::task::JoinHandle<()>,
}

impl<S: ServiceHandler> MockClient<S> {
    /// Creates a new mock client with no expectations and a private journal.
    pub fn new() -> Self {
        let service = std::any::type_name::<S>()
            .split("::")
            .last()
            .unwrap_or("Unknown");
        Self::with_journal(service, CallJournal::default())
    }

    /// Creates a mock that records every request under `service` in `journal`.
    pub fn with_journal(service: &'static str, journal: CallJournal) -> Self {
        let (sender, mut receiver) = mpsc::channel::<ServiceRequest<S>>(100);
        let expectations: ExpectationQueue<S> = Arc::new(Mutex::new(VecDeque::new()));
        let received = Arc::new(Mutex::new(Vec::new()));
        let expectations_clone = expectations.clone();
        let received_clone = received.clone();

        // Spawn background task to handle requests
        let handle = tokio::spawn(async move {
            while let Some(ServiceRequest { action, respond_to }) = receiver.recv().await {
                let operation = action.operation();
                journal.record(RecordedCall { service, operation });
                received_clone.lock().unwrap().push(operation);

                let expectation = expectations_clone.lock().unwrap().pop_front();
                match expectation {
                    Some(exp) if exp.operation == operation => {
                        let _ = respond_to.send(exp.response);
                    }
                    Some(exp) => panic!(
                        "{service}: expected `{}` but received `{operation}`",
                        exp.operation
                    ),
                    None => panic!("{service}: unexpected request `{operation}`"),
                }
            }
        });

        Self {
            client: ServiceClient::new(sender),
            expectations,
            received,
            _handle: handle,
        }
    }

    /// Returns the client for use in tests.
    pub fn client(&self) -> ServiceClient<S> {
        self.client.clone()
    }

    /// Expects the next request to be `operation`.
    pub fn expect(&mut self, operation: &'static str) -> ExpectationBuilder<S> {
        ExpectationBuilder {
            operation,
            expectations: self.expectations.clone(),
        }
    }

    /// Operations received so far, in order.
    pub fn received(&self) -> Vec<&'static str> {
        self.received.lock().unwrap().clone()
    }

    /// Verifies that all expectations were met.
    pub fn verify(&self) {
        let exps = self.expectations.lock().unwrap();
        if !exps.is_empty() {
            panic!("Not all expectations were met. {} remaining", exps.len());
        }
    }
}

impl<S: ServiceHandler> Default for MockClient<S> {
    fn default() -> Self {
        Self::new()
    }
}

/// Builder for a single expectation.
pub struct ExpectationBuilder<S: ServiceHandler> {
    operation: &'static str,
    expectations: ExpectationQueue<S>,
}

impl<S: ServiceHandler> ExpectationBuilder<S> {
    /// Sets the expectation to return a successful result.
    pub fn return_ok(self, result: S::ActionResult) {
        self.push(Ok(result));
    }

    /// Sets the expectation to return an error.
    pub fn return_err(self, error: FrameworkError) {
        self.push(Err(error));
    }

    fn push(self, response: Result<S::ActionResult, FrameworkError>) {
        self.expectations.lock().unwrap().push_back(Expectation {
            operation: self.operation,
            response,
        });
    }
}

// =============================================================================
// LOW-LEVEL HELPERS
// =============================================================================

/// Creates a client and the receiver its requests arrive on.
///
/// The test plays the actor: pull requests with [`expect_action`], assert on the payload,
/// then answer through the returned responder.
pub fn create_mock_client<S: ServiceHandler>(
    buffer_size: usize,
) -> (ServiceClient<S>, mpsc::Receiver<ServiceRequest<S>>) {
    let (sender, receiver) = mpsc::channel(buffer_size);
    (ServiceClient::new(sender), receiver)
}

/// Waits for the next request and splits it into the action and its responder.
pub async fn expect_action<S: ServiceHandler>(
    receiver: &mut mpsc::Receiver<ServiceRequest<S>>,
) -> Option<(S::Action, Response<S::ActionResult>)> {
    receiver
        .recv()
        .await
        .map(|ServiceRequest { action, respond_to }| (action, respond_to))
}
