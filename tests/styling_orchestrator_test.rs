use beachshirts_styling::clients::{PackagingClient, PrintingClient};
use async_trait::async_trait;
use beachshirts_styling::framework::mock::{CallJournal, MockClient, RecordedCall};
use beachshirts_styling::framework::FrameworkError;
use beachshirts_styling::model::{Color, Shirt, StyleDescriptor, WrappingType};
use beachshirts_styling::packaging_actor::{
    PackagingActionResult, PackagingError, PackagingService, WrapKind, WrapReceipt,
};
use beachshirts_styling::printing_actor::{
    PrintingActionResult, PrintingError, PrintingService, ShirtStream,
};
use beachshirts_styling::styling::{
    Catalog, Collaborator, FailureCause, HopInterrupted, HopProfile, LatencySimulator,
    NoLatency, Operation, StylingOrchestrator, GIFT_WRAP_THRESHOLD,
};
use std::sync::Arc;
use std::time::Duration;

/// Zero-delay latency that writes `latency.hop` into the journal for every hop.
struct JournaledHops {
    journal: CallJournal,
}

#[async_trait]
impl LatencySimulator for JournaledHops {
    fn next_delay(&self, _profile: HopProfile) -> Duration {
        Duration::ZERO
    }

    async fn simulate_hop(&self, _profile: HopProfile) -> Result<Duration, HopInterrupted> {
        self.journal.record(RecordedCall {
            service: "latency",
            operation: "hop",
        });
        Ok(Duration::ZERO)
    }
}

const HOP: &str = "latency.hop";

/// Orchestrator wired to two mocks that share one call journal.
///
/// Pattern: Orchestrator + Mocks
/// - Real orchestrator (tests sequencing, routing and error mapping)
/// - Mocked printing and packaging (scripted replies, recorded call order)
struct Harness {
    journal: CallJournal,
    printing: MockClient<PrintingService>,
    packaging: MockClient<PackagingService>,
}

impl Harness {
    fn new() -> Self {
        let journal = CallJournal::default();
        Self {
            printing: MockClient::with_journal("printing", journal.clone()),
            packaging: MockClient::with_journal("packaging", journal.clone()),
            journal,
        }
    }

    fn orchestrator(&self) -> StylingOrchestrator {
        StylingOrchestrator::new(
            PrintingClient::new(self.printing.client()),
            PackagingClient::new(self.packaging.client()),
            Catalog::seeded(),
            Arc::new(NoLatency),
        )
    }

    /// Same wiring, but every hop shows up in the journal.
    fn orchestrator_with_journaled_hops(&self) -> StylingOrchestrator {
        StylingOrchestrator::new(
            PrintingClient::new(self.printing.client()),
            PackagingClient::new(self.packaging.client()),
            Catalog::seeded(),
            Arc::new(JournaledHops {
                journal: self.journal.clone(),
            }),
        )
    }

    fn verify(&self) {
        self.printing.verify();
        self.packaging.verify();
    }
}

fn printed(style_id: &str, quantity: u32) -> PrintingActionResult {
    let shirts = vec![Shirt::new(StyleDescriptor::from_style_id(style_id)); quantity as usize];
    PrintingActionResult::Shirts(ShirtStream::from_shirts(shirts))
}

fn receipt(kind: WrapKind, count: u32) -> WrapReceipt {
    WrapReceipt { kind, count }
}

fn unreachable_printer() -> FrameworkError {
    FrameworkError::service(PrintingError::ActorCommunicationError(
        "connection refused".into(),
    ))
}

// =============================================================================
// make_shirts
// =============================================================================

#[tokio::test]
async fn test_small_order_is_wrapped() {
    let mut harness = Harness::new();
    harness.printing.expect("print_shirts").return_ok(printed("style1", 5));
    harness
        .packaging
        .expect("wrap_shirts")
        .return_ok(PackagingActionResult::Wrapped(receipt(WrapKind::Standard, 5)));

    let packed = harness.orchestrator().make_shirts("style1", 5).await.unwrap();

    assert_eq!(packed.len(), 5);
    for shirt in &packed.shirts {
        assert_eq!(shirt.style.name, "style1");
        assert_eq!(shirt.style.image_url, "style1Image");
    }
    assert_eq!(
        harness.journal.operations(),
        vec!["printing.print_shirts", "packaging.wrap_shirts"]
    );
    harness.verify();
}

#[tokio::test]
async fn test_threshold_order_is_gift_wrapped() {
    let mut harness = Harness::new();
    harness.printing.expect("print_shirts").return_ok(printed("style2", 30));
    harness
        .packaging
        .expect("gift_wrap")
        .return_ok(PackagingActionResult::GiftWrapped(receipt(WrapKind::Gift, 30)));

    let packed = harness.orchestrator().make_shirts("style2", 30).await.unwrap();

    assert_eq!(packed.len(), 30);
    assert!(packed.shirts.iter().all(|s| s.style.image_url == "style2Image"));
    assert_eq!(harness.packaging.received(), vec!["gift_wrap"]);
    harness.verify();
}

#[tokio::test]
async fn test_routing_boundary_holds_for_all_sampled_quantities() {
    for quantity in [0, 1, 15, GIFT_WRAP_THRESHOLD - 1, GIFT_WRAP_THRESHOLD, GIFT_WRAP_THRESHOLD + 1, 250] {
        let mut harness = Harness::new();
        harness
            .printing
            .expect("print_shirts")
            .return_ok(printed("style1", quantity));
        let expected_packaging = if quantity < GIFT_WRAP_THRESHOLD {
            harness
                .packaging
                .expect("wrap_shirts")
                .return_ok(PackagingActionResult::Wrapped(receipt(WrapKind::Standard, quantity)));
            "wrap_shirts"
        } else {
            harness
                .packaging
                .expect("gift_wrap")
                .return_ok(PackagingActionResult::GiftWrapped(receipt(WrapKind::Gift, quantity)));
            "gift_wrap"
        };

        let packed = harness
            .orchestrator()
            .make_shirts("style1", quantity)
            .await
            .unwrap();

        assert_eq!(packed.len(), quantity as usize, "quantity {quantity}");
        assert_eq!(harness.packaging.received(), vec![expected_packaging], "quantity {quantity}");
        harness.verify();
    }
}

#[tokio::test]
async fn test_result_ignores_packaging_receipt() {
    let mut harness = Harness::new();
    harness.printing.expect("print_shirts").return_ok(printed("linen", 7));
    // A receipt that disagrees with the order in both kind and count
    harness
        .packaging
        .expect("wrap_shirts")
        .return_ok(PackagingActionResult::Wrapped(receipt(WrapKind::Gift, 0)));

    let packed = harness.orchestrator().make_shirts("linen", 7).await.unwrap();

    assert_eq!(packed.len(), 7);
    assert!(packed
        .shirts
        .iter()
        .all(|s| s.style == StyleDescriptor::new("linen", "linenImage")));
    harness.verify();
}

#[tokio::test]
async fn test_style_is_taken_from_input_not_catalog() {
    let mut harness = Harness::new();
    harness.printing.expect("print_shirts").return_ok(printed("unknown", 1));
    harness
        .packaging
        .expect("wrap_shirts")
        .return_ok(PackagingActionResult::Wrapped(receipt(WrapKind::Standard, 1)));

    let orchestrator = harness.orchestrator();
    assert!(orchestrator.catalog().styles().iter().all(|s| s.name != "unknown"));

    let packed = orchestrator.make_shirts("unknown", 1).await.unwrap();
    assert_eq!(packed.shirts[0].style.image_url, "unknownImage");
    harness.verify();
}

#[tokio::test]
async fn test_print_failure_never_contacts_packaging() {
    let mut harness = Harness::new();
    harness
        .printing
        .expect("print_shirts")
        .return_err(unreachable_printer());

    let err = harness.orchestrator().make_shirts("style1", 5).await.unwrap_err();

    assert_eq!(err.operation, Operation::MakeShirts);
    assert_eq!(err.cause.collaborator(), Some(Collaborator::Printing));
    assert!(err.to_string().contains("connection refused"));
    assert_eq!(harness.journal.count_for("packaging"), 0);
    harness.verify();
}

#[tokio::test]
async fn test_packaging_failure_fails_whole_order() {
    let mut harness = Harness::new();
    harness.printing.expect("print_shirts").return_ok(printed("style1", 40));
    harness
        .packaging
        .expect("gift_wrap")
        .return_err(FrameworkError::service(PackagingError::InsufficientMaterial {
            needed: 40,
            available: 3,
        }));

    let err = harness.orchestrator().make_shirts("style1", 40).await.unwrap_err();

    assert_eq!(err.operation, Operation::MakeShirts);
    assert_eq!(
        err.cause,
        FailureCause::CollaboratorUnavailable {
            collaborator: Collaborator::Packaging,
            message: "Insufficient material: need 40, available 3".into(),
        }
    );
    harness.verify();
}

#[tokio::test]
async fn test_print_run_breaking_mid_stream_is_a_printing_failure() {
    let mut harness = Harness::new();
    let shirts = vec![Shirt::new(StyleDescriptor::from_style_id("style1")); 3];
    let stream = ShirtStream::failing_after(
        shirts,
        8,
        PrintingError::OutOfInk { requested: 8, printed: 3 },
    );
    harness
        .printing
        .expect("print_shirts")
        .return_ok(PrintingActionResult::Shirts(stream));
    // What the packaging service answers after draining a broken stream
    harness
        .packaging
        .expect("wrap_shirts")
        .return_err(FrameworkError::service(PackagingError::StreamFailed(
            PrintingError::OutOfInk { requested: 8, printed: 3 },
        )));

    let err = harness.orchestrator().make_shirts("style1", 8).await.unwrap_err();

    assert_eq!(err.operation, Operation::MakeShirts);
    assert_eq!(
        err.cause,
        FailureCause::CollaboratorUnavailable {
            collaborator: Collaborator::Printing,
            message: "Out of ink: requested 8, printed 3".into(),
        }
    );
    harness.verify();
}

// =============================================================================
// list_styles
// =============================================================================

#[tokio::test]
async fn test_list_styles_returns_seeded_catalog_after_health_checks() {
    let mut harness = Harness::new();
    harness
        .printing
        .expect("list_colors")
        .return_ok(PrintingActionResult::Colors(vec![Color::new("rgb")]));
    harness
        .packaging
        .expect("list_packing_types")
        .return_ok(PackagingActionResult::PackingTypes(vec![WrappingType::new("wrap")]));

    let styles = harness.orchestrator().list_styles().await.unwrap();

    assert_eq!(
        styles,
        vec![
            StyleDescriptor::new("style1", "style1Image"),
            StyleDescriptor::new("style2", "style2Image"),
        ]
    );
    assert_eq!(
        harness.journal.operations(),
        vec!["printing.list_colors", "packaging.list_packing_types"]
    );
    harness.verify();
}

#[tokio::test]
async fn test_list_styles_fails_when_printing_is_down() {
    let mut harness = Harness::new();
    harness.printing.expect("list_colors").return_err(FrameworkError::ActorClosed);

    let err = harness.orchestrator().list_styles().await.unwrap_err();

    assert_eq!(err.operation, Operation::ListStyles);
    assert_eq!(err.cause.collaborator(), Some(Collaborator::Printing));
    assert_eq!(harness.journal.count_for("packaging"), 0);
    harness.verify();
}

#[tokio::test]
async fn test_list_styles_fails_when_packaging_is_down() {
    let mut harness = Harness::new();
    harness
        .printing
        .expect("list_colors")
        .return_ok(PrintingActionResult::Colors(Vec::new()));
    harness
        .packaging
        .expect("list_packing_types")
        .return_err(FrameworkError::ActorDropped);

    let err = harness.orchestrator().list_styles().await.unwrap_err();

    assert_eq!(err.operation, Operation::ListStyles);
    assert_eq!(err.cause.collaborator(), Some(Collaborator::Packaging));
    harness.verify();
}

// =============================================================================
// add_style / restock_style
// =============================================================================

#[tokio::test]
async fn test_add_style_makes_exactly_one_printing_call() {
    let mut harness = Harness::new();
    harness
        .printing
        .expect("add_color")
        .return_ok(PrintingActionResult::ColorAdded);

    harness.orchestrator().add_style("x").await.unwrap();

    assert_eq!(harness.journal.operations(), vec!["printing.add_color"]);
    harness.verify();
}

#[tokio::test]
async fn test_add_style_failure_is_uniform() {
    let mut harness = Harness::new();
    harness.printing.expect("add_color").return_err(unreachable_printer());

    let err = harness.orchestrator().add_style("x").await.unwrap_err();

    assert_eq!(err.operation, Operation::AddStyle);
    assert!(err.to_string().starts_with("add_style failed: printing collaborator unavailable"));
    harness.verify();
}

#[tokio::test]
async fn test_restock_style_restocks_color_then_material() {
    let mut harness = Harness::new();
    harness
        .printing
        .expect("restock_color")
        .return_ok(PrintingActionResult::ColorRestocked);
    harness
        .packaging
        .expect("restock_material")
        .return_ok(PackagingActionResult::MaterialRestocked);

    harness.orchestrator().restock_style("style1").await.unwrap();

    assert_eq!(
        harness.journal.operations(),
        vec!["printing.restock_color", "packaging.restock_material"]
    );
    harness.verify();
}

#[tokio::test]
async fn test_restock_style_stops_after_printing_failure() {
    let mut harness = Harness::new();
    harness
        .printing
        .expect("restock_color")
        .return_err(FrameworkError::service(PrintingError::UnknownColor("rgb".into())));

    let err = harness.orchestrator().restock_style("style1").await.unwrap_err();

    assert_eq!(err.operation, Operation::RestockStyle);
    assert_eq!(harness.journal.count_for("packaging"), 0);
    harness.verify();
}

// =============================================================================
// Hop placement
// =============================================================================

#[tokio::test]
async fn test_list_styles_hops_before_each_call_and_before_returning() {
    let mut harness = Harness::new();
    harness
        .printing
        .expect("list_colors")
        .return_ok(PrintingActionResult::Colors(Vec::new()));
    harness
        .packaging
        .expect("list_packing_types")
        .return_ok(PackagingActionResult::PackingTypes(Vec::new()));

    harness.orchestrator_with_journaled_hops().list_styles().await.unwrap();

    assert_eq!(
        harness.journal.operations(),
        vec![HOP, "printing.list_colors", HOP, "packaging.list_packing_types", HOP]
    );
    harness.verify();
}

#[tokio::test]
async fn test_make_shirts_hops_before_each_call_and_before_returning() {
    for (quantity, packaging_call) in [(5, "packaging.wrap_shirts"), (30, "packaging.gift_wrap")] {
        let mut harness = Harness::new();
        harness
            .printing
            .expect("print_shirts")
            .return_ok(printed("style1", quantity));
        if quantity < GIFT_WRAP_THRESHOLD {
            harness
                .packaging
                .expect("wrap_shirts")
                .return_ok(PackagingActionResult::Wrapped(receipt(WrapKind::Standard, quantity)));
        } else {
            harness
                .packaging
                .expect("gift_wrap")
                .return_ok(PackagingActionResult::GiftWrapped(receipt(WrapKind::Gift, quantity)));
        }

        harness
            .orchestrator_with_journaled_hops()
            .make_shirts("style1", quantity)
            .await
            .unwrap();

        assert_eq!(
            harness.journal.operations(),
            vec![HOP, "printing.print_shirts", HOP, packaging_call, HOP],
            "quantity {quantity}"
        );
        harness.verify();
    }
}

#[tokio::test]
async fn test_add_style_hops_before_and_after_its_call() {
    let mut harness = Harness::new();
    harness
        .printing
        .expect("add_color")
        .return_ok(PrintingActionResult::ColorAdded);

    harness.orchestrator_with_journaled_hops().add_style("x").await.unwrap();

    assert_eq!(harness.journal.operations(), vec![HOP, "printing.add_color", HOP]);
    harness.verify();
}

#[tokio::test]
async fn test_restock_style_hops_only_before_each_call() {
    let mut harness = Harness::new();
    harness
        .printing
        .expect("restock_color")
        .return_ok(PrintingActionResult::ColorRestocked);
    harness
        .packaging
        .expect("restock_material")
        .return_ok(PackagingActionResult::MaterialRestocked);

    harness
        .orchestrator_with_journaled_hops()
        .restock_style("style1")
        .await
        .unwrap();

    assert_eq!(
        harness.journal.operations(),
        vec![HOP, "printing.restock_color", HOP, "packaging.restock_material"]
    );
    harness.verify();
}

#[tokio::test]
async fn test_failed_call_ends_the_hop_sequence() {
    let mut harness = Harness::new();
    harness
        .printing
        .expect("print_shirts")
        .return_err(unreachable_printer());

    harness
        .orchestrator_with_journaled_hops()
        .make_shirts("style1", 5)
        .await
        .unwrap_err();

    assert_eq!(harness.journal.operations(), vec![HOP, "printing.print_shirts"]);
    harness.verify();
}
