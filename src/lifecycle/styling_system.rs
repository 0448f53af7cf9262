use crate::clients::{PackagingClient, PrintingClient};
use crate::styling::{Catalog, SeededLatency, StylingOrchestrator};
use super::config::StylingConfig;
use std::sync::Arc;
use thiserror::Error;
use tokio::task::JoinHandle;
use tracing::{error, info};

#[derive(Debug, Error)]
pub enum SystemError {
    #[error("Actor task failed: {0}")]
    ActorTaskFailed(String),
}

/// The running styling system: both collaborator actors plus the orchestrator in front of them.
///
/// `StylingSystem` is responsible for:
/// - **Lifecycle Management**: Starting and stopping the printing and packaging actors
/// - **Dependency Wiring**: Handing their clients and the latency simulator to the orchestrator
///
/// # Example
///
/// ```ignore
/// let system = StylingSystem::new(&StylingConfig::default());
///
/// let styles = system.orchestrator.list_styles().await?;
/// let packed = system.orchestrator.make_shirts("style1", 12).await?;
///
/// system.shutdown().await?;
/// ```
pub struct StylingSystem {
    /// Entry point for all inbound operations. Clone it per request task.
    pub orchestrator: StylingOrchestrator,

    latency: Arc<SeededLatency>,

    /// Task handles for the running actors (used for graceful shutdown)
    handles: Vec<JoinHandle<()>>,
}

impl StylingSystem {
    /// Spawns both actors and builds the orchestrator. Must be called inside a Tokio runtime.
    pub fn new(config: &StylingConfig) -> Self {
        let (printing_actor, printing_client) = crate::printing_actor::new(&config.printing);
        let (packaging_actor, packaging_client) = crate::packaging_actor::new(&config.packaging);

        // Neither collaborator depends on another (Context = ())
        let printing_handle = tokio::spawn(printing_actor.run(()));
        let packaging_handle = tokio::spawn(packaging_actor.run(()));

        let latency = Arc::new(SeededLatency::new(config.latency.seed));
        let orchestrator = StylingOrchestrator::new(
            PrintingClient::new(printing_client),
            PackagingClient::new(packaging_client),
            Catalog::seeded(),
            latency.clone(),
        )
        .with_hop_profile(config.latency.hop_profile());

        info!(seed = config.latency.seed, "Styling system started");
        Self {
            orchestrator,
            latency,
            handles: vec![printing_handle, packaging_handle],
        }
    }

    /// Gracefully shuts down the system.
    ///
    /// 1. Interrupts every pending latency wait; in-flight operations fail with an
    ///    interrupted wait instead of finishing
    /// 2. Drops the orchestrator, which closes the actor mailboxes
    /// 3. Waits for the actor tasks and reports one that panicked
    ///
    /// Actors stop only once every clone of the orchestrator is gone, so request tasks holding
    /// clones must finish first.
    pub async fn shutdown(self) -> Result<(), SystemError> {
        info!("Shutting down system...");

        self.latency.interrupt();
        drop(self.orchestrator);

        for handle in self.handles {
            if let Err(e) = handle.await {
                error!("Actor task failed: {:?}", e);
                return Err(SystemError::ActorTaskFailed(e.to_string()));
            }
        }

        info!("System shutdown complete.");
        Ok(())
    }
}
