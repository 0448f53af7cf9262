//! [`ServiceHandler`] implementation for the printing service.

use super::actions::{PrintRequest, PrintingAction, PrintingActionResult};
use super::error::PrintingError;
use super::stream::ShirtStream;
use super::PrintingConfig;
use crate::framework::ServiceHandler;
use crate::model::{Color, Shirt};
use async_trait::async_trait;
use std::sync::atomic::{AtomicU32, Ordering};
use std::sync::Arc;
use tokio::sync::mpsc;
use tracing::{debug, info, info_span, warn, Instrument};

/// Colors every printer knows about from the start.
pub const DEFAULT_COLORS: &[&str] = &["rgb"];

/// Ink level shared between the actor and its running print jobs.
///
/// Only the actor draws ink. Print jobs give back what they reserved but could not deliver,
/// never raising the level above capacity.
#[derive(Debug, Clone)]
struct InkReservoir {
    level: Arc<AtomicU32>,
    capacity: u32,
}

impl InkReservoir {
    fn full(capacity: u32) -> Self {
        Self {
            level: Arc::new(AtomicU32::new(capacity)),
            capacity,
        }
    }

    fn level(&self) -> u32 {
        self.level.load(Ordering::SeqCst)
    }

    /// Takes up to `wanted` units and returns how many were taken.
    fn reserve(&self, wanted: u32) -> u32 {
        let mut taken = 0;
        let _ = self
            .level
            .fetch_update(Ordering::SeqCst, Ordering::SeqCst, |level| {
                taken = wanted.min(level);
                Some(level - taken)
            });
        taken
    }

    fn give_back(&self, unused: u32) {
        let capacity = self.capacity;
        let _ = self
            .level
            .fetch_update(Ordering::SeqCst, Ordering::SeqCst, |level| {
                Some(level.saturating_add(unused).min(capacity))
            });
    }

    fn refill(&self) {
        self.level.store(self.capacity, Ordering::SeqCst);
    }
}

/// In-memory printer: registered colors and a single ink reservoir.
#[derive(Debug)]
pub struct PrintingService {
    colors: Vec<Color>,
    ink: InkReservoir,
    stream_capacity: usize,
}

impl PrintingService {
    pub fn new(config: &PrintingConfig) -> Self {
        Self {
            colors: DEFAULT_COLORS.iter().map(|c| Color::new(*c)).collect(),
            ink: InkReservoir::full(config.ink_capacity),
            stream_capacity: config.stream_capacity.max(1),
        }
    }

    pub fn ink(&self) -> u32 {
        self.ink.level()
    }

    /// Reserves ink for the request up front, then hands the actual printing to a producer
    /// task so the reply (and the actor) are not held up by the stream. If the consumer
    /// drops the stream early, the ink for shirts not yet handed over goes back.
    fn print_shirts(&mut self, request: PrintRequest) -> Result<ShirtStream, PrintingError> {
        let PrintRequest { style, quantity } = request;
        if style.name.is_empty() {
            return Err(PrintingError::InvalidStyle(style.name));
        }

        let reserved = self.ink.reserve(quantity);
        if reserved < quantity {
            warn!(requested = quantity, available = reserved, "Not enough ink for full run");
        }

        let (sender, receiver) = mpsc::channel(self.stream_capacity);
        let ink = self.ink.clone();
        let span = info_span!("print_run", style = %style.name, quantity);
        tokio::spawn(
            async move {
                for printed in 0..reserved {
                    if sender.send(Ok(Shirt::new(style.clone()))).await.is_err() {
                        let unused = reserved - printed;
                        ink.give_back(unused);
                        debug!(printed, returned = unused, "Consumer dropped the stream");
                        return;
                    }
                }
                if reserved < quantity {
                    let _ = sender
                        .send(Err(PrintingError::OutOfInk {
                            requested: quantity,
                            printed: reserved,
                        }))
                        .await;
                }
                debug!(printed = reserved, "Print run finished");
            }
            .instrument(span),
        );

        Ok(ShirtStream::new(receiver, quantity))
    }
}

#[async_trait]
impl ServiceHandler for PrintingService {
    type Action = PrintingAction;
    type ActionResult = PrintingActionResult;
    type Context = ();
    type Error = PrintingError;

    async fn on_start(&mut self, _ctx: &Self::Context) -> Result<(), PrintingError> {
        info!(colors = ?self.colors, ink = self.ink.level(), "Printer ready");
        Ok(())
    }

    async fn handle_action(
        &mut self,
        action: PrintingAction,
        _ctx: &Self::Context,
    ) -> Result<PrintingActionResult, PrintingError> {
        match action {
            PrintingAction::ListColors => Ok(PrintingActionResult::Colors(self.colors.clone())),
            PrintingAction::AddColor(color) => {
                if !self.colors.contains(&color) {
                    self.colors.push(color);
                }
                Ok(PrintingActionResult::ColorAdded)
            }
            PrintingAction::RestockColor(color) => {
                if !self.colors.contains(&color) {
                    return Err(PrintingError::UnknownColor(color.0));
                }
                self.ink.refill();
                Ok(PrintingActionResult::ColorRestocked)
            }
            PrintingAction::PrintShirts(request) => {
                self.print_shirts(request).map(PrintingActionResult::Shirts)
            }
        }
    }
}
