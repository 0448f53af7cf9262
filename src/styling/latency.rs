//! # Latency Simulator
//!
//! Every downstream call the orchestrator makes is preceded by a simulated network hop:
//! a pause of `base + uniform(0..=jitter)`. The delay source is injected, so tests can run
//! with [`NoLatency`] and demos with a [`SeededLatency`] that is reproducible for a given seed.

use async_trait::async_trait;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Mutex, PoisonError};
use std::time::Duration;
use tokio::sync::Notify;

/// Shape of a single simulated hop.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HopProfile {
    pub base: Duration,
    pub jitter: Duration,
}

impl HopProfile {
    /// 20 ms plus up to 10 ms of jitter.
    pub const DEFAULT: HopProfile = HopProfile::from_millis(20, 10);

    pub const fn from_millis(base: u64, jitter: u64) -> Self {
        Self {
            base: Duration::from_millis(base),
            jitter: Duration::from_millis(jitter),
        }
    }
}

impl Default for HopProfile {
    fn default() -> Self {
        Self::DEFAULT
    }
}

/// The wait was cut short by [`SeededLatency::interrupt`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("latency wait interrupted")]
pub struct HopInterrupted;

/// Source of simulated network delay.
#[async_trait]
pub trait LatencySimulator: Send + Sync {
    /// Draws the delay for one hop without waiting.
    fn next_delay(&self, profile: HopProfile) -> Duration;

    /// Draws a delay and waits for it. Returns the time waited.
    async fn simulate_hop(&self, profile: HopProfile) -> Result<Duration, HopInterrupted>;
}

/// Seeded pseudo-random delays.
///
/// The generator sits behind a mutex, so concurrent requests draw from it one at a time.
/// Sequential requests see the same delays for the same seed; interleaved ones do not.
#[derive(Debug)]
pub struct SeededLatency {
    rng: Mutex<StdRng>,
    interrupted: AtomicBool,
    wake: Notify,
}

impl SeededLatency {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: Mutex::new(StdRng::seed_from_u64(seed)),
            interrupted: AtomicBool::new(false),
            wake: Notify::new(),
        }
    }

    /// Fails every pending wait, and every later one, with [`HopInterrupted`].
    pub fn interrupt(&self) {
        self.interrupted.store(true, Ordering::SeqCst);
        self.wake.notify_waiters();
    }

    pub fn is_interrupted(&self) -> bool {
        self.interrupted.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl LatencySimulator for SeededLatency {
    fn next_delay(&self, profile: HopProfile) -> Duration {
        let jitter_ms = profile.jitter.as_millis() as u64;
        if jitter_ms == 0 {
            return profile.base;
        }
        let extra = self
            .rng
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .gen_range(0..=jitter_ms);
        profile.base + Duration::from_millis(extra)
    }

    async fn simulate_hop(&self, profile: HopProfile) -> Result<Duration, HopInterrupted> {
        // Register for the wake-up before checking the flag so an interrupt in between is not lost.
        let woken = self.wake.notified();
        if self.is_interrupted() {
            return Err(HopInterrupted);
        }
        let delay = self.next_delay(profile);
        tokio::select! {
            _ = tokio::time::sleep(delay) => Ok(delay),
            _ = woken => Err(HopInterrupted),
        }
    }
}

/// No delay at all.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoLatency;

#[async_trait]
impl LatencySimulator for NoLatency {
    fn next_delay(&self, _profile: HopProfile) -> Duration {
        Duration::ZERO
    }

    async fn simulate_hop(&self, _profile: HopProfile) -> Result<Duration, HopInterrupted> {
        Ok(Duration::ZERO)
    }
}
