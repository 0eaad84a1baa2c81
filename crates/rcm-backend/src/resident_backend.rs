//! Resident backend abstraction.
//!
//! The view-state manager stays the single owner of the collection; a
//! backend only acknowledges mutations and serves the initial read. The
//! simulated implementation stands in for a real server with a fixed
//! latency, so the same screen coordinator works against either. In-flight
//! calls always complete and apply; there is no cancellation or timeout
//! path.

use std::time::Duration;

use tokio::time::sleep;

use rcm_model::{Resident, ResidentDraft};

use crate::error::{BackendError, Result};

/// Asynchronous resident persistence.
pub trait ResidentBackend: Send + Sync {
    /// Initial read of the resident collection.
    fn fetch_all(&self) -> impl Future<Output = Result<Vec<Resident>>> + Send;

    /// Acknowledge a create. The caller applies the record locally after
    /// this resolves.
    fn create(&self, draft: &ResidentDraft) -> impl Future<Output = Result<()>> + Send;

    /// Acknowledge a full-record replace.
    fn update(&self, id: u64, draft: &ResidentDraft) -> impl Future<Output = Result<()>> + Send;

    /// Acknowledge a delete.
    fn delete(&self, id: u64) -> impl Future<Output = Result<()>> + Send;
}

/// Default simulated latency.
pub const SIMULATED_LATENCY: Duration = Duration::from_millis(300);

/// In-memory backend with a fixed simulated latency.
pub struct SimulatedBackend {
    seed: Vec<Resident>,
    latency: Duration,
    fail_reads: bool,
}

impl SimulatedBackend {
    pub fn new(seed: Vec<Resident>) -> Self {
        Self {
            seed,
            latency: SIMULATED_LATENCY,
            fail_reads: false,
        }
    }

    /// Overrides the simulated latency; tests pass `Duration::ZERO`.
    pub fn with_latency(mut self, latency: Duration) -> Self {
        self.latency = latency;
        self
    }

    /// Makes every read fail with a transient error. Exercises the
    /// failed-initial-fetch path.
    pub fn failing_reads(mut self) -> Self {
        self.fail_reads = true;
        self
    }
}

impl ResidentBackend for SimulatedBackend {
    async fn fetch_all(&self) -> Result<Vec<Resident>> {
        sleep(self.latency).await;
        if self.fail_reads {
            return Err(BackendError::transient("simulated read failure"));
        }
        Ok(self.seed.clone())
    }

    async fn create(&self, draft: &ResidentDraft) -> Result<()> {
        sleep(self.latency).await;
        tracing::debug!(name = %draft.name, "backend acknowledged create");
        Ok(())
    }

    async fn update(&self, id: u64, _draft: &ResidentDraft) -> Result<()> {
        sleep(self.latency).await;
        tracing::debug!(id, "backend acknowledged update");
        Ok(())
    }

    async fn delete(&self, id: u64) -> Result<()> {
        sleep(self.latency).await;
        tracing::debug!(id, "backend acknowledged delete");
        Ok(())
    }
}
