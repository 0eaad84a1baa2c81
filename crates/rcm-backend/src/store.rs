//! Document store for the volunteer-request screen.
//!
//! Reads are fire-and-forget at screen mount: no retry, and a failed read
//! leaves the collection empty while the error surfaces as a notification.
//! Writes replace one slot's request list wholesale.

use std::time::Duration;

use tokio::sync::Mutex;
use tokio::time::sleep;

use rcm_model::{Volunteer, VolunteerRequest, VolunteerSlot};

use crate::error::{BackendError, Result};
use crate::resident_backend::SIMULATED_LATENCY;

/// Read/write access to the hosted slot and volunteer collections.
pub trait DocumentStore: Send + Sync {
    fn fetch_slots(&self) -> impl Future<Output = Result<Vec<VolunteerSlot>>> + Send;

    fn fetch_volunteers(&self) -> impl Future<Output = Result<Vec<Volunteer>>> + Send;

    /// Replaces the `volunteer_requests` list of one slot.
    fn update_slot_requests(
        &self,
        slot_id: &str,
        requests: Vec<VolunteerRequest>,
    ) -> impl Future<Output = Result<()>> + Send;
}

/// In-memory store with simulated latency.
pub struct InMemoryStore {
    slots: Mutex<Vec<VolunteerSlot>>,
    volunteers: Vec<Volunteer>,
    latency: Duration,
    fail_reads: bool,
}

impl InMemoryStore {
    pub fn new(slots: Vec<VolunteerSlot>, volunteers: Vec<Volunteer>) -> Self {
        Self {
            slots: Mutex::new(slots),
            volunteers,
            latency: SIMULATED_LATENCY,
            fail_reads: false,
        }
    }

    pub fn with_latency(mut self, latency: Duration) -> Self {
        self.latency = latency;
        self
    }

    pub fn failing_reads(mut self) -> Self {
        self.fail_reads = true;
        self
    }
}

impl DocumentStore for InMemoryStore {
    async fn fetch_slots(&self) -> Result<Vec<VolunteerSlot>> {
        sleep(self.latency).await;
        if self.fail_reads {
            return Err(BackendError::transient("slot collection unavailable"));
        }
        Ok(self.slots.lock().await.clone())
    }

    async fn fetch_volunteers(&self) -> Result<Vec<Volunteer>> {
        sleep(self.latency).await;
        if self.fail_reads {
            return Err(BackendError::transient("volunteer collection unavailable"));
        }
        Ok(self.volunteers.clone())
    }

    async fn update_slot_requests(
        &self,
        slot_id: &str,
        requests: Vec<VolunteerRequest>,
    ) -> Result<()> {
        sleep(self.latency).await;
        let mut slots = self.slots.lock().await;
        let slot = slots
            .iter_mut()
            .find(|s| s.id == slot_id)
            .ok_or_else(|| BackendError::SlotNotFound(slot_id.to_string()))?;
        slot.volunteer_requests = requests;
        tracing::debug!(slot_id, "slot requests replaced");
        Ok(())
    }
}
