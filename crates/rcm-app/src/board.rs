//! Volunteer-request board.
//!
//! Reads the slot and volunteer collections from the document store at mount
//! time (fire-and-forget, no retry), then lets a manager submit, approve, and
//! reject requests. Each mutation rewrites the targeted slot's request list
//! and pushes it back through the store; a store failure leaves the local
//! copy untouched.

use chrono::{DateTime, Utc};

use rcm_backend::DocumentStore;
use rcm_model::{RequestStatus, Volunteer, VolunteerRequest, VolunteerSlot};

use crate::notify::Notifier;

/// Source of "now" for request timestamps; a function pointer so tests can
/// pin a fixed instant.
pub type Timestamp = fn() -> DateTime<Utc>;

pub struct RequestBoard<S, N> {
    store: S,
    notifier: N,
    slots: Vec<VolunteerSlot>,
    volunteers: Vec<Volunteer>,
    now: Timestamp,
}

impl<S: DocumentStore, N: Notifier> RequestBoard<S, N> {
    pub fn new(store: S, notifier: N) -> Self {
        Self {
            store,
            notifier,
            slots: Vec::new(),
            volunteers: Vec::new(),
            now: Utc::now,
        }
    }

    pub fn with_timestamp(mut self, now: Timestamp) -> Self {
        self.now = now;
        self
    }

    pub fn slots(&self) -> &[VolunteerSlot] {
        &self.slots
    }

    pub fn volunteers(&self) -> &[Volunteer] {
        &self.volunteers
    }

    pub fn notifier(&self) -> &N {
        &self.notifier
    }

    /// Mount-time load. A failed read surfaces an error notification and
    /// leaves both collections empty; there is no automatic re-fetch.
    pub async fn load(&mut self) -> bool {
        let slots = match self.store.fetch_slots().await {
            Ok(slots) => slots,
            Err(err) => {
                self.notifier.error(&err.user_message());
                return false;
            }
        };
        let volunteers = match self.store.fetch_volunteers().await {
            Ok(volunteers) => volunteers,
            Err(err) => {
                self.notifier.error(&err.user_message());
                return false;
            }
        };
        self.slots = slots;
        self.volunteers = volunteers;
        true
    }

    /// Submits (or re-submits) a volunteer's request on a slot: an existing
    /// entry for that volunteer is replaced by a fresh pending one,
    /// otherwise the request is appended.
    pub async fn submit_request(
        &mut self,
        slot_id: &str,
        volunteer_id: &str,
        match_score: Option<f32>,
    ) -> bool {
        let Some(slot) = self.slots.iter().find(|s| s.id == slot_id) else {
            self.notifier
                .error(&format!("The calendar slot `{slot_id}` no longer exists."));
            return false;
        };
        let mut request = VolunteerRequest::pending(volunteer_id, (self.now)());
        request.match_score = match_score;

        let mut requests = slot.volunteer_requests.clone();
        match requests.iter_mut().find(|r| r.volunteer_id == volunteer_id) {
            Some(existing) => *existing = request,
            None => requests.push(request),
        }
        self.push_requests(slot_id, requests, "Request submitted.").await
    }

    /// Approves a pending request, stamping `approved_at` and `assigned_by`.
    pub async fn approve(&mut self, slot_id: &str, volunteer_id: &str, assigned_by: &str) -> bool {
        self.decide(slot_id, volunteer_id, |request, now| {
            request.status = RequestStatus::Approved;
            request.approved_at = Some(now);
            request.assigned_by = Some(assigned_by.to_string());
            request.rejected_at = None;
            request.rejected_reason = None;
        })
        .await
    }

    /// Rejects a pending request, stamping `rejected_at` and the reason.
    pub async fn reject(&mut self, slot_id: &str, volunteer_id: &str, reason: &str) -> bool {
        self.decide(slot_id, volunteer_id, |request, now| {
            request.status = RequestStatus::Rejected;
            request.rejected_at = Some(now);
            request.rejected_reason = Some(reason.to_string());
            request.approved_at = None;
            request.assigned_by = None;
        })
        .await
    }

    async fn decide(
        &mut self,
        slot_id: &str,
        volunteer_id: &str,
        apply: impl FnOnce(&mut VolunteerRequest, DateTime<Utc>),
    ) -> bool {
        let Some(slot) = self.slots.iter().find(|s| s.id == slot_id) else {
            self.notifier
                .error(&format!("The calendar slot `{slot_id}` no longer exists."));
            return false;
        };
        let mut requests = slot.volunteer_requests.clone();
        let Some(request) = requests.iter_mut().find(|r| r.volunteer_id == volunteer_id) else {
            self.notifier.error(&format!(
                "No request from volunteer `{volunteer_id}` on this slot."
            ));
            return false;
        };
        apply(request, (self.now)());
        let message = match request.status {
            RequestStatus::Approved => "Request approved.",
            RequestStatus::Rejected => "Request rejected.",
            RequestStatus::Pending => "Request updated.",
        };
        self.push_requests(slot_id, requests, message).await
    }

    /// Pushes a rewritten request list to the store; only on success does
    /// the local slot adopt it.
    async fn push_requests(
        &mut self,
        slot_id: &str,
        requests: Vec<VolunteerRequest>,
        success_message: &str,
    ) -> bool {
        match self
            .store
            .update_slot_requests(slot_id, requests.clone())
            .await
        {
            Ok(()) => {
                if let Some(slot) = self.slots.iter_mut().find(|s| s.id == slot_id) {
                    slot.volunteer_requests = requests;
                }
                self.notifier.success(success_message);
                true
            }
            Err(err) => {
                self.notifier.error(&err.user_message());
                false
            }
        }
    }
}
