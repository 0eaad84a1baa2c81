//! Resident screen coordinator.
//!
//! Funnels async backend calls into the view-state manager and converts
//! every failure into a notification. While one mutating call is
//! outstanding the submit guard rejects a second one; view-parameter
//! operations stay available through `manager_mut` and act on the
//! last-known-good collection.

use rcm_backend::{ResidentBackend, SubmitGuard};
use rcm_core::{Clock, ResidentManager};
use rcm_export::{DownloadSink, export_residents};
use rcm_model::{Resident, ResidentDraft, ResidentStatus};

use crate::notify::Notifier;

pub struct ResidentScreen<B, N> {
    manager: ResidentManager,
    backend: B,
    notifier: N,
    guard: SubmitGuard,
}

impl<B: ResidentBackend, N: Notifier> ResidentScreen<B, N> {
    pub fn new(backend: B, notifier: N) -> Self {
        Self {
            manager: ResidentManager::default(),
            backend,
            notifier,
            guard: SubmitGuard::new(),
        }
    }

    pub fn with_clock(mut self, clock: Clock) -> Self {
        self.manager = std::mem::take(&mut self.manager).with_clock(clock);
        self
    }

    pub fn manager(&self) -> &ResidentManager {
        &self.manager
    }

    /// View-parameter operations (search, sort, filter, paging, selection)
    /// go straight to the manager and are never blocked by the guard.
    pub fn manager_mut(&mut self) -> &mut ResidentManager {
        &mut self.manager
    }

    pub fn notifier(&self) -> &N {
        &self.notifier
    }

    /// True while a mutating backend call is outstanding; the UI disables
    /// the initiating control on this.
    pub fn is_busy(&self) -> bool {
        self.guard.is_busy()
    }

    /// Initial read at screen mount. No retry: a failed read surfaces an
    /// error notification and leaves the collection empty.
    pub async fn load(&mut self) -> bool {
        match self.backend.fetch_all().await {
            Ok(residents) => {
                self.manager.replace_collection(residents);
                true
            }
            Err(err) => {
                self.manager.replace_collection(Vec::new());
                self.notifier.error(&err.user_message());
                false
            }
        }
    }

    /// Re-read after mutations. Unlike `load`, a failure leaves the
    /// existing collection untouched.
    pub async fn refresh(&mut self) -> bool {
        match self.backend.fetch_all().await {
            Ok(residents) => {
                self.manager.replace_collection(residents);
                true
            }
            Err(err) => {
                self.notifier.error(&err.user_message());
                false
            }
        }
    }

    /// Creates a resident: backend round trip first, then the local apply.
    /// The created record is returned for the caller's dialog to display.
    pub async fn create(&mut self, draft: ResidentDraft) -> Option<Resident> {
        let _permit = match self.guard.try_begin() {
            Ok(permit) => permit,
            Err(err) => {
                self.notifier.error(&err.user_message());
                return None;
            }
        };
        if let Err(err) = draft.validate() {
            self.notifier.error(&err.to_string());
            return None;
        }
        if let Err(err) = self.backend.create(&draft).await {
            self.notifier.error(&err.user_message());
            return None;
        }
        match self.manager.create(draft) {
            Ok(resident) => {
                self.notifier
                    .success(&format!("Resident {} added.", resident.name));
                Some(resident)
            }
            Err(err) => {
                self.notifier.error(&err.user_message());
                None
            }
        }
    }

    /// Full-record edit keyed by id.
    pub async fn update(&mut self, id: u64, draft: ResidentDraft) -> Option<Resident> {
        let _permit = match self.guard.try_begin() {
            Ok(permit) => permit,
            Err(err) => {
                self.notifier.error(&err.user_message());
                return None;
            }
        };
        if let Err(err) = draft.validate() {
            self.notifier.error(&err.to_string());
            return None;
        }
        if let Err(err) = self.backend.update(id, &draft).await {
            self.notifier.error(&err.user_message());
            return None;
        }
        match self.manager.update(id, draft) {
            Ok(resident) => {
                self.notifier.success("Resident updated.");
                Some(resident)
            }
            Err(err) => {
                self.notifier.error(&err.user_message());
                None
            }
        }
    }

    pub async fn delete(&mut self, id: u64) -> bool {
        let _permit = match self.guard.try_begin() {
            Ok(permit) => permit,
            Err(err) => {
                self.notifier.error(&err.user_message());
                return false;
            }
        };
        if let Err(err) = self.backend.delete(id).await {
            self.notifier.error(&err.user_message());
            return false;
        }
        match self.manager.delete_one(id) {
            Ok(()) => {
                self.notifier.success("Resident removed.");
                true
            }
            Err(err) => {
                self.notifier.error(&err.user_message());
                false
            }
        }
    }

    /// Bulk delete over `selection ∩ visible`. Deletes are acknowledged
    /// per-id; a failure mid-loop aborts the local apply but cannot recall
    /// acknowledgments already sent. All-or-nothing holds for the local
    /// collection only — a backend with real persistence needs a batched
    /// delete on this seam.
    pub async fn delete_selected(&mut self) -> usize {
        let targets: Vec<u64> = self.manager.effective_selection().into_iter().collect();
        if targets.is_empty() {
            self.notifier
                .error("No residents selected. Select at least one visible resident first.");
            return 0;
        }
        let _permit = match self.guard.try_begin() {
            Ok(permit) => permit,
            Err(err) => {
                self.notifier.error(&err.user_message());
                return 0;
            }
        };
        for id in &targets {
            if let Err(err) = self.backend.delete(*id).await {
                self.notifier.error(&err.user_message());
                return 0;
            }
        }
        match self.manager.delete_selected() {
            Ok(count) => {
                self.notifier
                    .success(&format!("{count} resident(s) removed."));
                count
            }
            Err(err) => {
                self.notifier.error(&err.user_message());
                0
            }
        }
    }

    /// Bulk status change over `selection ∩ visible`.
    pub fn bulk_set_status(&mut self, status: ResidentStatus) -> usize {
        match self.manager.bulk_set_status(status) {
            Ok(count) => {
                self.notifier
                    .success(&format!("{count} resident(s) marked {status}."));
                count
            }
            Err(err) => {
                self.notifier.error(&err.user_message());
                0
            }
        }
    }

    /// Exports `selection ∩ visible` through the download sink. Returns the
    /// file name on success. State is never mutated.
    pub fn export_selected<S: DownloadSink>(&mut self, sink: &mut S) -> Option<String> {
        let rows = match self.manager.export_selected() {
            Ok(rows) => rows,
            Err(err) => {
                self.notifier.error(&err.user_message());
                return None;
            }
        };
        match export_residents(&rows, self.manager.today(), sink) {
            Ok(name) => {
                self.notifier
                    .success(&format!("Exported {} resident(s) to {name}.", rows.len()));
                Some(name)
            }
            Err(err) => {
                self.notifier.error(&err.to_string());
                None
            }
        }
    }
}
