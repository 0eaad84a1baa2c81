//! Single-flight guard for mutating backend calls.
//!
//! While one simulated create/edit/delete is outstanding the initiating
//! control is disabled; a second submission attempt is rejected with `Busy`
//! instead of running. View-parameter operations are unaffected and keep
//! working on the last-known-good collection.

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use crate::error::{BackendError, Result};

/// Tracks whether a mutating call is in flight.
#[derive(Debug, Default, Clone)]
pub struct SubmitGuard {
    busy: Arc<AtomicBool>,
}

impl SubmitGuard {
    pub fn new() -> Self {
        Self::default()
    }

    /// True while a permit is held.
    pub fn is_busy(&self) -> bool {
        self.busy.load(Ordering::Acquire)
    }

    /// Claims the guard for one submission. Fails with `Busy` when a permit
    /// is already held. The permit releases the guard on drop, so the guard
    /// is released even when the submission errors.
    pub fn try_begin(&self) -> Result<SubmitPermit> {
        if self.busy.swap(true, Ordering::AcqRel) {
            return Err(BackendError::Busy);
        }
        Ok(SubmitPermit {
            busy: Arc::clone(&self.busy),
        })
    }
}

/// RAII permit for one in-flight submission.
#[derive(Debug)]
pub struct SubmitPermit {
    busy: Arc<AtomicBool>,
}

impl Drop for SubmitPermit {
    fn drop(&mut self) {
        self.busy.store(false, Ordering::Release);
    }
}
