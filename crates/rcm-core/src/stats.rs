//! Dashboard aggregate statistics.

use chrono::Days;
use serde::{Deserialize, Serialize};

use rcm_model::ResidentStatus;

use crate::manager::ResidentManager;

/// Aggregate counts for the dashboard overview screen.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DashboardStats {
    pub total: usize,
    pub active: usize,
    pub inactive: usize,
    pub pending: usize,
    /// Residents whose `join_date` falls within the last 30 days.
    pub recent_joins: usize,
}

impl ResidentManager {
    /// Computes aggregate counts over the whole collection, ignoring view
    /// parameters. Recency is relative to the manager's clock.
    pub fn stats(&self) -> DashboardStats {
        let today = self.today();
        let cutoff = today.checked_sub_days(Days::new(30)).unwrap_or(today);
        let mut stats = DashboardStats::default();
        for resident in self.residents() {
            stats.total += 1;
            match resident.status {
                ResidentStatus::Active => stats.active += 1,
                ResidentStatus::Inactive => stats.inactive += 1,
                ResidentStatus::Pending => stats.pending += 1,
            }
            if resident.join_date >= cutoff && resident.join_date <= today {
                stats.recent_joins += 1;
            }
        }
        stats
    }
}
