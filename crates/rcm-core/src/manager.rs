//! The resident view-state manager.
//!
//! Owns the authoritative resident collection plus all derived view
//! parameters, and recomputes the visible/paginated list on every parameter
//! change. All mutation is funneled through the operations here; presentation
//! code never touches the collection directly.
//!
//! Derived state is recomputed in full on each change rather than maintained
//! incrementally. Collections are small; there is no caching layer.

use std::cmp::Ordering;
use std::collections::BTreeSet;

use chrono::NaiveDate;

use rcm_model::{Resident, ResidentDraft, ResidentStatus};

use crate::error::{CoreError, Result};
use crate::params::{SortDirection, SortField, StatusFilter, ViewParams};

/// Source of "today" used when stamping `join_date` and computing recency
/// stats. A plain function pointer so tests can pin a fixed date.
pub type Clock = fn() -> NaiveDate;

fn system_today() -> NaiveDate {
    chrono::Local::now().date_naive()
}

/// Owns the resident collection, view parameters, and selection set.
#[derive(Debug, Clone)]
pub struct ResidentManager {
    residents: Vec<Resident>,
    params: ViewParams,
    /// Selected resident ids. Deliberately decoupled from the live
    /// collection: stale ids are tolerated and only ever interpreted through
    /// the intersection with current visibility. Cross-page accumulation is
    /// intended — bulk actions may target ids from previously viewed pages.
    selection: BTreeSet<u64>,
    clock: Clock,
}

impl Default for ResidentManager {
    fn default() -> Self {
        Self::new(Vec::new())
    }
}

impl ResidentManager {
    pub fn new(residents: Vec<Resident>) -> Self {
        Self {
            residents,
            params: ViewParams::default(),
            selection: BTreeSet::new(),
            clock: system_today,
        }
    }

    /// Replaces the clock used for `join_date` stamping and recency stats.
    pub fn with_clock(mut self, clock: Clock) -> Self {
        self.clock = clock;
        self
    }

    pub fn residents(&self) -> &[Resident] {
        &self.residents
    }

    /// Replaces the whole collection after a backend refresh. View
    /// parameters survive; the page clamps to the new visible set. The
    /// selection is kept as-is — ids that vanished are stale and will be
    /// ignored by bulk operations like any other hidden id.
    pub fn replace_collection(&mut self, residents: Vec<Resident>) {
        self.residents = residents;
        self.clamp_page();
    }

    pub fn params(&self) -> &ViewParams {
        &self.params
    }

    pub fn selection(&self) -> &BTreeSet<u64> {
        &self.selection
    }

    pub fn today(&self) -> NaiveDate {
        (self.clock)()
    }

    // ---- derived views -------------------------------------------------

    /// Residents passing every active filter, in the current sort order.
    pub fn visible(&self) -> Vec<&Resident> {
        let mut visible: Vec<&Resident> = self
            .residents
            .iter()
            .filter(|r| self.params.matches(r))
            .collect();
        let field = self.params.sort_field;
        let direction = self.params.sort_direction;
        visible.sort_by(|a, b| compare(a, b, field, direction));
        visible
    }

    /// Ids of the visible set, across all pages.
    pub fn visible_ids(&self) -> BTreeSet<u64> {
        self.residents
            .iter()
            .filter(|r| self.params.matches(r))
            .map(|r| r.id)
            .collect()
    }

    /// Number of pages for the current visible set, never less than 1.
    pub fn total_pages(&self) -> usize {
        let visible = self
            .residents
            .iter()
            .filter(|r| self.params.matches(r))
            .count();
        (visible.div_ceil(self.params.page_size)).max(1)
    }

    /// The current page of the visible list.
    pub fn page(&self) -> Vec<&Resident> {
        let start = (self.params.current_page - 1) * self.params.page_size;
        self.visible()
            .into_iter()
            .skip(start)
            .take(self.params.page_size)
            .collect()
    }

    /// Effective selection: ids that are both selected and currently visible.
    /// This is the only interpretation bulk operations use.
    pub fn effective_selection(&self) -> BTreeSet<u64> {
        let visible = self.visible_ids();
        self.selection.intersection(&visible).copied().collect()
    }

    // ---- parameter setters ---------------------------------------------

    pub fn set_search_query(&mut self, text: impl Into<String>) {
        self.params.search_query = text.into();
        self.clamp_page();
    }

    /// Clears the selection so the user never acts on rows they can no
    /// longer see.
    pub fn set_status_filter(&mut self, filter: StatusFilter) {
        self.params.status_filter = filter;
        self.selection.clear();
        self.clamp_page();
    }

    pub fn set_active_tab(&mut self, tab: StatusFilter) {
        self.params.active_tab = tab;
        self.clamp_page();
    }

    pub fn set_age_range(&mut self, min: Option<u32>, max: Option<u32>) {
        self.params.age_range = (min, max);
        self.clamp_page();
    }

    pub fn set_join_date_range(&mut self, start: Option<NaiveDate>, end: Option<NaiveDate>) {
        self.params.join_date_range = (start, end);
        self.clamp_page();
    }

    /// Toggles direction when `field` is already the sort field, otherwise
    /// switches to `field` ascending. Clears the selection.
    pub fn set_sort(&mut self, field: SortField) {
        if self.params.sort_field == field {
            self.params.sort_direction = self.params.sort_direction.toggled();
        } else {
            self.params.sort_field = field;
            self.params.sort_direction = SortDirection::Asc;
        }
        self.selection.clear();
    }

    /// Sets the page size, jumps back to page 1, and clears the selection.
    /// `size` must be positive.
    pub fn set_page_size(&mut self, size: usize) {
        debug_assert!(size > 0, "page size must be positive");
        self.params.page_size = size.max(1);
        self.params.current_page = 1;
        self.selection.clear();
    }

    /// Bounds-checked page change; out-of-range input clamps, never fails.
    pub fn set_page(&mut self, page: usize) {
        self.params.current_page = page.clamp(1, self.total_pages());
    }

    fn clamp_page(&mut self) {
        let total = self.total_pages();
        if self.params.current_page > total {
            self.params.current_page = total;
        }
    }

    // ---- selection ------------------------------------------------------

    /// Adds the id when absent, removes it when present. Toggling an id that
    /// is no longer visible is tolerated; bulk operations will simply never
    /// touch it.
    pub fn toggle_select(&mut self, id: u64) {
        if !self.selection.remove(&id) {
            self.selection.insert(id);
        }
    }

    /// Selects exactly the current page's residents, keeping any ids already
    /// selected on other pages.
    pub fn select_all_on_page(&mut self) {
        let ids: Vec<u64> = self.page().iter().map(|r| r.id).collect();
        self.selection.extend(ids);
    }

    /// Deselects exactly the current page's residents, keeping the rest.
    pub fn deselect_all_on_page(&mut self) {
        let ids: Vec<u64> = self.page().iter().map(|r| r.id).collect();
        for id in ids {
            self.selection.remove(&id);
        }
    }

    // ---- lifecycle ------------------------------------------------------

    /// Creates a resident from the draft: fresh id (`max + 1`, or 1 when the
    /// collection is empty), `join_date` stamped from the clock. The
    /// selection is untouched.
    pub fn create(&mut self, draft: ResidentDraft) -> Result<Resident> {
        draft.validate()?;
        let id = self.residents.iter().map(|r| r.id).max().unwrap_or(0) + 1;
        let resident = draft.into_resident(id, self.today());
        tracing::info!(id, name = %resident.name, "resident created");
        self.residents.push(resident.clone());
        Ok(resident)
    }

    /// Full-record replace keyed by id. `id` and `join_date` are preserved
    /// from the stored record; everything else comes from the draft. Neither
    /// selection nor filters change, but the new record may drop out of the
    /// visible set, so the page clamps.
    pub fn update(&mut self, id: u64, draft: ResidentDraft) -> Result<Resident> {
        draft.validate()?;
        let slot = self
            .residents
            .iter_mut()
            .find(|r| r.id == id)
            .ok_or(CoreError::NotFound { id })?;
        let join_date = slot.join_date;
        *slot = draft.into_resident(id, join_date);
        let updated = slot.clone();
        self.clamp_page();
        tracing::info!(id, "resident updated");
        Ok(updated)
    }

    /// Removes one resident. Drops the id from the selection and clamps the
    /// page if the visible set shrank below it.
    pub fn delete_one(&mut self, id: u64) -> Result<()> {
        let index = self
            .residents
            .iter()
            .position(|r| r.id == id)
            .ok_or(CoreError::NotFound { id })?;
        self.residents.remove(index);
        self.selection.remove(&id);
        self.clamp_page();
        tracing::info!(id, "resident deleted");
        Ok(())
    }

    /// Removes every resident in `selection ∩ visible`. All-or-nothing:
    /// fails without touching anything when the effective selection is
    /// empty. Clears the selection and clamps the page on success.
    pub fn delete_selected(&mut self) -> Result<usize> {
        let targets = self.bulk_targets()?;
        self.residents.retain(|r| !targets.contains(&r.id));
        self.selection.clear();
        self.clamp_page();
        tracing::info!(count = targets.len(), "residents bulk-deleted");
        Ok(targets.len())
    }

    /// Sets `status` on every resident in `selection ∩ visible`; clears the
    /// selection on success. Same targeting and all-or-nothing rules as
    /// `delete_selected`.
    pub fn bulk_set_status(&mut self, status: ResidentStatus) -> Result<usize> {
        let targets = self.bulk_targets()?;
        for resident in &mut self.residents {
            if targets.contains(&resident.id) {
                resident.status = status;
            }
        }
        self.selection.clear();
        self.clamp_page();
        tracing::info!(count = targets.len(), status = %status, "residents bulk-updated");
        Ok(targets.len())
    }

    /// Returns the selected-and-visible records in the current sort order,
    /// without mutating any state. Serialization is the export layer's
    /// concern.
    pub fn export_selected(&self) -> Result<Vec<Resident>> {
        let targets = self.bulk_targets()?;
        Ok(self
            .visible()
            .into_iter()
            .filter(|r| targets.contains(&r.id))
            .cloned()
            .collect())
    }

    fn bulk_targets(&self) -> Result<BTreeSet<u64>> {
        let targets = self.effective_selection();
        let stale = self.selection.len() - targets.len();
        if stale > 0 {
            tracing::warn!(stale, "selection ids outside the visible set ignored");
        }
        if targets.is_empty() {
            return Err(CoreError::validation(
                "No residents selected. Select at least one visible resident first.",
            ));
        }
        Ok(targets)
    }
}

/// Column comparator: lexicographic for name/gender, numeric for age,
/// chronological for join date, with the id as a final tiebreaker so the
/// order is total. Descending flips the whole comparison.
fn compare(a: &Resident, b: &Resident, field: SortField, direction: SortDirection) -> Ordering {
    let ordering = match field {
        SortField::Name => a.name.cmp(&b.name),
        SortField::Age => a.age.cmp(&b.age),
        SortField::Gender => a.gender.cmp(&b.gender),
        SortField::JoinDate => a.join_date.cmp(&b.join_date),
    }
    .then_with(|| a.id.cmp(&b.id));
    match direction {
        SortDirection::Asc => ordering,
        SortDirection::Desc => ordering.reverse(),
    }
}
