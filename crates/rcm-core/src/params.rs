//! Ephemeral view parameters: search, filters, sort, pagination.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use rcm_model::{ModelError, Resident, ResidentStatus};

/// Page sizes offered by the UI.
pub const PAGE_SIZES: [usize; 4] = [5, 10, 25, 50];

/// Default page size.
pub const DEFAULT_PAGE_SIZE: usize = 10;

/// Status filter: everything, or one specific status.
///
/// Both the filter dropdown and the tab strip use this type; a resident must
/// match both for visibility (logical AND, not override).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StatusFilter {
    #[default]
    All,
    Only(ResidentStatus),
}

impl StatusFilter {
    pub fn matches(&self, status: ResidentStatus) -> bool {
        match self {
            StatusFilter::All => true,
            StatusFilter::Only(wanted) => *wanted == status,
        }
    }
}

impl fmt::Display for StatusFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StatusFilter::All => f.write_str("all"),
            StatusFilter::Only(status) => f.write_str(status.as_str()),
        }
    }
}

impl FromStr for StatusFilter {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.trim().eq_ignore_ascii_case("all") {
            Ok(StatusFilter::All)
        } else {
            Ok(StatusFilter::Only(s.parse()?))
        }
    }
}

/// Sortable columns of the resident list.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SortField {
    #[default]
    Name,
    Age,
    Gender,
    JoinDate,
}

impl SortField {
    pub fn as_str(&self) -> &'static str {
        match self {
            SortField::Name => "name",
            SortField::Age => "age",
            SortField::Gender => "gender",
            SortField::JoinDate => "join_date",
        }
    }
}

impl fmt::Display for SortField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SortField {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "name" => Ok(SortField::Name),
            "age" => Ok(SortField::Age),
            "gender" => Ok(SortField::Gender),
            "join_date" | "joindate" => Ok(SortField::JoinDate),
            _ => Err(ModelError::UnknownVariant {
                kind: "sort field",
                value: s.to_string(),
            }),
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortDirection {
    #[default]
    Asc,
    Desc,
}

impl SortDirection {
    pub fn toggled(self) -> Self {
        match self {
            SortDirection::Asc => SortDirection::Desc,
            SortDirection::Desc => SortDirection::Asc,
        }
    }
}

/// The full set of ephemeral view parameters, distinct from the persisted
/// resident collection.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ViewParams {
    pub search_query: String,
    pub status_filter: StatusFilter,
    pub active_tab: StatusFilter,
    /// `(min, max)`, either bound `None` meaning unbounded. Inclusive.
    pub age_range: (Option<u32>, Option<u32>),
    /// `(start, end)`, either bound `None` meaning unbounded. Inclusive.
    pub join_date_range: (Option<NaiveDate>, Option<NaiveDate>),
    pub sort_field: SortField,
    pub sort_direction: SortDirection,
    pub page_size: usize,
    /// 1-based.
    pub current_page: usize,
}

impl Default for ViewParams {
    fn default() -> Self {
        Self {
            search_query: String::new(),
            status_filter: StatusFilter::All,
            active_tab: StatusFilter::All,
            age_range: (None, None),
            join_date_range: (None, None),
            sort_field: SortField::default(),
            sort_direction: SortDirection::default(),
            page_size: DEFAULT_PAGE_SIZE,
            current_page: 1,
        }
    }
}

impl ViewParams {
    /// True when the resident passes every active filter.
    ///
    /// Search is a case-insensitive substring match on name and address and a
    /// case-sensitive substring match on the contact number. Both status
    /// selectors must match.
    pub fn matches(&self, resident: &Resident) -> bool {
        let query = self.search_query.trim();
        if !query.is_empty() {
            let lowered = query.to_lowercase();
            let hit = resident.name.to_lowercase().contains(&lowered)
                || resident.address.to_lowercase().contains(&lowered)
                || resident.contact_number.contains(query);
            if !hit {
                return false;
            }
        }
        if !self.status_filter.matches(resident.status) || !self.active_tab.matches(resident.status)
        {
            return false;
        }
        let (min_age, max_age) = self.age_range;
        if min_age.is_some_and(|min| resident.age < min)
            || max_age.is_some_and(|max| resident.age > max)
        {
            return false;
        }
        let (start, end) = self.join_date_range;
        if start.is_some_and(|s| resident.join_date < s)
            || end.is_some_and(|e| resident.join_date > e)
        {
            return false;
        }
        true
    }
}
