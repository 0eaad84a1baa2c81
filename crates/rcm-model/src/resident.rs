//! Resident records and the draft payload used for create/edit.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::{ModelError, Result};
use crate::status::ResidentStatus;

/// A tracked individual record managed by the dashboard.
///
/// `id` is assigned once at creation and never reused; `join_date` is stamped
/// at creation time and survives full-record edits.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Resident {
    pub id: u64,
    pub name: String,
    pub age: u32,
    pub gender: String,
    pub address: String,
    pub contact_number: String,
    pub emergency_contact: String,
    pub join_date: NaiveDate,
    pub status: ResidentStatus,
}

/// Create/edit payload: everything a manager supplies by hand.
///
/// `id` and `join_date` are deliberately absent; the view-state manager owns
/// both. Edits are full-record replaces, so a draft always carries the
/// complete set of hand-entered fields.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResidentDraft {
    pub name: String,
    pub age: u32,
    pub gender: String,
    pub address: String,
    pub contact_number: String,
    pub emergency_contact: String,
    /// Defaults to `Pending` when not supplied.
    pub status: Option<ResidentStatus>,
}

impl ResidentDraft {
    /// Checks the required fields (`name`, `gender`, `address`) are present
    /// after trimming. `age` is non-negative by construction.
    pub fn validate(&self) -> Result<()> {
        if self.name.trim().is_empty() {
            return Err(ModelError::MissingField("name"));
        }
        if self.gender.trim().is_empty() {
            return Err(ModelError::MissingField("gender"));
        }
        if self.address.trim().is_empty() {
            return Err(ModelError::MissingField("address"));
        }
        Ok(())
    }

    /// Materializes a resident from this draft.
    pub fn into_resident(self, id: u64, join_date: NaiveDate) -> Resident {
        Resident {
            id,
            name: self.name,
            age: self.age,
            gender: self.gender,
            address: self.address,
            contact_number: self.contact_number,
            emergency_contact: self.emergency_contact,
            join_date,
            status: self.status.unwrap_or_default(),
        }
    }
}

impl From<Resident> for ResidentDraft {
    fn from(resident: Resident) -> Self {
        Self {
            name: resident.name,
            age: resident.age,
            gender: resident.gender,
            address: resident.address,
            contact_number: resident.contact_number,
            emergency_contact: resident.emergency_contact,
            status: Some(resident.status),
        }
    }
}
