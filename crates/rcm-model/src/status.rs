//! Resident lifecycle status.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::ModelError;

/// Lifecycle status of a resident record.
///
/// New residents default to `Pending` until a manager activates them.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ResidentStatus {
    /// Actively receiving volunteer services.
    Active,
    /// On the roster but not currently receiving services.
    Inactive,
    /// Awaiting manager review.
    #[default]
    Pending,
}

impl ResidentStatus {
    /// All statuses, in display order.
    pub const ALL: [ResidentStatus; 3] = [
        ResidentStatus::Active,
        ResidentStatus::Inactive,
        ResidentStatus::Pending,
    ];

    /// Returns the lowercase wire/display form.
    pub fn as_str(&self) -> &'static str {
        match self {
            ResidentStatus::Active => "active",
            ResidentStatus::Inactive => "inactive",
            ResidentStatus::Pending => "pending",
        }
    }
}

impl fmt::Display for ResidentStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ResidentStatus {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "active" => Ok(ResidentStatus::Active),
            "inactive" => Ok(ResidentStatus::Inactive),
            "pending" => Ok(ResidentStatus::Pending),
            _ => Err(ModelError::UnknownVariant {
                kind: "resident status",
                value: s.to_string(),
            }),
        }
    }
}
