//! Volunteer, calendar slot, and volunteer-request types.
//!
//! These back the request-matching screen: slots and volunteers are read from
//! a document store, and each slot carries an in-memory `volunteer_requests`
//! list keyed by volunteer id.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::ModelError;

/// A volunteer available for assignment to calendar slots.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Volunteer {
    pub id: String,
    pub name: String,
    pub contact_number: String,
    #[serde(default)]
    pub skills: Vec<String>,
}

/// A scheduled calendar slot volunteers can be matched against.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VolunteerSlot {
    pub id: String,
    pub date: NaiveDate,
    pub activity: String,
    pub capacity: u32,
    #[serde(default)]
    pub volunteer_requests: Vec<VolunteerRequest>,
}

impl VolunteerSlot {
    /// Returns the request for the given volunteer, if one exists.
    pub fn request_for(&self, volunteer_id: &str) -> Option<&VolunteerRequest> {
        self.volunteer_requests
            .iter()
            .find(|r| r.volunteer_id == volunteer_id)
    }

    /// Number of approved requests on this slot.
    pub fn approved_count(&self) -> usize {
        self.volunteer_requests
            .iter()
            .filter(|r| r.status == RequestStatus::Approved)
            .count()
    }
}

/// One volunteer's request (or assignment) on a slot.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VolunteerRequest {
    pub volunteer_id: String,
    pub status: RequestStatus,
    pub requested_at: DateTime<Utc>,
    pub approved_at: Option<DateTime<Utc>>,
    pub rejected_at: Option<DateTime<Utc>>,
    pub rejected_reason: Option<String>,
    pub match_score: Option<f32>,
    pub assigned_by: Option<String>,
}

impl VolunteerRequest {
    /// A fresh pending request with no decision stamps.
    pub fn pending(volunteer_id: impl Into<String>, requested_at: DateTime<Utc>) -> Self {
        Self {
            volunteer_id: volunteer_id.into(),
            status: RequestStatus::Pending,
            requested_at,
            approved_at: None,
            rejected_at: None,
            rejected_reason: None,
            match_score: None,
            assigned_by: None,
        }
    }
}

/// Flat status field on a volunteer request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RequestStatus {
    Pending,
    Approved,
    Rejected,
}

impl RequestStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            RequestStatus::Pending => "pending",
            RequestStatus::Approved => "approved",
            RequestStatus::Rejected => "rejected",
        }
    }
}

impl fmt::Display for RequestStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for RequestStatus {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "pending" => Ok(RequestStatus::Pending),
            "approved" => Ok(RequestStatus::Approved),
            "rejected" => Ok(RequestStatus::Rejected),
            _ => Err(ModelError::UnknownVariant {
                kind: "request status",
                value: s.to_string(),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pending_request_has_no_decision_stamps() {
        let request = VolunteerRequest::pending("v-1", Utc::now());
        assert_eq!(request.status, RequestStatus::Pending);
        assert!(request.approved_at.is_none());
        assert!(request.rejected_at.is_none());
        assert!(request.rejected_reason.is_none());
    }

    #[test]
    fn approved_count_ignores_pending_and_rejected() {
        let now = Utc::now();
        let mut slot = VolunteerSlot {
            id: "s-1".to_string(),
            date: NaiveDate::from_ymd_opt(2024, 6, 1).unwrap(),
            activity: "Morning visit".to_string(),
            capacity: 3,
            volunteer_requests: vec![
                VolunteerRequest::pending("v-1", now),
                VolunteerRequest::pending("v-2", now),
            ],
        };
        slot.volunteer_requests[1].status = RequestStatus::Approved;
        assert_eq!(slot.approved_count(), 1);
        assert!(slot.request_for("v-1").is_some());
        assert!(slot.request_for("v-9").is_none());
    }
}
