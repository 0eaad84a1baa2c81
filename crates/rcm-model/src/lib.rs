//! Domain model for the Resident Care Manager.
//!
//! Plain data types shared across the workspace: resident records and their
//! lifecycle status, the create/edit draft payload, volunteer/slot/request
//! types for the matching screen, and account-level enums.

pub mod account;
pub mod error;
pub mod resident;
pub mod status;
pub mod volunteer;

pub use account::{Language, Role};
pub use error::{ModelError, Result};
pub use resident::{Resident, ResidentDraft};
pub use status::ResidentStatus;
pub use volunteer::{RequestStatus, Volunteer, VolunteerRequest, VolunteerSlot};
