//! Async collaborators for the dashboard.
//!
//! Three seams: the resident backend (simulated latency standing in for a
//! real server), the single-flight submit guard, and the document store that
//! backs the volunteer-request screen.

pub mod error;
pub mod guard;
pub mod resident_backend;
pub mod store;

pub use error::{BackendError, Result};
pub use guard::{SubmitGuard, SubmitPermit};
pub use resident_backend::{ResidentBackend, SIMULATED_LATENCY, SimulatedBackend};
pub use store::{DocumentStore, InMemoryStore};
