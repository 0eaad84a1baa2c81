//! CLI library components for the Resident Care Manager.

pub mod logging;
pub mod seed;
