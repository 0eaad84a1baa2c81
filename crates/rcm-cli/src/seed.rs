//! Resident seed files.
//!
//! The CLI works against a JSON array of resident records; this stands in
//! for whatever store a deployment reads at screen mount.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};

use rcm_model::Resident;

/// Loads a resident collection from a JSON seed file.
pub fn load_residents(path: &Path) -> Result<Vec<Resident>> {
    let raw = fs::read_to_string(path)
        .with_context(|| format!("read seed file {}", path.display()))?;
    let residents: Vec<Resident> = serde_json::from_str(&raw)
        .with_context(|| format!("parse seed file {}", path.display()))?;
    tracing::debug!(count = residents.len(), "seed loaded");
    Ok(residents)
}
