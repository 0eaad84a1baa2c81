//! Download sinks.
//!
//! The export layer only produces bytes; delivery (a browser download, a file
//! on disk, a test buffer) is behind this seam.

use std::fs;
use std::path::PathBuf;

use crate::error::{ExportError, Result};

/// Receives a finished export under its download file name.
pub trait DownloadSink {
    fn deliver(&mut self, name: &str, bytes: &[u8]) -> Result<()>;
}

/// Writes exports into a directory on disk.
pub struct FileDownloadSink {
    dir: PathBuf,
}

impl FileDownloadSink {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn path_for(&self, name: &str) -> PathBuf {
        self.dir.join(name)
    }
}

impl DownloadSink for FileDownloadSink {
    fn deliver(&mut self, name: &str, bytes: &[u8]) -> Result<()> {
        let wrap = |source| ExportError::Sink {
            name: name.to_string(),
            source,
        };
        fs::create_dir_all(&self.dir).map_err(wrap)?;
        fs::write(self.path_for(name), bytes).map_err(wrap)
    }
}

/// Captures exports in memory; used by tests and previews.
#[derive(Debug, Default)]
pub struct MemorySink {
    pub deliveries: Vec<(String, Vec<u8>)>,
}

impl DownloadSink for MemorySink {
    fn deliver(&mut self, name: &str, bytes: &[u8]) -> Result<()> {
        self.deliveries.push((name.to_string(), bytes.to_vec()));
        Ok(())
    }
}
