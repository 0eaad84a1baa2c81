//! CSV export for resident records.
//!
//! The view-state manager produces target records; this crate turns them into
//! delimited rows with a fixed column order and hands the bytes to a
//! download sink. Row production never mutates manager state.

mod error;
mod sink;
mod writer;

pub use error::{ExportError, Result};
pub use sink::{DownloadSink, FileDownloadSink, MemorySink};
pub use writer::{EXPORT_HEADERS, export_file_name, export_residents, write_csv};
