use thiserror::Error;

#[derive(Debug, Error)]
pub enum ExportError {
    /// Nothing to export: the effective selection was empty.
    #[error("nothing to export")]
    Empty,

    #[error("failed to build CSV: {0}")]
    Csv(#[from] csv::Error),

    #[error("failed to deliver export `{name}`")]
    Sink {
        name: String,
        #[source]
        source: std::io::Error,
    },
}

pub type Result<T> = std::result::Result<T, ExportError>;
