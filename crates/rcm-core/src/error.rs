//! Core error taxonomy.
//!
//! Every failure here is local and recoverable: the operation aborts without
//! touching the collection or view parameters, and the caller surfaces the
//! message through a notification.

use rcm_model::ModelError;
use thiserror::Error;

/// Failure of a view-state operation.
#[derive(Debug, Error)]
pub enum CoreError {
    /// Required field missing/invalid, or a bulk action with an empty
    /// effective target set.
    #[error("{message}")]
    Validation { message: String },

    /// Update/delete referenced an id no longer in the collection.
    #[error("resident {id} not found")]
    NotFound { id: u64 },
}

impl CoreError {
    pub fn validation(message: impl Into<String>) -> Self {
        CoreError::Validation {
            message: message.into(),
        }
    }

    /// Message suitable for a toast notification.
    pub fn user_message(&self) -> String {
        match self {
            CoreError::Validation { message } => message.clone(),
            CoreError::NotFound { id } => {
                format!("Resident #{id} no longer exists. The list may be out of date.")
            }
        }
    }
}

impl From<ModelError> for CoreError {
    fn from(err: ModelError) -> Self {
        CoreError::Validation {
            message: err.to_string(),
        }
    }
}

pub type Result<T> = std::result::Result<T, CoreError>;
