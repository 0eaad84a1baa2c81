use thiserror::Error;

#[derive(Debug, Error)]
pub enum BackendError {
    /// A read against the backing store failed. Existing state is left
    /// untouched; the caller surfaces a notification and does not retry.
    #[error("failed to load data: {message}")]
    TransientFetch { message: String },

    /// A mutating call was attempted while another one is outstanding.
    #[error("another submission is still in progress")]
    Busy,

    /// A slot update referenced an id the store does not hold.
    #[error("slot `{0}` not found")]
    SlotNotFound(String),
}

impl BackendError {
    pub fn transient(message: impl Into<String>) -> Self {
        BackendError::TransientFetch {
            message: message.into(),
        }
    }

    /// Message suitable for a toast notification.
    pub fn user_message(&self) -> String {
        match self {
            BackendError::TransientFetch { .. } => {
                "Could not reach the server. Please try again later.".to_string()
            }
            BackendError::Busy => "Please wait for the current operation to finish.".to_string(),
            BackendError::SlotNotFound(id) => {
                format!("The calendar slot `{id}` no longer exists.")
            }
        }
    }
}

pub type Result<T> = std::result::Result<T, BackendError>;
