use rcm_model::Role;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
    /// Screen entry without the required role; the caller should navigate to
    /// `redirect`.
    #[error("access denied: {required} role required")]
    AccessDenied { required: Role, redirect: &'static str },

    /// A password-change rule was violated.
    #[error("{0}")]
    PasswordRule(String),
}

pub type Result<T> = std::result::Result<T, AppError>;
