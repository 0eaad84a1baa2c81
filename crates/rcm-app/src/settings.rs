//! Account settings: password change and interface language.

use rcm_model::Language;

use crate::error::{AppError, Result};

/// Minimum accepted password length.
pub const MIN_PASSWORD_LEN: usize = 8;

/// Per-account settings state.
///
/// The stored password is a stub standing in for whatever the real
/// authentication layer keeps; only the change-validation rules live here.
#[derive(Debug, Clone)]
pub struct AccountSettings {
    language: Language,
    password: String,
}

impl AccountSettings {
    pub fn new(password: impl Into<String>) -> Self {
        Self {
            language: Language::default(),
            password: password.into(),
        }
    }

    pub fn language(&self) -> Language {
        self.language
    }

    pub fn set_language(&mut self, language: Language) {
        self.language = language;
        tracing::info!(language = %language, "interface language changed");
    }

    /// Validates and applies a password change: the current password must
    /// match, the new one must meet the length rule, and the confirmation
    /// must equal the new password. Nothing changes on failure.
    pub fn change_password(&mut self, current: &str, new: &str, confirm: &str) -> Result<()> {
        if current != self.password {
            return Err(AppError::PasswordRule(
                "Current password is incorrect.".to_string(),
            ));
        }
        if new.len() < MIN_PASSWORD_LEN {
            return Err(AppError::PasswordRule(format!(
                "New password must be at least {MIN_PASSWORD_LEN} characters."
            )));
        }
        if new != confirm {
            return Err(AppError::PasswordRule(
                "Password confirmation does not match.".to_string(),
            ));
        }
        self.password = new.to_string();
        tracing::info!("password changed");
        Ok(())
    }

    /// True when `candidate` matches the stored password. Login flows are
    /// out of scope; this only backs the change-password check in tests.
    pub fn password_matches(&self, candidate: &str) -> bool {
        self.password == candidate
    }
}
