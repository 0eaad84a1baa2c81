//! Session and role gate.
//!
//! Screens read the current role at entry; a missing or mismatched role
//! produces a redirect decision to the login route. Credential validation is
//! somebody else's problem.

use rcm_model::Role;

use crate::error::{AppError, Result};

/// Route the gate redirects to when access is denied.
pub const LOGIN_ROUTE: &str = "/login";

/// A signed-in session as this layer sees it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Session {
    pub user: String,
    pub role: Role,
}

impl Session {
    pub fn new(user: impl Into<String>, role: Role) -> Self {
        Self {
            user: user.into(),
            role,
        }
    }
}

/// Checks the session against the role a screen requires.
///
/// `None` (no session) and a mismatched role both deny entry.
pub fn guard_screen(session: Option<&Session>, required: Role) -> Result<()> {
    match session {
        Some(session) if session.role == required => Ok(()),
        _ => {
            tracing::warn!(required = %required, "screen entry denied");
            Err(AppError::AccessDenied {
                required,
                redirect: LOGIN_ROUTE,
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn manager_passes_manager_gate() {
        let session = Session::new("alice", Role::Manager);
        assert!(guard_screen(Some(&session), Role::Manager).is_ok());
    }

    #[test]
    fn wrong_or_missing_role_redirects_to_login() {
        let session = Session::new("bob", Role::Volunteer);
        for denied in [guard_screen(Some(&session), Role::Manager), guard_screen(None, Role::Manager)] {
            match denied {
                Err(AppError::AccessDenied { redirect, .. }) => assert_eq!(redirect, LOGIN_ROUTE),
                other => panic!("expected denial, got {other:?}"),
            }
        }
    }
}
