//! Login boundary: credential matching over the seed table and the
//! active session slot.
//!
//! Credentials are matched by plain string equality -- this is demo
//! configuration, not a security boundary, and is deliberately not
//! engineered further. The manager tracks at most one active session;
//! logging in replaces it, logging out clears it. Neither touches the
//! task store.

use chrono::Utc;
use parking_lot::RwLock;

use crate::config::SeedConfig;
use crate::error::Error;
use crate::types::session::{Role, Session};

/// One row of the credential table.
#[derive(Debug, Clone)]
struct EmployeeCredential {
    employee_id: String,
    email: String,
    password: String,
}

/// Resolves logins against the seed credential table and holds the
/// active session.
///
/// # Examples
///
/// ```
/// use taskdesk::{Role, SeedConfig, SessionManager};
///
/// let sessions = SessionManager::from_seed(&SeedConfig::default());
///
/// let session = sessions.login("admin@example.com", "123").unwrap();
/// assert_eq!(session.role, Role::Admin);
/// assert!(sessions.current().is_some());
///
/// sessions.logout();
/// assert!(sessions.current().is_none());
/// ```
#[derive(Debug)]
pub struct SessionManager {
    admin_email: String,
    admin_password: String,
    employees: Vec<EmployeeCredential>,
    active: RwLock<Option<Session>>,
}

impl SessionManager {
    /// Builds a manager from the seed's admin and employee credentials.
    pub fn from_seed(seed: &SeedConfig) -> Self {
        let employees = seed
            .employees
            .iter()
            .map(|e| EmployeeCredential {
                employee_id: e.id.clone(),
                email: e.email.clone(),
                password: e.password.clone(),
            })
            .collect();

        Self {
            admin_email: seed.admin.email.clone(),
            admin_password: seed.admin.password.clone(),
            employees,
            active: RwLock::new(None),
        }
    }

    /// Authenticates `email`/`password` against the seed table.
    ///
    /// Admin credentials are checked first, then the employee roster.
    /// On success the returned session also becomes the active one,
    /// replacing any previous session.
    ///
    /// # Errors
    ///
    /// [`Error::Authentication`] when no row matches. The error does
    /// not reveal whether the email exists.
    ///
    /// # Examples
    ///
    /// ```
    /// use taskdesk::{SeedConfig, SessionManager};
    ///
    /// let sessions = SessionManager::from_seed(&SeedConfig::default());
    /// let session = sessions.login("employee2@example.com", "123").unwrap();
    /// assert_eq!(session.role.employee_id(), Some("e2"));
    /// ```
    pub fn login(&self, email: &str, password: &str) -> Result<Session, Error> {
        let role = self.resolve_role(email, password).ok_or_else(|| {
            tracing::warn!(email, "login rejected");
            Error::Authentication
        })?;

        let session = Session {
            role,
            email: email.to_string(),
            logged_in_at: Utc::now(),
        };
        *self.active.write() = Some(session.clone());

        tracing::debug!(email, role = %session.role, "login accepted");
        Ok(session)
    }

    /// The active session, if any.
    pub fn current(&self) -> Option<Session> {
        self.active.read().clone()
    }

    /// Clears the active session. Idempotent; no store mutation.
    pub fn logout(&self) {
        if self.active.write().take().is_some() {
            tracing::debug!("logout");
        }
    }

    fn resolve_role(&self, email: &str, password: &str) -> Option<Role> {
        if email == self.admin_email && password == self.admin_password {
            return Some(Role::Admin);
        }
        self.employees
            .iter()
            .find(|c| c.email == email && c.password == password)
            .map(|c| Role::Employee {
                employee_id: c.employee_id.clone(),
            })
    }
}
