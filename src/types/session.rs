//! Session role and the active-session record.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// The role an authenticated session acts under.
///
/// View dispatch is by pattern matching on this enum -- an admin
/// dashboard for [`Role::Admin`], a personal task list for
/// [`Role::Employee`].
///
/// # Examples
///
/// ```
/// use taskdesk::Role;
///
/// let role = Role::Employee {
///     employee_id: "e1".to_string(),
/// };
/// assert!(!role.is_admin());
/// assert_eq!(role.employee_id(), Some("e1"));
/// assert_eq!(Role::Admin.employee_id(), None);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Role {
    /// Visibility over all employees and task assignment rights.
    Admin,
    /// Scoped to one employee's task list and status updates.
    #[serde(rename_all = "camelCase")]
    Employee {
        /// The employee this session is scoped to.
        employee_id: String,
    },
}

impl Role {
    /// Returns `true` for the admin role.
    pub fn is_admin(&self) -> bool {
        matches!(self, Self::Admin)
    }

    /// Returns the employee id an employee session is scoped to, or
    /// `None` for admin sessions.
    pub fn employee_id(&self) -> Option<&str> {
        match self {
            Self::Admin => None,
            Self::Employee { employee_id } => Some(employee_id),
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Admin => write!(f, "admin"),
            Self::Employee { employee_id } => write!(f, "employee:{employee_id}"),
        }
    }
}

/// An authenticated session.
///
/// Produced by [`SessionManager::login`](crate::SessionManager::login);
/// holds the role, the email that logged in, and when.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Session {
    /// The role this session acts under.
    pub role: Role,
    /// The email that authenticated.
    pub email: String,
    /// When the session was established (UTC).
    pub logged_in_at: DateTime<Utc>,
}
