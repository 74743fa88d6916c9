//! Error types for task tracking operations.
//!
//! Provides [`Error`], one variant per failure kind. Every variant is
//! recoverable at the call site that invoked the operation; views surface
//! the message and carry on.

use thiserror::Error;

use crate::types::task::{TaskAction, TaskStatus};

/// Errors that can occur during store and session operations.
///
/// Each variant carries the context needed to render a useful message
/// (task id, current status, rejected action). Use [`kind`](Error::kind)
/// when a view needs a stable machine-readable discriminator instead of
/// the human-readable message.
///
/// # Examples
///
/// ```
/// use taskdesk::Error;
///
/// let err = Error::TaskNotFound {
///     task_id: "missing-task".to_string(),
/// };
/// assert_eq!(err.kind(), "not_found");
/// assert!(err.to_string().contains("missing-task"));
/// ```
#[derive(Debug, Error)]
pub enum Error {
    /// Malformed input to an operation (unknown assignee, empty title,
    /// invalid seed configuration).
    #[error("validation failed: {message}")]
    Validation {
        /// Why the input was rejected.
        message: String,
    },

    /// Employee with the given id was not found.
    #[error("employee not found: {employee_id}")]
    EmployeeNotFound {
        /// The employee id that was not found.
        employee_id: String,
    },

    /// Task with the given id was not found.
    #[error("task not found: {task_id}")]
    TaskNotFound {
        /// The task id that was not found.
        task_id: String,
    },

    /// Attempted an action the state machine does not allow from the
    /// task's current status.
    #[error("task {task_id}: cannot {action} from {from}")]
    InvalidTransition {
        /// The task that was being transitioned.
        task_id: String,
        /// The current status of the task.
        from: TaskStatus,
        /// The action that was rejected.
        action: TaskAction,
    },

    /// Login credentials did not match the seed table. Deliberately
    /// carries no detail about which of email/password was wrong.
    #[error("invalid email or password")]
    Authentication,
}

impl Error {
    /// Returns a stable machine-readable kind for this error.
    ///
    /// Views dispatch on this when they need more than a message but do
    /// not want to match on variants directly:
    /// `"validation"`, `"not_found"`, `"invalid_transition"`,
    /// `"authentication"`.
    ///
    /// # Examples
    ///
    /// ```
    /// use taskdesk::Error;
    ///
    /// let err = Error::Validation {
    ///     message: "task title must not be empty".to_string(),
    /// };
    /// assert_eq!(err.kind(), "validation");
    /// assert_eq!(Error::Authentication.kind(), "authentication");
    /// ```
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Validation { .. } => "validation",
            Self::EmployeeNotFound { .. } | Self::TaskNotFound { .. } => "not_found",
            Self::InvalidTransition { .. } => "invalid_transition",
            Self::Authentication => "authentication",
        }
    }
}
