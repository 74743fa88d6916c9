//! Core task types: [`TaskStatus`], [`TaskAction`], and the wire-format
//! [`Task`].
//!
//! # Serialization
//!
//! `Task` uses `#[serde(rename_all = "camelCase")]` so the JSON views
//! consume reads `employeeId`, `assignedDate`, and so on. `TaskStatus`
//! and `TaskAction` serialize as `snake_case` strings.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::Error;

/// Task review lifecycle status.
///
/// A task progresses through these states according to a defined state
/// machine. `Completed` is terminal and rejects all further actions;
/// self-transitions are rejected.
///
/// # State Machine
///
/// ```text
/// Pending  -> InReview              (submit)
/// InReview -> Completed, Failed     (approve / reject)
/// Failed   -> InReview              (resubmit)
/// Completed -> (terminal, no transitions)
/// ```
///
/// # Examples
///
/// ```
/// use taskdesk::TaskStatus;
///
/// let status = TaskStatus::Pending;
/// assert!(!status.is_terminal());
/// assert!(status.can_transition_to(&TaskStatus::InReview));
/// assert!(!status.can_transition_to(&TaskStatus::Completed)); // must go through review
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TaskStatus {
    /// Assigned but not yet worked on.
    Pending,
    /// Submitted for admin review.
    InReview,
    /// Review passed (terminal).
    Completed,
    /// Review rejected; eligible for resubmission.
    Failed,
}

impl fmt::Display for TaskStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Pending => write!(f, "pending"),
            Self::InReview => write!(f, "in_review"),
            Self::Completed => write!(f, "completed"),
            Self::Failed => write!(f, "failed"),
        }
    }
}

/// An action a caller can apply to a task's status.
///
/// Actions are what the views invoke; the mapping from
/// `(current status, action)` to the next status is total -- every pair
/// either yields a new status or an explicit
/// [`Error::InvalidTransition`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TaskAction {
    /// Send a `Pending` or `Failed` task to review.
    Submit,
    /// Accept a task under review.
    Approve,
    /// Reject a task under review.
    Reject,
    /// Send a `Failed` task back to review.
    Resubmit,
}

impl fmt::Display for TaskAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Submit => write!(f, "submit"),
            Self::Approve => write!(f, "approve"),
            Self::Reject => write!(f, "reject"),
            Self::Resubmit => write!(f, "resubmit"),
        }
    }
}

impl TaskStatus {
    /// Returns `true` if this status is terminal (no further transitions
    /// allowed). Only `Completed` is terminal; `Failed` tasks can be
    /// resubmitted.
    ///
    /// # Examples
    ///
    /// ```
    /// use taskdesk::TaskStatus;
    ///
    /// assert!(TaskStatus::Completed.is_terminal());
    /// assert!(!TaskStatus::Failed.is_terminal());
    /// ```
    pub fn is_terminal(&self) -> bool {
        matches!(self, Self::Completed)
    }

    /// Returns `true` if transitioning from this status to `next` is
    /// allowed by the state machine.
    ///
    /// Valid transitions:
    /// - `Pending` -> `InReview`
    /// - `InReview` -> `Completed`, `Failed`
    /// - `Failed` -> `InReview`
    ///
    /// Self-transitions are rejected, as is everything out of
    /// `Completed`.
    ///
    /// # Examples
    ///
    /// ```
    /// use taskdesk::TaskStatus;
    ///
    /// assert!(TaskStatus::InReview.can_transition_to(&TaskStatus::Failed));
    /// assert!(!TaskStatus::Completed.can_transition_to(&TaskStatus::InReview));
    /// assert!(!TaskStatus::Pending.can_transition_to(&TaskStatus::Pending));
    /// ```
    pub fn can_transition_to(&self, next: &Self) -> bool {
        match self {
            Self::Pending => matches!(next, Self::InReview),
            Self::InReview => matches!(next, Self::Completed | Self::Failed),
            Self::Failed => matches!(next, Self::InReview),
            Self::Completed => false,
        }
    }

    /// Applies `action` to this status, returning the next status.
    ///
    /// This is the total transition function of the state machine:
    /// every `(status, action)` pair either produces the new status or
    /// an [`Error::InvalidTransition`] naming the task, the current
    /// status, and the rejected action.
    ///
    /// `Submit` covers both the initial `Pending -> InReview` move and
    /// resubmission from `Failed`; `Resubmit` is the explicit
    /// `Failed -> InReview` form.
    ///
    /// # Examples
    ///
    /// ```
    /// use taskdesk::{TaskAction, TaskStatus};
    ///
    /// let next = TaskStatus::Pending.apply("t1", TaskAction::Submit).unwrap();
    /// assert_eq!(next, TaskStatus::InReview);
    ///
    /// let err = TaskStatus::Completed.apply("t1", TaskAction::Submit);
    /// assert!(err.is_err());
    /// ```
    pub fn apply(self, task_id: &str, action: TaskAction) -> Result<Self, Error> {
        let next = match (self, action) {
            (Self::Pending | Self::Failed, TaskAction::Submit) => Some(Self::InReview),
            (Self::Failed, TaskAction::Resubmit) => Some(Self::InReview),
            (Self::InReview, TaskAction::Approve) => Some(Self::Completed),
            (Self::InReview, TaskAction::Reject) => Some(Self::Failed),
            _ => None,
        };

        next.ok_or_else(|| Error::InvalidTransition {
            task_id: task_id.to_string(),
            from: self,
            action,
        })
    }
}

/// A unit of work assigned to one employee.
///
/// This is the wire type views render. `employee_id` is a non-owning
/// reference to an existing [`Employee`](crate::Employee) and is
/// immutable after creation; `status` is mutated only through the
/// store's lifecycle operations.
///
/// # Examples
///
/// ```
/// use taskdesk::{Task, TaskStatus};
/// use chrono::Utc;
///
/// let task = Task {
///     id: "7f9c2ba4-e66e-4776-9f2a-000000000000".to_string(),
///     employee_id: "e1".to_string(),
///     title: "Fix bug".to_string(),
///     description: "crash on empty input".to_string(),
///     assigned_date: Utc::now(),
///     status: TaskStatus::Pending,
/// };
///
/// let json = serde_json::to_value(&task).unwrap();
/// assert_eq!(json["employeeId"], "e1");
/// assert_eq!(json["status"], "pending");
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Task {
    /// Unique identifier, stable across mutations.
    pub id: String,

    /// Id of the employee this task is assigned to.
    pub employee_id: String,

    /// Short title. Never empty.
    pub title: String,

    /// Free-form description. May be empty.
    pub description: String,

    /// UTC timestamp of when the task was assigned.
    pub assigned_date: DateTime<Utc>,

    /// Current lifecycle status.
    pub status: TaskStatus,
}

#[cfg(test)]
mod tests {
    use super::*;

    const ALL_STATUSES: [TaskStatus; 4] = [
        TaskStatus::Pending,
        TaskStatus::InReview,
        TaskStatus::Completed,
        TaskStatus::Failed,
    ];

    const ALL_ACTIONS: [TaskAction; 4] = [
        TaskAction::Submit,
        TaskAction::Approve,
        TaskAction::Reject,
        TaskAction::Resubmit,
    ];

    #[test]
    fn status_display_matches_serde() {
        for status in ALL_STATUSES {
            let json = serde_json::to_value(status).unwrap();
            assert_eq!(json, status.to_string(), "mismatch for {status:?}");
        }
    }

    #[test]
    fn status_serializes_snake_case() {
        assert_eq!(serde_json::to_value(TaskStatus::Pending).unwrap(), "pending");
        assert_eq!(
            serde_json::to_value(TaskStatus::InReview).unwrap(),
            "in_review"
        );
        assert_eq!(
            serde_json::to_value(TaskStatus::Completed).unwrap(),
            "completed"
        );
        assert_eq!(serde_json::to_value(TaskStatus::Failed).unwrap(), "failed");
    }

    #[test]
    fn status_serde_round_trip() {
        for status in ALL_STATUSES {
            let json = serde_json::to_value(status).unwrap();
            let back: TaskStatus = serde_json::from_value(json).unwrap();
            assert_eq!(status, back);
        }
    }

    #[test]
    fn action_display_matches_serde() {
        for action in ALL_ACTIONS {
            let json = serde_json::to_value(action).unwrap();
            assert_eq!(json, action.to_string(), "mismatch for {action:?}");
        }
    }

    #[test]
    fn only_completed_is_terminal() {
        assert!(!TaskStatus::Pending.is_terminal());
        assert!(!TaskStatus::InReview.is_terminal());
        assert!(TaskStatus::Completed.is_terminal());
        assert!(!TaskStatus::Failed.is_terminal());
    }

    #[test]
    fn transition_relation() {
        // The full 4x4 matrix: exactly four valid edges.
        let valid = [
            (TaskStatus::Pending, TaskStatus::InReview),
            (TaskStatus::InReview, TaskStatus::Completed),
            (TaskStatus::InReview, TaskStatus::Failed),
            (TaskStatus::Failed, TaskStatus::InReview),
        ];
        for from in ALL_STATUSES {
            for to in ALL_STATUSES {
                let expected = valid.contains(&(from, to));
                assert_eq!(
                    from.can_transition_to(&to),
                    expected,
                    "{from} -> {to} should be {expected}"
                );
            }
        }
    }

    #[test]
    fn apply_submit_from_pending_and_failed() {
        assert_eq!(
            TaskStatus::Pending.apply("t", TaskAction::Submit).unwrap(),
            TaskStatus::InReview
        );
        assert_eq!(
            TaskStatus::Failed.apply("t", TaskAction::Submit).unwrap(),
            TaskStatus::InReview
        );
    }

    #[test]
    fn apply_resubmit_only_from_failed() {
        assert_eq!(
            TaskStatus::Failed.apply("t", TaskAction::Resubmit).unwrap(),
            TaskStatus::InReview
        );
        for from in [TaskStatus::Pending, TaskStatus::InReview, TaskStatus::Completed] {
            assert!(from.apply("t", TaskAction::Resubmit).is_err());
        }
    }

    #[test]
    fn apply_review_verdicts_only_from_in_review() {
        assert_eq!(
            TaskStatus::InReview.apply("t", TaskAction::Approve).unwrap(),
            TaskStatus::Completed
        );
        assert_eq!(
            TaskStatus::InReview.apply("t", TaskAction::Reject).unwrap(),
            TaskStatus::Failed
        );
        for from in [TaskStatus::Pending, TaskStatus::Completed, TaskStatus::Failed] {
            assert!(from.apply("t", TaskAction::Approve).is_err());
            assert!(from.apply("t", TaskAction::Reject).is_err());
        }
    }

    #[test]
    fn completed_rejects_every_action() {
        for action in ALL_ACTIONS {
            let result = TaskStatus::Completed.apply("task-9", action);
            match result {
                Err(Error::InvalidTransition { task_id, from, .. }) => {
                    assert_eq!(task_id, "task-9");
                    assert_eq!(from, TaskStatus::Completed);
                },
                other => panic!("expected InvalidTransition, got: {other:?}"),
            }
        }
    }

    #[test]
    fn apply_error_includes_context() {
        let err = TaskStatus::Pending
            .apply("task-3", TaskAction::Approve)
            .unwrap_err();
        let msg = err.to_string();
        assert!(msg.contains("task-3"), "message should name the task: {msg}");
        assert!(msg.contains("approve"), "message should name the action: {msg}");
        assert!(msg.contains("pending"), "message should name the status: {msg}");
    }

    #[test]
    fn task_serializes_camel_case() {
        let task = Task {
            id: "t-1".to_string(),
            employee_id: "e1".to_string(),
            title: "Fix bug".to_string(),
            description: "crash on empty input".to_string(),
            assigned_date: Utc::now(),
            status: TaskStatus::Pending,
        };

        let json = serde_json::to_value(&task).unwrap();
        assert_eq!(json["id"], "t-1");
        assert_eq!(json["employeeId"], "e1");
        assert_eq!(json["title"], "Fix bug");
        assert_eq!(json["status"], "pending");
        assert!(json.get("assignedDate").is_some());
        assert!(json.get("employee_id").is_none(), "no snake_case keys on the wire");
    }

    #[test]
    fn task_round_trip_deserialization() {
        let json_str = r#"{
            "id": "round-trip-1",
            "employeeId": "e2",
            "title": "Write docs",
            "description": "",
            "assignedDate": "2026-08-06T10:30:00Z",
            "status": "in_review"
        }"#;

        let task: Task = serde_json::from_str(json_str).unwrap();
        assert_eq!(task.id, "round-trip-1");
        assert_eq!(task.employee_id, "e2");
        assert_eq!(task.status, TaskStatus::InReview);
        assert!(task.description.is_empty());

        let re_json = serde_json::to_value(&task).unwrap();
        assert_eq!(re_json["employeeId"], "e2");
        assert_eq!(re_json["status"], "in_review");
    }
}
