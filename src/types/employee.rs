//! Employee record and the per-employee status rollup.

use serde::{Deserialize, Serialize};

use crate::types::task::TaskStatus;

/// An employee from the seed table.
///
/// Created at store construction and immutable thereafter; the only
/// thing that changes about an employee over time is the derived task
/// list held by the store. Uniquely identified by `id`.
///
/// The `password` field is seed configuration for the demo login
/// boundary, not a credential store -- it is compared as a plain string.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Employee {
    /// Unique identifier (e.g. `"e1"`).
    pub id: String,
    /// Display name.
    pub name: String,
    /// Login email, unique across the seed table.
    pub email: String,
    /// Login password, matched by string equality.
    pub password: String,
    /// Salary figure for dashboard display.
    pub salary: u64,
}

/// Per-employee task counts by status.
///
/// This is the rollup an admin dashboard renders on each employee card.
///
/// # Examples
///
/// ```
/// use taskdesk::TaskCounts;
///
/// let counts = TaskCounts::default();
/// assert_eq!(counts.total(), 0);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TaskCounts {
    /// Tasks waiting to be worked on.
    pub pending: usize,
    /// Tasks submitted for review.
    pub in_review: usize,
    /// Tasks that passed review.
    pub completed: usize,
    /// Tasks rejected in review.
    pub failed: usize,
}

impl TaskCounts {
    /// Total number of tasks across all statuses.
    pub fn total(&self) -> usize {
        self.pending + self.in_review + self.completed + self.failed
    }

    /// Increments the bucket for `status`.
    pub(crate) fn bump(&mut self, status: TaskStatus) {
        match status {
            TaskStatus::Pending => self.pending += 1,
            TaskStatus::InReview => self.in_review += 1,
            TaskStatus::Completed => self.completed += 1,
            TaskStatus::Failed => self.failed += 1,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn employee_serializes_camel_case() {
        let employee = Employee {
            id: "e1".to_string(),
            name: "Asha".to_string(),
            email: "employee1@example.com".to_string(),
            password: "123".to_string(),
            salary: 52_000,
        };

        let json = serde_json::to_value(&employee).unwrap();
        assert_eq!(json["id"], "e1");
        assert_eq!(json["name"], "Asha");
        assert_eq!(json["email"], "employee1@example.com");
        assert_eq!(json["salary"], 52_000);
    }

    #[test]
    fn bump_fills_the_right_bucket() {
        let mut counts = TaskCounts::default();
        counts.bump(TaskStatus::Pending);
        counts.bump(TaskStatus::InReview);
        counts.bump(TaskStatus::InReview);
        counts.bump(TaskStatus::Completed);
        counts.bump(TaskStatus::Failed);

        assert_eq!(counts.pending, 1);
        assert_eq!(counts.in_review, 2);
        assert_eq!(counts.completed, 1);
        assert_eq!(counts.failed, 1);
        assert_eq!(counts.total(), 5);
    }

    #[test]
    fn counts_serialize_camel_case() {
        let mut counts = TaskCounts::default();
        counts.bump(TaskStatus::InReview);

        let json = serde_json::to_value(counts).unwrap();
        assert_eq!(json["inReview"], 1);
        assert_eq!(json["pending"], 0);
    }
}
