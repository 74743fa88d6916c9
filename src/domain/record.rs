//! Task record -- the store's internal representation of a task.

use chrono::Utc;
use uuid::Uuid;

use crate::error::Error;
use crate::types::task::{Task, TaskAction, TaskStatus};

/// Internal storage representation of a task.
///
/// Wraps the wire-format [`Task`] with the assignment sequence number
/// the store uses to return tasks in assignment order. Views never see
/// `seq`; they receive the wire task via [`to_wire_task`].
///
/// [`to_wire_task`]: TaskRecord::to_wire_task
///
/// # Examples
///
/// ```
/// use taskdesk::{TaskRecord, TaskStatus};
///
/// let record = TaskRecord::new(0, "e1", "Fix bug", "crash on empty input");
/// assert_eq!(record.task.status, TaskStatus::Pending);
/// assert_eq!(record.task.employee_id, "e1");
/// assert!(!record.task.id.is_empty());
/// ```
#[derive(Debug, Clone)]
pub struct TaskRecord {
    /// The wire-format task.
    pub task: Task,

    /// Assignment sequence number, monotonically increasing per store.
    /// Listing sorts on this so interleaved assignments to different
    /// employees still come back in assignment order per employee.
    pub seq: u64,
}

impl TaskRecord {
    /// Creates a new record in the `Pending` state.
    ///
    /// Generates a UUIDv4 task id and stamps `assigned_date` with the
    /// current UTC time. Input validation (known employee, non-empty
    /// title) is the store's job; the record constructor trusts its
    /// caller.
    pub fn new(seq: u64, employee_id: &str, title: &str, description: &str) -> Self {
        let task = Task {
            id: Uuid::new_v4().to_string(),
            employee_id: employee_id.to_string(),
            title: title.to_string(),
            description: description.to_string(),
            assigned_date: Utc::now(),
            status: TaskStatus::Pending,
        };

        Self { task, seq }
    }

    /// Applies `action` to this record's status in place.
    ///
    /// Validates through the state machine; on rejection the record is
    /// unchanged. `status` is the only field that mutates.
    ///
    /// # Errors
    ///
    /// [`Error::InvalidTransition`] if the state machine rejects the
    /// `(current status, action)` pair.
    pub fn apply(&mut self, action: TaskAction) -> Result<(), Error> {
        self.task.status = self.task.status.apply(&self.task.id, action)?;
        Ok(())
    }

    /// Returns a clone of the wire-format task.
    pub fn to_wire_task(&self) -> Task {
        self.task.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_record_has_uuid_id() {
        let record = TaskRecord::new(0, "e1", "title", "desc");
        // UUID v4 format: 8-4-4-4-12 hex chars
        assert_eq!(record.task.id.len(), 36);
        assert_eq!(record.task.id.matches('-').count(), 4);
    }

    #[test]
    fn new_record_is_pending() {
        let record = TaskRecord::new(3, "e2", "title", "");
        assert_eq!(record.task.status, TaskStatus::Pending);
        assert_eq!(record.seq, 3);
        assert_eq!(record.task.employee_id, "e2");
    }

    #[test]
    fn fresh_ids_are_unique() {
        let a = TaskRecord::new(0, "e1", "t", "");
        let b = TaskRecord::new(1, "e1", "t", "");
        assert_ne!(a.task.id, b.task.id);
    }

    #[test]
    fn apply_mutates_only_status() {
        let mut record = TaskRecord::new(0, "e1", "title", "desc");
        let before = record.task.clone();

        record.apply(TaskAction::Submit).unwrap();

        assert_eq!(record.task.status, TaskStatus::InReview);
        assert_eq!(record.task.id, before.id);
        assert_eq!(record.task.employee_id, before.employee_id);
        assert_eq!(record.task.title, before.title);
        assert_eq!(record.task.assigned_date, before.assigned_date);
    }

    #[test]
    fn rejected_apply_leaves_record_unchanged() {
        let mut record = TaskRecord::new(0, "e1", "title", "desc");
        let result = record.apply(TaskAction::Approve); // Pending: not reviewable
        assert!(matches!(result, Err(Error::InvalidTransition { .. })));
        assert_eq!(record.task.status, TaskStatus::Pending);
    }

    #[test]
    fn to_wire_task_returns_clone() {
        let record = TaskRecord::new(0, "e1", "title", "desc");
        let wire = record.to_wire_task();
        assert_eq!(wire, record.task);
    }
}
