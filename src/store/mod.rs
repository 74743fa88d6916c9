//! The task store: canonical employee and task collections.
//!
//! # Architecture
//!
//! [`TaskStore`] is the seam view layers consume -- object-safe, so an
//! admin dashboard and an employee dashboard can share one
//! `Arc<dyn TaskStore>`. All task mutation funnels through the
//! lifecycle operations on this trait; the transition rules themselves
//! are the pure functions on
//! [`TaskStatus`](crate::types::task::TaskStatus). Views never write
//! task fields directly.
//!
//! Every operation is synchronous over in-memory data: no I/O, no
//! suspension, no partial-failure modes. The reference implementation
//! is [`InMemoryStore`].

pub mod memory;

use serde::Serialize;

pub use memory::InMemoryStore;

use crate::error::Error;
use crate::types::employee::{Employee, TaskCounts};
use crate::types::task::Task;

/// Store-wide task totals for the dashboard header.
///
/// Counts per status across all employees, plus the number of tasks
/// assigned on the queried calendar day.
///
/// # Examples
///
/// ```
/// use taskdesk::{InMemoryStore, TaskStore};
///
/// let store = InMemoryStore::new();
/// store.assign_task("e1", "Fix bug", "").unwrap();
///
/// let summary = store.summary();
/// assert_eq!(summary.pending, 1);
/// assert_eq!(summary.assigned_today, 1);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StatusSummary {
    /// Tasks in `Pending`.
    pub pending: usize,
    /// Tasks in `InReview`.
    pub in_review: usize,
    /// Tasks in `Completed`.
    pub completed: usize,
    /// Tasks in `Failed`.
    pub failed: usize,
    /// Tasks whose `assigned_date` falls on the queried day.
    pub assigned_today: usize,
}

/// Canonical employee and task collections with role-scoped reads.
///
/// Implementations must be `Send + Sync` so the store can be shared
/// across view layers behind `Arc<dyn TaskStore>`. Read scoping is the
/// caller's convention: `list_employees` is for admin views,
/// `list_tasks_for` for a single employee's view -- the store does not
/// itself check who is asking.
pub trait TaskStore: Send + Sync {
    /// Creates a new task for `employee_id` with status `Pending`,
    /// `assigned_date = now`, and a fresh unique id.
    ///
    /// # Errors
    ///
    /// [`Error::Validation`] if `employee_id` does not reference an
    /// existing employee, or if `title` is empty (whitespace-only
    /// counts as empty).
    fn assign_task(&self, employee_id: &str, title: &str, description: &str)
        -> Result<Task, Error>;

    /// Sends a `Pending` or `Failed` task to review.
    ///
    /// # Errors
    ///
    /// - [`Error::TaskNotFound`] if no task with the given id exists.
    /// - [`Error::InvalidTransition`] from any other status
    ///   (e.g. already `Completed`).
    fn submit_for_review(&self, task_id: &str) -> Result<Task, Error>;

    /// Accepts a task under review: `InReview` -> `Completed`.
    ///
    /// # Errors
    ///
    /// - [`Error::TaskNotFound`] if no task with the given id exists.
    /// - [`Error::InvalidTransition`] unless the task is `InReview`.
    fn approve_task(&self, task_id: &str) -> Result<Task, Error>;

    /// Rejects a task under review: `InReview` -> `Failed`.
    ///
    /// # Errors
    ///
    /// - [`Error::TaskNotFound`] if no task with the given id exists.
    /// - [`Error::InvalidTransition`] unless the task is `InReview`.
    fn reject_task(&self, task_id: &str) -> Result<Task, Error>;

    /// Sends a `Failed` task back to review: `Failed` -> `InReview`.
    ///
    /// # Errors
    ///
    /// - [`Error::TaskNotFound`] if no task with the given id exists.
    /// - [`Error::InvalidTransition`] unless the task is `Failed`.
    fn resubmit(&self, task_id: &str) -> Result<Task, Error>;

    /// All employees, in seed order.
    fn list_employees(&self) -> Vec<Employee>;

    /// One employee by id.
    ///
    /// # Errors
    ///
    /// [`Error::EmployeeNotFound`] if the id is unknown.
    fn get_employee(&self, employee_id: &str) -> Result<Employee, Error>;

    /// One task by id.
    ///
    /// # Errors
    ///
    /// [`Error::TaskNotFound`] if the id is unknown.
    fn get_task(&self, task_id: &str) -> Result<Task, Error>;

    /// All tasks assigned to `employee_id`, in assignment order.
    ///
    /// Returns an empty list for unknown employees -- the id check
    /// belongs to [`assign_task`](TaskStore::assign_task).
    fn list_tasks_for(&self, employee_id: &str) -> Vec<Task>;

    /// Per-status counts for one employee's tasks.
    fn task_counts(&self, employee_id: &str) -> TaskCounts;

    /// Store-wide counts per status plus the number of tasks assigned
    /// on the current UTC calendar day.
    fn summary(&self) -> StatusSummary;
}
