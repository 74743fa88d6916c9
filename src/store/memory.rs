//! In-memory task store.
//!
//! [`InMemoryStore`] holds the employee directory in an `IndexMap`
//! (seed order preserved for `list_employees`) and task records in a
//! `DashMap` keyed by task id. Assignment order is tracked with an
//! atomic sequence counter stamped onto each
//! [`TaskRecord`](crate::domain::TaskRecord); listing sorts on it.
//!
//! All state is process-local: a restart resets to the seed. There is
//! no persistence layer to reconcile with.
//!
//! # Concurrency
//!
//! Operations are synchronous. `DashMap` gives shard-level locking so
//! the store is `Send + Sync` and can sit behind `Arc<dyn TaskStore>`
//! shared by multiple views; each lifecycle mutation validates and
//! applies under the entry's lock, so a task never holds a status
//! outside the four enumerated values.

use std::sync::atomic::{AtomicU64, Ordering};

use chrono::{NaiveDate, Utc};
use dashmap::DashMap;
use indexmap::IndexMap;

use crate::config::SeedConfig;
use crate::domain::TaskRecord;
use crate::error::Error;
use crate::types::employee::{Employee, TaskCounts};
use crate::types::task::{Task, TaskAction, TaskStatus};

use super::{StatusSummary, TaskStore};

/// Thread-safe in-memory store seeded from a [`SeedConfig`].
///
/// # Examples
///
/// ```
/// use taskdesk::{InMemoryStore, TaskStatus, TaskStore};
///
/// let store = InMemoryStore::new(); // built-in default seed
/// let task = store.assign_task("e1", "Fix bug", "crash on empty input").unwrap();
/// assert_eq!(task.status, TaskStatus::Pending);
///
/// let task = store.submit_for_review(&task.id).unwrap();
/// let task = store.approve_task(&task.id).unwrap();
/// assert_eq!(task.status, TaskStatus::Completed);
/// ```
#[derive(Debug)]
pub struct InMemoryStore {
    employees: IndexMap<String, Employee>,
    tasks: DashMap<String, TaskRecord>,
    next_seq: AtomicU64,
}

impl InMemoryStore {
    /// Creates a store from the built-in default seed.
    ///
    /// # Examples
    ///
    /// ```
    /// use taskdesk::{InMemoryStore, TaskStore};
    ///
    /// let store = InMemoryStore::new();
    /// assert_eq!(store.list_employees().len(), 5);
    /// ```
    pub fn new() -> Self {
        // The built-in seed is known-valid, so skip validation.
        Self::build(SeedConfig::default().employees)
    }

    /// Creates a store from a validated copy of `seed`.
    ///
    /// # Errors
    ///
    /// [`Error::Validation`] if the seed contains duplicate employee
    /// ids or emails (see [`SeedConfig::validate`]).
    ///
    /// # Examples
    ///
    /// ```
    /// use taskdesk::{InMemoryStore, SeedConfig, TaskStore};
    ///
    /// let store = InMemoryStore::from_seed(&SeedConfig::default()).unwrap();
    /// assert!(store.get_employee("e3").is_ok());
    /// ```
    pub fn from_seed(seed: &SeedConfig) -> Result<Self, Error> {
        seed.validate()?;
        Ok(Self::build(seed.employees.clone()))
    }

    fn build(employees: Vec<Employee>) -> Self {
        let employees = employees
            .into_iter()
            .map(|e| (e.id.clone(), e))
            .collect::<IndexMap<_, _>>();

        Self {
            employees,
            tasks: DashMap::new(),
            next_seq: AtomicU64::new(0),
        }
    }

    /// Applies `action` to the task under the entry lock.
    fn transition(&self, task_id: &str, action: TaskAction) -> Result<Task, Error> {
        let mut entry = self
            .tasks
            .get_mut(task_id)
            .ok_or_else(|| Error::TaskNotFound {
                task_id: task_id.to_string(),
            })?;

        let from = entry.task.status;
        if let Err(err) = entry.apply(action) {
            tracing::warn!(
                task_id = task_id,
                from = %from,
                action = %action,
                "rejected task transition"
            );
            return Err(err);
        }

        tracing::debug!(
            task_id = task_id,
            from = %from,
            to = %entry.task.status,
            action = %action,
            "task transition applied"
        );
        Ok(entry.to_wire_task())
    }

    /// Store-wide counts per status plus tasks assigned on `day`.
    ///
    /// [`summary`](TaskStore::summary) calls this with today's UTC
    /// date; tests call it with a fixed day.
    ///
    /// # Examples
    ///
    /// ```
    /// use chrono::Utc;
    /// use taskdesk::{InMemoryStore, TaskStore};
    ///
    /// let store = InMemoryStore::new();
    /// store.assign_task("e1", "Fix bug", "").unwrap();
    ///
    /// let summary = store.summary_for_day(Utc::now().date_naive());
    /// assert_eq!(summary.assigned_today, 1);
    /// ```
    pub fn summary_for_day(&self, day: NaiveDate) -> StatusSummary {
        let mut summary = StatusSummary::default();
        for entry in self.tasks.iter() {
            let task = &entry.value().task;
            match task.status {
                TaskStatus::Pending => summary.pending += 1,
                TaskStatus::InReview => summary.in_review += 1,
                TaskStatus::Completed => summary.completed += 1,
                TaskStatus::Failed => summary.failed += 1,
            }
            if task.assigned_date.date_naive() == day {
                summary.assigned_today += 1;
            }
        }
        summary
    }
}

impl Default for InMemoryStore {
    fn default() -> Self {
        Self::new()
    }
}

impl TaskStore for InMemoryStore {
    fn assign_task(
        &self,
        employee_id: &str,
        title: &str,
        description: &str,
    ) -> Result<Task, Error> {
        if !self.employees.contains_key(employee_id) {
            return Err(Error::Validation {
                message: format!("cannot assign task to unknown employee: {employee_id}"),
            });
        }
        if title.trim().is_empty() {
            return Err(Error::Validation {
                message: "task title must not be empty".to_string(),
            });
        }

        let seq = self.next_seq.fetch_add(1, Ordering::Relaxed);
        let record = TaskRecord::new(seq, employee_id, title, description);
        let task = record.to_wire_task();
        self.tasks.insert(task.id.clone(), record);

        tracing::debug!(task_id = %task.id, employee_id, seq, "task assigned");
        Ok(task)
    }

    fn submit_for_review(&self, task_id: &str) -> Result<Task, Error> {
        self.transition(task_id, TaskAction::Submit)
    }

    fn approve_task(&self, task_id: &str) -> Result<Task, Error> {
        self.transition(task_id, TaskAction::Approve)
    }

    fn reject_task(&self, task_id: &str) -> Result<Task, Error> {
        self.transition(task_id, TaskAction::Reject)
    }

    fn resubmit(&self, task_id: &str) -> Result<Task, Error> {
        self.transition(task_id, TaskAction::Resubmit)
    }

    fn list_employees(&self) -> Vec<Employee> {
        self.employees.values().cloned().collect()
    }

    fn get_employee(&self, employee_id: &str) -> Result<Employee, Error> {
        self.employees
            .get(employee_id)
            .cloned()
            .ok_or_else(|| Error::EmployeeNotFound {
                employee_id: employee_id.to_string(),
            })
    }

    fn get_task(&self, task_id: &str) -> Result<Task, Error> {
        self.tasks
            .get(task_id)
            .map(|entry| entry.to_wire_task())
            .ok_or_else(|| Error::TaskNotFound {
                task_id: task_id.to_string(),
            })
    }

    fn list_tasks_for(&self, employee_id: &str) -> Vec<Task> {
        let mut records: Vec<TaskRecord> = self
            .tasks
            .iter()
            .filter(|entry| entry.value().task.employee_id == employee_id)
            .map(|entry| entry.value().clone())
            .collect();
        records.sort_by_key(|record| record.seq);
        records.into_iter().map(|record| record.task).collect()
    }

    fn task_counts(&self, employee_id: &str) -> TaskCounts {
        let mut counts = TaskCounts::default();
        for entry in self.tasks.iter() {
            let task = &entry.value().task;
            if task.employee_id == employee_id {
                counts.bump(task.status);
            }
        }
        counts
    }

    fn summary(&self) -> StatusSummary {
        self.summary_for_day(Utc::now().date_naive())
    }
}
