//! Role-based employee task tracking with a four-state review lifecycle.
//!
//! `taskdesk` is the core of an employee task tracker: a seeded
//! employee directory, a task collection whose statuses move through a
//! review state machine, role-scoped reads for the two dashboards, and
//! a credential-checked session boundary. All state is in-memory and
//! resets to the seed on restart.
//!
//! # Overview
//!
//! A task is assigned by an admin and progresses
//! `pending -> in_review -> completed`/`failed`, with failed tasks
//! eligible for resubmission back into review. `completed` is terminal.
//! Transition rules are pure functions on [`TaskStatus`]; all mutation
//! funnels through the [`TaskStore`] operations, so views hold an
//! `Arc<dyn TaskStore>` and never write task fields directly.
//!
//! ```
//! use taskdesk::{InMemoryStore, TaskStatus, TaskStore};
//!
//! let store = InMemoryStore::new();
//!
//! let task = store.assign_task("e1", "Fix bug", "crash on empty input").unwrap();
//! store.submit_for_review(&task.id).unwrap();
//! store.reject_task(&task.id).unwrap();
//! store.resubmit(&task.id).unwrap();
//! let task = store.approve_task(&task.id).unwrap();
//!
//! assert_eq!(task.status, TaskStatus::Completed);
//! ```
//!
//! # Module Organization
//!
//! - [`types`] - Wire types views consume (task, employee, session role)
//! - [`domain`] - Store-internal task record
//! - [`store`] - The [`TaskStore`] seam and the in-memory implementation
//! - [`session`] - Login/logout over the seed credential table
//! - [`config`] - Seed configuration (roster + admin credentials)
//! - [`error`] - One error enum, one variant per failure kind

pub mod config;
pub mod domain;
pub mod error;
pub mod session;
pub mod store;
pub mod types;

// Re-exports for ergonomic access
pub use config::{AdminCredentials, SeedConfig};
pub use domain::TaskRecord;
pub use error::Error;
pub use session::SessionManager;
pub use store::{InMemoryStore, StatusSummary, TaskStore};
pub use types::{Employee, Role, Session, Task, TaskAction, TaskCounts, TaskStatus};
