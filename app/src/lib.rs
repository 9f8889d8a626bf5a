//! Task-list state synchronization built on the Taskboard architecture.
//!
//! This crate owns the in-memory task collection and keeps it in sync with a
//! remote task store over HTTP. It demonstrates:
//!
//! - A single state container with one update entry point (the reducer)
//! - Asynchronous fetch/create operations modeled as explicit effects
//! - Local-only completion toggles that never reach the remote store
//! - Derived read-only aggregates (counts, completion ratio)
//!
//! # Quick Start
//!
//! ```no_run
//! use std::sync::Arc;
//! use taskboard::{TaskListAction, TaskListEnvironment, TaskListReducer, TaskListState};
//! use taskboard_api::TasksClient;
//! use taskboard_core::environment::SystemClock;
//! use taskboard_runtime::Store;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! // Create environment and store
//! let client = TasksClient::from_env()?;
//! let env = TaskListEnvironment::new(Arc::new(client), Arc::new(SystemClock));
//! let store = Store::new(TaskListState::new(), TaskListReducer::new(), env);
//!
//! // Sync with the remote store
//! let mut handle = store.send(TaskListAction::FetchTasks).await?;
//! handle.wait().await;
//!
//! // Toggle the first task locally
//! if let Some(id) = store.state(|s| s.tasks.first().map(|t| t.id)).await {
//!     store.send(TaskListAction::ToggleDone { id }).await?;
//! }
//!
//! // Read a snapshot
//! let stats = store.state(taskboard::TaskListState::stats).await;
//! println!("{} of {} done ({}%)", stats.completed, stats.total, stats.percent);
//! # Ok(())
//! # }
//! ```

pub mod reducer;
pub mod types;
pub mod view;

// Re-export commonly used types
pub use reducer::{TaskListEnvironment, TaskListReducer, TaskService};
pub use taskboard_api::{Task, TaskId};
pub use types::{Phase, TaskListAction, TaskListState};
pub use view::ViewStats;
