//! Domain types for the task-list feature.
//!
//! The state is one value: the task collection plus the transient operation
//! status around it. Every transition goes through the reducer and produces
//! a new observable snapshot; nothing here talks to the network.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use taskboard_api::{Task, TaskId};
use taskboard_macros::Action;

/// Orchestration phase of the task-list controller
///
/// Toggles are synchronous and local, so they are deliberately not a phase:
/// they may occur while either network operation is in flight.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Phase {
    /// No network operation in flight
    #[default]
    Idle,
    /// A list fetch is in flight
    FetchInFlight,
    /// A create request is in flight
    CreateInFlight,
}

/// State of the task-list feature
///
/// Owned exclusively by the store; read via snapshots.
#[derive(Clone, Debug, Default)]
pub struct TaskListState {
    /// The task collection, in insertion order (which is display order)
    pub tasks: Vec<Task>,
    /// Draft title for the next create request
    pub title: String,
    /// True while a network operation is in flight
    pub loading: bool,
    /// Most recent failure message; cleared when a new operation starts and
    /// by the next successful completion
    pub error: Option<String>,
    /// Current orchestration phase
    pub phase: Phase,
    /// When the collection was last replaced by a successful fetch
    pub last_synced_at: Option<DateTime<Utc>>,
}

impl TaskListState {
    /// Creates a new empty state
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the number of tasks
    #[must_use]
    pub fn count(&self) -> usize {
        self.tasks.len()
    }

    /// Returns the number of completed tasks
    #[must_use]
    pub fn completed_count(&self) -> usize {
        self.tasks.iter().filter(|t| t.done).count()
    }

    /// Returns a task by identifier
    #[must_use]
    pub fn get(&self, id: TaskId) -> Option<&Task> {
        self.tasks.iter().find(|t| t.id == id)
    }
}

/// Actions processed by the task-list reducer
///
/// Commands are requests from the caller (refresh, create, toggle, edit the
/// draft). Events are the completion outcomes that network effects feed back
/// into the reducer; they are the only place fetch/create results touch
/// state.
#[derive(Action, Clone, Debug, Serialize, Deserialize)]
pub enum TaskListAction {
    // ========== Commands ==========
    /// Command: Fetch the remote collection (initial sync or refresh)
    #[command]
    FetchTasks,

    /// Command: Create a task with the given candidate title
    #[command]
    CreateTask {
        /// Candidate title; dropped silently if blank after trimming
        title: String,
    },

    /// Command: Invert a task's completion flag, locally only
    #[command]
    ToggleDone {
        /// Identifier of the task to toggle
        id: TaskId,
    },

    /// Command: Replace the draft title
    #[command]
    TitleChanged {
        /// New draft text
        title: String,
    },

    // ========== Events ==========
    /// Event: A fetch completed; `tasks` replaces the collection wholesale
    #[event]
    TasksFetched {
        /// The collection as reported by the remote store
        tasks: Vec<Task>,
    },

    /// Event: A fetch failed; the collection resets to empty
    #[event]
    FetchFailed {
        /// Failure message
        error: String,
    },

    /// Event: A create completed with the server's record
    #[event]
    TaskCreated {
        /// The created record; its identifier is the server's, not ours
        task: Task,
    },

    /// Event: A create failed; the collection is left untouched
    #[event]
    CreateFailed {
        /// Failure message
        error: String,
    },
}
