//! Wire types for the remote task store
//!
//! These mirror the HTTP contract exactly: a task record is
//! `{id: number, title: string, done: boolean}`. The same shapes double as
//! the in-memory domain types; the collection layer adds nothing on top.

use serde::{Deserialize, Serialize};

/// Unique identifier for a task, assigned by the remote store
///
/// Identifiers are authoritative server state: clients never generate them,
/// and they are immutable once assigned.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TaskId(u64);

impl TaskId {
    /// Creates a `TaskId` from a raw numeric identifier
    #[must_use]
    pub const fn new(id: u64) -> Self {
        Self(id)
    }

    /// Returns the raw numeric identifier
    #[must_use]
    pub const fn as_u64(self) -> u64 {
        self.0
    }
}

impl std::fmt::Display for TaskId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A single task record
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    /// Server-assigned identifier
    pub id: TaskId,
    /// Display text
    pub title: String,
    /// Completion flag; mutated locally only, never persisted remotely
    pub done: bool,
}

impl Task {
    /// Creates a task that is not yet done
    #[must_use]
    pub const fn new(id: TaskId, title: String) -> Self {
        Self {
            id,
            title,
            done: false,
        }
    }

    /// Inverts the local completion flag
    pub const fn toggle(&mut self) {
        self.done = !self.done;
    }
}

/// Payload for creating a task
///
/// The server assigns the identifier; the client only supplies the title.
/// `done` is always sent as `false`.
#[derive(Clone, Debug, Serialize)]
pub struct NewTask {
    /// Display text for the new task
    pub title: String,
    /// Always `false` on creation
    pub done: bool,
}

impl NewTask {
    /// Creates the payload for a new task with the given title
    #[must_use]
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            done: false,
        }
    }
}
