//! Reducer logic for the task-list feature.
//!
//! Commands either mutate state synchronously (toggle, draft edits) or mark
//! an operation in flight and describe a network effect. The effect resolves
//! to a completion event, and only that event reconciles the server response
//! into state; state is never touched mid-flight.

use crate::types::{Phase, TaskListAction, TaskListState};
use async_trait::async_trait;
use std::sync::Arc;
use taskboard_api::{ApiError, Task, TasksClient};
use taskboard_core::{
    effect::Effect, environment::Clock, reducer::Reducer, smallvec, SmallVec,
};

/// Async seam over the remote task store
///
/// The reducer only ever sees this trait, so tests can substitute scripted
/// responses and the production store plugs in [`TasksClient`].
#[async_trait]
pub trait TaskService: Send + Sync {
    /// Fetch the full remote collection
    async fn list_tasks(&self) -> Result<Vec<Task>, ApiError>;

    /// Create a task and return the server's record
    async fn create_task(&self, title: &str) -> Result<Task, ApiError>;
}

#[async_trait]
impl TaskService for TasksClient {
    async fn list_tasks(&self) -> Result<Vec<Task>, ApiError> {
        TasksClient::list_tasks(self).await
    }

    async fn create_task(&self, title: &str) -> Result<Task, ApiError> {
        TasksClient::create_task(self, title).await
    }
}

/// Environment dependencies for the task-list reducer
#[derive(Clone)]
pub struct TaskListEnvironment {
    /// Client for the remote task store
    pub api: Arc<dyn TaskService>,
    /// Clock for stamping successful syncs
    pub clock: Arc<dyn Clock>,
}

impl TaskListEnvironment {
    /// Creates a new `TaskListEnvironment`
    #[must_use]
    pub fn new(api: Arc<dyn TaskService>, clock: Arc<dyn Clock>) -> Self {
        Self { api, clock }
    }
}

/// Reducer for the task-list feature
#[derive(Clone, Debug)]
pub struct TaskListReducer;

impl TaskListReducer {
    /// Creates a new `TaskListReducer`
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    /// Describes the list-fetch network call
    fn fetch_effect(env: &TaskListEnvironment) -> Effect<TaskListAction> {
        let api = Arc::clone(&env.api);
        Effect::future(async move {
            match api.list_tasks().await {
                Ok(tasks) => Some(TaskListAction::TasksFetched { tasks }),
                Err(e) => Some(TaskListAction::FetchFailed {
                    error: e.to_string(),
                }),
            }
        })
    }

    /// Describes the create network call
    fn create_effect(env: &TaskListEnvironment, title: String) -> Effect<TaskListAction> {
        let api = Arc::clone(&env.api);
        Effect::future(async move {
            match api.create_task(&title).await {
                Ok(task) => Some(TaskListAction::TaskCreated { task }),
                Err(e) => Some(TaskListAction::CreateFailed {
                    error: e.to_string(),
                }),
            }
        })
    }
}

impl Default for TaskListReducer {
    fn default() -> Self {
        Self::new()
    }
}

impl Reducer for TaskListReducer {
    type State = TaskListState;
    type Action = TaskListAction;
    type Environment = TaskListEnvironment;

    fn reduce(
        &self,
        state: &mut Self::State,
        action: Self::Action,
        env: &Self::Environment,
    ) -> SmallVec<[Effect<Self::Action>; 4]> {
        match action {
            // ========== Commands ==========
            TaskListAction::FetchTasks => {
                // A refresh while one is already running is ignored
                if state.phase == Phase::FetchInFlight {
                    return SmallVec::new();
                }

                state.loading = true;
                state.error = None;
                state.phase = Phase::FetchInFlight;

                smallvec![Self::fetch_effect(env)]
            }

            TaskListAction::CreateTask { title } => {
                // Blank candidates are dropped silently: no state change,
                // no network call
                if title.trim().is_empty() {
                    return SmallVec::new();
                }

                state.loading = true;
                state.error = None;
                state.phase = Phase::CreateInFlight;

                // In-flight creates are not deduplicated here; disabling the
                // action control while loading is the presentation layer's
                // concern and advisory only
                smallvec![Self::create_effect(env, title)]
            }

            TaskListAction::ToggleDone { id } => {
                // Local-only: no phase transition, no network call, and no
                // effect on loading/error. No-op when the id is absent.
                if let Some(task) = state.tasks.iter_mut().find(|t| t.id == id) {
                    task.toggle();
                }
                SmallVec::new()
            }

            TaskListAction::TitleChanged { title } => {
                state.title = title;
                SmallVec::new()
            }

            // ========== Events ==========
            TaskListAction::TasksFetched { tasks } => {
                state.tasks = tasks;
                state.loading = false;
                state.error = None;
                state.last_synced_at = Some(env.clock.now());
                state.phase = Phase::Idle;
                SmallVec::new()
            }

            TaskListAction::FetchFailed { error } => {
                state.tasks.clear();
                state.error = Some(error);
                state.loading = false;
                state.phase = Phase::Idle;
                SmallVec::new()
            }

            TaskListAction::TaskCreated { task } => {
                // The server-assigned identifier is authoritative; appended
                // as-is, even if that identifier is already present
                state.tasks.push(task);
                state.title.clear();
                state.loading = false;
                state.error = None;
                state.phase = Phase::Idle;
                SmallVec::new()
            }

            TaskListAction::CreateFailed { error } => {
                state.error = Some(error);
                state.loading = false;
                state.phase = Phase::Idle;
                SmallVec::new()
            }
        }
    }
}
