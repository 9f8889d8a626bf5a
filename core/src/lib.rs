//! # Taskboard Core
//!
//! Core traits and types for the Taskboard architecture.
//!
//! This crate provides the fundamental abstractions for building the
//! task-list state-synchronization layer using the Reducer pattern:
//!
//! - **State**: the task collection plus operation status, owned by a store
//! - **Action**: all possible inputs to a reducer (user commands, completion
//!   events produced by network effects)
//! - **Reducer**: pure function `(State, Action, Environment) → (State, Effects)`
//! - **Effect**: side effect descriptions (not execution)
//! - **Environment**: injected dependencies via traits
//!
//! ## Architecture Principles
//!
//! - Functional Core, Imperative Shell
//! - Unidirectional Data Flow
//! - Explicit Effects (no hidden I/O)
//! - Dependency Injection via Environment
//!
//! ## Example
//!
//! ```ignore
//! use taskboard_core::{effect::Effect, reducer::Reducer, SmallVec};
//!
//! impl Reducer for TaskListReducer {
//!     type State = TaskListState;
//!     type Action = TaskListAction;
//!     type Environment = TaskListEnvironment;
//!
//!     fn reduce(
//!         &self,
//!         state: &mut TaskListState,
//!         action: TaskListAction,
//!         env: &TaskListEnvironment,
//!     ) -> SmallVec<[Effect<TaskListAction>; 4]> {
//!         // Validate the command, mutate state, describe effects.
//!         SmallVec::new()
//!     }
//! }
//! ```

// Re-export commonly used types
pub use chrono::{DateTime, Utc};
pub use serde::{Deserialize, Serialize};
pub use smallvec::{smallvec, SmallVec};

/// Reducer module - the core trait for state transitions
///
/// Reducers are pure functions: `(State, Action, Environment) → (State, Effects)`.
/// They contain all transition logic and are deterministic and testable
/// without any runtime or rendering surface.
pub mod reducer {
    use super::effect::Effect;
    use super::SmallVec;

    /// The Reducer trait - single update entry point for a feature's state
    ///
    /// # Type Parameters
    ///
    /// - `State`: the domain state this reducer operates on
    /// - `Action`: the action type this reducer processes
    /// - `Environment`: the injected dependencies this reducer needs
    ///
    /// # Example
    ///
    /// ```ignore
    /// impl Reducer for TaskListReducer {
    ///     type State = TaskListState;
    ///     type Action = TaskListAction;
    ///     type Environment = TaskListEnvironment;
    ///
    ///     fn reduce(
    ///         &self,
    ///         state: &mut TaskListState,
    ///         action: TaskListAction,
    ///         env: &TaskListEnvironment,
    ///     ) -> SmallVec<[Effect<TaskListAction>; 4]> {
    ///         match action {
    ///             TaskListAction::FetchTasks => {
    ///                 // mark loading, describe the network effect
    ///                 smallvec![fetch_effect(env)]
    ///             }
    ///             _ => SmallVec::new(),
    ///         }
    ///     }
    /// }
    /// ```
    pub trait Reducer {
        /// The state type this reducer operates on
        type State;

        /// The action type this reducer processes
        type Action;

        /// The environment type with injected dependencies
        type Environment;

        /// Reduce an action into state changes and effects
        ///
        /// This is a pure function that:
        /// 1. Validates the action
        /// 2. Updates state in place
        /// 3. Returns effect descriptions to be executed by the runtime
        ///
        /// State mutation happens only here; effects never mutate state
        /// directly; they resolve to new actions that re-enter `reduce`.
        fn reduce(
            &self,
            state: &mut Self::State,
            action: Self::Action,
            env: &Self::Environment,
        ) -> SmallVec<[Effect<Self::Action>; 4]>;
    }
}

/// Effect module - side effect descriptions
///
/// Effects describe work to be performed by the store runtime. They are
/// values, not execution: a reducer returning an [`effect::Effect::Future`]
/// has not issued a network call yet, it has described one. The runtime
/// spawns the future and feeds the resulting action back into the reducer
/// once the operation completes. State is only ever touched on completion,
/// never concurrently with it.
pub mod effect {
    use std::future::Future;
    use std::pin::Pin;
    use std::time::Duration;

    /// Effect type - describes a side effect to be executed
    ///
    /// # Type Parameters
    ///
    /// - `Action`: the action type that effects can produce (feedback loop)
    #[allow(missing_docs)]
    pub enum Effect<Action> {
        /// No-op effect
        None,

        /// Run effects in parallel
        Parallel(Vec<Effect<Action>>),

        /// Run effects sequentially
        Sequential(Vec<Effect<Action>>),

        /// Delayed action (for timers)
        Delay {
            /// How long to wait
            duration: Duration,
            /// Action to dispatch after delay
            action: Box<Action>,
        },

        /// Arbitrary async computation: the suspension point for network
        /// operations such as a remote list or create request
        ///
        /// Returns `Option<Action>` - if `Some`, the action is fed back into
        /// the reducer
        Future(Pin<Box<dyn Future<Output = Option<Action>> + Send>>),
    }

    // Manual Debug implementation since Future doesn't implement Debug
    impl<Action> std::fmt::Debug for Effect<Action>
    where
        Action: std::fmt::Debug,
    {
        fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
            match self {
                Effect::None => write!(f, "Effect::None"),
                Effect::Parallel(effects) => {
                    f.debug_tuple("Effect::Parallel").field(effects).finish()
                },
                Effect::Sequential(effects) => {
                    f.debug_tuple("Effect::Sequential").field(effects).finish()
                },
                Effect::Delay { duration, action } => f
                    .debug_struct("Effect::Delay")
                    .field("duration", duration)
                    .field("action", action)
                    .finish(),
                Effect::Future(_) => write!(f, "Effect::Future(<future>)"),
            }
        }
    }

    impl<Action> Effect<Action> {
        /// Combine effects to run in parallel
        #[must_use]
        pub const fn merge(effects: Vec<Effect<Action>>) -> Effect<Action> {
            Effect::Parallel(effects)
        }

        /// Chain effects to run sequentially
        #[must_use]
        pub const fn chain(effects: Vec<Effect<Action>>) -> Effect<Action> {
            Effect::Sequential(effects)
        }

        /// Wrap an async computation as an effect
        ///
        /// Convenience for the common case of describing a network call:
        ///
        /// ```ignore
        /// Effect::future(async move {
        ///     match api.list_tasks().await {
        ///         Ok(tasks) => Some(TaskListAction::TasksFetched { tasks }),
        ///         Err(e) => Some(TaskListAction::FetchFailed { error: e.to_string() }),
        ///     }
        /// })
        /// ```
        pub fn future<F>(fut: F) -> Effect<Action>
        where
            F: Future<Output = Option<Action>> + Send + 'static,
        {
            Effect::Future(Box::pin(fut))
        }
    }
}

/// Environment module - dependency injection traits
///
/// All external dependencies are abstracted behind traits and injected via
/// the Environment parameter, so reducers stay pure and testable. The
/// network seam for the remote task store lives with the feature that uses
/// it; the clock is shared here.
pub mod environment {
    use chrono::{DateTime, Utc};

    /// Clock trait - abstracts time operations for testability
    ///
    /// # Examples
    ///
    /// ```ignore
    /// // Production - uses system clock
    /// let clock = SystemClock;
    ///
    /// // Test - fixed time for deterministic tests
    /// struct FixedClock { time: DateTime<Utc> }
    /// impl Clock for FixedClock {
    ///     fn now(&self) -> DateTime<Utc> {
    ///         self.time
    ///     }
    /// }
    /// ```
    pub trait Clock: Send + Sync {
        /// Get the current time
        fn now(&self) -> DateTime<Utc>;
    }

    /// Production clock backed by the system time
    #[derive(Debug, Clone, Copy, Default)]
    pub struct SystemClock;

    impl Clock for SystemClock {
        fn now(&self) -> DateTime<Utc> {
            Utc::now()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::effect::Effect;

    #[derive(Debug, Clone, PartialEq)]
    enum TestAction {
        Ping,
    }

    #[test]
    fn effect_none_debug() {
        let effect: Effect<TestAction> = Effect::None;
        assert_eq!(format!("{effect:?}"), "Effect::None");
    }

    #[test]
    fn effect_future_debug_is_opaque() {
        let effect: Effect<TestAction> = Effect::future(async { Some(TestAction::Ping) });
        assert_eq!(format!("{effect:?}"), "Effect::Future(<future>)");
    }

    #[test]
    fn effect_merge_builds_parallel() {
        let effect: Effect<TestAction> = Effect::merge(vec![Effect::None, Effect::None]);
        assert!(matches!(effect, Effect::Parallel(ref inner) if inner.len() == 2));
    }

    #[test]
    fn effect_chain_builds_sequential() {
        let effect: Effect<TestAction> = Effect::chain(vec![Effect::None]);
        assert!(matches!(effect, Effect::Sequential(ref inner) if inner.len() == 1));
    }

    #[test]
    fn effect_future_resolves_to_action() {
        let effect: Effect<TestAction> = Effect::future(async { Some(TestAction::Ping) });
        let Effect::Future(fut) = effect else {
            unreachable!("constructed as Future");
        };
        let action = tokio_test::block_on(fut);
        assert_eq!(action, Some(TestAction::Ping));
    }

    #[test]
    fn system_clock_advances() {
        use super::environment::{Clock, SystemClock};
        let clock = SystemClock;
        let a = clock.now();
        let b = clock.now();
        assert!(b >= a);
    }
}
