//! Integration tests for the Store runtime
//!
//! Exercises the action → reducer → effects → action feedback loop, effect
//! completion tracking, action broadcasting, and graceful shutdown.

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)] // Test code can use unwrap/expect/panic

use std::time::Duration;

use taskboard_core::{effect::Effect, reducer::Reducer, smallvec, SmallVec};
use taskboard_runtime::{EffectHandle, Store, StoreError};

// ============================================================================
// Test Fixtures
// ============================================================================

#[derive(Debug, Clone, PartialEq)]
enum TestAction {
    /// Synchronous increment, no effects
    Increment,
    /// Command that resolves to `Incremented` via a future effect
    IncrementRemotely,
    /// Completion event fed back by the effect
    Incremented,
    /// Command producing a short delayed increment
    IncrementLater,
    /// Command fanning out three parallel future effects
    IncrementThrice,
    /// Command chaining two future effects sequentially
    IncrementTwiceInOrder,
    /// Command whose effect panics mid-flight
    Explode,
}

#[derive(Debug, Clone, Default)]
struct TestState {
    value: u32,
}

#[derive(Clone)]
struct TestEnvironment;

#[derive(Clone)]
struct TestReducer;

impl Reducer for TestReducer {
    type State = TestState;
    type Action = TestAction;
    type Environment = TestEnvironment;

    fn reduce(
        &self,
        state: &mut Self::State,
        action: Self::Action,
        _env: &Self::Environment,
    ) -> SmallVec<[Effect<Self::Action>; 4]> {
        match action {
            TestAction::Increment | TestAction::Incremented => {
                state.value += 1;
                SmallVec::new()
            },
            TestAction::IncrementRemotely => {
                smallvec![Effect::future(async { Some(TestAction::Incremented) })]
            },
            TestAction::IncrementLater => {
                smallvec![Effect::Delay {
                    duration: Duration::from_millis(10),
                    action: Box::new(TestAction::Incremented),
                }]
            },
            TestAction::IncrementThrice => {
                smallvec![Effect::Parallel(vec![
                    Effect::future(async { Some(TestAction::Incremented) }),
                    Effect::future(async { Some(TestAction::Incremented) }),
                    Effect::future(async { Some(TestAction::Incremented) }),
                ])]
            },
            TestAction::IncrementTwiceInOrder => {
                smallvec![Effect::Sequential(vec![
                    Effect::future(async { Some(TestAction::Incremented) }),
                    Effect::future(async { Some(TestAction::Incremented) }),
                ])]
            },
            TestAction::Explode => {
                smallvec![Effect::future(async {
                    panic!("intentional effect panic");
                })]
            },
        }
    }
}

fn test_store() -> Store<TestState, TestAction, TestEnvironment, TestReducer> {
    Store::new(TestState::default(), TestReducer, TestEnvironment)
}

// ============================================================================
// Tests
// ============================================================================

#[tokio::test]
async fn send_applies_synchronous_action() {
    let store = test_store();

    store.send(TestAction::Increment).await.unwrap();

    assert_eq!(store.state(|s| s.value).await, 1);
}

#[tokio::test]
async fn future_effect_feeds_completion_back() {
    let store = test_store();

    let mut handle = store.send(TestAction::IncrementRemotely).await.unwrap();
    handle.wait().await;

    assert_eq!(store.state(|s| s.value).await, 1);
}

#[tokio::test]
async fn delay_effect_applies_after_duration() {
    let store = test_store();

    let mut handle = store.send(TestAction::IncrementLater).await.unwrap();
    assert_eq!(store.state(|s| s.value).await, 0);

    handle.wait().await;
    assert_eq!(store.state(|s| s.value).await, 1);
}

#[tokio::test]
async fn parallel_effects_all_apply() {
    let store = test_store();

    let mut handle = store.send(TestAction::IncrementThrice).await.unwrap();
    handle.wait().await;

    assert_eq!(store.state(|s| s.value).await, 3);
}

#[tokio::test]
async fn sequential_effects_all_apply() {
    let store = test_store();

    let mut handle = store.send(TestAction::IncrementTwiceInOrder).await.unwrap();
    handle.wait().await;

    assert_eq!(store.state(|s| s.value).await, 2);
}

#[tokio::test]
async fn panicking_effect_does_not_hang_waiters() {
    let store = test_store();

    let mut handle = store.send(TestAction::Explode).await.unwrap();

    // The decrement guard runs on unwind, so the handle still resolves
    handle
        .wait_with_timeout(Duration::from_secs(1))
        .await
        .expect("panicking effect should still release its handle");

    assert_eq!(store.state(|s| s.value).await, 0);
}

#[tokio::test]
async fn completed_handle_resolves_immediately() {
    let mut handle = EffectHandle::completed();
    handle
        .wait_with_timeout(Duration::from_millis(50))
        .await
        .expect("completed handle should not block");
}

#[tokio::test]
async fn subscribe_receives_effect_produced_actions() {
    let store = Store::with_broadcast_capacity(TestState::default(), TestReducer, TestEnvironment, 64);
    let mut rx = store.subscribe_actions();

    let mut handle = store.send(TestAction::IncrementRemotely).await.unwrap();
    handle.wait().await;

    let observed = rx.recv().await.unwrap();
    assert_eq!(observed, TestAction::Incremented);
}

#[tokio::test]
async fn send_and_wait_for_returns_terminal_action() {
    let store = test_store();

    let outcome = store
        .send_and_wait_for(
            TestAction::IncrementRemotely,
            |a| matches!(a, TestAction::Incremented),
            Duration::from_secs(1),
        )
        .await
        .unwrap();

    assert_eq!(outcome, TestAction::Incremented);
}

#[tokio::test]
async fn send_and_wait_for_times_out_without_match() {
    let store = test_store();

    let result = store
        .send_and_wait_for(
            TestAction::Increment, // produces no effects, so no broadcast
            |a| matches!(a, TestAction::Incremented),
            Duration::from_millis(50),
        )
        .await;

    assert!(matches!(result, Err(StoreError::Timeout)));
}

#[tokio::test]
async fn shutdown_rejects_new_actions() {
    let store = test_store();

    store.shutdown(Duration::from_secs(1)).await.unwrap();

    let result = store.send(TestAction::Increment).await;
    assert!(matches!(result, Err(StoreError::ShutdownInProgress)));
}

#[tokio::test]
async fn shutdown_waits_for_pending_effects() {
    let store = test_store();

    let _handle = store.send(TestAction::IncrementLater).await.unwrap();

    // Returns Ok only once the in-flight delay task has drained
    store.shutdown(Duration::from_secs(1)).await.unwrap();

    // The completion arrived after shutdown initiated, so it was rejected
    assert_eq!(store.state(|s| s.value).await, 0);
}
