//! Integration tests for Store serialization under concurrent senders
//!
//! Every action must observe the state left by the previous one; a
//! read-modify-write reducer loses updates if two reductions interleave.

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)] // Test code can use unwrap/expect/panic

use proptest::prelude::*;
use std::sync::Arc;
use todo_chat_core::reducer::{Action, Reducer};
use todo_chat_runtime::Store;

// ============================================================================
// Test Fixtures
// ============================================================================

#[derive(Debug, Clone, Default)]
struct LedgerState {
    entries: Vec<u64>,
}

#[derive(Debug, Clone)]
enum LedgerAction {
    /// Append the next sequence number (read last, then push)
    AppendNext,
}

impl Action for LedgerAction {
    fn name(&self) -> &'static str {
        "append_next"
    }
}

#[derive(Clone)]
struct LedgerReducer;

impl Reducer for LedgerReducer {
    type State = LedgerState;
    type Action = LedgerAction;
    type Environment = ();
    type Output = u64;

    fn reduce(
        &self,
        state: &mut Self::State,
        action: Self::Action,
        _env: &Self::Environment,
    ) -> u64 {
        match action {
            LedgerAction::AppendNext => {
                let next = state.entries.last().map_or(1, |last| last + 1);
                state.entries.push(next);
                next
            }
        }
    }
}

// ============================================================================
// Tests
// ============================================================================

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn concurrent_sends_are_serialized() {
    let store = Arc::new(Store::new(LedgerState::default(), LedgerReducer, ()));

    let handles: Vec<_> = (0..200)
        .map(|_| {
            let store = Arc::clone(&store);
            tokio::spawn(async move { store.send(LedgerAction::AppendNext).await.unwrap() })
        })
        .collect();

    let mut outputs = Vec::with_capacity(handles.len());
    for handle in handles {
        outputs.push(handle.await.unwrap());
    }
    outputs.sort_unstable();

    let expected: Vec<u64> = (1..=200).collect();
    assert_eq!(outputs, expected);

    let entries = store.state(|s| s.entries.clone()).await;
    assert_eq!(entries, expected);
}

#[tokio::test]
async fn cloned_store_shares_state() {
    let store = Store::new(LedgerState::default(), LedgerReducer, ());
    let other = store.clone();

    store.send(LedgerAction::AppendNext).await.unwrap();
    other.send(LedgerAction::AppendNext).await.unwrap();

    assert_eq!(store.state(|s| s.entries.len()).await, 2);
    assert_eq!(other.actions_processed(), 2);

    other.shutdown();
    assert!(store.is_shutting_down());
}

proptest! {
    #[test]
    fn n_sends_produce_n_entries(n in 0usize..64) {
        let store = Store::new(LedgerState::default(), LedgerReducer, ());
        tokio_test::block_on(async {
            for _ in 0..n {
                store.send(LedgerAction::AppendNext).await.unwrap();
            }
        });
        let len = tokio_test::block_on(store.state(|s| s.entries.len()));
        prop_assert_eq!(len, n);
        prop_assert_eq!(store.actions_processed(), n);
    }
}
