#![cfg(feature = "async")]
//! Unit tests for `delay`.
//!
//! Tests cover:
//! - delay returns before the call runs
//! - the call runs with the given arguments after the wait
//! - calls with shorter waits run first
//! - delay outside any runtime falls back to the global runtime
//! - delay inside a runtime without timers falls back to the global runtime

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::mpsc;
use std::time::Duration;

use parking_lot::Mutex;
use rstest::rstest;
use underbar::function::{TokioScheduler, delay, delay_on, runtime};

// =============================================================================
// Inside a runtime
// =============================================================================

#[rstest]
#[tokio::test(start_paused = true)]
async fn delay_does_not_block_the_caller() {
    let ran = Arc::new(AtomicBool::new(false));
    let flag = Arc::clone(&ran);

    let handle = delay(
        move |_: ()| flag.store(true, Ordering::SeqCst),
        Duration::from_millis(100),
        (),
    )
    .unwrap();

    assert!(!ran.load(Ordering::SeqCst));
    assert!(!handle.is_finished());

    handle.await.unwrap();
    assert!(ran.load(Ordering::SeqCst));
}

#[rstest]
#[tokio::test(start_paused = true)]
async fn delay_waits_at_least_the_given_time() {
    let started = tokio::time::Instant::now();
    let handle = delay(|value: u32| value * 2, Duration::from_secs(3), 21).unwrap();

    assert_eq!(handle.await.unwrap(), 42);
    assert!(started.elapsed() >= Duration::from_secs(3));
}

#[rstest]
#[tokio::test(start_paused = true)]
async fn delay_passes_tuple_arguments() {
    let handle = delay(
        |(greeting, name): (String, String)| format!("{greeting}, {name}!"),
        Duration::from_millis(1),
        ("hello".to_string(), "moe".to_string()),
    )
    .unwrap();

    assert_eq!(handle.await.unwrap(), "hello, moe!");
}

#[rstest]
#[tokio::test(start_paused = true)]
async fn shorter_waits_run_first() {
    let order = Arc::new(Mutex::new(Vec::new()));

    let handles: Vec<_> = [(30, "slow"), (10, "fast"), (20, "medium")]
        .into_iter()
        .map(|(millis, label)| {
            let order = Arc::clone(&order);
            delay(
                move |label: &'static str| order.lock().push(label),
                Duration::from_millis(millis),
                label,
            )
            .unwrap()
        })
        .collect();

    for handle in handles {
        handle.await.unwrap();
    }
    assert_eq!(*order.lock(), vec!["fast", "medium", "slow"]);
}

#[rstest]
#[tokio::test(start_paused = true)]
async fn delay_on_explicit_scheduler() {
    let scheduler = TokioScheduler::current();
    let handle = delay_on(
        &scheduler,
        |text: &'static str| text.len(),
        Duration::ZERO,
        "four",
    )
    .unwrap();
    assert_eq!(handle.await.unwrap(), 4);
}

// =============================================================================
// Outside a runtime
// =============================================================================

#[rstest]
fn delay_outside_runtime_uses_global_runtime() {
    let (sender, receiver) = mpsc::channel();

    let handle = delay(
        move |value: i32| {
            sender.send(value).unwrap();
            value + 1
        },
        Duration::from_millis(10),
        41,
    )
    .unwrap();

    assert_eq!(receiver.recv_timeout(Duration::from_secs(5)), Ok(41));
    let result = runtime::global().unwrap().block_on(handle).unwrap();
    assert_eq!(result, 42);
}

#[rstest]
fn delay_inside_runtime_without_timers_uses_global_runtime() {
    let untimed = tokio::runtime::Builder::new_current_thread().build().unwrap();

    let result = untimed.block_on(async {
        delay(|value: i32| value + 1, Duration::from_millis(1), 1)
            .unwrap()
            .await
    });

    assert_eq!(result, Ok(2));
}
