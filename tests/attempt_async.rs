//! Deferred executor: `attempt_async`, `attempt_async_result` and `Attempt`.

use std::future::Future;
use std::io;
use std::pin::Pin;
use std::sync::Arc;
use std::task::{Context, Poll, Wake, Waker};

use try_this::{attempt_async, attempt_async_result, Outcome};

/// Stays pending for `remaining` polls, then yields.
struct Countdown {
    remaining: u32,
}

impl Future for Countdown {
    type Output = &'static str;

    fn poll(mut self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Self::Output> {
        if self.remaining == 0 {
            return Poll::Ready("lift-off");
        }
        self.remaining -= 1;
        cx.waker().wake_by_ref();
        Poll::Pending
    }
}

struct NoopWake;

impl Wake for NoopWake {
    fn wake(self: Arc<Self>) {}
}

#[tokio::test]
async fn resolved_future_is_success() {
    let outcome = attempt_async(|| async { 7 }).await;
    assert!(outcome.is_success());
    assert_eq!(outcome.into_data(), Some(7));
}

#[tokio::test]
async fn panicking_future_is_failure() {
    async fn explode() -> u8 {
        panic!("y")
    }

    let outcome = attempt_async(explode).await;
    assert!(outcome.is_failure());
    assert_eq!(outcome.error().unwrap().message(), "y");
}

#[tokio::test]
async fn rejected_future_is_failure() {
    let outcome = attempt_async_result(|| async { Err::<u8, _>(io::Error::other("y")) }).await;
    assert!(outcome.is_failure());

    let error = outcome.error().unwrap();
    assert_eq!(error.message(), "y");
    assert!(error.is::<io::Error>());
}

#[tokio::test]
async fn fulfilled_result_future_is_success() {
    let outcome = attempt_async_result(|| async { Ok::<_, io::Error>(vec![1, 2]) }).await;
    assert_eq!(outcome.into_data(), Some(vec![1, 2]));
}

#[tokio::test]
async fn waits_across_pending_polls() {
    let outcome = attempt_async(|| Countdown { remaining: 3 }).await;
    assert_eq!(outcome.into_data(), Some("lift-off"));
}

#[tokio::test]
async fn panic_before_future_is_settled_failure() {
    fn never() -> Countdown {
        panic!("no future for you")
    }

    let pending = attempt_async(never);
    assert!(pending.is_thrown());

    let outcome = pending.await;
    assert_eq!(outcome.error().unwrap().message(), "no future for you");
}

#[tokio::test]
async fn callable_runs_before_first_poll() {
    let mut started = false;
    let pending = attempt_async(|| {
        started = true;
        async { 1 }
    });
    assert!(started);
    assert_eq!(pending.await.into_data(), Some(1));
}

#[tokio::test]
async fn awaited_inner_panic_is_failure() {
    async fn inner() -> u8 {
        tokio::task::yield_now().await;
        panic!("deep")
    }

    let outcome = attempt_async(|| async { inner().await + 1 }).await;
    assert_eq!(outcome.error().unwrap().message(), "deep");
}

#[test]
fn polling_after_completion_panics() {
    let waker = Waker::from(Arc::new(NoopWake));
    let mut cx = Context::from_waker(&waker);

    let mut attempt = Box::pin(attempt_async(|| async { 1 }));
    assert!(matches!(attempt.as_mut().poll(&mut cx), Poll::Ready(Outcome::Success(1))));

    let again = std::panic::catch_unwind(std::panic::AssertUnwindSafe(|| attempt.as_mut().poll(&mut cx)));
    assert!(again.is_err());
}
