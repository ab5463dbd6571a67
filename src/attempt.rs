//! The executor: run a callable once and capture how it ended.
//!
//! Whether a call is synchronous or deferred is chosen by the entry point,
//! never by inspecting the returned value at runtime:
//!
//! | Entry point | Callable returns | Throw |
//! |-------------|------------------|-------|
//! | [`attempt`] | `T` | panic |
//! | [`attempt_result`] | `Result<T, E>` | panic or `Err` |
//! | [`attempt_async`] | `impl Future<Output = T>` | panic while calling or polling |
//! | [`attempt_async_result`] | `impl Future<Output = Result<T, E>>` | panic or `Err` |

use core::future::Future;
use core::marker::PhantomData;
use core::pin::Pin;
use core::task::{Context, Poll};
use std::panic::{self, AssertUnwindSafe};

use pin_project_lite::pin_project;

use crate::error::Error;
use crate::outcome::Outcome;

// ============================================================
// Settling strategies
// ============================================================

/// How the output of a callable becomes an [`Outcome`].
///
/// The marker is picked by the entry point, so the caller declares up front
/// whether an `Err` return counts as a throw.
pub trait Settle<O> {
    /// Data carried by a `Success`.
    type Data;

    /// Turn a completed output into an outcome.
    fn settle(output: O) -> Outcome<Self::Data>;
}

/// The output is the data, whatever its type.
#[derive(Debug, Clone, Copy)]
pub enum Verbatim {}

impl<O> Settle<O> for Verbatim {
    type Data = O;

    #[inline]
    fn settle(output: O) -> Outcome<O> {
        Outcome::Success(output)
    }
}

/// `Ok(v)` is the data, `Err(e)` is a throw.
#[derive(Debug, Clone, Copy)]
pub enum Fallible {}

impl<T, E: Into<Error>> Settle<core::result::Result<T, E>> for Fallible {
    type Data = T;

    #[inline]
    fn settle(output: core::result::Result<T, E>) -> Outcome<T> {
        match output {
            Ok(data) => Outcome::Success(data),
            Err(e) => Outcome::Failure(e.into()),
        }
    }
}

// ============================================================
// Synchronous entry points
// ============================================================

/// Run `f`, capturing a panic as a `Failure`.
///
/// The returned value is the data verbatim, even when it is itself a
/// `Result`; use [`attempt_result`] to treat `Err` as a throw.
///
/// The panic hook still runs, so the default hook prints the panic message
/// to stderr before the failure is returned.
///
/// ```
/// use try_this::attempt;
///
/// assert_eq!(attempt(|| 5).into_data(), Some(5));
/// ```
pub fn attempt<T, F>(f: F) -> Outcome<T>
where
    F: FnOnce() -> T,
{
    run::<Verbatim, T, F>(f)
}

/// Run `f`, capturing both a panic and an `Err` return as a `Failure`.
///
/// ```
/// use try_this::attempt_result;
///
/// let outcome = attempt_result(|| "12".parse::<u8>());
/// assert_eq!(outcome.into_data(), Some(12));
///
/// let outcome = attempt_result(|| "x".parse::<u8>());
/// assert_eq!(outcome.error().unwrap().message(), "invalid digit found in string");
/// ```
pub fn attempt_result<T, E, F>(f: F) -> Outcome<T>
where
    F: FnOnce() -> core::result::Result<T, E>,
    E: Into<Error>,
{
    run::<Fallible, _, F>(f)
}

fn run<M, O, F>(f: F) -> Outcome<M::Data>
where
    M: Settle<O>,
    F: FnOnce() -> O,
{
    match panic::catch_unwind(AssertUnwindSafe(f)) {
        Ok(output) => {
            let outcome = M::settle(output);
            #[cfg(feature = "tracing")]
            if let Outcome::Failure(error) = &outcome {
                captured("err", error);
            }
            outcome
        }
        Err(payload) => {
            let error = Error::from_panic(payload);
            #[cfg(feature = "tracing")]
            captured("panic", &error);
            Outcome::Failure(error)
        }
    }
}

// ============================================================
// Deferred entry points
// ============================================================

/// Call `f` now and settle the future it returns later.
///
/// `f` runs immediately, as with [`attempt`]. If it panics before producing
/// a future, the returned [`Attempt`] is already settled with that failure;
/// calling this function never panics.
///
/// ```
/// # tokio::runtime::Builder::new_current_thread().build().unwrap().block_on(async {
/// use try_this::attempt_async;
///
/// let outcome = attempt_async(|| async { 7 }).await;
/// assert_eq!(outcome.into_data(), Some(7));
/// # });
/// ```
pub fn attempt_async<F, Fut>(f: F) -> Attempt<Fut, Verbatim>
where
    F: FnOnce() -> Fut,
    Fut: Future,
{
    Attempt::start(f)
}

/// Like [`attempt_async`], with an `Err` output settling as a `Failure`.
pub fn attempt_async_result<F, Fut, T, E>(f: F) -> Attempt<Fut, Fallible>
where
    F: FnOnce() -> Fut,
    Fut: Future<Output = core::result::Result<T, E>>,
    E: Into<Error>,
{
    Attempt::start(f)
}

pin_project! {
    /// Future returned by [`attempt_async`] and [`attempt_async_result`].
    ///
    /// Polls the inner future with panics caught and resolves to an
    /// [`Outcome`] exactly once.
    #[must_use = "futures do nothing unless you `.await` or poll them"]
    pub struct Attempt<F, M> {
        #[pin]
        future: Option<F>,
        thrown: Option<Error>,
        settle: PhantomData<fn() -> M>,
    }
}

impl<F, M> Attempt<F, M> {
    fn start<G>(f: G) -> Self
    where
        G: FnOnce() -> F,
    {
        match panic::catch_unwind(AssertUnwindSafe(f)) {
            Ok(future) => Self {
                future: Some(future),
                thrown: None,
                settle: PhantomData,
            },
            Err(payload) => {
                let error = Error::from_panic(payload);
                #[cfg(feature = "tracing")]
                captured("async call panic", &error);
                Self {
                    future: None,
                    thrown: Some(error),
                    settle: PhantomData,
                }
            }
        }
    }

    /// `true` once the callable panicked before producing its future.
    ///
    /// Such an attempt resolves to `Failure` on its first poll.
    pub fn is_thrown(&self) -> bool {
        self.thrown.is_some()
    }
}

impl<F, M> Future for Attempt<F, M>
where
    F: Future,
    M: Settle<F::Output>,
{
    type Output = Outcome<M::Data>;

    fn poll(self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Self::Output> {
        let mut this = self.project();

        if let Some(error) = this.thrown.take() {
            return Poll::Ready(Outcome::Failure(error));
        }

        let future = match this.future.as_mut().as_pin_mut() {
            Some(future) => future,
            None => panic!("`Attempt` polled after completion"),
        };

        let outcome = match panic::catch_unwind(AssertUnwindSafe(|| future.poll(cx))) {
            Ok(Poll::Pending) => return Poll::Pending,
            Ok(Poll::Ready(output)) => {
                let outcome = M::settle(output);
                #[cfg(feature = "tracing")]
                if let Outcome::Failure(error) = &outcome {
                    captured("async err", error);
                }
                outcome
            }
            Err(payload) => {
                let error = Error::from_panic(payload);
                #[cfg(feature = "tracing")]
                captured("async panic", &error);
                Outcome::Failure(error)
            }
        };

        this.future.set(None);
        Poll::Ready(outcome)
    }
}

// ============================================================
// Diagnostics
// ============================================================

#[cfg(feature = "tracing")]
fn captured(origin: &'static str, error: &Error) {
    tracing::debug!(origin, error = %error.message(), "captured throw as failure");
}
