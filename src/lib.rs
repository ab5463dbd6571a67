//! try-this - turn panics, `Err` returns and failing futures into values
//!
//! # Overview
//!
//! `try-this` runs a callable once and hands back an [`Outcome`]: either
//! `Success(data)` or `Failure(error)`, with every kind of throw (a panic,
//! an `Err`, a future that panics or resolves to `Err`) normalized into
//! one [`Error`] type. Callers branch on the outcome instead of unwinding.
//!
//! # Quick Start
//!
//! ```
//! use try_this::{attempt, attempt_result, Outcome};
//!
//! let outcome = attempt(|| 5);
//! assert!(outcome.is_success());
//!
//! let outcome: Outcome<u8> = attempt_result(|| "300".parse::<u8>());
//! assert!(outcome.is_failure());
//! assert_eq!(outcome.error().unwrap().message(), "number too large to fit in target type");
//! ```
//!
//! # Entry points
//!
//! | Function | Callable | Result |
//! |----------|----------|--------|
//! | [`attempt`] | `FnOnce() -> T` | `Outcome<T>` |
//! | [`attempt_result`] | `FnOnce() -> Result<T, E>` | `Outcome<T>` |
//! | [`attempt_async`] | `FnOnce() -> impl Future<Output = T>` | [`Attempt`] resolving to `Outcome<T>` |
//! | [`attempt_async_result`] | `FnOnce() -> impl Future<Output = Result<T, E>>` | [`Attempt`] resolving to `Outcome<T>` |
//!
//! # Macros
//!
//! | Pattern | Description |
//! |---------|-------------|
//! | `attempt! { try { } }` | Body is the value, `?` throws |
//! | `attempt! { async try { } }` | Async version |
//! | `failure!(value)` | `Failure` from any thrown value |
//!
//! # Features
//!
//! | Feature | Description |
//! |---------|-------------|
//! | `serialize` | `Serialize` for `Outcome` and `Error` |
//! | `anyhow` | Conversions to and from `anyhow::Error` |
//! | `tracing` | Debug events when a throw is captured |

// ============================================================
// Modules
// ============================================================

mod attempt;
mod error;
mod macros;
mod normalize;
mod outcome;

// ============================================================
// Re-exports
// ============================================================

pub use attempt::{attempt, attempt_async, attempt_async_result, attempt_result, Attempt, Fallible, Settle, Verbatim};
pub use error::{Error, Message, Opaque, Unserializable};
pub use outcome::Outcome;

// Internal helpers for macros
#[doc(hidden)]
pub mod __private {
    pub use crate::normalize::{__ErrorLike, __Serialized, __Thrown};
}

// ============================================================
// Type aliases
// ============================================================

/// Result type alias.
///
/// - `Result<T>` = `core::result::Result<T, Error>`
/// - `Result<T, E>` = any other error type
pub type Result<T, E = Error> = core::result::Result<T, E>;

/// Type alias for errors inside `attempt!` bodies.
#[doc(hidden)]
pub type __BoxedError = Box<dyn std::error::Error + Send + Sync + 'static>;
