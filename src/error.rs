//! The uniform error object carried by a failed [`Outcome`](crate::Outcome).

use std::error::Error as StdError;
use std::fmt;
use std::sync::OnceLock;

// ============================================================
// Core types
// ============================================================

/// Uniform error produced by every failure path.
///
/// `Error` wraps whatever was thrown while keeping its identity: an
/// error-like value is boxed as-is, so [`downcast_ref`](Error::downcast_ref)
/// yields the original. Values that were not errors to begin with are
/// normalized into a [`Message`], [`Unserializable`] or [`Opaque`] source.
///
/// `Error` does NOT implement `std::error::Error` itself. That keeps the
/// blanket `From<E: std::error::Error>` conversion coherent (the same trick
/// `Box<dyn Error>` relies on). Use [`as_error`](Error::as_error),
/// [`into_inner`](Error::into_inner) or the `From<Error>` impl on
/// `Box<dyn Error + Send + Sync>` when a trait object is needed.
///
/// # Examples
///
/// ```
/// use try_this::Error;
/// use std::io;
///
/// let err = Error::new(io::Error::new(io::ErrorKind::NotFound, "gone"));
/// assert_eq!(err.message(), "gone");
/// assert_eq!(err.downcast_ref::<io::Error>().unwrap().kind(), io::ErrorKind::NotFound);
/// ```
pub struct Error {
    pub(crate) source: Box<dyn StdError + Send + Sync + 'static>,
    /// Lazy message - only computed when accessed via `message()`.
    pub(crate) message: OnceLock<String>,
}

impl Error {
    /// Wrap any error, preserving its concrete type for downcasting.
    #[inline]
    pub fn new<E: StdError + Send + Sync + 'static>(e: E) -> Self {
        Self::from_box(Box::new(e))
    }

    /// Wrap an already boxed error. The box becomes the source as-is.
    #[inline]
    pub fn from_box(e: Box<dyn StdError + Send + Sync + 'static>) -> Self {
        Self {
            source: e,
            message: OnceLock::new(),
        }
    }

    /// Create from a message string.
    /// Message is pre-initialized since we already have it.
    #[inline]
    pub fn msg(message: impl Into<String>) -> Self {
        let message = message.into();
        let msg_lock = OnceLock::new();
        let _ = msg_lock.set(message.clone());
        Self {
            source: Box::new(Message(message)),
            message: msg_lock,
        }
    }

    /// The error message, computed lazily on first access.
    ///
    /// Repeated calls return the same text.
    pub fn message(&self) -> &str {
        self.message.get_or_init(|| self.source.to_string())
    }

    /// Get the inner error as a trait object reference.
    #[inline]
    pub fn as_error(&self) -> &(dyn StdError + Send + Sync + 'static) {
        self.source.as_ref()
    }

    /// Whether the preserved error is of type `T`.
    #[inline]
    pub fn is<T: StdError + 'static>(&self) -> bool {
        self.source.is::<T>()
    }

    /// Try to downcast to a specific error type.
    #[inline]
    pub fn downcast_ref<T: StdError + 'static>(&self) -> Option<&T> {
        self.source.downcast_ref::<T>()
    }

    /// Try to downcast and consume the error.
    #[inline]
    pub fn downcast<T: StdError + 'static>(self) -> core::result::Result<T, Self> {
        let Self { source, message } = self;
        match source.downcast::<T>() {
            Ok(e) => Ok(*e),
            Err(source) => Err(Self { source, message }),
        }
    }

    /// Get the inner boxed error.
    pub fn into_inner(self) -> Box<dyn StdError + Send + Sync + 'static> {
        self.source
    }
}

impl fmt::Debug for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Error")
            .field("message", &self.message())
            .field("source", &self.source)
            .finish()
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.message())
    }
}

// From impl for Error - enables ? and `Outcome::failure` for any error type.
// This doesn't conflict with From<T> for T because Error doesn't implement Error.
impl<E: StdError + Send + Sync + 'static> From<E> for Error {
    fn from(e: E) -> Self {
        Error::new(e)
    }
}

impl From<Error> for Box<dyn StdError + Send + Sync + 'static> {
    fn from(e: Error) -> Self {
        e.source
    }
}

// ============================================================
// Normalized sources
// ============================================================

/// Error built from a thrown value that was not itself an error.
///
/// Its `Display` is exactly the normalized text: the string that was
/// thrown, or the JSON rendering of any other value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Message(pub(crate) String);

impl Message {
    /// The normalized text.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Message {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl StdError for Message {}

/// Error built from a thrown value that could not be rendered as JSON.
#[derive(Debug)]
pub struct Unserializable(pub(crate) serde_json::Error);

impl Unserializable {
    /// Fixed message reported in place of the unrenderable value.
    pub const MESSAGE: &'static str = "thrown value could not be serialized";
}

impl fmt::Display for Unserializable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(Self::MESSAGE)
    }
}

impl StdError for Unserializable {
    fn source(&self) -> Option<&(dyn StdError + 'static)> {
        Some(&self.0)
    }
}

/// Error built from a panic payload of a type with no known rendering.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Opaque;

impl Opaque {
    /// Fixed message reported in place of the payload.
    pub const MESSAGE: &'static str = "panicked with a non-displayable payload";
}

impl fmt::Display for Opaque {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(Self::MESSAGE)
    }
}

impl StdError for Opaque {}

// ============================================================
// anyhow interop
// ============================================================

#[cfg(feature = "anyhow")]
impl Error {
    /// Convert an `anyhow::Error`, keeping its top-level message.
    pub fn from_anyhow(e: anyhow::Error) -> Self {
        Self::from_box(e.into())
    }
}

#[cfg(feature = "anyhow")]
impl From<Error> for anyhow::Error {
    fn from(e: Error) -> Self {
        anyhow::Error::msg(e.message().to_string())
    }
}

// ============================================================
// Serde support
// ============================================================

#[cfg(feature = "serialize")]
impl serde::Serialize for Error {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        use serde::ser::SerializeStruct;
        let mut state = serializer.serialize_struct("Error", 1)?;
        state.serialize_field("message", self.message())?;
        state.end()
    }
}
