//! Coercion of arbitrary thrown values into [`Error`].
//!
//! A thrown value is recognized as one of a closed set of shapes:
//!
//! | Shape | Result |
//! |-------|--------|
//! | `Error` | used directly |
//! | `Box<dyn Error + Send + Sync>` | the box becomes the source |
//! | any `E: std::error::Error` | boxed, type preserved |
//! | `&str`, `String`, `&String`, `Cow<str>`, `Box<str>`, `char` | [`Message`](crate::Message) with that text |
//! | any `T: Serialize` | [`Message`](crate::Message) with the JSON text |
//! | unserializable value | [`Unserializable`] |
//! | unknown panic payload | [`Opaque`] |

use std::any::Any;
use std::borrow::Cow;
use std::error::Error as StdError;

use serde::Serialize;

use crate::error::{Error, Opaque, Unserializable};

impl Error {
    /// Normalize a value through its JSON rendering.
    ///
    /// Mirrors `JSON.stringify`-style output: `42` becomes `"42"`, a struct
    /// becomes `{"a":1}`, `()` and `None` become `"null"`. Values that
    /// cannot be rendered (e.g. maps with non-string keys) become an
    /// [`Unserializable`] error instead of panicking.
    ///
    /// ```
    /// use try_this::Error;
    ///
    /// assert_eq!(Error::from_json(&42).message(), "42");
    /// assert_eq!(Error::from_json(&Some("a")).message(), "\"a\"");
    /// ```
    pub fn from_json<T: Serialize + ?Sized>(value: &T) -> Self {
        match serde_json::to_string(value) {
            Ok(text) => Self::msg(text),
            Err(e) => Self::new(Unserializable(e)),
        }
    }

    /// Normalize a panic payload as returned by `std::panic::catch_unwind`.
    ///
    /// `panic!("..")` payloads become the message, as does a `char` raised
    /// with `std::panic::panic_any`. Other `panic_any` payloads are
    /// recognized when they are an `Error`, a boxed error, a
    /// `serde_json::Value` or a primitive; anything else becomes [`Opaque`].
    pub fn from_panic(payload: Box<dyn Any + Send + 'static>) -> Self {
        let payload = match payload.downcast::<Error>() {
            Ok(e) => return *e,
            Err(payload) => payload,
        };
        let payload = match payload.downcast::<Box<dyn StdError + Send + Sync + 'static>>() {
            Ok(e) => return Self::from_box(*e),
            Err(payload) => payload,
        };
        if let Some(s) = payload.downcast_ref::<&'static str>() {
            return Self::msg(*s);
        }
        let payload = match payload.downcast::<String>() {
            Ok(s) => return Self::msg(*s),
            Err(payload) => payload,
        };
        if let Some(c) = payload.downcast_ref::<char>() {
            return Self::msg(c.to_string());
        }
        if let Some(v) = payload.downcast_ref::<serde_json::Value>() {
            return Self::from_json(v);
        }
        match json_primitive(payload.as_ref()) {
            Some(e) => e,
            None => Self::new(Opaque),
        }
    }
}

// Primitive payloads - allow panic_any(404) and friends
macro_rules! downcast_primitive {
    ($payload:expr; $($t:ty),*) => {
        $(
            if let Some(v) = $payload.downcast_ref::<$t>() {
                return Some(Error::from_json(v));
            }
        )*
    };
}

fn json_primitive(payload: &(dyn Any + Send)) -> Option<Error> {
    downcast_primitive!(payload; bool, u8, u16, u32, u64, u128, usize, i8, i16, i32, i64, i128, isize, f32, f64);
    None
}

// ============================================================
// Shape dispatch for `failure!`
// Uses inherent impls (highest priority) for specific types,
// by-value trait impl for any error, autoref trait impl for Serialize.
// ============================================================

/// Wrapper for thrown-value normalization. Method resolution picks the
/// most specific `__normalize` available for the wrapped type.
#[doc(hidden)]
pub struct __Thrown<T>(pub T);

// Inherent impl for Error - pass through
impl __Thrown<Error> {
    #[inline]
    pub fn __normalize(self) -> Error {
        self.0
    }
}

// Inherent impl for Box<dyn Error>
impl __Thrown<Box<dyn StdError + Send + Sync + 'static>> {
    #[inline]
    pub fn __normalize(self) -> Error {
        Error::from_box(self.0)
    }
}

// Inherent impl for &str
impl __Thrown<&str> {
    #[inline]
    pub fn __normalize(self) -> Error {
        Error::msg(self.0)
    }
}

// Inherent impl for String
impl __Thrown<String> {
    #[inline]
    pub fn __normalize(self) -> Error {
        Error::msg(self.0)
    }
}

// Inherent impl for &String - would otherwise reach the JSON tier quoted
impl __Thrown<&String> {
    #[inline]
    pub fn __normalize(self) -> Error {
        Error::msg(self.0.as_str())
    }
}

// Inherent impl for Cow<str>
impl __Thrown<Cow<'_, str>> {
    #[inline]
    pub fn __normalize(self) -> Error {
        Error::msg(self.0.into_owned())
    }
}

// Inherent impl for Box<str>
impl __Thrown<Box<str>> {
    #[inline]
    pub fn __normalize(self) -> Error {
        Error::msg(String::from(self.0))
    }
}

// Inherent impl for char
impl __Thrown<char> {
    #[inline]
    pub fn __normalize(self) -> Error {
        Error::msg(self.0.to_string())
    }
}

/// Fallback for any concrete error type.
#[doc(hidden)]
pub trait __ErrorLike {
    fn __normalize(self) -> Error;
}

impl<E: StdError + Send + Sync + 'static> __ErrorLike for __Thrown<E> {
    #[inline]
    fn __normalize(self) -> Error {
        Error::new(self.0)
    }
}

/// Last resort: anything serde can render. Implemented on the reference so
/// it only applies after the by-value candidates fail.
#[doc(hidden)]
pub trait __Serialized {
    fn __normalize(self) -> Error;
}

impl<T: Serialize> __Serialized for &__Thrown<T> {
    #[inline]
    fn __normalize(self) -> Error {
        Error::from_json(&self.0)
    }
}
