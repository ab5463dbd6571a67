//! The `attempt!` and `failure!` macros.

/// Block syntax for the executor.
///
/// The body is the success value; `?` inside it throws. Anything `?`
/// accepts on a `Box<dyn Error + Send + Sync>` works, including `&str`
/// and `String` errors. Panics are captured too.
///
/// # Patterns
///
/// | Pattern | Expands to |
/// |---------|------------|
/// | `try { }` | [`attempt_result`](crate::attempt_result), returns `Outcome<T>` |
/// | `async try { }` | [`attempt_async_result`](crate::attempt_async_result), returns a future of `Outcome<T>` |
///
/// ## Sync
/// ```
/// use try_this::attempt;
///
/// let outcome = attempt! {
///     try {
///         let n: u32 = "41".parse()?;
///         n + 1
///     }
/// };
/// assert_eq!(outcome.into_data(), Some(42));
///
/// let outcome = attempt! {
///     try { Err::<(), _>("refused")?; 0 }
/// };
/// assert_eq!(outcome.error().unwrap().message(), "refused");
/// ```
///
/// ## Async
/// ```
/// # tokio::runtime::Builder::new_current_thread().build().unwrap().block_on(async {
/// use try_this::attempt;
///
/// let outcome = attempt! {
///     async try {
///         let n: u32 = async { "7".parse() }.await?;
///         n
///     }
/// }
/// .await;
/// assert_eq!(outcome.into_data(), Some(7));
/// # });
/// ```
#[macro_export]
macro_rules! attempt {
    // async try { } alone
    // `?` in the body targets the inner block, whose error type is the boxed
    // error so `&str` and `String` errors convert like in the sync arm.
    (async try { $($body:tt)* }) => {
        $crate::attempt_async_result(|| async move {
            let __result = async move {
                let __result: ::core::result::Result<_, $crate::__BoxedError> =
                    ::core::result::Result::Ok({ $($body)* });
                __result
            }
            .await;
            __result.map_err($crate::Error::from_box)
        })
    };

    // try { } alone
    (try { $($body:tt)* }) => {
        $crate::attempt_result(|| {
            (|| -> ::core::result::Result<_, $crate::__BoxedError> {
                ::core::result::Result::Ok({ $($body)* })
            })()
            .map_err($crate::Error::from_box)
        })
    };
}

/// Build a `Failure` from any thrown value.
///
/// The value's shape is resolved at compile time, most specific first:
///
/// | Shape | Error |
/// |-------|-------|
/// | [`Error`](crate::Error) | used directly |
/// | `Box<dyn Error + Send + Sync>` | the box becomes the source |
/// | `&str`, `String`, `&String`, `Cow<str>`, `Box<str>`, `char` | [`Message`](crate::Message) with that text |
/// | any `E: std::error::Error` | boxed, downcastable to `E` |
/// | any `T: Serialize` | [`Message`](crate::Message) with the JSON text |
/// | unserializable | [`Unserializable`](crate::Unserializable) |
///
/// Numeric literals need a suffix (`42_i32`) so the shape is known. Without
/// a suffix, build the error directly:
/// `Outcome::Failure(Error::from_json(&42))`.
///
/// ```
/// use try_this::{failure, Outcome};
/// use serde_json::json;
///
/// let outcome: Outcome<()> = failure!("boom");
/// assert_eq!(outcome.error().unwrap().message(), "boom");
///
/// let outcome: Outcome<()> = failure!(42_i32);
/// assert_eq!(outcome.error().unwrap().message(), "42");
///
/// let outcome: Outcome<()> = Outcome::Failure(try_this::Error::from_json(&42));
/// assert_eq!(outcome.error().unwrap().message(), "42");
///
/// let outcome: Outcome<()> = failure!(json!({ "a": 1 }));
/// assert_eq!(outcome.error().unwrap().message(), r#"{"a":1}"#);
/// ```
#[macro_export]
macro_rules! failure {
    ($thrown:expr $(,)?) => {{
        #[allow(unused_imports)]
        use $crate::__private::{__ErrorLike as _, __Serialized as _};
        $crate::Outcome::Failure($crate::__private::__Thrown($thrown).__normalize())
    }};
}
