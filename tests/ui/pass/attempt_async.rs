//! `attempt! { async try { } }` produces a future that any executor can drive.

fn main() {
    let runtime = tokio::runtime::Builder::new_current_thread().build().unwrap();

    let outcome = runtime.block_on(try_this::attempt! {
        async try { "8".parse::<u8>()? }
    });
    assert_eq!(outcome.into_data(), Some(8));
}
