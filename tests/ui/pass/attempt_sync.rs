//! `attempt!` resolves every path through `$crate`, even without imports.

fn main() {
    let outcome = try_this::attempt! {
        try { "5".parse::<i32>()? * 2 }
    };
    assert_eq!(outcome.into_data(), Some(10));

    let outcome = try_this::attempt! {
        try { "five".parse::<i32>()? }
    };
    assert!(outcome.is_failure());
}
