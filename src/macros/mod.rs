//! Declarative macros for try-this.

// The attempt! and failure! macros are defined here with #[macro_export],
// which exports them at crate root
#[macro_use]
mod attempt;
