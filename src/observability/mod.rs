//! Diagnostics: tracing subscriber setup and crash reports.
//!
//! Diagnostics go to stderr so that reports written to stdout stay
//! machine-readable.

pub mod panic_hook;
pub mod tracing;

pub use self::panic_hook::install_panic_hook;
pub use self::tracing::{ansi_enabled, default_filter, init_tracing};
