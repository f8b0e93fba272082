use std::io::IsTerminal;
use tracing_subscriber::EnvFilter;

/// Filter directive for a `-v` count when `RUST_LOG` is not set.
pub fn default_filter(verbosity: u8) -> &'static str {
    match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    }
}

/// ANSI styling only for an interactive stderr, and never under `NO_COLOR`.
pub fn ansi_enabled(stderr_is_terminal: bool, no_color: bool) -> bool {
    stderr_is_terminal && !no_color
}

/// Install the global subscriber. `RUST_LOG` wins over `-v`.
///
/// `log` records from dependencies and the config loader are bridged into
/// the same subscriber. Calling this twice is harmless: the second install
/// is ignored.
pub fn init_tracing(verbosity: u8) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_filter(verbosity)));

    let ansi = ansi_enabled(
        std::io::stderr().is_terminal(),
        std::env::var_os("NO_COLOR").is_some(),
    );

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_ansi(ansi)
        .with_target(false)
        .try_init();
}
