//! Custom panic hook for structured crash reports.
//!
//! The report names the crate version, platform, panic location and the
//! command span that was active when the panic happened.

use std::panic::PanicHookInfo;
use tracing::Span;

const VERSION: &str = env!("CARGO_PKG_VERSION");
const RULE: &str = "════════════════════════════════════════════════════════════════════════";

/// Install the custom panic hook. Call early in `main`.
pub fn install_panic_hook() {
    std::panic::set_hook(Box::new(|info| {
        eprintln!("{}", crash_report(info, Span::current().metadata().map(|m| m.name())));
    }));
}

fn crash_report(info: &PanicHookInfo<'_>, span: Option<&str>) -> String {
    let mut lines = vec![
        RULE.to_string(),
        "MROIMPACT CRASH REPORT".to_string(),
        RULE.to_string(),
        format!("Version:  {VERSION}"),
        format!("Platform: {}", std::env::consts::OS),
        format!(
            "Time:     {}",
            chrono::Utc::now().format("%Y-%m-%d %H:%M:%S UTC")
        ),
        format!("Panic:    {}", extract_panic_message(info.payload())),
    ];

    if let Some(location) = info.location() {
        lines.push(format!(
            "Location: {}:{}:{}",
            location.file(),
            location.line(),
            location.column()
        ));
    }
    if let Some(span) = span {
        lines.push(format!("Command:  {span}"));
    }

    lines.push(RULE.to_string());
    if std::env::var("RUST_BACKTRACE").is_ok() {
        lines.push(std::backtrace::Backtrace::capture().to_string());
    } else {
        lines.push("Run with RUST_BACKTRACE=1 for stack trace".to_string());
    }
    lines.join("\n")
}

fn extract_panic_message(payload: &(dyn std::any::Any + Send)) -> String {
    if let Some(s) = payload.downcast_ref::<&str>() {
        s.to_string()
    } else if let Some(s) = payload.downcast_ref::<String>() {
        s.clone()
    } else {
        "Unknown panic".to_string()
    }
}
