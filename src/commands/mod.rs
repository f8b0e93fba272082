//! CLI command implementations.
//!
//! Available commands:
//! - **analyze**: Cost breakdown and stakeholder insights for one downtime event
//! - **curve**: Residual value loss curve for a vintage bin
//! - **benchmarks**: Regional MRO turnaround reference data
//! - **init**: Write a default `.mroimpact.toml`
//!
//! Each handler computes everything it needs before writing output, so an
//! error never leaves a partial report behind.

pub mod analyze;
pub mod benchmarks;
pub mod curve;
pub mod init;

pub use analyze::{build_report, handle_analyze, AnalyzeConfig};
pub use benchmarks::handle_benchmarks;
pub use curve::handle_curve;
pub use init::init_config;

use crate::cli::OutputFormat;
use crate::formatting::FormattingConfig;
use crate::io::{create_writer, OutputWriter};
use anyhow::{Context, Result};
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

/// Open the report destination and hand a writer to `write`.
pub(crate) fn with_writer(
    format: OutputFormat,
    output: Option<&Path>,
    formatting: FormattingConfig,
    write: impl FnOnce(&mut dyn OutputWriter) -> Result<()>,
) -> Result<()> {
    match output {
        Some(path) => {
            let file = File::create(path)
                .with_context(|| format!("Failed to create output file {}", path.display()))?;
            let mut buffered = BufWriter::new(file);
            write(create_writer(format, &mut buffered, FormattingConfig::plain()).as_mut())?;
            buffered
                .flush()
                .with_context(|| format!("Failed to write output file {}", path.display()))
        }
        None => {
            let stdout = std::io::stdout();
            let mut writer = create_writer(format, stdout.lock(), formatting);
            write(writer.as_mut())
        }
    }
}
