use super::with_writer;
use crate::cli::OutputFormat;
use crate::formatting::FormattingConfig;
use anyhow::Result;

pub fn handle_benchmarks(format: OutputFormat, formatting: FormattingConfig) -> Result<()> {
    let _span = tracing::info_span!("benchmarks").entered();
    with_writer(format, None, formatting, |writer| writer.write_benchmarks())
}
