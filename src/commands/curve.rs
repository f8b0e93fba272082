use super::with_writer;
use crate::cli::OutputFormat;
use crate::core::VintageCategory;
use crate::economics::residual_loss_curve;
use crate::formatting::FormattingConfig;
use anyhow::Result;

pub fn handle_curve(
    vintage: VintageCategory,
    days: u32,
    format: OutputFormat,
    formatting: FormattingConfig,
) -> Result<()> {
    let _span = tracing::info_span!("curve", vintage = vintage.key(), days).entered();
    let curve = residual_loss_curve(vintage, days);
    with_writer(format, None, formatting, |writer| writer.write_curve(&curve))
}
