use crate::chart::{regional_benchmarks, ChartData};
use crate::cli::OutputFormat;
use crate::core::{CostBreakdown, CostParameters, RegionInput, StakeholderView};
use crate::economics::ResidualLossCurve;
use crate::formatting::{
    format_days, format_percent, format_usd, ColoredFormatter, FormattingConfig, OutputFormatter,
    PlainFormatter,
};
use crate::insights::{InsightList, InsightTone};
use chrono::{DateTime, Utc};
use comfy_table::presets::{ASCII_FULL, UTF8_FULL};
use comfy_table::{Cell, CellAlignment, Table};
use serde::Serialize;
use std::io::Write;

/// Everything produced by one `analyze` run.
#[derive(Debug, Clone, Serialize)]
pub struct ImpactReport {
    pub generated_at: DateTime<Utc>,
    pub region: RegionInput,
    pub stakeholder: StakeholderView,
    pub parameters: CostParameters,
    pub breakdown: CostBreakdown,
    pub insights: InsightList,
    pub chart: ChartData,
}

pub trait OutputWriter {
    fn write_report(&mut self, report: &ImpactReport) -> anyhow::Result<()>;
    fn write_curve(&mut self, curve: &ResidualLossCurve) -> anyhow::Result<()>;
    fn write_benchmarks(&mut self) -> anyhow::Result<()>;
}

pub fn create_writer<'a, W: Write + 'a>(
    format: OutputFormat,
    writer: W,
    formatting: FormattingConfig,
) -> Box<dyn OutputWriter + 'a> {
    match format {
        OutputFormat::Json => Box::new(JsonWriter::new(writer)),
        OutputFormat::Markdown => Box::new(MarkdownWriter::new(writer)),
        OutputFormat::Terminal => Box::new(TerminalWriter::new(writer, formatting)),
    }
}

pub struct JsonWriter<W: Write> {
    writer: W,
}

impl<W: Write> JsonWriter<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    fn write_json<T: Serialize + ?Sized>(&mut self, value: &T) -> anyhow::Result<()> {
        serde_json::to_writer_pretty(&mut self.writer, value)?;
        writeln!(self.writer)?;
        Ok(())
    }
}

impl<W: Write> OutputWriter for JsonWriter<W> {
    fn write_report(&mut self, report: &ImpactReport) -> anyhow::Result<()> {
        self.write_json(report)
    }

    fn write_curve(&mut self, curve: &ResidualLossCurve) -> anyhow::Result<()> {
        let points: Vec<_> = curve.iter().collect();
        self.write_json(&serde_json::json!({
            "vintage": curve.vintage(),
            "points": points,
        }))
    }

    fn write_benchmarks(&mut self) -> anyhow::Result<()> {
        self.write_json(&regional_benchmarks())
    }
}

pub struct MarkdownWriter<W: Write> {
    writer: W,
}

impl<W: Write> MarkdownWriter<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    fn write_header(&mut self, report: &ImpactReport) -> anyhow::Result<()> {
        writeln!(self.writer, "# MRO Downtime Economic Impact")?;
        writeln!(self.writer)?;
        writeln!(
            self.writer,
            "Generated: {}",
            report.generated_at.format("%Y-%m-%d %H:%M:%S UTC")
        )?;
        writeln!(self.writer)?;
        writeln!(
            self.writer,
            "- Downtime: {} days",
            format_days(report.parameters.duration_days)
        )?;
        writeln!(self.writer, "- Vintage: {}", report.parameters.vintage)?;
        writeln!(
            self.writer,
            "- Region: {} (labor {}/hr)",
            report.region,
            format_usd(report.parameters.labor_rate_per_hour)
        )?;
        writeln!(self.writer)?;
        Ok(())
    }

    fn write_breakdown(&mut self, report: &ImpactReport) -> anyhow::Result<()> {
        writeln!(self.writer, "## Cost Breakdown")?;
        writeln!(self.writer)?;
        writeln!(self.writer, "| Component | Cost (USD) | Share |")?;
        writeln!(self.writer, "|-----------|-----------:|------:|")?;
        for slice in &report.chart.cost_slices {
            writeln!(
                self.writer,
                "| {} | {} | {} |",
                slice.label,
                format_usd(slice.value),
                format_percent(slice.share)
            )?;
        }
        writeln!(
            self.writer,
            "| **Net Economic Impact** | **{}** | |",
            format_usd(report.breakdown.net_impact())
        )?;
        writeln!(self.writer)?;
        Ok(())
    }

    fn write_insights(&mut self, insights: &InsightList) -> anyhow::Result<()> {
        writeln!(self.writer, "## Insights for {}", insights.view())?;
        writeln!(self.writer)?;
        for insight in insights.iter() {
            writeln!(self.writer, "- {}", insight.message)?;
        }
        writeln!(self.writer)?;
        Ok(())
    }
}

impl<W: Write> OutputWriter for MarkdownWriter<W> {
    fn write_report(&mut self, report: &ImpactReport) -> anyhow::Result<()> {
        self.write_header(report)?;
        self.write_breakdown(report)?;
        self.write_insights(&report.insights)?;
        Ok(())
    }

    fn write_curve(&mut self, curve: &ResidualLossCurve) -> anyhow::Result<()> {
        writeln!(self.writer, "## Residual Value Loss: {}", curve.vintage())?;
        writeln!(self.writer)?;
        writeln!(self.writer, "| Day | Loss (USD) |")?;
        writeln!(self.writer, "|----:|-----------:|")?;
        for point in curve {
            writeln!(
                self.writer,
                "| {} | {} |",
                point.day,
                format_usd(point.residual_loss)
            )?;
        }
        Ok(())
    }

    fn write_benchmarks(&mut self) -> anyhow::Result<()> {
        writeln!(self.writer, "## Benchmark MRO Duration by Region")?;
        writeln!(self.writer)?;
        writeln!(self.writer, "| Region | Avg TAT (days) |")?;
        writeln!(self.writer, "|--------|---------------:|")?;
        for benchmark in regional_benchmarks() {
            writeln!(
                self.writer,
                "| {} | {} |",
                benchmark.region, benchmark.avg_tat_days
            )?;
        }
        Ok(())
    }
}

pub struct TerminalWriter<W: Write> {
    writer: W,
    formatter: Box<dyn OutputFormatter>,
    plain: bool,
}

impl<W: Write> TerminalWriter<W> {
    pub fn new(writer: W, formatting: FormattingConfig) -> Self {
        let plain = formatting == FormattingConfig::plain();
        let formatter: Box<dyn OutputFormatter> = if plain {
            Box::new(PlainFormatter)
        } else {
            Box::new(ColoredFormatter::new(formatting))
        };
        Self {
            writer,
            formatter,
            plain,
        }
    }

    fn table(&self, header: Vec<&str>) -> Table {
        let mut table = Table::new();
        table
            .load_preset(if self.plain { ASCII_FULL } else { UTF8_FULL })
            .set_header(header);
        table
    }

    fn title(&mut self, emoji: &str, fallback: &str, text: &str) -> anyhow::Result<()> {
        let icon = self.formatter.emoji(emoji, fallback);
        writeln!(self.writer, "{} {}", icon, self.formatter.header(text))?;
        Ok(())
    }
}

impl<W: Write> OutputWriter for TerminalWriter<W> {
    fn write_report(&mut self, report: &ImpactReport) -> anyhow::Result<()> {
        let params = &report.parameters;
        self.title("🛠️", "[MRO]", "Estimated MRO Duration")?;
        writeln!(
            self.writer,
            "  {} days | {} | {} hrs/day | {} MRO",
            format_days(params.duration_days),
            params.vintage,
            params.avg_daily_utilization_hours,
            report.region
        )?;
        writeln!(self.writer)?;

        self.title("💸", "[$]", "Cost-Benefit Analysis")?;
        let mut table = self.table(vec!["Component", "Cost (USD)", "Share"]);
        for slice in &report.chart.cost_slices {
            table.add_row(vec![
                Cell::new(slice.label),
                Cell::new(format_usd(slice.value)).set_alignment(CellAlignment::Right),
                Cell::new(format_percent(slice.share)).set_alignment(CellAlignment::Right),
            ]);
        }
        writeln!(self.writer, "{table}")?;
        let net = format!(
            "Net Economic Impact: {}",
            format_usd(report.breakdown.net_impact())
        );
        writeln!(self.writer, "{}", self.formatter.bold(&net))?;
        writeln!(self.writer)?;

        self.title("🧠", "[*]", &format!("Insights for {}", report.insights.view()))?;
        for insight in report.insights.iter() {
            let line = match insight.tone {
                InsightTone::Warning => self.formatter.warning(&insight.message),
                InsightTone::Recommendation => self.formatter.success(&insight.message),
                InsightTone::Observation => self.formatter.info(&insight.message),
            };
            writeln!(self.writer, "  - {line}")?;
        }
        Ok(())
    }

    fn write_curve(&mut self, curve: &ResidualLossCurve) -> anyhow::Result<()> {
        let title = format!("Residual Value Loss vs MRO Downtime: {}", curve.vintage());
        self.title("📈", "[CHART]", &title)?;
        let mut table = self.table(vec!["Day", "Loss (USD)"]);
        for point in curve {
            table.add_row(vec![
                Cell::new(point.day).set_alignment(CellAlignment::Right),
                Cell::new(format_usd(point.residual_loss)).set_alignment(CellAlignment::Right),
            ]);
        }
        writeln!(self.writer, "{table}")?;
        Ok(())
    }

    fn write_benchmarks(&mut self) -> anyhow::Result<()> {
        self.title("📊", "[STATS]", "Benchmark MRO Duration by Region")?;
        let mut table = self.table(vec!["Region", "Avg TAT (days)"]);
        for benchmark in regional_benchmarks() {
            table.add_row(vec![
                Cell::new(benchmark.region),
                Cell::new(benchmark.avg_tat_days).set_alignment(CellAlignment::Right),
            ]);
        }
        writeln!(self.writer, "{table}")?;
        Ok(())
    }
}
