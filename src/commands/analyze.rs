use super::with_writer;
use crate::chart::build_chart_data;
use crate::cli::OutputFormat;
use crate::config::{self, ImpactConfig};
use crate::core::{CostParameters, RegionInput, StakeholderView, VintageCategory};
use crate::economics::compute_costs;
use crate::errors::ImpactResult;
use crate::formatting::FormattingConfig;
use crate::insights::generate_insights;
use crate::io::ImpactReport;
use crate::prediction::{DurationPredictor, FixedDurationPredictor};
use anyhow::Result;
use chrono::Utc;
use std::path::PathBuf;
use tracing::{debug, info};

/// Command-line overrides for one `analyze` run. `None` falls back to the
/// configuration file.
#[derive(Debug, Clone, Default)]
pub struct AnalyzeConfig {
    pub duration: Option<f64>,
    pub lease_rate: Option<f64>,
    pub lost_revenue: Option<f64>,
    pub utilization: Option<f64>,
    pub vintage: Option<VintageCategory>,
    pub region: Option<RegionInput>,
    pub labor_rate: Option<f64>,
    pub stakeholder: Option<StakeholderView>,
    pub format: Option<OutputFormat>,
    pub output: Option<PathBuf>,
    pub config: Option<PathBuf>,
    pub formatting_config: FormattingConfig,
}

pub fn handle_analyze(options: AnalyzeConfig) -> Result<()> {
    let _span = tracing::info_span!("analyze").entered();

    let file_config = match &options.config {
        Some(path) => config::load_config_file(path)?,
        None => config::load_config(),
    };

    let predictor = FixedDurationPredictor::new(file_config.prediction.fixed_duration_days)?;
    let report = build_report(&options, &file_config, &predictor)?;
    info!(
        net_impact = report.breakdown.net_impact(),
        insights = report.insights.len(),
        "Analysis complete"
    );

    let format = options.format.unwrap_or(file_config.output.default_format);
    with_writer(
        format,
        options.output.as_deref(),
        options.formatting_config,
        |writer| writer.write_report(&report),
    )
}

/// Merge CLI overrides over file configuration and evaluate the model.
pub fn build_report(
    overrides: &AnalyzeConfig,
    file_config: &ImpactConfig,
    predictor: &dyn DurationPredictor,
) -> ImpactResult<ImpactReport> {
    let region = overrides
        .region
        .clone()
        .unwrap_or_else(|| file_config.aircraft.region.clone());
    let utilization = overrides
        .utilization
        .unwrap_or(file_config.financial.avg_daily_utilization_hours);

    let duration_days = match overrides.duration {
        Some(days) => days,
        None => {
            let mut profile = file_config.aircraft_profile();
            profile.region = region.clone();
            profile.avg_daily_utilization_hours = utilization;
            let days = predictor.predict_duration(&profile)?;
            debug!(days, "Duration supplied by predictor");
            days
        }
    };

    let parameters = CostParameters {
        duration_days,
        lease_rate_monthly: overrides
            .lease_rate
            .unwrap_or(file_config.financial.lease_rate_monthly),
        lost_revenue_per_flight_hour: overrides
            .lost_revenue
            .unwrap_or(file_config.financial.lost_revenue_per_flight_hour),
        avg_daily_utilization_hours: utilization,
        labor_rate_per_hour: resolve_labor_rate(
            overrides.labor_rate,
            file_config.financial.labor_rate_per_hour,
            &region,
        ),
        vintage: overrides
            .vintage
            .unwrap_or_else(|| file_config.aircraft.vintage()),
    };
    let stakeholder = overrides
        .stakeholder
        .unwrap_or(file_config.output.stakeholder);

    let breakdown = compute_costs(&parameters)?;
    let insights = generate_insights(stakeholder, &breakdown, duration_days)?;

    Ok(ImpactReport {
        generated_at: Utc::now(),
        region,
        stakeholder,
        parameters,
        breakdown,
        insights,
        chart: build_chart_data(&breakdown, parameters.vintage),
    })
}

/// Labor rate precedence: command line, then configuration, then the
/// region's table rate (100 USD/hr for names outside the table).
pub fn resolve_labor_rate(
    cli_rate: Option<f64>,
    config_rate: Option<f64>,
    region: &RegionInput,
) -> f64 {
    cli_rate
        .or(config_rate)
        .unwrap_or_else(|| region.labor_rate_per_hour())
}
