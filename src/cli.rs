use crate::core::{RegionInput, StakeholderView, VintageCategory};
use clap::{Parser, Subcommand, ValueEnum};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Human-readable tables and insight bullets
    Terminal,
    /// Machine-readable report including chart series
    Json,
    /// Markdown report
    Markdown,
}

#[derive(Parser, Debug)]
#[command(name = "mroimpact")]
#[command(about = "Economic impact of aircraft MRO downtime", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Increase verbosity level (can be repeated: -v, -vv, -vvv)
    #[arg(short = 'v', long = "verbose", action = clap::ArgAction::Count, global = true)]
    pub verbosity: u8,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Compute the cost breakdown and stakeholder insights for one downtime event
    Analyze {
        /// Downtime in days (defaults to the configured predictor)
        #[arg(short, long)]
        duration: Option<f64>,

        /// Monthly lease rate (USD)
        #[arg(long = "lease-rate")]
        lease_rate: Option<f64>,

        /// Lost revenue per flight hour (USD)
        #[arg(long = "lost-revenue")]
        lost_revenue: Option<f64>,

        /// Average daily utilisation (flight hours)
        #[arg(long = "utilization", visible_alias = "utilisation")]
        utilization: Option<f64>,

        /// Vintage bin: new, mid-life, old or a full label such as "Old (15+ yrs)"
        #[arg(long)]
        vintage: Option<VintageCategory>,

        /// MRO region: "Middle East", "East Asia", "SE Asia" or "USA"; other
        /// names use the default labor rate
        #[arg(long)]
        region: Option<RegionInput>,

        /// Labor rate override (USD/hr); defaults to the regional rate
        #[arg(long = "labor-rate")]
        labor_rate: Option<f64>,

        /// Stakeholder perspective: airline, lessor, financier, mro-provider
        #[arg(short, long)]
        stakeholder: Option<StakeholderView>,

        /// Output format
        #[arg(short, long, value_enum)]
        format: Option<OutputFormat>,

        /// Output file (defaults to stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Configuration file (defaults to the nearest .mroimpact.toml)
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Plain output (no colors, no emoji)
        #[arg(long)]
        plain: bool,
    },

    /// Print the residual value loss curve for a vintage bin
    Curve {
        /// Vintage bin
        #[arg(long, default_value = "mid-life")]
        vintage: VintageCategory,

        /// Number of days in the curve window
        #[arg(long, default_value = "60")]
        days: u32,

        /// Output format
        #[arg(short, long, value_enum, default_value = "terminal")]
        format: OutputFormat,
    },

    /// Print average MRO turnaround benchmarks by region
    Benchmarks {
        /// Output format
        #[arg(short, long, value_enum, default_value = "terminal")]
        format: OutputFormat,
    },

    /// Initialize configuration file
    Init {
        /// Force overwrite existing config
        #[arg(short, long)]
        force: bool,
    },
}
