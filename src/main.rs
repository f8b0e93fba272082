use anyhow::Result;
use clap::Parser;
use mroimpact::cli::{Cli, Commands};
use mroimpact::commands::{self, AnalyzeConfig};
use mroimpact::formatting::{ColorMode, EmojiMode, FormattingConfig};
use mroimpact::observability::{init_tracing, install_panic_hook};

fn main() -> Result<()> {
    install_panic_hook();
    let cli = Cli::parse();
    init_tracing(cli.verbosity);

    match cli.command {
        Commands::Analyze {
            duration,
            lease_rate,
            lost_revenue,
            utilization,
            vintage,
            region,
            labor_rate,
            stakeholder,
            format,
            output,
            config,
            plain,
        } => commands::handle_analyze(AnalyzeConfig {
            duration,
            lease_rate,
            lost_revenue,
            utilization,
            vintage,
            region,
            labor_rate,
            stakeholder,
            format,
            output,
            config,
            formatting_config: create_formatting_config(plain),
        }),
        Commands::Curve {
            vintage,
            days,
            format,
        } => commands::handle_curve(vintage, days, format, FormattingConfig::from_env()),
        Commands::Benchmarks { format } => {
            commands::handle_benchmarks(format, FormattingConfig::from_env())
        }
        Commands::Init { force } => commands::init_config(force),
    }
}

// Pure function to create formatting configuration
fn create_formatting_config(plain: bool) -> FormattingConfig {
    if plain {
        FormattingConfig::new(ColorMode::Never, EmojiMode::Never)
    } else {
        FormattingConfig::from_env()
    }
}
