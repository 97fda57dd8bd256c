//! tutorscope CLI entry point.

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};
use tutorscope::cli::{commands, Cli, Commands};
use tutorscope::config::Settings;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Load configuration
    let config_path = cli.config.as_deref().map(Settings::expand_path);
    let settings = Settings::load_from(config_path.as_ref())?;

    // Initialize logging
    let log_level = match cli.verbose {
        0 => settings.general.log_level.clone(),
        1 => "info".to_string(),
        2 => "debug".to_string(),
        _ => "trace".to_string(),
    };

    tracing_subscriber::registry()
        .with(EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| format!("tutorscope={}", log_level)),
        ))
        .with(tracing_subscriber::fmt::layer().with_target(false))
        .init();

    // Execute command
    match &cli.command {
        Commands::Analyze { bundle, json } => {
            commands::run_analyze(bundle, *json, settings).await?;
        }

        Commands::Chapters { bundle } => {
            commands::run_chapters(bundle)?;
        }

        Commands::Ask { bundle, question } => {
            commands::run_ask(bundle, question, settings).await?;
        }

        Commands::Compare { bundles, target } => {
            commands::run_compare(bundles, (*target).into(), settings).await?;
        }

        Commands::Serve { host, port, bundles } => {
            commands::run_serve(host, *port, bundles, settings).await?;
        }

        Commands::Config { action } => {
            commands::run_config(action, &settings, config_path.as_ref())?;
        }
    }

    Ok(())
}
