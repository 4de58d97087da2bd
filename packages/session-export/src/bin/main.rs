// Entry point: scrape the RailsConf 2015 program into rails_conf_sessions.csv

use anyhow::{Context, Result};
use session_export::{export_to_path, ConferenceConfig, HttpPageSource, Schedule};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    // Load .env if present (RUST_LOG)
    let _ = dotenvy::dotenv();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,session_export=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = ConferenceConfig::default();
    tracing::info!(days = ?config.days, "Starting session export");

    let source = HttpPageSource::new().context("Failed to create HTTP client")?;

    let mut schedule = Schedule::fetch(&source, config)
        .await
        .context("Failed to fetch conference pages")?;

    let report = schedule
        .parse()
        .context("Failed to extract sessions")?;

    let output = schedule.config().output_path.clone();
    let rows = export_to_path(&output, schedule.sessions())
        .with_context(|| format!("Failed to write {}", output.display()))?;

    tracing::info!(
        rows,
        matched = report.matched,
        path = %output.display(),
        "Export complete"
    );

    Ok(())
}
