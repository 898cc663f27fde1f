use anyhow::Context;
use chrono::Local;
use siscom_stoppages::config::AppConfig;
use siscom_stoppages::report::StoppageReport;
use siscom_stoppages::source;
use tracing::info;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load config
    let config = AppConfig::load()?;

    // Init logging
    tracing_subscriber::fmt()
        .with_env_filter(&config.log_level)
        .with_writer(std::io::stderr)
        .init();

    info!("Starting Siscom Stoppages...");

    let samples = source::load_samples(&config.telemetry_file).await?;
    let report = StoppageReport::build(&samples, config.threshold_minutes, &Local);
    let json = serde_json::to_string_pretty(&report)?;

    match &config.report_file {
        Some(path) => {
            tokio::fs::write(path, json)
                .await
                .with_context(|| format!("Failed to write report {}", path.display()))?;
            info!("Report written to {}", path.display());
        }
        None => println!("{}", json),
    }

    Ok(())
}
