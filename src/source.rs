use crate::models::TelemetrySample;
use anyhow::{Context, Result};
use std::path::Path;
use tracing::{info, warn};

/// Reads a telemetry file from disk. See [`parse_samples`] for accepted layouts.
pub async fn load_samples(path: &Path) -> Result<Vec<TelemetrySample>> {
    let payload = tokio::fs::read(path)
        .await
        .with_context(|| format!("Failed to read telemetry file {}", path.display()))?;

    let samples = parse_samples(&payload)
        .with_context(|| format!("Failed to parse telemetry file {}", path.display()))?;

    info!("Loaded {} samples from {}", samples.len(), path.display());
    Ok(samples)
}

/// Accepts either a JSON array of samples or newline-delimited JSON, one
/// sample per line. Samples keep their file order.
pub fn parse_samples(payload: &[u8]) -> Result<Vec<TelemetrySample>> {
    let text = std::str::from_utf8(payload).context("Telemetry payload is not UTF-8")?;

    let samples: Vec<TelemetrySample> = if text.trim_start().starts_with('[') {
        serde_json::from_str(text).context("Invalid telemetry array")?
    } else {
        text.lines()
            .enumerate()
            .filter(|(_, line)| !line.trim().is_empty())
            .map(|(n, line)| {
                serde_json::from_str::<TelemetrySample>(line)
                    .with_context(|| format!("Invalid telemetry sample on line {}", n + 1))
            })
            .collect::<Result<_>>()?
    };

    let out_of_order = samples
        .windows(2)
        .filter(|w| w[1].event_generated_time < w[0].event_generated_time)
        .count();
    if out_of_order > 0 {
        warn!(
            "{} samples go back in time; stoppage durations may be wrong",
            out_of_order
        );
    }

    Ok(samples)
}
