use crate::processor::DEFAULT_THRESHOLD_MINUTES;
use anyhow::Result;
use dotenvy::dotenv;
use serde::Deserialize;
use std::env;
use std::path::PathBuf;

#[derive(Debug, Deserialize, Clone)]
pub struct AppConfig {
    pub telemetry_file: PathBuf,
    pub threshold_minutes: i64,
    pub report_file: Option<PathBuf>,
    pub log_level: String,
}

impl AppConfig {
    pub fn load() -> Result<Self> {
        dotenv().ok();
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let telemetry_file = lookup("TELEMETRY_FILE")
            .unwrap_or_else(|| "data/telemetry.json".to_string())
            .into();
        let threshold_minutes = lookup("STOPPAGE_THRESHOLD_MINUTES")
            .and_then(|v| v.trim().parse().ok())
            .unwrap_or(DEFAULT_THRESHOLD_MINUTES);
        let report_file = lookup("REPORT_FILE")
            .filter(|v| !v.trim().is_empty())
            .map(PathBuf::from);
        let log_level = lookup("LOG_LEVEL").unwrap_or_else(|| "info".to_string());

        Ok(Self {
            telemetry_file,
            threshold_minutes,
            report_file,
            log_level,
        })
    }
}
