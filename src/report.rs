use crate::markers::{track_path, MarkerColor, MarkerPalette};
use crate::models::{StoppageRecord, TelemetrySample};
use crate::processor::{detect_in, filter};
use chrono::TimeZone;
use serde::Serialize;
use std::fmt::Display;
use tracing::info;

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Marker {
    pub latitude: f64,
    pub longitude: f64,
    pub color: MarkerColor,
}

/// Everything a map/table view needs for one detection pass.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StoppageReport {
    pub threshold_minutes: i64,
    /// Count before the threshold is applied.
    pub total_stoppages: usize,
    pub stoppages: Vec<StoppageRecord>,
    pub markers: Vec<Marker>,
    pub track: Vec<[f64; 2]>,
}

impl StoppageReport {
    pub fn build<Tz>(samples: &[TelemetrySample], threshold_minutes: i64, tz: &Tz) -> Self
    where
        Tz: TimeZone,
        Tz::Offset: Display,
    {
        let all = detect_in(samples, tz);
        let palette = MarkerPalette::from_records(&all);
        let stoppages = filter(&all, threshold_minutes);

        let markers = stoppages
            .iter()
            .filter_map(|s| {
                palette.color_for(&s.key()).map(|color| Marker {
                    latitude: s.latitude,
                    longitude: s.longitude,
                    color,
                })
            })
            .collect();

        info!(
            "{} of {} stoppages meet the {} minute threshold",
            stoppages.len(),
            all.len(),
            threshold_minutes
        );

        Self {
            threshold_minutes,
            total_stoppages: all.len(),
            stoppages,
            markers,
            track: track_path(samples),
        }
    }
}
