use crate::models::{StoppageRecord, TelemetrySample};
use chrono::{Local, TimeZone};
use std::fmt::Display;
use tracing::debug;

/// Detects stoppages, rendering reach/leave times in the local timezone.
pub fn detect(samples: &[TelemetrySample]) -> Vec<StoppageRecord> {
    detect_in(samples, &Local)
}

/// Single forward pass over adjacent sample pairs.
///
/// A run opens on the first zero-speed sample and closes on the first moving
/// sample after it, whose timestamp becomes the leave time. A run still open
/// when the pairs run out is dropped. Input order is trusted as-is.
pub fn detect_in<Tz>(samples: &[TelemetrySample], tz: &Tz) -> Vec<StoppageRecord>
where
    Tz: TimeZone,
    Tz::Offset: Display,
{
    let mut stoppages = Vec::new();
    let mut stoppage_start: Option<usize> = None;

    for (i, pair) in samples.windows(2).enumerate() {
        let (current, next) = (&pair[0], &pair[1]);

        if current.is_stopped() && stoppage_start.is_none() {
            stoppage_start = Some(i);
        }

        if next.is_moving() {
            if let Some(start) = stoppage_start.take() {
                let first = &samples[start];
                let record = StoppageRecord::new(
                    first.latitude,
                    first.longitude,
                    first.event_generated_time,
                    next.event_generated_time,
                    tz,
                );
                debug!(
                    "Stoppage at ({}, {}) for {} min [samples {}..={}]",
                    record.latitude,
                    record.longitude,
                    record.stoppage_time,
                    start,
                    i
                );
                stoppages.push(record);
            }
        }
    }

    debug!(
        "Detected {} stoppages from {} samples (trailing run dropped: {})",
        stoppages.len(),
        samples.len(),
        stoppage_start.is_some()
    );

    stoppages
}
