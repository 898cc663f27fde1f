use chrono::TimeZone;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt::Display;
use std::hash::{Hash, Hasher};

pub const TIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S";
const MILLIS_PER_MINUTE: f64 = 60_000.0;

/// A closed run of zero-speed samples.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StoppageRecord {
    /// Position of the first stopped sample.
    pub latitude: f64,
    pub longitude: f64,
    /// Whole minutes between `start_time` and `end_time`.
    pub stoppage_time: i64,
    pub reach_time: String,
    pub leave_time: String,
    /// Epoch ms of the first stopped sample.
    pub start_time: i64,
    /// Epoch ms of the sample following the last stopped one.
    pub end_time: i64,
}

impl StoppageRecord {
    pub fn new<Tz>(latitude: f64, longitude: f64, start_time: i64, end_time: i64, tz: &Tz) -> Self
    where
        Tz: TimeZone,
        Tz::Offset: Display,
    {
        Self {
            latitude,
            longitude,
            stoppage_time: stoppage_minutes(start_time, end_time),
            reach_time: render_time(start_time, tz),
            leave_time: render_time(end_time, tz),
            start_time,
            end_time,
        }
    }

    pub fn key(&self) -> StoppageKey {
        StoppageKey::new(self.latitude, self.longitude)
    }
}

/// Location identity of a stoppage. Two keys are equal when their coordinates
/// are bit-for-bit identical.
#[derive(Debug, Clone, Copy)]
pub struct StoppageKey {
    pub latitude: f64,
    pub longitude: f64,
}

impl StoppageKey {
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }

    pub fn to_bytes(self) -> [u8; 16] {
        let mut bytes = [0u8; 16];
        bytes[..8].copy_from_slice(&self.latitude.to_bits().to_be_bytes());
        bytes[8..].copy_from_slice(&self.longitude.to_bits().to_be_bytes());
        bytes
    }
}

impl PartialEq for StoppageKey {
    fn eq(&self, other: &Self) -> bool {
        self.latitude.to_bits() == other.latitude.to_bits()
            && self.longitude.to_bits() == other.longitude.to_bits()
    }
}

impl Eq for StoppageKey {}

impl Hash for StoppageKey {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.latitude.to_bits().hash(state);
        self.longitude.to_bits().hash(state);
    }
}

impl PartialOrd for StoppageKey {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for StoppageKey {
    fn cmp(&self, other: &Self) -> Ordering {
        self.latitude
            .total_cmp(&other.latitude)
            .then_with(|| self.longitude.total_cmp(&other.longitude))
    }
}

/// Rounded minutes between two epoch-ms instants, half away from zero.
pub fn stoppage_minutes(start_ms: i64, end_ms: i64) -> i64 {
    ((end_ms as f64 - start_ms as f64) / MILLIS_PER_MINUTE).round() as i64
}

/// Renders an epoch-ms instant in `tz`. Out-of-range instants fall back to the
/// raw millisecond value.
pub fn render_time<Tz>(ms: i64, tz: &Tz) -> String
where
    Tz: TimeZone,
    Tz::Offset: Display,
{
    match tz.timestamp_millis_opt(ms).single() {
        Some(t) => t.format(TIME_FORMAT).to_string(),
        None => ms.to_string(),
    }
}
