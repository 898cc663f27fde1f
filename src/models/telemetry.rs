use chrono::{DateTime, NaiveDateTime};
use serde::{Deserialize, Deserializer, Serialize};

/// One GPS observation reported by the tracked device.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TelemetrySample {
    #[serde(deserialize_with = "parse_f64")]
    pub latitude: f64,
    #[serde(deserialize_with = "parse_f64")]
    pub longitude: f64,
    #[serde(deserialize_with = "parse_f64")]
    pub speed: f64,
    /// Epoch milliseconds.
    #[serde(deserialize_with = "parse_epoch_millis")]
    pub event_generated_time: i64,
}

impl TelemetrySample {
    pub fn new(latitude: f64, longitude: f64, speed: f64, event_generated_time: i64) -> Self {
        Self {
            latitude,
            longitude,
            speed,
            event_generated_time,
        }
    }

    /// Only an exact zero counts. Negative or NaN speeds are neither stopped nor moving.
    pub fn is_stopped(&self) -> bool {
        self.speed == 0.0
    }

    pub fn is_moving(&self) -> bool {
        self.speed > 0.0
    }
}

const DATETIME_FORMATS: [&str; 2] = ["%Y-%m-%d %H:%M:%S", "%Y-%m-%dT%H:%M:%S"];

fn parse_f64<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum StringOrFloat {
        String(String),
        Float(f64),
    }

    match StringOrFloat::deserialize(deserializer)? {
        StringOrFloat::Float(f) => Ok(f),
        StringOrFloat::String(s) => s.trim().parse::<f64>().map_err(serde::de::Error::custom),
    }
}

fn parse_epoch_millis<'de, D>(deserializer: D) -> Result<i64, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Timestamp {
        Int(i64),
        Float(f64),
        String(String),
    }

    match Timestamp::deserialize(deserializer)? {
        Timestamp::Int(ms) => Ok(ms),
        Timestamp::Float(ms) => Ok(ms.round() as i64),
        Timestamp::String(s) => parse_timestamp_str(s.trim()).ok_or_else(|| {
            serde::de::Error::custom(format!("invalid eventGeneratedTime: '{}'", s))
        }),
    }
}

fn parse_timestamp_str(s: &str) -> Option<i64> {
    if let Ok(ms) = s.parse::<i64>() {
        return Some(ms);
    }
    // Naive device datetimes are taken as UTC
    for format in DATETIME_FORMATS {
        if let Ok(t) = NaiveDateTime::parse_from_str(s, format) {
            return Some(t.and_utc().timestamp_millis());
        }
    }
    DateTime::parse_from_rfc3339(s)
        .ok()
        .map(|t| t.timestamp_millis())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parsing_numeric_payload() {
        let payload = r#"
        {
            "latitude": 13.3409,
            "longitude": 74.7421,
            "speed": 0,
            "eventGeneratedTime": 1709577600000
        }
        "#;

        let sample: TelemetrySample = serde_json::from_str(payload).unwrap();
        assert_eq!(sample.latitude, 13.3409);
        assert_eq!(sample.longitude, 74.7421);
        assert!(sample.is_stopped());
        assert_eq!(sample.event_generated_time, 1_709_577_600_000);
    }

    #[test]
    fn test_parsing_string_payload() {
        let payload = r#"
        {
            "latitude": "+20.652494",
            "longitude": "-100.391404",
            "speed": " 12.50 ",
            "eventGeneratedTime": "1764396915000"
        }
        "#;

        let sample: TelemetrySample = serde_json::from_str(payload).unwrap();
        assert_eq!(sample.latitude, 20.652494);
        assert_eq!(sample.longitude, -100.391404);
        assert_eq!(sample.speed, 12.5);
        assert!(sample.is_moving());
        assert_eq!(sample.event_generated_time, 1_764_396_915_000);
    }

    #[test]
    fn test_parsing_datetime_strings() {
        let sample: TelemetrySample = serde_json::from_str(
            r#"{"latitude":0,"longitude":0,"speed":0,"eventGeneratedTime":"2025-11-29 06:15:15"}"#,
        )
        .unwrap();
        assert_eq!(sample.event_generated_time, 1_764_396_915_000);

        let sample: TelemetrySample = serde_json::from_str(
            r#"{"latitude":0,"longitude":0,"speed":0,"eventGeneratedTime":"2025-11-29T06:15:15"}"#,
        )
        .unwrap();
        assert_eq!(sample.event_generated_time, 1_764_396_915_000);

        let sample: TelemetrySample = serde_json::from_str(
            r#"{"latitude":0,"longitude":0,"speed":0,"eventGeneratedTime":"2025-11-29T07:15:15+01:00"}"#,
        )
        .unwrap();
        assert_eq!(sample.event_generated_time, 1_764_396_915_000);
    }

    #[test]
    fn test_rejects_garbage_values() {
        let bad_speed = r#"{"latitude":0,"longitude":0,"speed":"fast","eventGeneratedTime":0}"#;
        assert!(serde_json::from_str::<TelemetrySample>(bad_speed).is_err());

        let bad_time = r#"{"latitude":0,"longitude":0,"speed":0,"eventGeneratedTime":"yesterday"}"#;
        assert!(serde_json::from_str::<TelemetrySample>(bad_time).is_err());

        let missing = r#"{"latitude":0,"longitude":0,"eventGeneratedTime":0}"#;
        assert!(serde_json::from_str::<TelemetrySample>(missing).is_err());
    }

    #[test]
    fn test_negative_speed_is_neither_stopped_nor_moving() {
        let sample = TelemetrySample::new(0.0, 0.0, -3.0, 0);
        assert!(!sample.is_stopped());
        assert!(!sample.is_moving());

        let sample = TelemetrySample::new(0.0, 0.0, f64::NAN, 0);
        assert!(!sample.is_stopped());
        assert!(!sample.is_moving());
    }
}
