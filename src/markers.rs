use crate::models::{StoppageKey, StoppageRecord, TelemetrySample};
use serde::{Serialize, Serializer};
use std::collections::BTreeMap;
use std::fmt;
use uuid::Uuid;

const MARKER_NAMESPACE: Uuid = Uuid::from_u128(0x6f1c_2a7e_9b3d_4c58_a0e2_5d4f_8b17_c93a);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MarkerColor {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl fmt::Display for MarkerColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02X}{:02X}{:02X}", self.r, self.g, self.b)
    }
}

impl Serialize for MarkerColor {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// Color for a stoppage location, stable across runs for the same coordinates.
pub fn marker_color(key: StoppageKey) -> MarkerColor {
    let id = Uuid::new_v5(&MARKER_NAMESPACE, &key.to_bytes());
    let bytes = id.as_bytes();
    MarkerColor {
        r: bytes[0],
        g: bytes[1],
        b: bytes[2],
    }
}

/// Marker colors for every distinct stoppage location.
#[derive(Debug, Clone, Default)]
pub struct MarkerPalette {
    colors: BTreeMap<StoppageKey, MarkerColor>,
}

impl MarkerPalette {
    /// Build from the unfiltered stoppages so colors don't shift with the threshold.
    pub fn from_records(records: &[StoppageRecord]) -> Self {
        let colors = records
            .iter()
            .map(|r| {
                let key = r.key();
                (key, marker_color(key))
            })
            .collect();
        Self { colors }
    }

    pub fn color_for(&self, key: &StoppageKey) -> Option<MarkerColor> {
        self.colors.get(key).copied()
    }

    pub fn len(&self) -> usize {
        self.colors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.colors.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&StoppageKey, &MarkerColor)> {
        self.colors.iter()
    }
}

/// `[latitude, longitude]` polyline through every sample, in input order.
pub fn track_path(samples: &[TelemetrySample]) -> Vec<[f64; 2]> {
    samples.iter().map(|s| [s.latitude, s.longitude]).collect()
}
