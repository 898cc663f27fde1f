pub mod stoppage;
pub mod telemetry;

pub use stoppage::{StoppageKey, StoppageRecord};
pub use telemetry::TelemetrySample;
