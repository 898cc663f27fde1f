pub mod config;
pub mod markers;
pub mod models;
pub mod processor;
pub mod report;
pub mod source;

pub use models::{StoppageKey, StoppageRecord, TelemetrySample};
pub use processor::{detect, filter};
