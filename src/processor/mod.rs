pub mod stoppage_detector;
pub mod threshold_filter;

pub use stoppage_detector::{detect, detect_in};
pub use threshold_filter::{filter, DEFAULT_THRESHOLD_MINUTES};
