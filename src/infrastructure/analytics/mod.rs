mod comprehend_analytics;

pub use comprehend_analytics::{ComprehendAnalytics, MAX_TEXT_BYTES};
