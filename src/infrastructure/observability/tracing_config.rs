/// Configuration for tracing initialization.
pub struct TracingConfig {
    pub environment: String,
    pub json_format: bool,
    /// Filter used when `RUST_LOG` is unset. Applies to this crate as well.
    pub default_filter: String,
}

impl TracingConfig {
    pub fn new(environment: &str, level: &str, json_format: bool) -> Self {
        Self {
            environment: environment.to_string(),
            json_format,
            default_filter: level.to_string(),
        }
    }
}
