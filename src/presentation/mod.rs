pub mod composition;
pub mod config;

pub use composition::{Adapters, build_pipeline, pipeline_request};
pub use config::{Environment, Settings};
