#[allow(clippy::module_inception)]
pub mod config;
pub mod output_config;
pub mod ratings_config;
