use serde::{Deserialize, Serialize};
use crate::structs::config::output_config::OutputConfig;
use crate::structs::config::ratings_config::RatingsConfig;

#[derive(Debug, Deserialize, Serialize, Clone, Default, PartialEq, Eq)]
pub struct Config {
    #[serde(default)]
    pub output: OutputConfig,

    #[serde(default)]
    pub ratings: RatingsConfig,
}
