use serde::{Deserialize, Serialize};
use crate::helpers::config_helper::ConfigHelper;

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Eq)]
pub struct RatingsConfig {
    /// Category shown when `distribution` or `show ratings` gets none.
    #[serde(default = "ConfigHelper::default_category")]
    pub default_category: String,
}

impl Default for RatingsConfig {
    fn default() -> Self {
        Self {
            default_category: ConfigHelper::default_category(),
        }
    }
}
