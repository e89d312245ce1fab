use serde::{Deserialize, Serialize};
use crate::enums::output_format::OutputFormat;
use crate::helpers::config_helper::ConfigHelper;

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Eq)]
pub struct OutputConfig {
    #[serde(default = "ConfigHelper::default_format")]
    pub format: OutputFormat,

    #[serde(default = "ConfigHelper::default_show_percentages")]
    pub show_percentages: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            format: ConfigHelper::default_format(),
            show_percentages: ConfigHelper::default_show_percentages(),
        }
    }
}
