use crate::config::constants::DEFAULT_RATING_CATEGORY;
use crate::enums::output_format::OutputFormat;

pub struct ConfigHelper;

impl ConfigHelper {
    pub fn default_format() -> OutputFormat {
        OutputFormat::Text
    }

    pub fn default_show_percentages() -> bool {
        true
    }

    pub fn default_category() -> String {
        DEFAULT_RATING_CATEGORY.to_string()
    }
}
