pub const APP_DIR_NAME: &str = "survey-dash";
pub const CONFIG_FILE_NAME: &str = "config.toml";
pub const DEFAULT_LOG_FILTER: &str = "warn";

pub const BUCKET_COUNT: usize = 6;
pub const RATING_SCALE_MIN: f64 = 1.0;
pub const RATING_SCALE_MAX: f64 = 6.0;

pub const RESPONDENT_COUNT: u32 = 22;
pub const DEFAULT_RATING_CATEGORY: &str = "Overall satisfaction";
