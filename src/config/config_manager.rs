use std::fs;
use std::path::{Path, PathBuf};
use crate::config::constants::{APP_DIR_NAME, CONFIG_FILE_NAME};
use crate::errors::{SurveyError, SurveyResult};
use crate::structs::config::config::Config;
use crate::structs::survey_dataset::SurveyDataset;

const SAMPLE_CONFIG: &str = r#"# Survey Dash Configuration

[output]
# Output format: "text" or "json"
format = "text"

# Include share percentages when listing datasets
show_percentages = true

[ratings]
# Category used when no category is given on the command line
default_category = "Overall satisfaction"
"#;

pub struct ConfigManager;

impl ConfigManager {

    pub fn default_path() -> SurveyResult<PathBuf> {
        dirs::home_dir()
            .map(|d| d.join(APP_DIR_NAME).join(CONFIG_FILE_NAME))
            .ok_or_else(|| {
                SurveyError::system_error("locate config", "home directory is not available")
            })
    }

    /// Loads the config from `path`, or from the default location.
    ///
    /// A missing default file yields `Config::default()`; a missing explicit
    /// path is an error.
    pub fn load(path: Option<&Path>) -> SurveyResult<Config> {
        if let Some(path) = path {
            if !path.exists() {
                return Err(SurveyError::config_file_error(
                    &path.display().to_string(),
                    "file does not exist",
                ));
            }
            return Self::load_from(path);
        }

        let default_path = Self::default_path()?;
        if default_path.exists() {
            return Self::load_from(&default_path);
        }

        log::debug!("No config at {}, using defaults", default_path.display());
        Ok(Config::default())
    }

    pub fn load_from(path: &Path) -> SurveyResult<Config> {
        log::info!("📋 Loading config from: {}", path.display());
        let content = fs::read_to_string(path).map_err(|e| {
            SurveyError::config_file_error(&path.display().to_string(), &e.to_string())
        })?;
        let config: Config = toml::from_str(&content)?;
        Ok(config)
    }

    /// Writes the sample config and returns where it went. Never overwrites.
    pub fn create_sample_config(path: Option<&Path>) -> SurveyResult<PathBuf> {
        let config_file_path = match path {
            Some(path) => path.to_path_buf(),
            None => Self::default_path()?,
        };

        if config_file_path.exists() {
            return Err(SurveyError::config_file_error(
                &config_file_path.display().to_string(),
                "file already exists",
            ));
        }

        if let Some(parent) = config_file_path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&config_file_path, SAMPLE_CONFIG)?;
        log::info!("✅ Created sample config at: {}", config_file_path.display());
        Ok(config_file_path)
    }

    pub fn validate_config(config: &Config, dataset: &SurveyDataset) -> Result<(), Vec<String>> {
        let mut errors = Vec::new();

        let category = &config.ratings.default_category;
        if dataset.histogram(category).is_none() {
            errors.push(format!(
                "ratings.default_category references unknown category: {category}"
            ));
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::survey_data::SURVEY_DATA;
    use crate::enums::output_format::OutputFormat;
    use tempfile::tempdir;

    #[test]
    fn sample_config_round_trips() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("nested").join("config.toml");

        let written = ConfigManager::create_sample_config(Some(&path)).unwrap();
        assert_eq!(written, path);

        let config = ConfigManager::load(Some(&path)).unwrap();
        assert_eq!(config, Config::default());
        assert!(ConfigManager::validate_config(&config, &SURVEY_DATA).is_ok());
    }

    #[test]
    fn refuses_to_overwrite() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "").unwrap();

        let err = ConfigManager::create_sample_config(Some(&path)).unwrap_err();
        assert!(matches!(err, SurveyError::ConfigurationFileError { .. }));
    }

    #[test]
    fn partial_file_falls_back_to_defaults() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "[output]\nformat = \"json\"\n").unwrap();

        let config = ConfigManager::load(Some(&path)).unwrap();
        assert_eq!(config.output.format, OutputFormat::Json);
        assert!(config.output.show_percentages);
        assert_eq!(config.ratings.default_category, "Overall satisfaction");
    }

    #[test]
    fn missing_explicit_path_is_an_error() {
        let dir = tempdir().unwrap();
        let err = ConfigManager::load(Some(&dir.path().join("absent.toml"))).unwrap_err();
        assert!(matches!(err, SurveyError::ConfigurationFileError { .. }));
    }

    #[test]
    fn bad_toml_is_a_parse_error() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "[output\nformat = 3").unwrap();

        let err = ConfigManager::load(Some(&path)).unwrap_err();
        assert!(matches!(err, SurveyError::ParseError { .. }));
    }

    #[test]
    fn unknown_default_category_fails_validation() {
        let mut config = Config::default();
        config.ratings.default_category = "Price".to_string();

        let errors = ConfigManager::validate_config(&config, &SURVEY_DATA).unwrap_err();
        assert_eq!(errors.len(), 1);
        assert!(errors[0].contains("Price"));
    }
}
