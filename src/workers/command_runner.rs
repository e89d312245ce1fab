use std::path::PathBuf;
use std::time::Instant;
use crate::config::config_manager::ConfigManager;
use crate::constants::survey_data::SURVEY_DATA;
use crate::enums::commands::Commands;
use crate::enums::dashboard_tab::DashboardTab;
use crate::enums::dataset_kind::DatasetKind;
use crate::enums::output_format::OutputFormat;
use crate::errors::{SurveyError, SurveyResult};
use crate::helpers::report_formatter::ReportFormatter;
use crate::services::dashboard_builder::DashboardBuilder;
use crate::services::dataset_validator::DatasetValidator;
use crate::services::rating_lookup::RatingLookup;
use crate::structs::cli::Cli;
use crate::structs::config::config::Config;
use crate::structs::named_count::NamedCount;
use crate::structs::validation_result::ValidationResult;

pub struct CommandRunner {
    config_path: Option<PathBuf>,
    format_override: Option<OutputFormat>,
}

impl CommandRunner {
    pub fn new(config_path: Option<PathBuf>, format_override: Option<OutputFormat>) -> Self {
        Self {
            config_path,
            format_override,
        }
    }

    /// Runs the parsed command line and prints its output.
    pub fn run(cli: Cli) -> SurveyResult<()> {
        let runner = Self::new(cli.config, cli.format);
        let output = runner.run_command(cli.command)?;
        print!("{output}");
        if !output.ends_with('\n') {
            println!();
        }
        Ok(())
    }

    /// Executes `command` and returns what it would print.
    pub fn run_command(&self, command: Commands) -> SurveyResult<String> {
        let start = Instant::now();

        let result = match command {
            Commands::Init => self.init_command(),
            Commands::Categories => self.categories_command(),
            Commands::Distribution { category } => self.distribution_command(category),
            Commands::Datasets { kind } => self.datasets_command(kind),
            Commands::Show { tab, category } => self.show_command(tab, category),
            Commands::Validate => self.validate_command(),
        };

        log::debug!("⏱️  Command completed in {:.3}s", start.elapsed().as_secs_f64());
        result
    }

    fn load_config(&self) -> SurveyResult<Config> {
        ConfigManager::load(self.config_path.as_deref())
    }

    fn format(&self, config: &Config) -> OutputFormat {
        self.format_override.unwrap_or(config.output.format)
    }

    fn init_command(&self) -> SurveyResult<String> {
        let path = ConfigManager::create_sample_config(self.config_path.as_deref())?;
        Ok(format!(
            "✅ Created sample config at: {}\n🔧 Run 'survey-dash validate' to check it.",
            path.display()
        ))
    }

    fn categories_command(&self) -> SurveyResult<String> {
        let config = self.load_config()?;
        ReportFormatter::categories(self.format(&config), &SURVEY_DATA.ratings)
    }

    fn distribution_command(&self, category: Option<String>) -> SurveyResult<String> {
        let config = self.load_config()?;
        let category = category.unwrap_or_else(|| config.ratings.default_category.clone());

        let buckets = RatingLookup::builtin().distribution(&category)?;
        ReportFormatter::distribution(self.format(&config), &category, &buckets)
    }

    fn datasets_command(&self, kind: Option<String>) -> SurveyResult<String> {
        let config = self.load_config()?;
        let kinds = match kind {
            Some(kind) => vec![kind.parse::<DatasetKind>()?],
            None => DatasetKind::ALL.to_vec(),
        };

        let datasets: Vec<(DatasetKind, &[NamedCount])> = kinds
            .into_iter()
            .map(|kind| (kind, SURVEY_DATA.named_counts(kind)))
            .collect();
        ReportFormatter::datasets(self.format(&config), &datasets, config.output.show_percentages)
    }

    fn show_command(&self, tab: DashboardTab, category: Option<String>) -> SurveyResult<String> {
        let config = self.load_config()?;
        let category = category.unwrap_or_else(|| config.ratings.default_category.clone());

        let view = DashboardBuilder::build(tab, &category, &SURVEY_DATA)?;
        ReportFormatter::dashboard(self.format(&config), &view)
    }

    fn validate_command(&self) -> SurveyResult<String> {
        let config = self.load_config()?;

        let config_result = match ConfigManager::validate_config(&config, &SURVEY_DATA) {
            Ok(()) => ValidationResult::from_findings(vec![], vec![]),
            Err(errors) => ValidationResult::from_findings(errors, vec![]),
        };
        let result = DatasetValidator::validate(&SURVEY_DATA).merge(config_result);

        if !result.is_valid {
            log::warn!("{}", result.summary());
            return Err(SurveyError::ValidationFailed {
                errors: result.errors,
            });
        }

        ReportFormatter::validation(self.format(&config), &result)
    }
}
