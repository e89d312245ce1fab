use std::collections::HashSet;
use crate::config::constants::{RATING_SCALE_MAX, RATING_SCALE_MIN};
use crate::enums::dataset_kind::DatasetKind;
use crate::structs::survey_dataset::SurveyDataset;
use crate::structs::validation_result::ValidationResult;

pub struct DatasetValidator;

impl DatasetValidator {
    pub fn validate(dataset: &SurveyDataset) -> ValidationResult {
        let mut errors = Vec::new();
        let mut warnings = Vec::new();

        if dataset.respondents == 0 {
            errors.push("Respondent count is zero".to_string());
        }

        let mut seen = HashSet::new();
        for rating in &dataset.ratings {
            if !seen.insert(rating.category.as_str()) {
                errors.push(format!("Duplicate rating category: {}", rating.category));
            }

            if !(RATING_SCALE_MIN..=RATING_SCALE_MAX).contains(&rating.value) {
                errors.push(format!(
                    "Rating '{}' has mean {} outside {RATING_SCALE_MIN}-{RATING_SCALE_MAX}",
                    rating.category, rating.value
                ));
            }

            match dataset.histogram(&rating.category) {
                None => errors.push(format!(
                    "Rating category '{}' has no histogram",
                    rating.category
                )),
                Some(buckets) => {
                    let total: u32 = buckets.iter().sum();
                    if total > dataset.respondents {
                        warnings.push(format!(
                            "Histogram for '{}' counts {total} responses but only {} \
                             respondents took part",
                            rating.category, dataset.respondents
                        ));
                    }
                }
            }
        }

        let mut orphans: Vec<&String> = dataset
            .ratings_by_value
            .keys()
            .filter(|category| !seen.contains(category.as_str()))
            .collect();
        orphans.sort();
        for category in orphans {
            warnings.push(format!("Histogram '{category}' has no matching rating category"));
        }

        for kind in DatasetKind::ALL {
            let mut names = HashSet::new();
            for entry in dataset.named_counts(kind) {
                if !names.insert(entry.name.as_str()) {
                    warnings.push(format!("Duplicate name in {kind}: {}", entry.name));
                }
            }
        }

        let result = ValidationResult::from_findings(errors, warnings);
        if !result.is_valid {
            log::warn!("Dataset validation failed with {} errors", result.errors.len());
        }
        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::survey_data::SURVEY_DATA;
    use crate::structs::named_count::NamedCount;
    use crate::structs::rating_score::RatingScore;

    #[test]
    fn builtin_dataset_is_valid() {
        let result = DatasetValidator::validate(&SURVEY_DATA);
        assert!(result.is_valid, "{}", result.summary());
        assert!(result.warnings.is_empty(), "{:?}", result.warnings);
    }

    #[test]
    fn missing_histogram_is_an_error() {
        let mut dataset = SURVEY_DATA.clone();
        dataset.ratings.push(RatingScore::new("Speed of delivery", 3.0));

        let result = DatasetValidator::validate(&dataset);
        assert!(!result.is_valid);
        assert_eq!(result.errors, vec!["Rating category 'Speed of delivery' has no histogram"]);
    }

    #[test]
    fn out_of_scale_mean_is_an_error() {
        let mut dataset = SURVEY_DATA.clone();
        dataset.ratings[0].value = 6.5;

        let result = DatasetValidator::validate(&dataset);
        assert!(!result.is_valid);
        assert!(result.errors[0].contains("Quality of materials"));
    }

    #[test]
    fn orphan_histogram_and_duplicate_name_warn() {
        let mut dataset = SURVEY_DATA.clone();
        dataset.ratings.retain(|r| r.category != "Ease of use");
        dataset.content_issues.push(NamedCount::new("Wrong format", 2));

        let result = DatasetValidator::validate(&dataset);
        assert!(result.is_valid);
        assert_eq!(result.warnings.len(), 2);
        assert!(result.warnings[0].contains("Ease of use"));
        assert!(result.warnings[1].contains("content-issues"));
    }

    #[test]
    fn oversized_histogram_warns() {
        let mut dataset = SURVEY_DATA.clone();
        dataset.respondents = 10;

        let result = DatasetValidator::validate(&dataset);
        assert!(result.is_valid);
        assert_eq!(result.warnings.len(), 7);
    }
}
