use std::fmt::Write as _;
use serde::Serialize;
use serde_json::json;
use crate::enums::dataset_kind::DatasetKind;
use crate::enums::output_format::OutputFormat;
use crate::errors::SurveyResult;
use crate::services::share_calculator::ShareCalculator;
use crate::structs::dashboard_view::{DashboardView, Panel};
use crate::structs::named_count::NamedCount;
use crate::structs::rating_bucket::RatingBucket;
use crate::structs::rating_score::RatingScore;
use crate::structs::validation_result::ValidationResult;

/// Turns command results into printable text or JSON.
pub struct ReportFormatter;

impl ReportFormatter {
    pub fn categories(format: OutputFormat, ratings: &[RatingScore]) -> SurveyResult<String> {
        match format {
            OutputFormat::Json => {
                let entries: Vec<_> = ratings
                    .iter()
                    .map(|r| json!({ "category": r.category, "value": r.value, "tier": r.tier() }))
                    .collect();
                Self::json(&entries)
            }
            OutputFormat::Text => {
                let width = Self::name_width(ratings.iter().map(|r| r.category.as_str()));
                let mut out = String::from("Ratings (Scale 1-6)\n");
                for rating in ratings {
                    let _ = writeln!(
                        out,
                        "  {:<width$}  {:>3.1}  {}",
                        rating.category,
                        rating.value,
                        rating.tier().label()
                    );
                }
                Ok(out)
            }
        }
    }

    pub fn distribution(
        format: OutputFormat,
        category: &str,
        buckets: &[RatingBucket],
    ) -> SurveyResult<String> {
        let total: u32 = buckets.iter().map(|b| b.count).sum();
        match format {
            OutputFormat::Json => Self::json(&json!({
                "category": category,
                "total": total,
                "buckets": buckets,
            })),
            OutputFormat::Text => {
                let mut out = format!("{category} ({total} responses)\n");
                for bucket in buckets {
                    let _ = writeln!(out, "  rating {}: {:>3}", bucket.rating, bucket.count);
                }
                Ok(out)
            }
        }
    }

    pub fn datasets(
        format: OutputFormat,
        datasets: &[(DatasetKind, &[NamedCount])],
        show_percentages: bool,
    ) -> SurveyResult<String> {
        match format {
            OutputFormat::Json => {
                let entries: Vec<_> = datasets
                    .iter()
                    .map(|(kind, counts)| {
                        let entries = if show_percentages {
                            json!(ShareCalculator::shares(counts))
                        } else {
                            json!(counts)
                        };
                        json!({
                            "dataset": kind,
                            "title": kind.title(),
                            "entries": entries,
                        })
                    })
                    .collect();
                Self::json(&entries)
            }
            OutputFormat::Text => {
                let mut out = String::new();
                for (i, (kind, counts)) in datasets.iter().enumerate() {
                    if i > 0 {
                        out.push('\n');
                    }
                    let _ = writeln!(out, "{} [{}]", kind.title(), kind.slug());
                    let width = Self::name_width(counts.iter().map(|c| c.name.as_str()));
                    if show_percentages {
                        for share in ShareCalculator::shares(counts) {
                            let _ = writeln!(
                                out,
                                "  {:<width$}  {:>3}  {:>3}%",
                                share.name,
                                share.count,
                                share.rounded_percentage()
                            );
                        }
                    } else {
                        for entry in *counts {
                            let _ = writeln!(out, "  {:<width$}  {:>3}", entry.name, entry.count);
                        }
                    }
                }
                Ok(out)
            }
        }
    }

    pub fn dashboard(format: OutputFormat, view: &DashboardView) -> SurveyResult<String> {
        if format == OutputFormat::Json {
            return Self::json(view);
        }

        let mut out = format!(
            "{}\nAnalysis of {} survey responses from dealership partners\n",
            view.title, view.respondents
        );
        for panel in &view.panels {
            let _ = writeln!(out, "\n{}", panel.title());
            match panel {
                Panel::Counts { entries, .. } => {
                    let width = Self::name_width(entries.iter().map(|e| e.name.as_str()));
                    for entry in entries {
                        let _ = writeln!(out, "  {:<width$}  {:>3}", entry.name, entry.count);
                    }
                }
                Panel::Shares { entries, .. } => {
                    for share in entries {
                        let _ = writeln!(out, "  {}: {}%", share.name, share.rounded_percentage());
                    }
                }
                Panel::RatingSummary { entries, .. } => {
                    let width = Self::name_width(entries.iter().map(|e| e.category.as_str()));
                    for entry in entries {
                        let _ = writeln!(
                            out,
                            "  {:<width$}  {:>3.1}  {}",
                            entry.category,
                            entry.value,
                            entry.tier.label()
                        );
                    }
                }
                Panel::Distribution { category, total, buckets, bands, .. } => {
                    let _ = writeln!(out, "  {category} ({total} responses)");
                    for bucket in buckets {
                        let _ = writeln!(
                            out,
                            "  rating {}: {:>3}  {}",
                            bucket.rating,
                            bucket.count,
                            bucket.band.label()
                        );
                    }
                    let bands: Vec<String> = bands
                        .iter()
                        .map(|b| format!("{} {}%", b.band.label(), b.rounded_percentage()))
                        .collect();
                    let _ = writeln!(out, "  {}", bands.join(", "));
                }
                Panel::Findings { entries, .. } => {
                    for finding in entries {
                        let _ = writeln!(out, "  {}: {}", finding.label, finding.detail);
                    }
                }
            }
        }
        Ok(out)
    }

    pub fn validation(format: OutputFormat, result: &ValidationResult) -> SurveyResult<String> {
        match format {
            OutputFormat::Json => Self::json(result),
            OutputFormat::Text => Ok(result.summary()),
        }
    }

    fn json<T: Serialize + ?Sized>(value: &T) -> SurveyResult<String> {
        Ok(serde_json::to_string_pretty(value)?)
    }

    fn name_width<'a>(names: impl Iterator<Item = &'a str>) -> usize {
        names.map(|n| n.chars().count()).max().unwrap_or(0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::survey_data::SURVEY_DATA;
    use crate::enums::dashboard_tab::DashboardTab;
    use crate::services::dashboard_builder::DashboardBuilder;
    use crate::services::rating_lookup::RatingLookup;

    #[test]
    fn distribution_text_lists_six_ratings() {
        let buckets = RatingLookup::builtin().distribution("Overall satisfaction").unwrap();
        let text =
            ReportFormatter::distribution(OutputFormat::Text, "Overall satisfaction", &buckets)
                .unwrap();

        assert!(text.starts_with("Overall satisfaction (19 responses)"));
        assert_eq!(text.lines().filter(|l| l.trim_start().starts_with("rating")).count(), 6);
    }

    #[test]
    fn distribution_json_is_machine_readable() {
        let buckets = RatingLookup::builtin().distribution("Quality of materials").unwrap();
        let out =
            ReportFormatter::distribution(OutputFormat::Json, "Quality of materials", &buckets)
                .unwrap();
        let value: serde_json::Value = serde_json::from_str(&out).unwrap();

        assert_eq!(value["total"], 19);
        assert_eq!(value["buckets"][2]["rating"], 3);
        assert_eq!(value["buckets"][2]["count"], 8);
    }

    #[test]
    fn datasets_text_shows_rounded_shares() {
        let kind = DatasetKind::MarketingTypes;
        let datasets = [(kind, SURVEY_DATA.named_counts(kind))];
        let out = ReportFormatter::datasets(OutputFormat::Text, &datasets, true).unwrap();

        assert!(out.contains("Marketing Approach [marketing-types]"));
        assert!(out.contains("43%"));
        assert!(out.contains("14%"));
    }

    #[test]
    fn datasets_json_without_percentages_keeps_counts() {
        let kind = DatasetKind::ContentIssues;
        let datasets = [(kind, SURVEY_DATA.named_counts(kind))];
        let out = ReportFormatter::datasets(OutputFormat::Json, &datasets, false).unwrap();
        let value: serde_json::Value = serde_json::from_str(&out).unwrap();

        assert_eq!(value[0]["dataset"], "content-issues");
        assert_eq!(value[0]["entries"][0]["count"], 10);
        assert!(value[0]["entries"][0].get("percentage").is_none());
    }

    #[test]
    fn dashboard_json_tags_panels() {
        let view =
            DashboardBuilder::build(DashboardTab::Ratings, "Ease of use", &SURVEY_DATA).unwrap();
        let out = ReportFormatter::dashboard(OutputFormat::Json, &view).unwrap();
        let value: serde_json::Value = serde_json::from_str(&out).unwrap();

        assert_eq!(value["tab"], "ratings");
        assert_eq!(value["panels"][0]["kind"], "rating_summary");
        assert_eq!(value["panels"][1]["buckets"][0]["band"], "low");
    }

    #[test]
    fn categories_text_includes_tiers() {
        let out = ReportFormatter::categories(OutputFormat::Text, &SURVEY_DATA.ratings).unwrap();
        let line = out.lines().find(|l| l.contains("Overall satisfaction")).unwrap();
        assert!(line.contains("4.7"));
        assert!(line.ends_with("strong"));
    }
}
