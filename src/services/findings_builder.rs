use std::ops::RangeInclusive;
use crate::services::rating_lookup::RatingLookup;
use crate::services::share_calculator::ShareCalculator;
use crate::structs::finding::Finding;
use crate::structs::named_count::NamedCount;
use crate::structs::rating_score::RatingScore;
use crate::structs::survey_dataset::SurveyDataset;

const LOCAL_ADAPTABILITY: &str = "Local adaptability";
const QUANTITY: &str = "Quantity of materials";
const RELEVANCE: &str = "Relevance of materials";
const TEMPLATES: &str = "Usefulness of templates";

const LOCAL_RELEVANCE_ISSUES: [&str; 2] = [
    "Doesn't reflect how we sell locally",
    "Not relevant to local audience",
];
const IN_HOUSE_TEAM: &str = "In-house team";

/// Headline statistics derived from the survey tables.
///
/// A finding whose source row is missing from the dataset is left out rather
/// than failing the whole list.
pub struct FindingsBuilder;

impl FindingsBuilder {
    pub fn key_findings(dataset: &SurveyDataset) -> Vec<Finding> {
        let lookup = RatingLookup::new(dataset);
        let pct = |category: &str, ratings: RangeInclusive<u8>| {
            lookup
                .range_share(category, ratings)
                .ok()
                .map(ShareCalculator::rounded)
        };

        let mut ranked: Vec<&RatingScore> = dataset.ratings.iter().collect();
        ranked.sort_by(|a, b| b.value.total_cmp(&a.value));

        let mut findings = Vec::new();

        if ranked.len() >= 2 {
            findings.push(Finding::new(
                "Strengths",
                format!("{} are rated highest", Self::score_pair(ranked[0], ranked[1])),
            ));

            let mut lowest: Vec<&RatingScore> = dataset.ratings.iter().collect();
            lowest.sort_by(|a, b| a.value.total_cmp(&b.value));
            findings.push(Finding::new(
                "Areas for improvement",
                format!("{} scored lowest", Self::score_pair(lowest[0], lowest[1])),
            ));
        }

        if let Some(ones) = pct(LOCAL_ADAPTABILITY, 1..=1) {
            findings.push(Finding::new(
                "Local adaptability",
                format!("{ones}% of respondents gave this a rating of 1/6"),
            ));
        }

        if let Some(low) = pct(QUANTITY, 1..=2) {
            findings.push(Finding::new(
                "Quantity concerns",
                format!("{low}% of respondents rated quantity of materials as 1-2 out of 6"),
            ));
        }

        if let (Some(score), Some(low), Some(high)) = (
            lookup.score(RELEVANCE).ok(),
            pct(RELEVANCE, 1..=2),
            pct(RELEVANCE, 4..=5),
        ) {
            findings.push(Finding::new(
                "Mixed relevance",
                format!(
                    "While relevance averages {:.1}/6, responses are polarized with {low}% \
                     giving low scores (1-2) and {high}% giving high scores (4-5)",
                    score.value
                ),
            ));
        }

        if let (Some(high), Some(low)) = (pct(TEMPLATES, 5..=6), pct(TEMPLATES, 1..=2)) {
            findings.push(Finding::new(
                "Template usefulness",
                format!(
                    "{high}% rated templates highly (5-6/6), but {low}% gave low ratings (1-2/6)"
                ),
            ));
        }

        findings
    }

    pub fn content_insights(dataset: &SurveyDataset) -> Vec<Finding> {
        let mut findings = Vec::new();

        let top_content: Vec<String> = Self::ranked(&dataset.content_types)
            .into_iter()
            .take(3)
            .map(|c| format!("{} ({})", c.name, c.count))
            .collect();
        if !top_content.is_empty() {
            findings.push(Finding::new("Most used content", top_content.join(", ")));
        }

        if let Some(issue) = Self::ranked(&dataset.content_issues).first() {
            findings.push(Finding::new(
                "Top issue",
                format!("{} ({} mentions)", issue.name, issue.count),
            ));
        }

        let local: Vec<u32> = LOCAL_RELEVANCE_ISSUES
            .iter()
            .filter_map(|name| Self::count_of(&dataset.content_issues, name))
            .collect();
        if local.len() == LOCAL_RELEVANCE_ISSUES.len() {
            findings.push(Finding::new(
                "Local relevance concerns",
                format!(
                    "{} dealers mentioned content doesn't reflect local sales or isn't relevant \
                     to local audience",
                    local.iter().sum::<u32>()
                ),
            ));
        }

        if let Some(in_house) = Self::count_of(&dataset.content_creation_teams, IN_HOUSE_TEAM) {
            let total = ShareCalculator::total(&dataset.content_creation_teams);
            let share = ShareCalculator::rounded(ShareCalculator::percentage(in_house, total));
            findings.push(Finding::new(
                "Content creation",
                format!("{share}% of dealers create content in-house"),
            ));
        }

        findings
    }

    fn score_pair(first: &RatingScore, second: &RatingScore) -> String {
        format!(
            "{} ({:.1}/6) and {} ({:.1}/6)",
            first.category,
            first.value,
            second.category.to_lowercase(),
            second.value
        )
    }

    /// Highest count first; ties keep their listed order.
    fn ranked(counts: &[NamedCount]) -> Vec<&NamedCount> {
        let mut ranked: Vec<&NamedCount> = counts.iter().collect();
        ranked.sort_by(|a, b| b.count.cmp(&a.count));
        ranked
    }

    fn count_of(counts: &[NamedCount], name: &str) -> Option<u32> {
        counts.iter().find(|c| c.name == name).map(|c| c.count)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::survey_data::SURVEY_DATA;

    fn detail<'a>(findings: &'a [Finding], label: &str) -> &'a str {
        &findings
            .iter()
            .find(|f| f.label == label)
            .unwrap_or_else(|| panic!("no finding labelled {label}"))
            .detail
    }

    #[test]
    fn key_findings_reproduce_survey_figures() {
        let findings = FindingsBuilder::key_findings(&SURVEY_DATA);

        assert_eq!(
            detail(&findings, "Strengths"),
            "Overall satisfaction (4.7/6) and ease of use (4.5/6) are rated highest"
        );
        assert_eq!(
            detail(&findings, "Areas for improvement"),
            "Quantity of materials (2.4/6) and local adaptability (2.4/6) scored lowest"
        );
        assert_eq!(
            detail(&findings, "Local adaptability"),
            "50% of respondents gave this a rating of 1/6"
        );
        assert!(detail(&findings, "Quantity concerns").starts_with("58%"));
        assert!(detail(&findings, "Mixed relevance").contains("averages 3.5/6"));
        assert!(detail(&findings, "Mixed relevance").contains("26% giving low"));
        assert!(detail(&findings, "Mixed relevance").contains("58% giving high"));
        assert_eq!(
            detail(&findings, "Template usefulness"),
            "47% rated templates highly (5-6/6), but 24% gave low ratings (1-2/6)"
        );
    }

    #[test]
    fn content_insights_reproduce_survey_figures() {
        let findings = FindingsBuilder::content_insights(&SURVEY_DATA);

        assert_eq!(
            detail(&findings, "Most used content"),
            "Video walkarounds (10), Short social video clips (8), Pre-written email templates (7)"
        );
        assert_eq!(detail(&findings, "Top issue"), "Too much editing needed (10 mentions)");
        assert!(detail(&findings, "Local relevance concerns").starts_with("13 dealers"));
        assert_eq!(
            detail(&findings, "Content creation"),
            "76% of dealers create content in-house"
        );
    }

    #[test]
    fn missing_rows_drop_only_their_finding() {
        let mut dataset = SURVEY_DATA.clone();
        dataset.ratings.retain(|r| r.category != RELEVANCE);
        dataset.ratings_by_value.remove(RELEVANCE);
        dataset.content_creation_teams.clear();

        let key = FindingsBuilder::key_findings(&dataset);
        assert!(key.iter().all(|f| f.label != "Mixed relevance"));
        assert_eq!(key.len(), 5);

        let content = FindingsBuilder::content_insights(&dataset);
        assert!(content.iter().all(|f| f.label != "Content creation"));
        assert_eq!(content.len(), 3);
    }
}
