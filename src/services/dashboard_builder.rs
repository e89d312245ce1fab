use crate::enums::dashboard_tab::DashboardTab;
use crate::enums::dataset_kind::DatasetKind;
use crate::errors::SurveyResult;
use crate::services::findings_builder::FindingsBuilder;
use crate::services::rating_lookup::RatingLookup;
use crate::services::share_calculator::ShareCalculator;
use crate::structs::dashboard_view::{DashboardView, Panel, TieredRating};
use crate::structs::survey_dataset::SurveyDataset;

pub struct DashboardBuilder;

impl DashboardBuilder {
    /// Builds the panels for `tab`. `selected_category` is only read by the
    /// ratings tab, so an unknown category fails there and nowhere else.
    pub fn build(
        tab: DashboardTab,
        selected_category: &str,
        dataset: &SurveyDataset,
    ) -> SurveyResult<DashboardView> {
        let panels = match tab {
            DashboardTab::Overview => vec![
                Self::counts(dataset, DatasetKind::SalesActivities),
                Self::counts(dataset, DatasetKind::CommunicationChannels),
                Self::rating_summary(dataset, "Overall Ratings (Scale 1-6)"),
                Self::shares(dataset, DatasetKind::MarketingTypes),
            ],
            DashboardTab::Content => vec![
                Self::counts(dataset, DatasetKind::ContentTypes),
                Self::counts(dataset, DatasetKind::ContentIssues),
                Self::shares(dataset, DatasetKind::ContentCreationTeams),
                Panel::Findings {
                    title: "Key Content Insights".to_string(),
                    entries: FindingsBuilder::content_insights(dataset),
                },
            ],
            DashboardTab::Ratings => {
                let lookup = RatingLookup::new(dataset);
                vec![
                    Self::rating_summary(dataset, "Ratings Summary (Scale 1-6)"),
                    Panel::Distribution {
                        title: "Rating Distribution".to_string(),
                        category: selected_category.to_string(),
                        total: lookup.total_responses(selected_category)?,
                        buckets: lookup.banded_distribution(selected_category)?,
                        bands: lookup.band_shares(selected_category)?,
                    },
                    Panel::Findings {
                        title: "Key Findings".to_string(),
                        entries: FindingsBuilder::key_findings(dataset),
                    },
                ]
            }
        };

        Ok(DashboardView {
            tab,
            title: tab.title().to_string(),
            respondents: dataset.respondents,
            panels,
        })
    }

    fn counts(dataset: &SurveyDataset, kind: DatasetKind) -> Panel {
        Panel::Counts {
            title: kind.title().to_string(),
            entries: dataset.named_counts(kind).to_vec(),
        }
    }

    fn shares(dataset: &SurveyDataset, kind: DatasetKind) -> Panel {
        Panel::Shares {
            title: kind.title().to_string(),
            entries: ShareCalculator::shares(dataset.named_counts(kind)),
        }
    }

    fn rating_summary(dataset: &SurveyDataset, title: &str) -> Panel {
        Panel::RatingSummary {
            title: title.to_string(),
            entries: dataset
                .ratings
                .iter()
                .map(|r| TieredRating {
                    category: r.category.clone(),
                    value: r.value,
                    tier: r.tier(),
                })
                .collect(),
        }
    }
}
