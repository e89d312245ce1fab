use std::collections::HashMap;
use serde::{Deserialize, Serialize};
use crate::config::constants::BUCKET_COUNT;
use crate::enums::dataset_kind::DatasetKind;
use crate::structs::named_count::NamedCount;
use crate::structs::rating_score::RatingScore;

/// Every table behind the dashboard. Built once and never mutated.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SurveyDataset {
    pub respondents: u32,
    pub sales_activities: Vec<NamedCount>,
    pub content_types: Vec<NamedCount>,
    pub communication_channels: Vec<NamedCount>,
    pub marketing_types: Vec<NamedCount>,
    pub content_issues: Vec<NamedCount>,
    pub content_creation_teams: Vec<NamedCount>,
    pub ratings: Vec<RatingScore>,
    pub ratings_by_value: HashMap<String, [u32; BUCKET_COUNT]>,
}

impl SurveyDataset {
    pub fn named_counts(&self, kind: DatasetKind) -> &[NamedCount] {
        match kind {
            DatasetKind::SalesActivities => &self.sales_activities,
            DatasetKind::ContentTypes => &self.content_types,
            DatasetKind::CommunicationChannels => &self.communication_channels,
            DatasetKind::MarketingTypes => &self.marketing_types,
            DatasetKind::ContentIssues => &self.content_issues,
            DatasetKind::ContentCreationTeams => &self.content_creation_teams,
        }
    }

    pub fn histogram(&self, category: &str) -> Option<&[u32; BUCKET_COUNT]> {
        self.ratings_by_value.get(category)
    }

    pub fn categories(&self) -> Vec<&str> {
        self.ratings.iter().map(|r| r.category.as_str()).collect()
    }
}
