use std::fmt;
use std::str::FromStr;
use serde::{Deserialize, Serialize};
use crate::errors::SurveyError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum DatasetKind {
    SalesActivities,
    ContentTypes,
    CommunicationChannels,
    MarketingTypes,
    ContentIssues,
    ContentCreationTeams,
}

impl DatasetKind {
    pub const ALL: [Self; 6] = [
        Self::SalesActivities,
        Self::ContentTypes,
        Self::CommunicationChannels,
        Self::MarketingTypes,
        Self::ContentIssues,
        Self::ContentCreationTeams,
    ];

    pub const fn slug(self) -> &'static str {
        match self {
            Self::SalesActivities => "sales-activities",
            Self::ContentTypes => "content-types",
            Self::CommunicationChannels => "communication-channels",
            Self::MarketingTypes => "marketing-types",
            Self::ContentIssues => "content-issues",
            Self::ContentCreationTeams => "content-creation-teams",
        }
    }

    pub const fn title(self) -> &'static str {
        match self {
            Self::SalesActivities => "Most Time-Consuming Sales Activities",
            Self::ContentTypes => "Most Useful Content Types",
            Self::CommunicationChannels => "Customer Communication Channels",
            Self::MarketingTypes => "Marketing Approach",
            Self::ContentIssues => "Content Issues Reported",
            Self::ContentCreationTeams => "Who Creates Local Content",
        }
    }
}

impl fmt::Display for DatasetKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.slug())
    }
}

impl FromStr for DatasetKind {
    type Err = SurveyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|kind| kind.slug() == s)
            .ok_or_else(|| SurveyError::UnknownDataset {
                name: s.to_string(),
                available: Self::ALL.iter().map(|k| k.slug().to_string()).collect(),
            })
    }
}
