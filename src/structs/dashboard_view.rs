use serde::Serialize;
use crate::enums::dashboard_tab::DashboardTab;
use crate::enums::rating_tier::RatingTier;
use crate::structs::finding::Finding;
use crate::structs::named_count::NamedCount;
use crate::structs::named_share::NamedShare;
use crate::structs::rating_bucket::BandedBucket;
use crate::structs::rating_share::BandShare;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TieredRating {
    pub category: String,
    pub value: f64,
    pub tier: RatingTier,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Panel {
    Counts {
        title: String,
        entries: Vec<NamedCount>,
    },
    Shares {
        title: String,
        entries: Vec<NamedShare>,
    },
    RatingSummary {
        title: String,
        entries: Vec<TieredRating>,
    },
    Distribution {
        title: String,
        category: String,
        total: u32,
        buckets: Vec<BandedBucket>,
        bands: Vec<BandShare>,
    },
    Findings {
        title: String,
        entries: Vec<Finding>,
    },
}

impl Panel {
    pub fn title(&self) -> &str {
        match self {
            Self::Counts { title, .. }
            | Self::Shares { title, .. }
            | Self::RatingSummary { title, .. }
            | Self::Distribution { title, .. }
            | Self::Findings { title, .. } => title,
        }
    }
}

/// The data behind one dashboard tab.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DashboardView {
    pub tab: DashboardTab,
    pub title: String,
    pub respondents: u32,
    pub panels: Vec<Panel>,
}
