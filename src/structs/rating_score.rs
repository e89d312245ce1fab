use serde::{Deserialize, Serialize};
use crate::enums::rating_tier::RatingTier;

/// Mean rating for one category on the 1-6 scale.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RatingScore {
    pub category: String,
    pub value: f64,
}

impl RatingScore {
    pub fn new(category: &str, value: f64) -> Self {
        Self {
            category: category.to_string(),
            value,
        }
    }

    pub fn tier(&self) -> RatingTier {
        RatingTier::from_value(self.value)
    }
}
