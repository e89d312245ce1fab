use serde::{Deserialize, Serialize};
use crate::enums::bucket_band::BucketBand;
use crate::services::share_calculator::ShareCalculator;

/// Fraction of a category's respondents who gave one rating.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RatingShare {
    pub rating: u8,
    pub count: u32,
    pub percentage: f64,
}

impl RatingShare {
    pub fn rounded_percentage(&self) -> u32 {
        ShareCalculator::rounded(self.percentage)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BandShare {
    pub band: BucketBand,
    pub count: u32,
    pub percentage: f64,
}

impl BandShare {
    pub fn rounded_percentage(&self) -> u32 {
        ShareCalculator::rounded(self.percentage)
    }
}
