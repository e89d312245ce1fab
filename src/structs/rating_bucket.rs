use serde::{Deserialize, Serialize};
use crate::enums::bucket_band::BucketBand;

/// Respondents who gave one rating value to a category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RatingBucket {
    pub rating: u8,
    pub count: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BandedBucket {
    pub rating: u8,
    pub count: u32,
    pub band: BucketBand,
}
