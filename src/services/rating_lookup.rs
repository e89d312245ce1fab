use std::ops::RangeInclusive;
use once_cell::sync::Lazy;
use crate::config::constants::BUCKET_COUNT;
use crate::constants::survey_data::SURVEY_DATA;
use crate::enums::bucket_band::BucketBand;
use crate::errors::{SurveyError, SurveyResult};
use crate::services::share_calculator::ShareCalculator;
use crate::structs::rating_bucket::{BandedBucket, RatingBucket};
use crate::structs::rating_score::RatingScore;
use crate::structs::rating_share::{BandShare, RatingShare};
use crate::structs::survey_dataset::SurveyDataset;

/// Read-only view over a dataset's rating tables.
#[derive(Debug, Clone, Copy)]
pub struct RatingLookup<'a> {
    dataset: &'a SurveyDataset,
}

impl RatingLookup<'static> {
    pub fn builtin() -> Self {
        Self::new(Lazy::force(&SURVEY_DATA))
    }
}

impl<'a> RatingLookup<'a> {
    pub const fn new(dataset: &'a SurveyDataset) -> Self {
        Self { dataset }
    }

    pub fn categories(&self) -> Vec<&'a str> {
        self.dataset.categories()
    }

    /// Returns the six `{rating, count}` pairs for `category`, ratings 1 to 6
    /// in ascending order. Unknown categories are an error, never empty data.
    pub fn distribution(&self, category: &str) -> SurveyResult<Vec<RatingBucket>> {
        let values = self.histogram(category)?;
        log::debug!("Rating distribution for '{category}': {values:?}");

        Ok(values
            .iter()
            .zip(1u8..)
            .map(|(&count, rating)| RatingBucket { rating, count })
            .collect())
    }

    pub fn banded_distribution(&self, category: &str) -> SurveyResult<Vec<BandedBucket>> {
        Ok(self
            .distribution(category)?
            .into_iter()
            .enumerate()
            .map(|(index, bucket)| BandedBucket {
                rating: bucket.rating,
                count: bucket.count,
                band: BucketBand::from_index(index),
            })
            .collect())
    }

    /// Percentage of the category's respondents behind each rating, 1 to 6.
    pub fn rating_shares(&self, category: &str) -> SurveyResult<Vec<RatingShare>> {
        let total = self.total_responses(category)?;

        Ok(self
            .distribution(category)?
            .into_iter()
            .map(|bucket| RatingShare {
                rating: bucket.rating,
                count: bucket.count,
                percentage: ShareCalculator::percentage(bucket.count, total),
            })
            .collect())
    }

    /// Respondents per band in `Low`, `Middle`, `High` order. All zero when
    /// nobody rated the category.
    pub fn band_shares(&self, category: &str) -> SurveyResult<Vec<BandShare>> {
        let banded = self.banded_distribution(category)?;
        let total: u32 = banded.iter().map(|b| b.count).sum();

        Ok([BucketBand::Low, BucketBand::Middle, BucketBand::High]
            .into_iter()
            .map(|band| {
                let count = banded
                    .iter()
                    .filter(|b| b.band == band)
                    .map(|b| b.count)
                    .sum();
                BandShare {
                    band,
                    count,
                    percentage: ShareCalculator::percentage(count, total),
                }
            })
            .collect())
    }

    /// Percentage of respondents whose rating falls in `ratings`.
    pub fn range_share(&self, category: &str, ratings: RangeInclusive<u8>) -> SurveyResult<f64> {
        let buckets = self.distribution(category)?;
        let total: u32 = buckets.iter().map(|b| b.count).sum();
        let part: u32 = buckets
            .iter()
            .filter(|b| ratings.contains(&b.rating))
            .map(|b| b.count)
            .sum();
        Ok(ShareCalculator::percentage(part, total))
    }

    pub fn total_responses(&self, category: &str) -> SurveyResult<u32> {
        Ok(self.histogram(category)?.iter().sum())
    }

    pub fn score(&self, category: &str) -> SurveyResult<&'a RatingScore> {
        self.dataset
            .ratings
            .iter()
            .find(|r| r.category == category)
            .ok_or_else(|| self.unknown(category))
    }

    fn histogram(&self, category: &str) -> SurveyResult<&'a [u32; BUCKET_COUNT]> {
        self.dataset
            .histogram(category)
            .ok_or_else(|| self.unknown(category))
    }

    fn unknown(&self, category: &str) -> SurveyError {
        log::debug!("Lookup of unknown rating category '{category}'");
        SurveyError::unknown_category(category, &self.categories())
    }
}
