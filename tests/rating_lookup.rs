use survey_dash::constants::survey_data::SURVEY_DATA;
use survey_dash::enums::bucket_band::BucketBand;
use survey_dash::errors::SurveyError;
use survey_dash::services::dataset_validator::DatasetValidator;
use survey_dash::services::rating_lookup::RatingLookup;
use survey_dash::structs::named_count::NamedCount;
use survey_dash::structs::rating_bucket::RatingBucket;

#[test]
fn every_rated_category_has_a_distribution() {
    let lookup = RatingLookup::builtin();

    for score in &SURVEY_DATA.ratings {
        let buckets = lookup.distribution(&score.category).unwrap();
        assert_eq!(buckets.len(), 6);
        assert!(buckets.iter().zip(1u8..).all(|(b, rating)| b.rating == rating));
    }
}

#[test]
fn quality_of_materials_matches_survey() {
    let expected: Vec<RatingBucket> = [(1, 1), (2, 1), (3, 8), (4, 7), (5, 2), (6, 0)]
        .into_iter()
        .map(|(rating, count)| RatingBucket { rating, count })
        .collect();

    assert_eq!(RatingLookup::builtin().distribution("Quality of materials").unwrap(), expected);
}

#[test]
fn unknown_category_fails_loudly() {
    let err = RatingLookup::builtin().distribution("nonexistent category").unwrap_err();
    assert!(err.is_invalid_argument());
    assert!(matches!(err, SurveyError::UnknownCategory { .. }));
    assert!(err.user_message().contains("Overall satisfaction"));
}

#[test]
fn lookup_over_a_custom_dataset() {
    let mut dataset = SURVEY_DATA.clone();
    dataset.ratings_by_value.insert("Overall satisfaction".to_string(), [1, 2, 3, 4, 5, 6]);
    dataset.content_issues = vec![NamedCount::new("None", 0)];

    let lookup = RatingLookup::new(&dataset);
    assert_eq!(lookup.total_responses("Overall satisfaction").unwrap(), 21);
    assert!(DatasetValidator::validate(&dataset).is_valid);

    // The built-in table is untouched.
    assert_eq!(RatingLookup::builtin().total_responses("Overall satisfaction").unwrap(), 19);
}

#[test]
fn band_shares_cover_every_response() {
    let lookup = RatingLookup::builtin();

    for category in lookup.categories() {
        let bands = lookup.band_shares(category).unwrap();
        let bands_in_order: Vec<BucketBand> = bands.iter().map(|b| b.band).collect();
        assert_eq!(bands_in_order, [BucketBand::Low, BucketBand::Middle, BucketBand::High]);

        let count: u32 = bands.iter().map(|b| b.count).sum();
        assert_eq!(count, lookup.total_responses(category).unwrap());

        let percent: f64 = bands.iter().map(|b| b.percentage).sum();
        assert!((percent - 100.0).abs() < 1e-9, "{category}: {percent}");
    }
}

#[test]
fn quantity_of_materials_low_band_is_58_percent() {
    let bands = RatingLookup::builtin().band_shares("Quantity of materials").unwrap();
    assert_eq!(bands[0].count, 11);
    assert_eq!(bands[0].rounded_percentage(), 58);
}
