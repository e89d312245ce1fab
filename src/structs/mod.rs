pub mod cli;
pub mod config;
pub mod dashboard_view;
pub mod finding;
pub mod named_count;
pub mod named_share;
pub mod rating_bucket;
pub mod rating_score;
pub mod rating_share;
pub mod survey_dataset;
pub mod validation_result;
