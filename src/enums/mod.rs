pub mod bucket_band;
pub mod commands;
pub mod dashboard_tab;
pub mod dataset_kind;
pub mod output_format;
pub mod rating_tier;
