pub mod dashboard_builder;
pub mod dataset_validator;
pub mod findings_builder;
pub mod rating_lookup;
pub mod share_calculator;
