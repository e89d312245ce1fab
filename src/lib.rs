//! Dealer marketing survey results.
//!
//! The survey tables are compiled in ([`constants::survey_data::SURVEY_DATA`]).
//! [`services::rating_lookup::RatingLookup`] turns a category's six-bucket
//! histogram into ordered `{rating, count}` pairs; everything else in the
//! crate lists, checks or formats the same tables.

pub mod config;
pub mod constants;
pub mod enums;
pub mod errors;
pub mod helpers;
pub mod services;
pub mod structs;
pub mod workers;
