pub mod survey_data;
