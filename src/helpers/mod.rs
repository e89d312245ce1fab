pub mod config_helper;
pub mod report_formatter;
