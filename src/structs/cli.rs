use std::path::PathBuf;
use clap::Parser;
use crate::enums::commands::Commands;
use crate::enums::output_format::OutputFormat;

#[derive(Parser, Debug)]
#[clap(name = "survey-dash")]
#[clap(about = "Dealer marketing survey results", long_about = None)]
pub struct Cli {
    /// Config file to use instead of ~/survey-dash/config.toml
    #[clap(long, global = true)]
    pub config: Option<PathBuf>,

    /// Overrides output.format from the config
    #[clap(long, global = true, value_enum)]
    pub format: Option<OutputFormat>,

    #[clap(subcommand)]
    pub command: Commands,
}
