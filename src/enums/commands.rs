use clap::Subcommand;
use crate::enums::dashboard_tab::DashboardTab;

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Commands {
    /// Write a sample configuration file
    Init,
    /// List rating categories with mean score and tier
    Categories,
    /// Show the 1-6 rating histogram for a category
    Distribution {
        category: Option<String>,
    },
    /// List the multiple-choice tables with their shares
    Datasets {
        // Parsed with `DatasetKind::from_str` so a bad slug reports
        // `UnknownDataset` with the valid names, like unknown categories do.
        kind: Option<String>,
    },
    /// Print the panels of one dashboard tab
    Show {
        #[clap(value_enum)]
        tab: DashboardTab,
        #[clap(short, long)]
        category: Option<String>,
    },
    /// Check the dataset and configuration
    Validate,
}
