//! Settings management CLI arguments

use clap::{Parser, Subcommand};

use crate::api::PaginationStyle;
use crate::output::OutputFormat;

/// Config subcommands for the settings file
#[derive(Subcommand, Debug)]
pub enum ConfigAction {
    /// Display settings file contents (API key masked)
    View,

    /// Set one or more values in the settings file
    Set(SetArgs),
}

/// Arguments for 'config set' subcommand
#[derive(Parser, Debug)]
#[command(after_help = "EXAMPLES:\n  \
        rtmsctl config set --host rtms-api.cloud-temple.com --api-key <KEY>\n  \
        rtmsctl config set --pagination-style offset --total-field meta.total")]
pub struct SetArgs {
    /// RTMS host
    #[arg(long)]
    pub host: Option<String>,
    /// API key (stored in the settings file)
    #[arg(long)]
    pub api_key: Option<String>,
    /// Default page size for list commands
    #[arg(long)]
    pub batch_size: Option<usize>,
    /// Default output format
    #[arg(long, value_enum)]
    pub format: Option<OutputFormat>,
    /// Consecutive empty pages tolerated before a list fails
    #[arg(long)]
    pub max_empty_pages: Option<u32>,
    /// How pages are addressed in the query string
    #[arg(long, value_enum)]
    pub pagination_style: Option<PaginationStyle>,
    /// Page number parameter name
    #[arg(long)]
    pub page_param: Option<String>,
    /// Page size parameter name
    #[arg(long)]
    pub size_param: Option<String>,
    /// Offset parameter name
    #[arg(long)]
    pub offset_param: Option<String>,
    /// Limit parameter name
    #[arg(long)]
    pub limit_param: Option<String>,
    /// Dotted path of the items array in each page
    #[arg(long)]
    pub items_field: Option<String>,
    /// Dotted path of the total item count in each page
    #[arg(long)]
    pub total_field: Option<String>,
}
