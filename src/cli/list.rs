//! Arguments for the list and get commands

use clap::Parser;

use crate::api::PaginationStyle;
use crate::output::OutputFormat;

/// Arguments for 'list' command
#[derive(Parser, Debug)]
#[command(after_help = "EXAMPLES:\n  \
        rtmsctl list /tickets -p status=open --limit 20\n  \
        rtmsctl list /hosts --batch-size 50 -o html > hosts.html\n  \
        rtmsctl list /monitoringServices/templates -o md")]
pub struct ListArgs {
    /// API endpoint, relative to the versioned base URL (e.g. /tickets)
    pub endpoint: String,

    /// Extra query parameter (repeatable)
    #[arg(short = 'p', long = "param", value_name = "KEY=VALUE", value_parser = parse_param)]
    pub params: Vec<(String, String)>,

    /// Filter expression, sent as the `filter` query parameter
    #[arg(short, long)]
    pub filter: Option<String>,

    /// Stop after this many items
    #[arg(long)]
    pub limit: Option<usize>,

    /// Number of items requested per page
    #[arg(long)]
    pub batch_size: Option<usize>,

    /// Output format
    #[arg(short = 'o', long, value_enum)]
    pub format: Option<OutputFormat>,

    /// How pages are addressed in the query string
    #[arg(long, value_enum)]
    pub pagination_style: Option<PaginationStyle>,

    /// Dotted path of the items array in each page
    #[arg(long)]
    pub items_field: Option<String>,

    /// Dotted path of the total item count in each page
    #[arg(long)]
    pub total_field: Option<String>,
}

/// Arguments for 'get' command
#[derive(Parser, Debug)]
pub struct GetArgs {
    /// API endpoint, relative to the versioned base URL (e.g. /hosts/42)
    pub endpoint: String,

    /// Extra query parameter (repeatable)
    #[arg(short = 'p', long = "param", value_name = "KEY=VALUE", value_parser = parse_param)]
    pub params: Vec<(String, String)>,

    /// Output format
    #[arg(short = 'o', long, value_enum)]
    pub format: Option<OutputFormat>,
}

/// Parse a "key=value" query parameter
pub fn parse_param(s: &str) -> Result<(String, String), String> {
    match s.split_once('=') {
        Some((key, value)) => {
            let key = key.trim().to_string();
            if key.is_empty() {
                return Err(format!("Empty key in parameter '{}'", s));
            }
            Ok((key, value.to_string()))
        }
        None => Err(format!(
            "Invalid parameter format '{}'. Expected key=value",
            s
        )),
    }
}
