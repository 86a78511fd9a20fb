//! CLI argument parsing

mod config;
mod list;

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::config::defaults;

pub use config::{ConfigAction, SetArgs};
pub use list::{parse_param, GetArgs, ListArgs};

/// RTMS command-line client
#[derive(Parser, Debug)]
#[command(name = "rtmsctl")]
#[command(version)]
#[command(about = "Stream and render RTMS API resources", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// RTMS host (overrides RTMS_HOST and the settings file)
    #[arg(short = 'H', long, global = true)]
    pub host: Option<String>,

    /// API key (overrides RTMS_API_KEY and the settings file)
    #[arg(long, global = true)]
    pub api_key: Option<String>,

    /// Log level (error, warn, info, debug, trace)
    #[arg(short, long, env = "RTMS_LOG_LEVEL", default_value = defaults::LOG_LEVEL, global = true)]
    pub log_level: String,

    /// Suppress the progress spinner
    #[arg(short, long, default_value_t = false, global = true)]
    pub quiet: bool,

    /// Settings file to use instead of ~/.rtmsctl/config.json
    #[arg(long, global = true)]
    pub settings: Option<PathBuf>,
}

/// Top-level commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Stream every item of a paged list endpoint and render the collection
    #[command(visible_alias = "ls")]
    List(ListArgs),

    /// Fetch a single resource and render it
    Get(GetArgs),

    /// Show or change the settings file
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}
