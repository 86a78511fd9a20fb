//! rtmsctl - Stream and render RTMS API resources
//!
//! A CLI and library for the RTMS ticketing and monitoring REST API.
//!
//! # Features
//!
//! - Paginated list endpoints exposed as one ordered stream of items
//! - Early termination: dropping the stream stops further page requests
//! - Generic rendering of any JSON value as JSON, text, HTML, or Markdown
//! - Host and API key from flags, environment, or a settings file
//!
//! # Example
//!
//! ```bash
//! # List open tickets as Markdown
//! rtmsctl list /tickets -p status=open -o md
//!
//! # First 20 hosts as an HTML page
//! rtmsctl list /hosts --limit 20 -o html > hosts.html
//!
//! # Store the API key once
//! rtmsctl config set --api-key <KEY>
//! ```

pub mod api;
pub mod cli;
pub mod config;
pub mod error;
pub mod output;
pub mod settings;
pub mod ui;

pub use api::{
    run_get_command, run_list_command, ItemStream, PageEnvelope, PaginationScheme,
    PaginationStyle, RtmsClient,
};
pub use cli::{Cli, Command, ConfigAction, GetArgs, ListArgs, SetArgs};
pub use error::{Result, RtmsError};
pub use output::{render, render_named, OutputFormat, Renderer};
pub use settings::{run_config_command, Settings, SettingsStore};
