//! RTMS API client module
//!
//! HTTP access to the RTMS REST API, the paginated item stream built on
//! top of it, and the list/get command handlers.

mod client;
mod commands;
pub mod pagination;
mod stream;

pub use client::RtmsClient;
pub use commands::{run_get_command, run_list_command};
pub use pagination::{PageEnvelope, PaginationScheme, PaginationStyle};
pub use stream::ItemStream;
