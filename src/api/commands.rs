//! List and get command handlers

use std::collections::BTreeMap;

use futures::StreamExt;
use log::{debug, info};
use serde_json::Value;

use crate::cli::{Cli, GetArgs, ListArgs};
use crate::config::api;
use crate::output::{render, OutputFormat};
use crate::settings::{resolve_api_key, resolve_host, Settings};
use crate::ui::{create_spinner, finish_spinner, set_spinner_message};

use super::client::RtmsClient;
use super::pagination::PaginationScheme;

const NO_DATA: &str = "No data found.";

/// Stream every item of a list endpoint and print the rendered collection
pub async fn run_list_command(
    cli: &Cli,
    settings: &Settings,
    args: &ListArgs,
) -> Result<(), Box<dyn std::error::Error>> {
    let client = build_client(cli, settings)?.with_scheme(list_scheme(settings, args));
    let params = list_params(args);
    let page_size = args
        .batch_size
        .or(settings.batch_size)
        .unwrap_or(api::DEFAULT_PAGE_SIZE);
    let limit = args.limit.filter(|&l| l > 0);
    let format = output_format(args.format, settings);

    debug!(
        "Listing {} (page size {}, limit {:?}, format {}, params {:?})",
        args.endpoint, page_size, limit, format, params
    );

    let spinner = create_spinner(&format!("Fetching {}...", args.endpoint), cli.quiet);
    let mut stream = client.stream_items(&args.endpoint, &params, page_size)?;
    let mut items = Vec::new();

    while let Some(item) = stream.next().await {
        match item {
            Ok(value) => items.push(value),
            Err(e) => {
                finish_spinner(spinner);
                return Err(e.into());
            }
        }
        set_spinner_message(&spinner, format!("Fetched {} item(s)...", items.len()));
        if limit.is_some_and(|l| items.len() >= l) {
            debug!("Reached limit of {} item(s)", items.len());
            break;
        }
    }
    // Dropping the stream stops any page fetch still in flight
    drop(stream);
    finish_spinner(spinner);

    info!("Fetched {} item(s) from {}", items.len(), args.endpoint);
    if items.is_empty() {
        println!("{}", NO_DATA);
        return Ok(());
    }

    println!("{}", render(&Value::Array(items), format));
    Ok(())
}

/// Fetch a single resource and print it
pub async fn run_get_command(
    cli: &Cli,
    settings: &Settings,
    args: &GetArgs,
) -> Result<(), Box<dyn std::error::Error>> {
    let client = build_client(cli, settings)?;
    let format = output_format(args.format, settings);

    let spinner = create_spinner(&format!("Fetching {}...", args.endpoint), cli.quiet);
    let result = client.get_json(&args.endpoint, &args.params).await;
    finish_spinner(spinner);

    println!("{}", render(&result?, format));
    Ok(())
}

fn build_client(cli: &Cli, settings: &Settings) -> crate::error::Result<RtmsClient> {
    let host = resolve_host(cli.host.as_deref(), settings);
    let api_key = resolve_api_key(cli.api_key.as_deref(), settings)?;
    let client = RtmsClient::new(&api_key, &host)?;
    debug!("Using RTMS API at {}", client.base_url());

    Ok(match settings.max_empty_pages {
        Some(max) => client.with_max_empty_pages(max),
        None => client,
    })
}

/// Pagination scheme from the settings file with per-command overrides
fn list_scheme(settings: &Settings, args: &ListArgs) -> PaginationScheme {
    let mut scheme = settings.pagination.clone();
    if let Some(style) = args.pagination_style {
        scheme.style = style;
    }
    if let Some(field) = &args.items_field {
        scheme.items_field = field.clone();
    }
    if let Some(field) = &args.total_field {
        scheme.total_field = field.clone();
    }
    scheme
}

fn list_params(args: &ListArgs) -> BTreeMap<String, String> {
    let mut params: BTreeMap<String, String> = args.params.iter().cloned().collect();
    if let Some(filter) = args.filter.as_ref().filter(|f| !f.is_empty()) {
        params.insert("filter".to_string(), filter.clone());
    }
    params
}

fn output_format(flag: Option<OutputFormat>, settings: &Settings) -> OutputFormat {
    flag.or(settings.format).unwrap_or_default()
}
