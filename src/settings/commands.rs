//! Config command handlers

use crate::cli::{ConfigAction, SetArgs};

use super::models::Settings;
use super::store::SettingsStore;

/// Dispatch config subcommands
pub fn run_config_command(
    store: &SettingsStore,
    action: &ConfigAction,
) -> Result<(), Box<dyn std::error::Error>> {
    match action {
        ConfigAction::View => run_config_view(store),
        ConfigAction::Set(args) => run_config_set(store, args),
    }
}

/// Print the settings file with the API key masked
fn run_config_view(store: &SettingsStore) -> Result<(), Box<dyn std::error::Error>> {
    let settings = store.load()?;
    println!("# {}", store.path().display());
    println!("{}", serde_json::to_string_pretty(&settings.masked())?);
    Ok(())
}

/// Merge the provided values into the settings file
fn run_config_set(store: &SettingsStore, args: &SetArgs) -> Result<(), Box<dyn std::error::Error>> {
    let mut settings = store.load()?;
    let changed = apply_set_args(&mut settings, args);

    if changed == 0 {
        println!("Nothing to change. See 'rtmsctl config set --help'.");
        return Ok(());
    }

    store.save(&settings)?;
    println!(
        "✓ Updated {} setting(s) in {}",
        changed,
        store.path().display()
    );
    Ok(())
}

/// Apply every provided flag, returning how many values were set
fn apply_set_args(settings: &mut Settings, args: &SetArgs) -> usize {
    let mut changed = 0;

    fn set<T: Clone>(target: &mut T, value: &Option<T>, changed: &mut usize) {
        if let Some(v) = value {
            *target = v.clone();
            *changed += 1;
        }
    }

    fn set_opt<T: Clone>(target: &mut Option<T>, value: &Option<T>, changed: &mut usize) {
        if value.is_some() {
            *target = value.clone();
            *changed += 1;
        }
    }

    set_opt(&mut settings.host, &args.host, &mut changed);
    set_opt(&mut settings.api_key, &args.api_key, &mut changed);
    set_opt(&mut settings.batch_size, &args.batch_size, &mut changed);
    set_opt(&mut settings.format, &args.format, &mut changed);
    set_opt(&mut settings.max_empty_pages, &args.max_empty_pages, &mut changed);

    let scheme = &mut settings.pagination;
    set(&mut scheme.style, &args.pagination_style, &mut changed);
    set(&mut scheme.page_param, &args.page_param, &mut changed);
    set(&mut scheme.size_param, &args.size_param, &mut changed);
    set(&mut scheme.offset_param, &args.offset_param, &mut changed);
    set(&mut scheme.limit_param, &args.limit_param, &mut changed);
    set(&mut scheme.items_field, &args.items_field, &mut changed);
    set(&mut scheme.total_field, &args.total_field, &mut changed);

    changed
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::PaginationStyle;
    use crate::cli::{Cli, Command};
    use crate::output::OutputFormat;
    use clap::Parser;
    use tempfile::TempDir;

    fn set_args(extra: &[&str]) -> SetArgs {
        let mut argv = vec!["rtmsctl", "config", "set"];
        argv.extend_from_slice(extra);
        match Cli::parse_from(argv).command {
            Command::Config {
                action: ConfigAction::Set(args),
            } => args,
            _ => panic!("Expected config set"),
        }
    }

    #[test]
    fn test_apply_nothing() {
        let mut settings = Settings::default();
        assert_eq!(apply_set_args(&mut settings, &set_args(&[])), 0);
        assert_eq!(settings, Settings::default());
    }

    #[test]
    fn test_apply_merges_fields() {
        let mut settings = Settings {
            host: Some("old.example".to_string()),
            api_key: Some("keep-me".to_string()),
            ..Default::default()
        };
        let changed = apply_set_args(
            &mut settings,
            &set_args(&[
                "--host",
                "new.example",
                "--format",
                "html",
                "--pagination-style",
                "offset",
                "--limit-param",
                "max",
            ]),
        );
        assert_eq!(changed, 4);
        assert_eq!(settings.host.as_deref(), Some("new.example"));
        assert_eq!(settings.api_key.as_deref(), Some("keep-me"));
        assert_eq!(settings.format, Some(OutputFormat::Html));
        assert_eq!(settings.pagination.style, PaginationStyle::Offset);
        assert_eq!(settings.pagination.limit_param, "max");
        assert_eq!(settings.pagination.items_field, "data");
    }

    #[test]
    fn test_run_config_set_persists() {
        let dir = TempDir::new().unwrap();
        let store = SettingsStore::with_path(dir.path().join("config.json"));

        run_config_command(
            &store,
            &ConfigAction::Set(set_args(&["--batch-size", "25", "--items-field", "rows"])),
        )
        .unwrap();

        let settings = store.load().unwrap();
        assert_eq!(settings.batch_size, Some(25));
        assert_eq!(settings.pagination.items_field, "rows");
    }

    #[test]
    fn test_run_config_view_missing_file() {
        let dir = TempDir::new().unwrap();
        let store = SettingsStore::with_path(dir.path().join("config.json"));
        run_config_command(&store, &ConfigAction::View).unwrap();
    }
}
