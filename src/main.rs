//! rtmsctl - Main entry point

use clap::Parser;
use log::{debug, info};

use rtmsctl::{
    run_config_command, run_get_command, run_list_command, Cli, Command, SettingsStore,
};

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(&cli.log_level))
        .init();

    info!("Starting rtmsctl v{}", env!("CARGO_PKG_VERSION"));
    debug!("Command: {:?}", cli.command);

    if let Err(e) = run(&cli).await {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

async fn run(cli: &Cli) -> Result<(), Box<dyn std::error::Error>> {
    let store = match &cli.settings {
        Some(path) => SettingsStore::with_path(path.clone()),
        None => SettingsStore::new(),
    };

    match &cli.command {
        Command::Config { action } => run_config_command(&store, action),
        Command::List(args) => {
            let settings = store.load()?;
            run_list_command(cli, &settings, args).await
        }
        Command::Get(args) => {
            let settings = store.load()?;
            run_get_command(cli, &settings, args).await
        }
    }
}
