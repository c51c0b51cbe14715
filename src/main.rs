mod catalog;
mod commands;
mod config;
mod db;
mod error;
mod handlers;
mod models;
mod report;
mod scoring;
mod session;

use catalog::Catalog;
use clap::Parser;
use commands::Cli;
use config::Config;
use log::{error, info};

#[tokio::main]
async fn main() {
    // Initialize logging; quiet by default so prompts stay readable
    dotenvy::dotenv().ok();
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();
    let config = cli.apply(Config::from_env());

    // A broken catalog stops everything before a session starts
    let catalog = match Catalog::resolve(config.catalog_path.as_deref()) {
        Ok(catalog) => catalog.truncated(config.question_limit),
        Err(e) => {
            error!("Failed to load question catalog: {}", e);
            eprintln!("Fragenkatalog konnte nicht geladen werden: {}", e);
            std::process::exit(2);
        }
    };
    info!("Using {} question(s)", catalog.len());

    if let Err(why) = commands::run(cli, &config, &catalog).await {
        error!("Command failed: {}", why);
        eprintln!("Fehler: {}", why);
        std::process::exit(1);
    }
}
