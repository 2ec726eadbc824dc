mod application;
mod domain;
mod infrastructure;
mod presentation;

use crate::infrastructure::config::Config;
use crate::infrastructure::http_client::HyperHttpClient;
use crate::infrastructure::store::RequestStore;
use crate::presentation::cli::Cli;
use clap::Parser;
use colored::Colorize;

/// apitester: a lightweight CLI alternative to Postman
///
/// Sends ad-hoc HTTP requests, pretty-prints JSON responses, and keeps a
/// per-user file of named request definitions for replay. The store and the
/// request service are built here and handed to the command handlers.
#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    // All user-facing reporting, fatal errors included, goes to stdout.
    let config = match Config::resolve() {
        Ok(config) => config,
        Err(err) => {
            println!("{}", err);
            std::process::exit(1);
        }
    };
    if let Err(err) = config.ensure_dir() {
        println!("{}", format!("Warning: {}", err).yellow());
    }

    // A broken store file is reported but never blocks the run.
    let mut store = match RequestStore::load(config.tests_file()) {
        Ok(store) => store,
        Err(err) => {
            println!("{}", format!("Warning: {}", err).yellow());
            RequestStore::empty(config.tests_file())
        }
    };

    let request_service = HyperHttpClient::new().create_request_service();

    if let Err(err) = cli.run(&request_service, &mut store).await {
        println!("{}", err);
        std::process::exit(1);
    }
}
