use crate::application::builders::request_builder::RequestBuilder;
use crate::application::services::HttpRequestService;
use crate::domain::entities::{Method, Request, SavedRequest};
use crate::infrastructure::output;
use crate::infrastructure::store::RequestStore;
use anyhow::{Result, anyhow};
use clap::{Args, Parser, Subcommand};
use colored::Colorize;
use std::str::FromStr;

/// CLI configuration for apitester
#[derive(Parser, Debug)]
#[command(name = "apitester", version = "0.1.0")]
#[command(about = "A lightweight CLI alternative to Postman", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Send an HTTP request
    Send {
        #[command(flatten)]
        request: RequestArgs,
    },
    /// Save a request for later use
    Save {
        name: String,
        #[command(flatten)]
        request: RequestArgs,
    },
    /// Run a saved request
    Run { name: String },
    /// List all saved requests
    List,
}

/// The request tuple shared by `send` and `save`.
#[derive(Args, Debug)]
pub struct RequestArgs {
    /// HTTP method
    #[arg(short = 'X', long, default_value = "GET")]
    pub method: String,

    /// Request URL (required)
    #[arg(short = 'u', long)]
    pub url: Option<String>,

    /// Request body
    #[arg(short = 'd', long = "data")]
    pub data: Option<String>,

    /// Request header as key=value; repeat for multiple headers
    #[arg(short = 'H', long = "headers", value_parser = parse_header)]
    pub headers: Vec<(String, String)>,
}

fn parse_header(raw: &str) -> Result<(String, String), String> {
    match raw.split_once('=') {
        Some((key, value)) if !key.is_empty() => Ok((key.to_string(), value.to_string())),
        _ => Err(format!("invalid header '{}', expected key=value", raw)),
    }
}

impl RequestArgs {
    fn require_url(&self) -> Result<&str> {
        match self.url.as_deref() {
            Some(url) if !url.is_empty() => Ok(url),
            _ => Err(anyhow!("URL is required")),
        }
    }

    fn to_request(&self) -> Result<Request> {
        RequestBuilder::new()
            .method(&self.method)?
            .url(self.require_url()?)?
            .header_pairs(&self.headers)
            .body(self.data.as_deref().unwrap_or_default())
            .build()
    }

    fn to_saved(&self) -> Result<SavedRequest> {
        let url = self.require_url()?;
        let method = Method::from_str(&self.method)?;
        let headers = self.headers.iter().cloned().collect();
        Ok(SavedRequest::new(url, method, headers, self.data.as_deref()))
    }
}

impl Cli {
    pub async fn run(&self, service: &HttpRequestService, store: &mut RequestStore) -> Result<()> {
        match &self.command {
            Command::Send { request } => send(request, service).await,
            Command::Save { name, request } => save(name, request, store),
            Command::Run { name } => run_saved(name, service, store).await,
            Command::List => {
                list(store);
                Ok(())
            }
        }
    }
}

async fn send(args: &RequestArgs, service: &HttpRequestService) -> Result<()> {
    let request = args.to_request()?;
    let response = service.send_request(request).await?;
    output::print_response(&response);
    Ok(())
}

/// A persist failure is reported but does not fail the command; the
/// in-memory entry stays available for the rest of the run.
fn save(name: &str, args: &RequestArgs, store: &mut RequestStore) -> Result<()> {
    let definition = args.to_saved()?;
    store.upsert(name, definition);
    if let Err(err) = store.persist() {
        println!("{}", format!("Warning: {}", err).yellow());
    }
    println!("Saved test '{}'", name);
    Ok(())
}

async fn run_saved(name: &str, service: &HttpRequestService, store: &RequestStore) -> Result<()> {
    let saved = store
        .get(name)
        .ok_or_else(|| anyhow!("No saved test named '{}'", name))?;
    println!("Running saved test '{}'...", name);

    let request = RequestBuilder::from_saved(saved)?;
    let response = service.send_request(request).await?;
    output::print_response(&response);
    Ok(())
}

fn list(store: &RequestStore) {
    print!("{}", render_listing(store));
}

fn render_listing(store: &RequestStore) -> String {
    if store.is_empty() {
        return "No saved tests\n".to_string();
    }
    let mut listing = String::from("Saved tests:\n");
    for name in store.names() {
        listing.push_str(&format!("  - {}\n", name));
    }
    listing
}
