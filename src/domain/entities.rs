use crate::domain::value_objects::{RequestBody, Url};
use anyhow::{Result, anyhow};
use hyper::StatusCode;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::str::FromStr;

/// HTTP method enum for simplicity
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    Get,
    Post,
    Put,
    Delete,
    Patch,
    Head,
    Options,
}

impl FromStr for Method {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_uppercase().as_str() {
            "GET" => Ok(Method::Get),
            "POST" => Ok(Method::Post),
            "PUT" => Ok(Method::Put),
            "DELETE" => Ok(Method::Delete),
            "PATCH" => Ok(Method::Patch),
            "HEAD" => Ok(Method::Head),
            "OPTIONS" => Ok(Method::Options),
            other => Err(anyhow!("Unsupported HTTP method: '{}'", other)),
        }
    }
}

impl Method {
    /// The uppercased verb, as stored in saved requests.
    pub fn as_str(&self) -> &'static str {
        match self {
            Method::Get => "GET",
            Method::Post => "POST",
            Method::Put => "PUT",
            Method::Delete => "DELETE",
            Method::Patch => "PATCH",
            Method::Head => "HEAD",
            Method::Options => "OPTIONS",
        }
    }
}

/// Represents an HTTP request ready for dispatch
#[derive(Debug, Clone)]
pub struct Request {
    pub method: Method,
    pub url: Url,
    pub headers: HashMap<String, String>,
    pub body: Option<RequestBody>,
}

/// Represents an HTTP response; transient, discarded after rendering
#[derive(Debug, Clone)]
pub struct Response {
    pub status: StatusCode,
    /// One entry per header name, values joined by ", "
    pub headers: Vec<(String, String)>,
    pub body: String,
}

/// A named request definition as persisted in the store file.
///
/// The on-disk shape is a JSON object keyed by name; each value carries
/// `url`, `method`, `headers` and `body`. Everything but `url` may be
/// omitted and falls back to a default.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SavedRequest {
    pub url: String,
    #[serde(default = "default_method")]
    pub method: String,
    #[serde(default)]
    pub headers: HashMap<String, String>,
    #[serde(default)]
    pub body: String,
}

fn default_method() -> String {
    "GET".to_string()
}

impl SavedRequest {
    pub fn new(
        url: &str,
        method: Method,
        headers: HashMap<String, String>,
        body: Option<&str>,
    ) -> Self {
        Self {
            url: url.to_string(),
            method: method.as_str().to_string(),
            headers,
            body: body.unwrap_or_default().to_string(),
        }
    }
}
