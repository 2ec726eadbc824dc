use anyhow::{Result, anyhow};
use http::Uri;

/// Represents a validated URL
#[derive(Debug, Clone)]
pub struct Url(pub Uri);

impl Url {
    /// Creates a new Url with validation
    ///
    /// # Arguments
    /// * `url` - The URL string to parse
    ///
    /// # Returns
    /// * `Ok(Url)` - Validated URL
    /// * `Err(anyhow::Error)` - If the URL is invalid
    pub fn new(url: &str) -> Result<Self> {
        let uri = url
            .parse::<Uri>()
            .map_err(|e| anyhow!("Invalid URL: {}", e))?;
        Ok(Url(uri))
    }

    /// Returns the URL as a string
    pub fn as_str(&self) -> String {
        self.0.to_string()
    }
}

/// A raw request payload. Always non-empty; an empty `--data` means no body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequestBody(pub String);

impl RequestBody {
    /// Wraps a payload, yielding `None` for an empty string so callers
    /// never attach an empty body.
    pub fn from_raw(raw: &str) -> Option<Self> {
        if raw.is_empty() {
            None
        } else {
            Some(RequestBody(raw.to_string()))
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}
