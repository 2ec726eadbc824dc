use crate::domain::entities::{Method, Request, SavedRequest};
use crate::domain::value_objects::{RequestBody, Url};
use anyhow::{Result, anyhow};
use std::collections::HashMap;
use std::str::FromStr;

pub struct RequestBuilder {
    method: Option<Method>,
    url: Option<Url>,
    headers: HashMap<String, String>,
    body: Option<RequestBody>,
}

impl RequestBuilder {
    pub fn new() -> Self {
        Self {
            method: None,
            url: None,
            headers: HashMap::new(),
            body: None,
        }
    }

    /// Builds a request from a persisted definition, re-validating the
    /// method and URL in case the store file was edited by hand.
    pub fn from_saved(saved: &SavedRequest) -> Result<Request> {
        let mut builder = Self::new().method(&saved.method)?.url(&saved.url)?;
        builder.headers.extend(
            saved
                .headers
                .iter()
                .map(|(k, v)| (k.clone(), v.clone())),
        );
        builder.body(&saved.body).build()
    }

    pub fn method(mut self, method: &str) -> Result<Self> {
        self.method = Some(Method::from_str(method)?);
        Ok(self)
    }

    pub fn url(mut self, raw_url: &str) -> Result<Self> {
        self.url = Some(Url::new(raw_url)?);
        Ok(self)
    }

    pub fn header_pairs(mut self, pairs: &[(String, String)]) -> Self {
        for (key, value) in pairs {
            self.headers.insert(key.clone(), value.clone());
        }
        self
    }

    /// Attaches the payload; an empty string means no body.
    pub fn body(mut self, raw: &str) -> Self {
        self.body = RequestBody::from_raw(raw);
        self
    }

    pub fn build(self) -> Result<Request> {
        Ok(Request {
            method: self.method.ok_or_else(|| anyhow!("Method is required"))?,
            url: self.url.ok_or_else(|| anyhow!("URL is required"))?,
            headers: self.headers,
            body: self.body,
        })
    }
}

impl Default for RequestBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builds_request_from_flag_values() {
        let request = RequestBuilder::new()
            .method("post")
            .unwrap()
            .url("http://localhost:8080/items")
            .unwrap()
            .header_pairs(&[("Accept".to_string(), "text/plain".to_string())])
            .body(r#"{"a":1}"#)
            .build()
            .unwrap();

        assert_eq!(request.method, Method::Post);
        assert_eq!(request.headers.get("Accept").unwrap(), "text/plain");
        assert_eq!(request.body.unwrap().as_str(), r#"{"a":1}"#);
    }

    #[test]
    fn empty_data_flag_means_no_body() {
        let request = RequestBuilder::new()
            .method("GET")
            .unwrap()
            .url("http://x/y")
            .unwrap()
            .body("")
            .build()
            .unwrap();
        assert!(request.body.is_none());
    }

    #[test]
    fn missing_url_fails_to_build() {
        let result = RequestBuilder::new().method("GET").unwrap().build();
        assert!(result.is_err());
    }

    #[test]
    fn saved_definition_round_trips_into_a_request() {
        let saved = SavedRequest {
            url: "http://x/y".to_string(),
            method: "GET".to_string(),
            headers: HashMap::new(),
            body: String::new(),
        };

        let request = RequestBuilder::from_saved(&saved).unwrap();
        assert_eq!(request.method, Method::Get);
        assert_eq!(request.url.as_str(), "http://x/y");
        assert!(request.body.is_none());
    }

    #[test]
    fn saved_definition_with_bad_method_is_rejected() {
        let saved = SavedRequest {
            url: "http://x/y".to_string(),
            method: "YEET".to_string(),
            headers: HashMap::new(),
            body: String::new(),
        };
        assert!(RequestBuilder::from_saved(&saved).is_err());
    }
}
