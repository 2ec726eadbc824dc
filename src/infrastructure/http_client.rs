use crate::application::services::HttpRequestService;
use crate::domain::entities::{Method as DomainMethod, Request, Response};

use anyhow::{Context, Result, anyhow};
use http_body_util::{BodyExt, Full};
use hyper::body::Bytes;
use hyper::header::{CONTENT_TYPE, HeaderValue};
use hyper::{Method, Request as HyperRequest};
use hyper_tls::HttpsConnector;
use hyper_util::client::legacy::Client;
use hyper_util::client::legacy::connect::HttpConnector;
use hyper_util::rt::TokioExecutor;

/// Infrastructure implementation of HttpClient using Hyper
/// This is a low-level HTTP transport that the application service uses
pub struct HyperHttpClient {
    client: Client<HttpsConnector<HttpConnector>, Full<Bytes>>,
}

impl HyperHttpClient {
    pub fn new() -> Self {
        // TLS wraps the plain connector so both http and https URLs dispatch.
        let connector = HttpsConnector::new();
        let client = Client::builder(TokioExecutor::new())
            .build::<HttpsConnector<HttpConnector>, Full<Bytes>>(connector);
        Self { client }
    }

    /// Creates a configured HTTP request service using this client
    pub fn create_request_service(self) -> HttpRequestService {
        HttpRequestService::new(Box::new(self))
    }
}

impl Default for HyperHttpClient {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait::async_trait]
impl crate::application::services::HttpClient for HyperHttpClient {
    async fn send(&self, request: Request) -> Result<Response> {
        let hyper_request = RequestAdapter::to_hyper_request(request)?;
        let hyper_response = self.execute_http_request(hyper_request).await?;
        ResponseAdapter::to_domain_response(hyper_response).await
    }
}

impl HyperHttpClient {
    async fn execute_http_request(
        &self,
        request: HyperRequest<Full<Bytes>>,
    ) -> Result<hyper::Response<hyper::body::Incoming>> {
        self.client
            .request(request)
            .await
            .context("HTTP request execution failed")
    }
}

/// Adapter for converting domain requests to Hyper requests
struct RequestAdapter;

impl RequestAdapter {
    fn to_hyper_request(domain_request: Request) -> Result<HyperRequest<Full<Bytes>>> {
        let method = MethodAdapter::to_hyper_method(domain_request.method);

        let mut builder = HyperRequest::builder()
            .method(method)
            .uri(domain_request.url.0.clone());

        for (name, value) in &domain_request.headers {
            builder = builder.header(name.as_str(), value.as_str());
        }
        if HeaderAdapter::needs_json_default(&domain_request) {
            builder = builder.header(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        }

        let body = match domain_request.body {
            Some(payload) => Full::new(Bytes::from(payload.0)),
            None => Full::new(Bytes::new()),
        };

        builder
            .body(body)
            .map_err(|e| anyhow!("Failed to build HTTP request: {}", e))
    }
}

/// Adapter for converting domain responses from Hyper responses
struct ResponseAdapter;

impl ResponseAdapter {
    async fn to_domain_response(
        hyper_response: hyper::Response<hyper::body::Incoming>,
    ) -> Result<Response> {
        let (parts, body) = hyper_response.into_parts();
        let headers = Self::flatten_headers(&parts.headers);

        let body_bytes = body
            .collect()
            .await
            .map_err(|e| anyhow!("Failed to read response body: {}", e))?
            .to_bytes();

        Ok(Response {
            status: parts.status,
            headers,
            body: String::from_utf8_lossy(&body_bytes).into_owned(),
        })
    }

    /// One entry per header name, multiple values joined by ", ".
    fn flatten_headers(headers: &hyper::HeaderMap) -> Vec<(String, String)> {
        headers
            .keys()
            .map(|name| {
                let joined = headers
                    .get_all(name)
                    .iter()
                    .map(|value| String::from_utf8_lossy(value.as_bytes()).into_owned())
                    .collect::<Vec<_>>()
                    .join(", ");
                (name.to_string(), joined)
            })
            .collect()
    }
}

/// Adapter for converting domain HTTP methods to Hyper methods
struct MethodAdapter;

impl MethodAdapter {
    fn to_hyper_method(domain_method: DomainMethod) -> Method {
        match domain_method {
            DomainMethod::Get => Method::GET,
            DomainMethod::Post => Method::POST,
            DomainMethod::Put => Method::PUT,
            DomainMethod::Delete => Method::DELETE,
            DomainMethod::Patch => Method::PATCH,
            DomainMethod::Head => Method::HEAD,
            DomainMethod::Options => Method::OPTIONS,
        }
    }
}

/// Adapter for handling HTTP headers
struct HeaderAdapter;

impl HeaderAdapter {
    /// `Content-Type: application/json` is assumed for any non-empty body,
    /// unless the caller supplied a `Content-Type` entry themselves. The
    /// lookup is case-sensitive against the caller's map, mirroring the
    /// persisted-header semantics.
    fn needs_json_default(request: &Request) -> bool {
        request.body.is_some() && !request.headers.contains_key("Content-Type")
    }
}
