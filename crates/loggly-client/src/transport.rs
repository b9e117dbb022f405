// Copyright 2025-Present Datadog, Inc. https://www.datadoghq.com/
// SPDX-License-Identifier: Apache-2.0

//! The REST binding for the Loggly ingestion endpoints.
//!
//! ```text
//!   POST {url}/inputs/{token}   one event per request
//!   POST {url}/bulk/{token}     events separated by '\n'
//!
//!   X-LOGGLY-TAG: <tags>        omitted when there are no tags
//! ```

use crate::config::ClientConfig;
use crate::error::{ConfigError, TransportError};
use crate::http::get_client;
use crate::response::LogglyResponse;
use async_trait::async_trait;
use reqwest::header::CONTENT_TYPE;
use reqwest::Url;
use std::fmt;
use tracing::debug;

pub const TAG_HEADER: &str = "X-LOGGLY-TAG";

/// Ingestion endpoint targeted by a request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Endpoint {
    /// Single event, body posted verbatim
    Inputs,
    /// Newline-delimited batch of events
    Bulk,
}

impl Endpoint {
    #[must_use]
    pub fn path(self) -> &'static str {
        match self {
            Endpoint::Inputs => "inputs",
            Endpoint::Bulk => "bulk",
        }
    }
}

impl fmt::Display for Endpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.path())
    }
}

/// One request to an ingestion endpoint.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Request {
    pub endpoint: Endpoint,
    pub token: String,
    /// Canonical tag header value, `None` to omit the header
    pub tags: Option<String>,
    pub content_type: &'static str,
    pub body: String,
}

/// Issues requests against the ingestion API.
///
/// [`HttpTransport`] is the production implementation; tests substitute
/// recording stubs.
#[async_trait]
pub trait RestService: Send + Sync {
    async fn post(&self, request: Request) -> Result<LogglyResponse, TransportError>;
}

/// `reqwest` implementation of [`RestService`].
#[derive(Debug, Clone)]
pub struct HttpTransport {
    client: reqwest::Client,
    url: Url,
}

impl HttpTransport {
    pub fn new(config: &ClientConfig) -> Result<Self, ConfigError> {
        let client = get_client(config).map_err(|e| ConfigError::HttpClient(e.to_string()))?;
        Self::with_client(client, &config.url)
    }

    /// Fails when `url` does not parse or cannot carry path segments.
    pub fn with_client(client: reqwest::Client, url: &str) -> Result<Self, ConfigError> {
        let url = Url::parse(url)
            .map_err(|e| ConfigError::InvalidConfig(format!("invalid URL {url}: {e}")))?;
        if url.cannot_be_a_base() {
            return Err(ConfigError::InvalidConfig(format!(
                "URL cannot be used as a base: {url}"
            )));
        }
        Ok(HttpTransport { client, url })
    }

    /// The token is pushed as a single percent-encoded path segment.
    fn endpoint_url(&self, endpoint: Endpoint, token: &str) -> Url {
        let mut url = self.url.clone();
        if let Ok(mut segments) = url.path_segments_mut() {
            segments.pop_if_empty().push(endpoint.path()).push(token);
        }
        url
    }
}

#[async_trait]
impl RestService for HttpTransport {
    async fn post(&self, request: Request) -> Result<LogglyResponse, TransportError> {
        let mut builder = self
            .client
            .post(self.endpoint_url(request.endpoint, &request.token))
            .header(CONTENT_TYPE, request.content_type)
            .body(request.body);
        if let Some(tags) = request.tags {
            builder = builder.header(TAG_HEADER, tags);
        }

        let resp = builder
            .send()
            .await
            .map_err(|e| TransportError::Http(e.without_url()))?;
        let status = resp.status();
        let body = resp
            .text()
            .await
            .map_err(|e| TransportError::Http(e.without_url()))?;
        debug!("LOGGLY | {} responded with {}", request.endpoint, status);

        if !status.is_success() {
            return Err(TransportError::Status { status, body });
        }
        serde_json::from_str(&body).map_err(TransportError::Deserialize)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_endpoint_paths() {
        assert_eq!(Endpoint::Inputs.path(), "inputs");
        assert_eq!(Endpoint::Bulk.to_string(), "bulk");
    }

    fn transport(url: &str) -> HttpTransport {
        HttpTransport::with_client(reqwest::Client::new(), url).expect("valid url")
    }

    #[test]
    fn test_endpoint_url() {
        let transport = transport("https://logs-01.loggly.com");
        assert_eq!(
            transport.endpoint_url(Endpoint::Inputs, "tok").as_str(),
            "https://logs-01.loggly.com/inputs/tok"
        );
        assert_eq!(
            transport.endpoint_url(Endpoint::Bulk, "tok").as_str(),
            "https://logs-01.loggly.com/bulk/tok"
        );
    }

    #[test]
    fn test_endpoint_url_with_trailing_slash() {
        let transport = transport("http://localhost:8080/");
        assert_eq!(
            transport.endpoint_url(Endpoint::Bulk, "tok").as_str(),
            "http://localhost:8080/bulk/tok"
        );
    }

    #[test]
    fn test_endpoint_url_keeps_base_path() {
        let transport = transport("http://localhost:8080/relay/");
        assert_eq!(
            transport.endpoint_url(Endpoint::Inputs, "tok").as_str(),
            "http://localhost:8080/relay/inputs/tok"
        );
    }

    #[test]
    fn test_endpoint_url_encodes_token() {
        let transport = transport("https://logs-01.loggly.com");
        let url = transport.endpoint_url(Endpoint::Inputs, "a/b?c#d e");
        assert_eq!(
            url.as_str(),
            "https://logs-01.loggly.com/inputs/a%2Fb%3Fc%23d%20e"
        );
        assert_eq!(url.query(), None);
        assert_eq!(url.fragment(), None);
    }

    #[test]
    fn test_with_client_rejects_unusable_url() {
        assert!(matches!(
            HttpTransport::with_client(reqwest::Client::new(), "not a url"),
            Err(ConfigError::InvalidConfig(_))
        ));
        assert!(matches!(
            HttpTransport::with_client(reqwest::Client::new(), "mailto:ops@example.com"),
            Err(ConfigError::InvalidConfig(_))
        ));
    }

    #[test]
    fn test_new_from_config() {
        let config = ClientConfig::new("tok");
        assert!(HttpTransport::new(&config).is_ok());
    }

    #[tokio::test]
    async fn test_network_error_omits_token() {
        let token = "secret-token-abc123";
        let transport = transport("http://127.0.0.1:1");
        let request = Request {
            endpoint: Endpoint::Inputs,
            token: token.to_string(),
            tags: None,
            content_type: "text/plain",
            body: "event".to_string(),
        };

        let error = transport.post(request).await.unwrap_err();
        assert!(matches!(error, TransportError::Http(_)));
        assert!(!error.to_string().contains(token));
        assert!(!format!("{error:?}").contains(token));
    }
}
