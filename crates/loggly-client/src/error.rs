// Copyright 2025-Present Datadog, Inc. https://www.datadoghq.com/
// SPDX-License-Identifier: Apache-2.0

use reqwest::StatusCode;

/// Errors raised while building a client. These are the only failures the
/// public API propagates; everything after construction is reported as a
/// boolean or through a callback.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("token cannot be empty")]
    EmptyToken,

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("Failed to build HTTP client: {0}")]
    HttpClient(String),
}

/// Failures of a single delivery attempt.
///
/// The `Display` output is the message handed to [`crate::Callback::failure`].
#[derive(Debug, thiserror::Error)]
pub enum TransportError {
    /// Built through `From`, which strips the request URL so the token
    /// embedded in the path never reaches logs or callbacks.
    #[error("HTTP request failed: {0}")]
    Http(#[source] reqwest::Error),

    #[error("Unexpected status {status}: {body}")]
    Status { status: StatusCode, body: String },

    #[error("Failed to deserialize response: {0}")]
    Deserialize(#[source] serde_json::Error),

    #[error("Failed to serialize event: {0}")]
    Serialize(#[source] serde_json::Error),

    #[error("Event rejected by Loggly: {0}")]
    Rejected(String),

    #[error("No async runtime available to dispatch the request")]
    NoRuntime,

    #[error("Delivery cancelled before completion")]
    Cancelled,
}

impl From<reqwest::Error> for TransportError {
    fn from(e: reqwest::Error) -> Self {
        TransportError::Http(e.without_url())
    }
}
