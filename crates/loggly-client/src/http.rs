// Copyright 2025-Present Datadog, Inc. https://www.datadoghq.com/
// SPDX-License-Identifier: Apache-2.0

//! HTTP client creation.
//!
//! Builds the `reqwest` client used by [`crate::transport::HttpTransport`]:
//! request timeout, connection pooling, TCP keep-alive and an optional HTTPS
//! proxy, all taken from [`ClientConfig`].

use crate::config::ClientConfig;
use core::time::Duration;
use std::error::Error;
use tracing::error;

/// Creates the HTTP client for the given configuration.
///
/// An invalid proxy is logged and ignored so the client can still reach
/// Loggly directly. Only a failure to build even the direct client is
/// returned as an error.
pub fn get_client(config: &ClientConfig) -> Result<reqwest::Client, Box<dyn Error + Send + Sync>> {
    match build_client(config, true) {
        Ok(client) => Ok(client),
        Err(e) => {
            error!(
                "LOGGLY | Unable to parse proxy configuration: {}, falling back to direct connection",
                e
            );
            build_client(config, false)
        }
    }
}

fn build_client(
    config: &ClientConfig,
    allow_proxy: bool,
) -> Result<reqwest::Client, Box<dyn Error + Send + Sync>> {
    let mut client = reqwest::Client::builder()
        .timeout(config.timeout)
        .pool_idle_timeout(Some(Duration::from_secs(270)))
        .tcp_keepalive(Some(Duration::from_secs(120)));

    if allow_proxy {
        if let Some(https_uri) = &config.https_proxy {
            let proxy = reqwest::Proxy::https(https_uri.clone())?;
            client = client.proxy(proxy);
        }
    }

    Ok(client.build()?)
}
