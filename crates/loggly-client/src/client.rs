// Copyright 2025-Present Datadog, Inc. https://www.datadoghq.com/
// SPDX-License-Identifier: Apache-2.0

//! Delivery of log events to Loggly.
//!
//! Every operation builds one [`Request`] and hands it to a single dispatch
//! path. The awaited variants (`log`, `log_json`, `log_bulk`) return whether
//! Loggly accepted the events; the `*_async` variants spawn the delivery on
//! the current tokio runtime and report through a [`Callback`].
//!
//! A delivery succeeds only when the request went through *and* Loggly
//! answered `{"response":"ok"}`. A 2xx with any other response value counts
//! as a failure.
//!
//! Tags are read once when a request is built. A concurrent
//! [`LogglyClient::set_tags`] only affects requests built after it.

use crate::batch::{self, AsEvent};
use crate::config::ClientConfig;
use crate::error::{ConfigError, TransportError};
use crate::tags::TagSet;
use crate::transport::{Endpoint, HttpTransport, Request, RestService};
use serde::Serialize;
use std::fmt;
use std::sync::{Arc, PoisonError, RwLock};
use tokio::runtime::Handle;
use tokio::task::JoinHandle;
use tracing::{debug, error, warn};

const TEXT_PLAIN: &str = "text/plain";
const APPLICATION_JSON: &str = "application/json";

/// Completion notification for asynchronous deliveries.
///
/// Both methods consume the callback, so it runs exactly once. Any
/// `FnOnce(Result<(), String>)` closure is a callback.
pub trait Callback: Send + 'static {
    /// The events were accepted by Loggly.
    fn success(self);

    /// The delivery failed; `error` describes why.
    fn failure(self, error: String);
}

impl<F> Callback for F
where
    F: FnOnce(Result<(), String>) + Send + 'static,
{
    fn success(self) {
        self(Ok(()));
    }

    fn failure(self, error: String) {
        self(Err(error));
    }
}

/// Client for the Loggly HTTP ingestion API.
pub struct LogglyClient {
    token: String,
    tags: RwLock<Option<TagSet>>,
    service: Arc<dyn RestService>,
}

impl LogglyClient {
    /// Creates a client posting to the default Loggly endpoint.
    ///
    /// Fails with [`ConfigError::EmptyToken`] if `token` is empty.
    pub fn new(token: impl Into<String>) -> Result<Self, ConfigError> {
        Self::from_config(&ClientConfig::new(token))
    }

    /// Creates a client from a full configuration, including its initial tags.
    pub fn from_config(config: &ClientConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        let service = Arc::new(HttpTransport::new(config)?);
        let client = Self::with_service(config.token()?, service)?;
        client.set_tags(&config.tags);
        Ok(client)
    }

    /// Creates a client on top of a custom [`RestService`].
    pub fn with_service(
        token: impl Into<String>,
        service: Arc<dyn RestService>,
    ) -> Result<Self, ConfigError> {
        let token = token.into();
        if token.is_empty() {
            return Err(ConfigError::EmptyToken);
        }
        Ok(LogglyClient {
            token,
            tags: RwLock::new(None),
            service,
        })
    }

    /// Sets the tags sent with every following request.
    ///
    /// Inputs may be comma-separated lists; see [`TagSet::parse`]. Input
    /// without any tag clears the tags.
    pub fn set_tags<I, S>(&self, tags: I)
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let tags = TagSet::parse(tags);
        *self.tags.write().unwrap_or_else(PoisonError::into_inner) = tags;
    }

    /// The current tags, `None` when no tag header is sent.
    #[must_use]
    pub fn tags(&self) -> Option<TagSet> {
        self.tags
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Posts a single event. Line breaks are kept as they are.
    ///
    /// Returns `false` without any request when `message` is absent.
    pub async fn log(&self, message: impl AsEvent) -> bool {
        let Some(message) = message.as_event() else {
            return false;
        };
        let request = self.request(Endpoint::Inputs, TEXT_PLAIN, message.to_owned());
        self.send(request).await
    }

    /// Posts a single event without waiting for the outcome.
    ///
    /// Returns `None`, and never runs `callback`, when `message` is absent.
    pub fn log_async<C: Callback>(
        &self,
        message: impl AsEvent,
        callback: C,
    ) -> Option<JoinHandle<()>> {
        let message = message.as_event()?;
        let request = self.request(Endpoint::Inputs, TEXT_PLAIN, message.to_owned());
        self.spawn(request, callback)
    }

    /// Serializes `event` to JSON and posts it as a single event.
    pub async fn log_json<T: Serialize + ?Sized>(&self, event: &T) -> bool {
        match self.json_request(event) {
            Ok(request) => self.send(request).await,
            Err(e) => {
                error!("LOGGLY | {}", e);
                false
            }
        }
    }

    /// Serializes `event` to JSON and posts it without waiting for the outcome.
    ///
    /// A serialization failure is reported to `callback` immediately.
    pub fn log_json_async<T, C>(&self, event: &T, callback: C) -> Option<JoinHandle<()>>
    where
        T: Serialize + ?Sized,
        C: Callback,
    {
        match self.json_request(event) {
            Ok(request) => self.spawn(request, callback),
            Err(e) => {
                error!("LOGGLY | {}", e);
                callback.failure(e.to_string());
                None
            }
        }
    }

    /// Posts several events in one request to the bulk endpoint.
    ///
    /// Returns `false` without any request when no event survives encoding.
    pub async fn log_bulk<I>(&self, messages: I) -> bool
    where
        I: IntoIterator,
        I::Item: AsEvent,
    {
        let Some(request) = self.bulk_request(messages) else {
            return false;
        };
        self.send(request).await
    }

    /// Posts several events to the bulk endpoint without waiting for the outcome.
    ///
    /// Returns `None`, and never runs `callback`, when no event survives
    /// encoding.
    pub fn log_bulk_async<I, C>(&self, messages: I, callback: C) -> Option<JoinHandle<()>>
    where
        I: IntoIterator,
        I::Item: AsEvent,
        C: Callback,
    {
        let request = self.bulk_request(messages)?;
        self.spawn(request, callback)
    }

    fn request(&self, endpoint: Endpoint, content_type: &'static str, body: String) -> Request {
        Request {
            endpoint,
            token: self.token.clone(),
            tags: self.tags().map(|t| t.to_string()),
            content_type,
            body,
        }
    }

    fn bulk_request<I>(&self, messages: I) -> Option<Request>
    where
        I: IntoIterator,
        I::Item: AsEvent,
    {
        let payload = batch::encode(messages);
        if payload.is_empty() {
            return None;
        }
        Some(self.request(Endpoint::Bulk, TEXT_PLAIN, payload))
    }

    fn json_request<T: Serialize + ?Sized>(&self, event: &T) -> Result<Request, TransportError> {
        let body = serde_json::to_string(event).map_err(TransportError::Serialize)?;
        Ok(self.request(Endpoint::Inputs, APPLICATION_JSON, body))
    }

    async fn send(&self, request: Request) -> bool {
        dispatch(self.service.as_ref(), request).await.is_ok()
    }

    fn spawn<C: Callback>(&self, request: Request, callback: C) -> Option<JoinHandle<()>> {
        let Ok(runtime) = Handle::try_current() else {
            error!("LOGGLY | {}", TransportError::NoRuntime);
            callback.failure(TransportError::NoRuntime.to_string());
            return None;
        };

        let service = Arc::clone(&self.service);
        let guard = CallbackGuard(Some(callback));
        Some(runtime.spawn(async move {
            let result = dispatch(service.as_ref(), request).await;
            guard.complete(result);
        }))
    }
}

/// Owns a callback for the lifetime of a spawned delivery. If the task is
/// dropped before it completes (runtime shutdown), the callback gets
/// [`TransportError::Cancelled`].
struct CallbackGuard<C: Callback>(Option<C>);

impl<C: Callback> CallbackGuard<C> {
    fn complete(mut self, result: Result<(), TransportError>) {
        if let Some(callback) = self.0.take() {
            match result {
                Ok(()) => callback.success(),
                Err(e) => callback.failure(e.to_string()),
            }
        }
    }
}

impl<C: Callback> Drop for CallbackGuard<C> {
    fn drop(&mut self) {
        if let Some(callback) = self.0.take() {
            warn!("LOGGLY | {}", TransportError::Cancelled);
            callback.failure(TransportError::Cancelled.to_string());
        }
    }
}

impl fmt::Debug for LogglyClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LogglyClient")
            .field("tags", &self.tags())
            .finish_non_exhaustive()
    }
}

async fn dispatch(service: &dyn RestService, request: Request) -> Result<(), TransportError> {
    let endpoint = request.endpoint;
    debug!(
        "LOGGLY | Posting {} bytes to {} endpoint",
        request.body.len(),
        endpoint
    );

    match service.post(request).await {
        Ok(response) if response.is_ok() => {
            debug!("LOGGLY | Events accepted by {} endpoint", endpoint);
            Ok(())
        }
        Ok(response) => {
            warn!(
                "LOGGLY | Events rejected by {} endpoint: {:?}",
                endpoint,
                response.text()
            );
            Err(TransportError::Rejected(response.text().to_string()))
        }
        Err(e) => {
            error!("LOGGLY | Failed to post to {} endpoint: {}", endpoint, e);
            Err(e)
        }
    }
}
