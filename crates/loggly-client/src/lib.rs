// Copyright 2025-Present Datadog, Inc. https://www.datadoghq.com/
// SPDX-License-Identifier: Apache-2.0

//! # Loggly client
//!
//! Posts log events to the Loggly HTTP ingestion API, either one event per
//! request (`/inputs/{token}`) or as a newline-delimited batch
//! (`/bulk/{token}`), with optional tags sent in the `X-LOGGLY-TAG` header.
//!
//! ```rust,no_run
//! use loggly_client::LogglyClient;
//!
//! # async fn demo() -> Result<(), loggly_client::ConfigError> {
//! let loggly = LogglyClient::new("customer-token")?;
//! loggly.set_tags(["android", "demo,sample"]);
//!
//! let ok = loggly.log_bulk(["This is a\nmulti-line event 1", "Event 2"]).await;
//! println!("{}", if ok { "ok" } else { "err" });
//!
//! loggly.log_async("fire and forget", |result: Result<(), String>| {
//!     if let Err(e) = result {
//!         eprintln!("delivery failed: {e}");
//!     }
//! });
//! # Ok(())
//! # }
//! ```
//!
//! Delivery is at most once: there is no retry, queueing or buffering.

#![cfg_attr(not(test), deny(clippy::panic))]
#![cfg_attr(not(test), deny(clippy::unwrap_used))]
#![cfg_attr(not(test), deny(clippy::expect_used))]
#![cfg_attr(not(test), deny(clippy::todo))]
#![cfg_attr(not(test), deny(clippy::unimplemented))]

pub mod batch;
pub mod client;
pub mod config;
pub mod error;
pub mod http;
pub mod response;
pub mod tags;
pub mod transport;

pub use batch::AsEvent;
pub use client::{Callback, LogglyClient};
pub use config::ClientConfig;
pub use error::{ConfigError, TransportError};
pub use response::LogglyResponse;
pub use tags::TagSet;
pub use transport::{Endpoint, HttpTransport, Request, RestService};
