// Copyright 2025-Present Datadog, Inc. https://www.datadoghq.com/
// SPDX-License-Identifier: Apache-2.0

#![cfg_attr(not(test), deny(clippy::panic))]
#![cfg_attr(not(test), deny(clippy::unwrap_used))]
#![cfg_attr(not(test), deny(clippy::expect_used))]
#![cfg_attr(not(test), deny(clippy::todo))]
#![cfg_attr(not(test), deny(clippy::unimplemented))]

mod logger;

use loggly_client::{ClientConfig, ConfigError, LogglyClient};
use std::{env, process::ExitCode};
use tracing::{debug, error, info};
use tracing_subscriber::EnvFilter;

const TOKEN_HELP: &str = "missing argument: loggly token\nsee http://loggly.com/docs/customer-token-authentication-token/";

#[tokio::main]
pub async fn main() -> ExitCode {
    // The first argument, when present, overrides LOGGLY_TOKEN.
    let token = env::args().nth(1).filter(|t| !t.trim().is_empty());

    let config = match ClientConfig::from_env_with_token(token) {
        Ok(config) => config,
        Err(ConfigError::EmptyToken) => {
            eprintln!("{TOKEN_HELP}");
            return ExitCode::FAILURE;
        }
        Err(e) => {
            eprintln!("{e}");
            return ExitCode::FAILURE;
        }
    };

    let env_filter = format!("h2=off,hyper=off,rustls=off,{}", config.log_level);
    let env_filter = match EnvFilter::try_new(env_filter) {
        Ok(filter) => filter,
        Err(e) => {
            eprintln!("could not parse log level in configuration: {e}");
            return ExitCode::FAILURE;
        }
    };
    let subscriber = tracing_subscriber::fmt::Subscriber::builder()
        .with_env_filter(env_filter)
        .event_format(logger::Formatter)
        .finish();
    if let Err(e) = tracing::subscriber::set_global_default(subscriber) {
        eprintln!("setting default subscriber failed: {e}");
        return ExitCode::FAILURE;
    }

    debug!("Logging subsystem enabled");

    let loggly = match LogglyClient::from_config(&config) {
        Ok(client) => client,
        Err(e) => {
            error!("Failed to create Loggly client: {e}");
            return ExitCode::FAILURE;
        }
    };

    info!("posting single event to Loggly...");
    let single = loggly.log("Hello!\nThis is a\nmulti-line event!\n").await;
    report(single);

    info!("posting single JSON event to Loggly...");
    let json = serde_json::json!({
        "timestamp": "2015-01-01T12:34:00Z",
        "message": "Event 100",
        "count": 100
    });
    let json_ok = loggly.log_json(&json).await;
    report(json_ok);

    info!("posting bulk events to Loggly...");
    let bulk = loggly
        .log_bulk(["This is a\nmulti-line event 1", "Event 2", "Event 3"])
        .await;
    report(bulk);

    if single && json_ok && bulk {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    }
}

fn report(ok: bool) {
    println!("{}", if ok { "ok" } else { "err" });
}
