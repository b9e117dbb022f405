// Copyright 2025-Present Datadog, Inc. https://www.datadoghq.com/
// SPDX-License-Identifier: Apache-2.0

use serde::{Deserialize, Serialize};

/// Body returned by both ingestion endpoints: `{"response": "ok"}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LogglyResponse {
    #[serde(default)]
    response: String,
}

impl LogglyResponse {
    /// Response value for success
    pub const SUCCESS_VALUE: &'static str = "ok";

    #[must_use]
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            response: text.into(),
        }
    }

    #[must_use]
    pub fn ok() -> Self {
        Self::new(Self::SUCCESS_VALUE)
    }

    #[must_use]
    pub fn text(&self) -> &str {
        &self.response
    }

    #[must_use]
    pub fn is_ok(&self) -> bool {
        self.response == Self::SUCCESS_VALUE
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deserializes_ok_response() {
        let response: LogglyResponse =
            serde_json::from_str(r#"{"response":"ok"}"#).expect("valid response");
        assert!(response.is_ok());
        assert_eq!(response, LogglyResponse::ok());
    }

    #[test]
    fn other_values_are_not_ok() {
        let response: LogglyResponse =
            serde_json::from_str(r#"{"response":"error"}"#).expect("valid response");
        assert!(!response.is_ok());
        assert_eq!(response.text(), "error");
    }

    #[test]
    fn missing_field_is_not_ok() {
        let response: LogglyResponse = serde_json::from_str("{}").expect("valid response");
        assert!(!response.is_ok());
        assert_eq!(response.text(), "");
    }

    #[test]
    fn comparison_is_case_sensitive() {
        assert!(!LogglyResponse::new("OK").is_ok());
    }
}
