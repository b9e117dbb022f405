// Copyright 2025-Present Datadog, Inc. https://www.datadoghq.com/
// SPDX-License-Identifier: Apache-2.0

//! Bulk payload encoding.
//!
//! The bulk endpoint splits its body into events on `\n` and strips `\r`.
//! Every line break inside an event is therefore rewritten to `\r` so a
//! multi-line message stays a single event, and each event is terminated
//! with `\n`.

use std::borrow::Cow;

/// A value that may carry a log event.
///
/// `None` stands for an absent message. Absent and empty events are never
/// sent.
pub trait AsEvent {
    fn as_event(&self) -> Option<&str>;
}

impl AsEvent for str {
    fn as_event(&self) -> Option<&str> {
        Some(self)
    }
}

impl AsEvent for String {
    fn as_event(&self) -> Option<&str> {
        Some(self)
    }
}

impl AsEvent for Cow<'_, str> {
    fn as_event(&self) -> Option<&str> {
        Some(self)
    }
}

impl<T: AsEvent + ?Sized> AsEvent for &T {
    fn as_event(&self) -> Option<&str> {
        (**self).as_event()
    }
}

impl<T: AsEvent> AsEvent for Option<T> {
    fn as_event(&self) -> Option<&str> {
        self.as_ref().and_then(AsEvent::as_event)
    }
}

/// Joins events into one bulk payload.
///
/// Returns an empty string when no event survives filtering; callers treat
/// that as "nothing to send".
///
/// ```
/// use loggly_client::batch::encode;
///
/// assert_eq!(encode(["multi-line\nevent here", "event 2"]), "multi-line\revent here\nevent 2\n");
/// assert_eq!(encode([None, Some("")]), "");
/// ```
pub fn encode<I>(messages: I) -> String
where
    I: IntoIterator,
    I::Item: AsEvent,
{
    let mut payload = String::new();
    for message in messages {
        let Some(event) = message.as_event() else {
            continue;
        };
        if event.is_empty() {
            continue;
        }
        payload.extend(event.chars().map(|c| if c == '\n' { '\r' } else { c }));
        payload.push('\n');
    }
    payload
}
