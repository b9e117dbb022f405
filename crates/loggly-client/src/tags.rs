// Copyright 2025-Present Datadog, Inc. https://www.datadoghq.com/
// SPDX-License-Identifier: Apache-2.0

//! Tag normalization for the `X-LOGGLY-TAG` header.

use std::fmt;

/// A canonical, non-empty, comma-separated list of tags.
///
/// There is no empty `TagSet`: Loggly rejects an empty tag header, so "no
/// tags" is `Option::<TagSet>::None` and the header is omitted.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct TagSet(String);

impl TagSet {
    /// Normalizes tag input into a canonical tag set.
    ///
    /// Each input may itself be a comma-separated list. Tokens are trimmed,
    /// empty tokens are dropped and the survivors are joined with single
    /// commas, keeping their order.
    ///
    /// ```
    /// use loggly_client::tags::TagSet;
    ///
    /// let tags = TagSet::parse(["foo", " bar , baz "]).expect("has tags");
    /// assert_eq!(tags.as_str(), "foo,bar,baz");
    /// assert_eq!(TagSet::parse(["", " , "]), None);
    /// ```
    pub fn parse<I, S>(tags: I) -> Option<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut canonical = String::new();
        for input in tags {
            for token in input.as_ref().split(',').map(str::trim) {
                if token.is_empty() {
                    continue;
                }
                if !canonical.is_empty() {
                    canonical.push(',');
                }
                canonical.push_str(token);
            }
        }

        if canonical.is_empty() {
            None
        } else {
            Some(Self(canonical))
        }
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for TagSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for TagSet {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
