//! The question newtype.

use serde::{Deserialize, Serialize};
use std::borrow::Borrow;

/// A single short natural-language prompt.
///
/// Serialized as a bare JSON string.
///
/// # Examples
///
/// ```
/// use oblique_core::Question;
///
/// let q = Question::new("いま何を避けている？");
/// assert_eq!(q.as_str(), "いま何を避けている？");
/// assert_eq!(serde_json::to_string(&q).unwrap(), "\"いま何を避けている？\"");
/// ```
#[derive(
    Debug,
    Clone,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    Serialize,
    Deserialize,
    derive_more::Display,
    derive_more::From,
)]
#[serde(transparent)]
pub struct Question(String);

impl Question {
    /// Wrap a string as a question. No normalization is applied.
    pub fn new(text: impl Into<String>) -> Self {
        Self(text.into())
    }

    /// Borrow the question text.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Unwrap into the owned text.
    pub fn into_inner(self) -> String {
        self.0
    }
}

impl From<&str> for Question {
    fn from(text: &str) -> Self {
        Self(text.to_string())
    }
}

impl AsRef<str> for Question {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl Borrow<str> for Question {
    fn borrow(&self) -> &str {
        &self.0
    }
}
