//! The question published for the current display cycle.

use crate::Question;
use serde::{Deserialize, Serialize};

/// Wraps one question in the `{"q": "..."}` shape the display surface reads.
///
/// # Examples
///
/// ```
/// use oblique_core::{Question, TodayPointer};
///
/// let today = TodayPointer::new(Question::new("何を手放せる？"));
/// assert_eq!(serde_json::to_string(&today).unwrap(), r#"{"q":"何を手放せる？"}"#);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TodayPointer {
    q: Question,
}

impl TodayPointer {
    /// Point today at `question`.
    pub fn new(question: Question) -> Self {
        Self { q: question }
    }

    /// The published question.
    pub fn question(&self) -> &Question {
        &self.q
    }
}
