//! Ordered, duplicate-free question archive.

use crate::Question;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// The canonical list of questions.
///
/// Uniqueness is by exact string match. The first occurrence wins and
/// insertion order is preserved. The archive is a plain value: operations
/// return or mutate it in memory, and persistence happens only through an
/// explicit store `save`.
///
/// Deserializing from a JSON array silently drops later duplicates.
///
/// # Examples
///
/// ```
/// use oblique_core::{Archive, Question};
///
/// let archive = Archive::from_questions(["a", "b", "a"]);
/// assert_eq!(archive.len(), 2);
///
/// let archive = archive.append(Question::new("c")).append(Question::new("b"));
/// assert_eq!(archive.len(), 3);
/// assert_eq!(archive.get(2).map(|q| q.as_str()), Some("c"));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "Vec<Question>", into = "Vec<Question>")]
pub struct Archive {
    questions: Vec<Question>,
    seen: HashSet<Question>,
}

impl Archive {
    /// Create an empty archive.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build an archive, keeping only the first occurrence of each question.
    pub fn from_questions<I, Q>(questions: I) -> Self
    where
        I: IntoIterator<Item = Q>,
        Q: Into<Question>,
    {
        let mut archive = Self::new();
        for question in questions {
            archive.insert(question.into());
        }
        archive
    }

    /// Number of questions.
    pub fn len(&self) -> usize {
        self.questions.len()
    }

    /// True if the archive holds no questions.
    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }

    /// Exact-match membership.
    pub fn contains(&self, text: &str) -> bool {
        self.seen.contains(text)
    }

    /// Question at position `index`.
    pub fn get(&self, index: usize) -> Option<&Question> {
        self.questions.get(index)
    }

    /// Questions in archive order.
    pub fn as_slice(&self) -> &[Question] {
        &self.questions
    }

    /// Iterate in archive order.
    pub fn iter(&self) -> std::slice::Iter<'_, Question> {
        self.questions.iter()
    }

    /// Insert at the end if absent. Returns whether the question was added.
    pub fn insert(&mut self, question: Question) -> bool {
        if self.seen.contains(question.as_str()) {
            return false;
        }
        self.seen.insert(question.clone());
        self.questions.push(question);
        true
    }

    /// Value form of [`Archive::insert`]: a duplicate is a no-op.
    ///
    /// Check [`Archive::contains`] first to tell "already present" from
    /// "newly added".
    #[must_use]
    pub fn append(mut self, question: Question) -> Self {
        self.insert(question);
        self
    }

    /// Consume the archive into its ordered questions.
    pub fn into_questions(self) -> Vec<Question> {
        self.questions
    }
}

impl From<Vec<Question>> for Archive {
    fn from(questions: Vec<Question>) -> Self {
        Self::from_questions(questions)
    }
}

impl From<Archive> for Vec<Question> {
    fn from(archive: Archive) -> Self {
        archive.questions
    }
}

impl FromIterator<Question> for Archive {
    fn from_iter<T: IntoIterator<Item = Question>>(iter: T) -> Self {
        Self::from_questions(iter)
    }
}

impl<'a> IntoIterator for &'a Archive {
    type Item = &'a Question;
    type IntoIter = std::slice::Iter<'a, Question>;

    fn into_iter(self) -> Self::IntoIter {
        self.questions.iter()
    }
}
