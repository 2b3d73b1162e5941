//! Acceptance rules for generated questions.

use regex::Regex;
use std::sync::LazyLock;

/// Minimum accepted length in Unicode scalar values.
pub const MIN_CHARS: usize = 6;
/// Maximum accepted length in Unicode scalar values.
pub const MAX_CHARS: usize = 140;

static NUMBERED_PREFIX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[0-9]+[.)]").expect("Valid numbered prefix regex"));

static DATE_PREFIX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[0-9]{4}[/-][0-9]{1,2}[/-][0-9]{1,2}").expect("Valid date prefix regex")
});

static EXCESS_BLANK_LINES: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\n{3,}").expect("Valid blank line regex"));

/// The first rule a candidate broke.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, derive_more::Display)]
pub enum RejectReason {
    /// Nothing left after trimming
    #[display("empty")]
    Empty,
    /// Below the minimum length
    #[display("too short: {} < {}", len, min)]
    TooShort {
        /// Length in chars
        len: usize,
        /// Configured minimum
        min: usize,
    },
    /// Above the maximum length
    #[display("too long: {} > {}", len, max)]
    TooLong {
        /// Length in chars
        len: usize,
        /// Configured maximum
        max: usize,
    },
    /// Starts like `1.` or `2)`
    #[display("numbered list marker")]
    NumberedPrefix,
    /// Starts like `2024/01/01`
    #[display("date prefix")]
    DatePrefix,
    /// Contains `#` or `＃`
    #[display("hashtag")]
    Hashtag,
    /// Contains an http(s) URL
    #[display("url")]
    Url,
    /// Contains a code point in U+1F000..=U+1FAFF
    #[display("emoji")]
    Emoji,
}

/// Length-bounded acceptance predicate.
///
/// # Examples
///
/// ```
/// use oblique_core::{RejectReason, Validator};
///
/// let validator = Validator::default();
/// assert!(validator.check("なぜ今それをしているのか？").is_ok());
/// assert_eq!(validator.check("1) 何を捨てる？"), Err(RejectReason::NumberedPrefix));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Validator {
    min_chars: usize,
    max_chars: usize,
}

impl Default for Validator {
    fn default() -> Self {
        Self::new(MIN_CHARS, MAX_CHARS)
    }
}

impl Validator {
    /// Create a validator with custom length bounds (inclusive).
    pub fn new(min_chars: usize, max_chars: usize) -> Self {
        Self {
            min_chars,
            max_chars,
        }
    }

    /// Accept the candidate or name the first rule it breaks.
    ///
    /// Surrounding whitespace is ignored, so padded input is judged the same
    /// as its trimmed form.
    pub fn check(&self, text: &str) -> Result<(), RejectReason> {
        let text = text.trim();
        if text.is_empty() {
            return Err(RejectReason::Empty);
        }

        let len = text.chars().count();
        if len < self.min_chars {
            return Err(RejectReason::TooShort {
                len,
                min: self.min_chars,
            });
        }
        if len > self.max_chars {
            return Err(RejectReason::TooLong {
                len,
                max: self.max_chars,
            });
        }

        if NUMBERED_PREFIX.is_match(text) {
            return Err(RejectReason::NumberedPrefix);
        }
        if DATE_PREFIX.is_match(text) {
            return Err(RejectReason::DatePrefix);
        }
        if text.contains(['#', '＃']) {
            return Err(RejectReason::Hashtag);
        }
        if text.contains("http://") || text.contains("https://") {
            return Err(RejectReason::Url);
        }
        if text.chars().any(|c| ('\u{1F000}'..='\u{1FAFF}').contains(&c)) {
            return Err(RejectReason::Emoji);
        }

        Ok(())
    }

    /// True when [`Validator::check`] rejects the candidate.
    pub fn looks_bad(&self, text: &str) -> bool {
        self.check(text).is_err()
    }
}

/// Pure reject predicate with the default 6..=140 bounds.
///
/// # Examples
///
/// ```
/// use oblique_core::looks_bad;
///
/// assert!(looks_bad(""));
/// assert!(looks_bad("2024/01/01 foo"));
/// assert!(!looks_bad("普通の問い？"));
/// ```
pub fn looks_bad(text: &str) -> bool {
    Validator::default().looks_bad(text)
}

/// Normalize raw model output: drop `\r`, collapse 3+ newlines to 2, trim.
///
/// # Examples
///
/// ```
/// use oblique_core::sanitize;
///
/// assert_eq!(sanitize("  a\r\n\n\n\nb \n"), "a\n\nb");
/// ```
pub fn sanitize(text: &str) -> String {
    let without_cr = text.replace('\r', "");
    EXCESS_BLANK_LINES
        .replace_all(&without_cr, "\n\n")
        .trim()
        .to_string()
}
