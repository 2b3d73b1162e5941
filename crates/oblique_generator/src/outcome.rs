//! Result of one generator run.

use oblique_core::Question;
use oblique_error::ObliqueError;

/// How a generator run ended.
///
/// Only [`RunOutcome::Fatal`] is a failure for the calling process.
#[derive(Debug, derive_more::Display)]
pub enum RunOutcome {
    /// A new question was published and appended to the archive
    #[display("generated: {}", question)]
    Success {
        /// The new question
        question: Question,
    },
    /// The service stayed rate limited; an archived question was republished
    #[display("rate limited ({}), fell back to archive: {}", status, question)]
    Fallback {
        /// The republished question
        question: Question,
        /// Final HTTP status from the service
        status: u16,
    },
    /// Nothing was published
    #[display("{}", _0)]
    Fatal(ObliqueError),
}

impl RunOutcome {
    /// Process exit code: 0 for success or fallback, 1 for fatal.
    pub fn exit_code(&self) -> u8 {
        match self {
            RunOutcome::Success { .. } | RunOutcome::Fallback { .. } => 0,
            RunOutcome::Fatal(_) => 1,
        }
    }

    /// The question published as today's, if any.
    pub fn question(&self) -> Option<&Question> {
        match self {
            RunOutcome::Success { question } | RunOutcome::Fallback { question, .. } => {
                Some(question)
            }
            RunOutcome::Fatal(_) => None,
        }
    }

    /// True for [`RunOutcome::Fatal`].
    pub fn is_fatal(&self) -> bool {
        matches!(self, RunOutcome::Fatal(_))
    }
}
