//! Core data types for the Oblique daily question pipeline.
//!
//! - [`Question`] and [`Archive`]: the ordered, duplicate-free question list
//! - [`TodayPointer`]: the question published for the current cycle
//! - [`Validator`] / [`looks_bad`]: acceptance rules for generated candidates
//! - [`sample`] / [`pick_one`]: random draws with an injectable RNG

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod archive;
mod question;
mod sampler;
mod today;
mod validation;

pub use archive::Archive;
pub use question::Question;
pub use sampler::{pick_one, sample};
pub use today::TodayPointer;
pub use validation::{looks_bad, sanitize, RejectReason, Validator, MAX_CHARS, MIN_CHARS};
