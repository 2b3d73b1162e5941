//! Random draws from the archive.

use crate::{Archive, Question};
use oblique_error::{SamplingError, SamplingErrorKind};
use rand::seq::{index, SliceRandom};
use rand::Rng;

/// Draw `n` distinct questions uniformly without replacement.
///
/// The result is in draw order, not archive order. Fails fast when `n`
/// exceeds the archive size.
///
/// # Examples
///
/// ```
/// use oblique_core::{sample, Archive};
/// use rand::{rngs::StdRng, SeedableRng};
///
/// let archive = Archive::from_questions(["a", "b", "c", "d"]);
/// let mut rng = StdRng::seed_from_u64(7);
/// let picked = sample(&archive, 3, &mut rng).unwrap();
/// assert_eq!(picked.len(), 3);
/// assert!(sample(&archive, 5, &mut rng).is_err());
/// ```
#[tracing::instrument(skip(archive, rng), fields(archive_len = archive.len()))]
pub fn sample<R: Rng + ?Sized>(
    archive: &Archive,
    n: usize,
    rng: &mut R,
) -> Result<Vec<Question>, SamplingError> {
    if n > archive.len() {
        return Err(SamplingError::new(SamplingErrorKind::InsufficientSize {
            requested: n,
            available: archive.len(),
        }));
    }

    let questions = archive.as_slice();
    Ok(index::sample(rng, questions.len(), n)
        .into_iter()
        .map(|i| questions[i].clone())
        .collect())
}

/// Pick one question uniformly. `None` only for an empty archive.
pub fn pick_one<R: Rng + ?Sized>(archive: &Archive, rng: &mut R) -> Option<Question> {
    archive.as_slice().choose(rng).cloned()
}
