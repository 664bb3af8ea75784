//! Bounded counter sampling.

use engagement_core::CounterRange;
use rand::Rng;

/// Draw a uniformly distributed integer inclusive of both range bounds.
///
/// The range must satisfy `min <= max` (see `DatasetSchema::validate`).
pub fn int_in_range<R: Rng>(rng: &mut R, range: &CounterRange) -> i64 {
    rng.gen_range(range.min..=range.max)
}
