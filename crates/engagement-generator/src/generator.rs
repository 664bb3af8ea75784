//! Main record generator producing the mock engagement dataset.

use crate::generators::{choice, numeric, timestamp};
use engagement_core::{DatasetSchema, PostRecord};
use rand::rngs::StdRng;
use rand::SeedableRng;

/// Error type for generator operations.
#[derive(Debug, thiserror::Error)]
pub enum GeneratorError {
    /// Schema defines no engagement profiles
    #[error("Schema defines no engagement profiles")]
    NoProfiles,
}

/// Generator that produces post records from a dataset schema.
///
/// With `new` the generator is seeded and reproducible: the same seed and
/// schema yield the same record sequence. `unseeded` draws the RNG state
/// from OS entropy, so two runs may legitimately differ.
///
/// Counter ranges and the date window must already be validated
/// (`DatasetSchema::validate`); the sampling helpers draw inclusively and do
/// not re-check bounds.
pub struct RecordGenerator {
    /// Schema defining categories, counter ranges, and the date window
    schema: DatasetSchema,
    /// Random number generator, seeded for reproducibility
    rng: StdRng,
    /// Current record index (post ids are `index + 1`)
    index: u64,
}

impl RecordGenerator {
    /// Create a seeded, deterministic generator.
    pub fn new(schema: DatasetSchema, seed: u64) -> Self {
        Self {
            schema,
            rng: StdRng::seed_from_u64(seed),
            index: 0,
        }
    }

    /// Create a generator seeded from OS entropy.
    pub fn unseeded(schema: DatasetSchema) -> Self {
        Self {
            schema,
            rng: StdRng::from_entropy(),
            index: 0,
        }
    }

    /// Get the current record index.
    pub fn current_index(&self) -> u64 {
        self.index
    }

    /// Get a reference to the schema.
    pub fn schema(&self) -> &DatasetSchema {
        &self.schema
    }

    /// Generate the next record.
    ///
    /// Draws a category uniformly from the schema's profiles, one integer
    /// per counter inclusive of the profile bounds, and a posting date
    /// inside the window. Post ids are sequential starting at 1, in
    /// generation order.
    pub fn next_record(&mut self) -> Result<PostRecord, GeneratorError> {
        let profile = choice::pick_profile(&mut self.rng, &self.schema.profiles)
            .ok_or(GeneratorError::NoProfiles)?;

        let record = PostRecord {
            post_id: self.index + 1,
            post_type: profile.post_type,
            likes: numeric::int_in_range(&mut self.rng, &profile.likes),
            shares: numeric::int_in_range(&mut self.rng, &profile.shares),
            comments: numeric::int_in_range(&mut self.rng, &profile.comments),
            date_posted: timestamp::date_in_window(&mut self.rng, &self.schema.window),
        };

        self.index += 1;
        Ok(record)
    }

    /// Generate `count` records as a lazy iterator.
    pub fn records(&mut self, count: u64) -> Result<RecordIter<'_>, GeneratorError> {
        // Verify up front so the iterator itself cannot fail
        if self.schema.profiles.is_empty() {
            return Err(GeneratorError::NoProfiles);
        }

        Ok(RecordIter {
            generator: self,
            remaining: count,
        })
    }
}

/// Iterator that lazily generates records.
pub struct RecordIter<'a> {
    generator: &'a mut RecordGenerator,
    remaining: u64,
}

impl Iterator for RecordIter<'_> {
    type Item = PostRecord;

    fn next(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }

        self.remaining -= 1;

        // This should not fail since `records` verified the profile list
        self.generator.next_record().ok()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.remaining as usize;
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for RecordIter<'_> {}
