//! Uniform category selection.

use engagement_core::EngagementProfile;
use rand::Rng;

/// Pick one profile uniformly at random, or `None` if the slice is empty.
pub fn pick_profile<'a, R: Rng>(
    rng: &mut R,
    profiles: &'a [EngagementProfile],
) -> Option<&'a EngagementProfile> {
    if profiles.is_empty() {
        return None;
    }
    let idx = rng.gen_range(0..profiles.len());
    Some(&profiles[idx])
}

#[cfg(test)]
mod tests {
    use super::*;
    use engagement_core::DatasetSchema;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_empty_slice_yields_none() {
        let mut rng = StdRng::seed_from_u64(42);
        assert!(pick_profile(&mut rng, &[]).is_none());
    }

    #[test]
    fn test_picks_every_category_eventually() {
        let mut rng = StdRng::seed_from_u64(42);
        let profiles = DatasetSchema::default().profiles;

        let mut seen = std::collections::HashSet::new();
        for _ in 0..200 {
            let profile = pick_profile(&mut rng, &profiles).unwrap();
            seen.insert(profile.post_type);
        }
        assert_eq!(seen.len(), profiles.len());
    }
}
