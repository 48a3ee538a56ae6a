//! Property-based tests for resampling primitives

use bootstrap_core::{mean, utils, RandomSource, ResampleWorkspace};
use proptest::prelude::*;

proptest! {
    // Property: every resampled value comes from the source
    #[test]
    fn prop_resample_is_drawn_from_source(
        source in prop::collection::vec(-1e6f64..1e6, 1..64),
        seed in any::<u64>(),
    ) {
        let mut rng = RandomSource::seeded(seed);
        let mut ws = ResampleWorkspace::new();

        for _ in 0..8 {
            let resample = ws.resample(&source, &mut rng);
            prop_assert_eq!(resample.len(), source.len());
            for value in resample {
                prop_assert!(source.contains(value));
            }
        }
    }

    // Property: the mean lies between the smallest and largest value
    #[test]
    fn prop_mean_is_bounded(data in prop::collection::vec(-1e6f64..1e6, 1..128)) {
        let m = mean(&data).unwrap();
        let (lo, hi) = utils::min_max(&data).unwrap();
        let tol = 1e-9 * (1.0 + lo.abs().max(hi.abs()));
        prop_assert!(m >= lo - tol && m <= hi + tol);
    }

    // Property: sorting produces a non-decreasing permutation
    #[test]
    fn prop_sorted_is_ordered(data in prop::collection::vec(-1e6f64..1e6, 0..128)) {
        let s = utils::sorted(&data);
        prop_assert_eq!(s.len(), data.len());
        prop_assert!(s.windows(2).all(|w| w[0] <= w[1]));
    }
}
