//! Property tests for continuous-mode delays.

use std::time::Duration;

use proptest::prelude::*;
use rand::rngs::StdRng;
use rand::SeedableRng;

use randeploy::IntervalBounds;

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 128,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: sampled delays stay within the inclusive bounds.
    #[test]
    fn property_sample_within_bounds(
        min in 0u64..120_000,
        span in 0u64..120_000,
        seed in any::<u64>()
    ) {
        let bounds = IntervalBounds::new(min, min + span).unwrap();
        let mut rng = StdRng::seed_from_u64(seed);

        for _ in 0..8 {
            let delay = bounds.sample(&mut rng);
            prop_assert!(delay >= Duration::from_millis(min));
            prop_assert!(delay <= Duration::from_millis(min + span));
        }
    }

    /// PROPERTY: inverted bounds are always rejected.
    #[test]
    fn property_inverted_bounds_rejected(min in 1u64..u64::MAX, gap in 1u64..1_000) {
        let max = min.saturating_sub(gap);
        prop_assume!(max < min);
        prop_assert!(IntervalBounds::new(min, max).is_err());
    }
}
