//! Property tests for artifact selection.

use std::path::PathBuf;

use proptest::prelude::*;
use rand::rngs::StdRng;
use rand::SeedableRng;

use randeploy::{pick_by_names, pick_random, ArtifactDescriptor, ArtifactKind, RandeployError};

fn class_name() -> impl Strategy<Value = String> {
    proptest::string::string_regex("[A-Z][A-Za-z0-9_]{0,12}").unwrap()
}

fn catalog() -> impl Strategy<Value = Vec<ArtifactDescriptor>> {
    proptest::collection::btree_set(class_name(), 0..16).prop_map(|names| {
        names
            .into_iter()
            .filter_map(|name| {
                let path = PathBuf::from(format!("classes/{}.cls", name));
                ArtifactDescriptor::from_file(ArtifactKind::ApexClass, &path)
            })
            .collect()
    })
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 128,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: a random pick is always an element of a non-empty catalog.
    #[test]
    fn property_pick_random_returns_member(
        artifacts in catalog(),
        seed in any::<u64>()
    ) {
        let mut rng = StdRng::seed_from_u64(seed);
        match pick_random(&artifacts, &mut rng) {
            Ok(picked) => prop_assert!(artifacts.contains(picked)),
            Err(RandeployError::EmptyCatalog) => prop_assert!(artifacts.is_empty()),
            Err(other) => prop_assert!(false, "unexpected error: {}", other),
        }
    }

    /// PROPERTY: name filtering returns a subsequence of the catalog whose
    /// names are all requested.
    #[test]
    fn property_pick_by_names_is_ordered_subset(
        artifacts in catalog(),
        names in proptest::collection::vec(class_name(), 0..6)
    ) {
        let picked = pick_by_names(&artifacts, &names);

        for artifact in &picked {
            prop_assert!(names.iter().any(|n| n == artifact.name()));
        }

        let positions: Vec<usize> = picked
            .iter()
            .map(|p| artifacts.iter().position(|a| a == *p).unwrap())
            .collect();
        prop_assert!(positions.windows(2).all(|w| w[0] < w[1]));

        let expected = artifacts
            .iter()
            .filter(|a| names.iter().any(|n| n == a.name()))
            .count();
        prop_assert_eq!(picked.len(), expected);
    }

    /// PROPERTY: no names means no matches.
    #[test]
    fn property_empty_names_select_nothing(artifacts in catalog()) {
        let names: Vec<String> = Vec::new();
        prop_assert!(pick_by_names(&artifacts, &names).is_empty());
    }
}
