//! Artifact selection
//!
//! Two ways to pick from a catalog: one artifact uniformly at random, or
//! every artifact whose name is in a caller-supplied list.

use rand::Rng;

use crate::domain::entities::ArtifactDescriptor;
use crate::error::{RandeployError, RandeployResult};

/// Pick one artifact uniformly at random.
///
/// Every artifact has probability `1 / artifacts.len()`, regardless of kind.
pub fn pick_random<'a, R: Rng + ?Sized>(
    artifacts: &'a [ArtifactDescriptor],
    rng: &mut R,
) -> RandeployResult<&'a ArtifactDescriptor> {
    if artifacts.is_empty() {
        return Err(RandeployError::EmptyCatalog);
    }
    let index = rng.gen_range(0..artifacts.len());
    Ok(&artifacts[index])
}

/// Every artifact whose name appears in `names` (case-sensitive).
///
/// Result follows catalog order, not the order of `names`. An empty result
/// is not an error; reporting "no match" is the caller's call.
pub fn pick_by_names<'a, S: AsRef<str>>(
    artifacts: &'a [ArtifactDescriptor],
    names: &[S],
) -> Vec<&'a ArtifactDescriptor> {
    artifacts
        .iter()
        .filter(|artifact| names.iter().any(|n| n.as_ref() == artifact.name()))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::ArtifactKind;
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use std::path::Path;

    fn class(name: &str) -> ArtifactDescriptor {
        let path = format!("classes/{}.cls", name);
        ArtifactDescriptor::from_file(ArtifactKind::ApexClass, Path::new(&path)).unwrap()
    }

    fn trigger(name: &str) -> ArtifactDescriptor {
        let path = format!("triggers/{}.trigger", name);
        ArtifactDescriptor::from_file(ArtifactKind::ApexTrigger, Path::new(&path)).unwrap()
    }

    #[test]
    fn pick_random_on_empty_catalog_fails() {
        let mut rng = StdRng::seed_from_u64(1);
        let err = pick_random(&[], &mut rng).unwrap_err();
        assert!(matches!(err, RandeployError::EmptyCatalog));
    }

    #[test]
    fn pick_random_single_element() {
        let catalog = vec![class("Only")];
        let mut rng = StdRng::seed_from_u64(1);
        for _ in 0..10 {
            assert_eq!(pick_random(&catalog, &mut rng).unwrap().name(), "Only");
        }
    }

    #[test]
    fn pick_random_is_roughly_uniform() {
        let catalog = vec![class("A"), class("B"), trigger("C"), trigger("D")];
        let mut rng = StdRng::seed_from_u64(2024);
        let mut hits = [0usize; 4];
        let trials = 20_000;

        for _ in 0..trials {
            let picked = pick_random(&catalog, &mut rng).unwrap();
            let idx = catalog.iter().position(|a| a == picked).unwrap();
            hits[idx] += 1;
        }

        // Expected 5000 each; allow a generous band.
        for count in hits {
            assert!((4500..=5500).contains(&count), "skewed counts: {:?}", hits);
        }
    }

    #[test]
    fn pick_by_names_follows_catalog_order() {
        let catalog = vec![class("A"), class("B"), class("C")];
        let picked = pick_by_names(&catalog, &["C", "A"]);
        let names: Vec<_> = picked.iter().map(|a| a.name()).collect();
        assert_eq!(names, vec!["A", "C"]);
    }

    #[test]
    fn pick_by_names_is_case_sensitive() {
        let catalog = vec![class("AccountHandler")];
        assert!(pick_by_names(&catalog, &["accounthandler"]).is_empty());
    }

    #[test]
    fn pick_by_names_matches_across_kinds() {
        let catalog = vec![class("Account"), trigger("Account"), class("Other")];
        let picked = pick_by_names(&catalog, &["Account".to_string()]);
        assert_eq!(picked.len(), 2);
        assert_eq!(picked[0].kind(), ArtifactKind::ApexClass);
        assert_eq!(picked[1].kind(), ArtifactKind::ApexTrigger);
    }

    #[test]
    fn pick_by_names_with_no_names_is_empty() {
        let catalog = vec![class("A")];
        let names: [&str; 0] = [];
        assert!(pick_by_names(&catalog, &names).is_empty());
    }

    #[test]
    fn pick_by_names_with_unknown_name_is_empty() {
        let catalog = vec![class("A"), trigger("B")];
        assert!(pick_by_names(&catalog, &["DoesNotExist"]).is_empty());
    }
}
