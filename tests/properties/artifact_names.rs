//! Property tests for building descriptors from file names.

use std::path::{Path, PathBuf};

use proptest::prelude::*;

use randeploy::{ArtifactDescriptor, ArtifactKind};

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 128,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: descriptor construction never panics on arbitrary file names.
    #[test]
    fn property_from_file_never_panics(name in "(?s).{0,64}") {
        let path = Path::new("classes").join(&name);
        let _ = ArtifactDescriptor::from_file(ArtifactKind::ApexClass, &path);
        let _ = ArtifactDescriptor::from_file(ArtifactKind::ApexTrigger, &path);
    }

    /// PROPERTY: a class file yields its stem as name and a sibling meta path.
    #[test]
    fn property_class_file_names(stem in "[A-Za-z][A-Za-z0-9_]{0,20}") {
        let path = PathBuf::from(format!("classes/{}.cls", stem));
        let artifact = ArtifactDescriptor::from_file(ArtifactKind::ApexClass, &path).unwrap();

        prop_assert_eq!(artifact.name(), stem.as_str());
        prop_assert_eq!(artifact.path(), path.as_path());
        let expected_meta = PathBuf::from(format!("classes/{}.cls-meta.xml", stem));
        prop_assert_eq!(artifact.meta_path(), Some(expected_meta.as_path()));
    }

    /// PROPERTY: metadata sidecars are never artifacts.
    #[test]
    fn property_meta_files_are_rejected(stem in "[A-Za-z][A-Za-z0-9_]{0,20}") {
        let class_meta = PathBuf::from(format!("classes/{}.cls-meta.xml", stem));
        let trigger_meta = PathBuf::from(format!("triggers/{}.trigger-meta.xml", stem));

        prop_assert!(ArtifactDescriptor::from_file(ArtifactKind::ApexClass, &class_meta).is_none());
        prop_assert!(ArtifactDescriptor::from_file(ArtifactKind::ApexTrigger, &trigger_meta).is_none());
    }
}
