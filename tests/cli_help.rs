mod common;

use common::*;

#[test]
fn help_lists_mode_flags() {
    let env = TestEnv::builder().without_config().build();
    let result = env.run(&["--help"]);

    assert_eq!(result.exit_code, 0);
    assert!(result.stdout.contains("--once"));
    assert!(result.stdout.contains("--continuous"));
    assert!(result.stdout.contains("--components"));
    assert!(result.stdout.contains("--dry-run"));
}

#[test]
fn short_help_flag_works() {
    let env = TestEnv::builder().without_config().build();
    let result = env.run(&["-h"]);

    assert_eq!(result.exit_code, 0);
    assert!(result.stdout.contains("Usage"));
}

#[test]
fn version_prints_package_version() {
    let env = TestEnv::builder().without_config().build();
    let result = env.run(&["--version"]);

    assert_eq!(result.exit_code, 0);
    assert!(result.stdout.contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn conflicting_modes_are_usage_errors() {
    let env = TestEnv::builder().without_config().build();
    let result = env.run(&["--once", "--continuous"]);

    assert_eq!(result.exit_code, 2);
    assert!(result.stderr.contains("cannot be used with"));
}

#[test]
fn unknown_flag_is_usage_error() {
    let env = TestEnv::builder().without_config().build();
    let result = env.run(&["--sometimes"]);

    assert_eq!(result.exit_code, 2);
}
