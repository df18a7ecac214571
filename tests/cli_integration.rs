//! End-to-end tests over real project trees
//!
//! Builds temporary Android-style project layouts on disk and runs the full
//! discover-read-extract pipeline the CLI handler uses.

use std::fs;
use std::path::Path;
use tempfile::TempDir;
use vercode::cli::commands::{ExtractArgs, OutputFormatArg};
use vercode::cli::handlers::run_extract;
use vercode::{RealFileSystem, VercodeError};

fn write_file(path: &Path, content: &str) {
    fs::create_dir_all(path.parent().unwrap()).unwrap();
    fs::write(path, content).unwrap();
}

fn args_for_project(root: &Path) -> ExtractArgs {
    ExtractArgs {
        project_path: Some(root.to_path_buf()),
        gradle_file: None,
        app_folder: "app".to_string(),
        key: "versionCode".to_string(),
        flavor: None,
        format: OutputFormatArg::Human,
    }
}

#[test]
fn test_discovers_and_extracts_from_app_folder() {
    let temp = TempDir::new().unwrap();
    write_file(
        &temp.path().join("app/build.gradle"),
        "android {\n    defaultConfig {\n        versionCode 31\n    }\n}\n",
    );
    write_file(
        &temp.path().join("library/build.gradle"),
        "android {\n    defaultConfig {\n        versionCode 99\n    }\n}\n",
    );

    let report = run_extract(&RealFileSystem::new(), &args_for_project(temp.path())).unwrap();

    assert_eq!(report.version_code, "31");
    assert!(report.source_file.unwrap().ends_with("app/build.gradle"));
}

#[test]
fn test_flavor_scoped_end_to_end() {
    let temp = TempDir::new().unwrap();
    write_file(
        &temp.path().join("app/build.gradle"),
        r#"
android {
    productFlavors {
        paid {
            versionCode 20
        }
    }
    defaultConfig {
        versionCode 1
    }
}
"#,
    );

    let mut args = args_for_project(temp.path());
    args.flavor = Some("paid".to_string());

    let report = run_extract(&RealFileSystem::new(), &args).unwrap();
    assert_eq!(report.version_code, "20");
}

#[test]
fn test_later_candidate_overrides_earlier() {
    let temp = TempDir::new().unwrap();
    write_file(
        &temp.path().join("a/app/build.gradle"),
        "defaultConfig {\n    versionCode 1\n}\n",
    );
    write_file(
        &temp.path().join("b/app/build.gradle"),
        "defaultConfig {\n    versionCode 2\n}\n",
    );

    let mut args = args_for_project(temp.path());
    args.flavor = Some("any".to_string());

    let report = run_extract(&RealFileSystem::new(), &args).unwrap();
    assert_eq!(report.version_code, "2");
}

#[test]
fn test_candidate_miss_does_not_erase_earlier_hit() {
    let temp = TempDir::new().unwrap();
    write_file(
        &temp.path().join("a/app/build.gradle"),
        "defaultConfig {\n    versionCode 7\n}\n",
    );
    write_file(&temp.path().join("b/app/build.gradle"), "android { }\n");

    let mut args = args_for_project(temp.path());
    args.flavor = Some("any".to_string());

    let report = run_extract(&RealFileSystem::new(), &args).unwrap();
    assert_eq!(report.version_code, "7");
}

#[test]
fn test_unreadable_candidate_is_skipped() {
    let temp = TempDir::new().unwrap();
    // Not valid UTF-8, so reading it as a string fails
    fs::create_dir_all(temp.path().join("a/app")).unwrap();
    fs::write(temp.path().join("a/app/build.gradle"), [0xFFu8, 0xFE, 0x00]).unwrap();
    write_file(
        &temp.path().join("b/app/build.gradle"),
        "defaultConfig {\n    versionCode 4\n}\n",
    );

    let mut args = args_for_project(temp.path());
    args.flavor = Some("any".to_string());

    let report = run_extract(&RealFileSystem::new(), &args).unwrap();
    assert_eq!(report.version_code, "4");
}

#[test]
fn test_no_candidates_is_not_found_error() {
    let temp = TempDir::new().unwrap();
    write_file(&temp.path().join("library/build.gradle"), "android { }\n");

    let err = run_extract(&RealFileSystem::new(), &args_for_project(temp.path())).unwrap_err();

    match err {
        VercodeError::NoVersionCodeFound { key, app_folder } => {
            assert_eq!(key, "versionCode");
            assert_eq!(app_folder, "app");
        }
        other => panic!("Expected NoVersionCodeFound, got {:?}", other),
    }
}

#[test]
fn test_explicit_gradle_file_skips_discovery() {
    let temp = TempDir::new().unwrap();
    write_file(
        &temp.path().join("scripts/custom.gradle"),
        "defaultConfig {\n    versionCode 55\n}\n",
    );
    write_file(
        &temp.path().join("app/build.gradle"),
        "defaultConfig {\n    versionCode 1\n}\n",
    );

    let mut args = args_for_project(temp.path());
    args.gradle_file = Some(temp.path().join("scripts/custom.gradle"));
    args.flavor = Some("any".to_string());

    let report = run_extract(&RealFileSystem::new(), &args).unwrap();
    assert_eq!(report.version_code, "55");
}

#[test]
fn test_explicit_missing_gradle_file_is_error() {
    let temp = TempDir::new().unwrap();

    let mut args = args_for_project(temp.path());
    args.gradle_file = Some(temp.path().join("nope/build.gradle"));

    let err = run_extract(&RealFileSystem::new(), &args).unwrap_err();
    assert!(matches!(err, VercodeError::GradleFileNotFound { .. }));
}

#[test]
fn test_kotlin_dsl_candidate() {
    let temp = TempDir::new().unwrap();
    write_file(
        &temp.path().join("app/build.gradle.kts"),
        "android {\n    defaultConfig {\n        versionCode = 88\n    }\n}\n",
    );

    let report = run_extract(&RealFileSystem::new(), &args_for_project(temp.path())).unwrap();
    assert_eq!(report.version_code, "88");
}
