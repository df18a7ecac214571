//! Candidate build script discovery

use ignore::WalkBuilder;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

/// Default name of the application module folder in an Android project.
pub const DEFAULT_APP_FOLDER: &str = "app";

const GRADLE_FILE_NAMES: &[&str] = &["build.gradle", "build.gradle.kts"];

/// Walks `root` and collects build scripts that live directly inside a
/// folder named `app_folder`, at any depth. Respects `.gitignore`. Results
/// are sorted so candidate order is deterministic.
pub fn find_gradle_files(root: &Path, app_folder: &str) -> Vec<PathBuf> {
    let mut found = Vec::new();

    for result in WalkBuilder::new(root)
        .hidden(false)
        .git_ignore(true)
        .build()
    {
        let entry = match result {
            Ok(entry) => entry,
            Err(err) => {
                warn!(error = %err, "failed to read directory entry");
                continue;
            }
        };

        if !entry.file_type().map(|t| t.is_file()).unwrap_or(false) {
            continue;
        }

        let path = entry.path();
        let name = match path.file_name().and_then(|n| n.to_str()) {
            Some(name) => name,
            None => continue,
        };
        if !GRADLE_FILE_NAMES.contains(&name) {
            continue;
        }

        let in_app_folder = path
            .parent()
            .and_then(|p| p.file_name())
            .and_then(|n| n.to_str())
            .map(|n| n == app_folder)
            .unwrap_or(false);

        if in_app_folder {
            debug!(path = %path.display(), "found candidate build script");
            found.push(path.to_path_buf());
        }
    }

    found.sort();
    found
}
