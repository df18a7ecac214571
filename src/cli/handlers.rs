//! Command handlers - wire CLI arguments to the extraction core

use crate::cli::commands::ExtractArgs;
use crate::cli::output::{ExtractReport, OutputFormatter};
use crate::error::VercodeError;
use crate::fs::{FileSystem, RealFileSystem};
use crate::gradle::{find_gradle_files, VersionCodeExtractor};
use std::path::PathBuf;
use tracing::{debug, error, warn};

/// Handles `vercode extract`. Returns the process exit code.
pub fn handle_extract(args: &ExtractArgs) -> i32 {
    let fs = RealFileSystem::new();

    match run_extract(&fs, args) {
        Ok(report) => {
            let formatter = OutputFormatter::new(args.format.into());
            match formatter.format(&report) {
                Ok(output) => {
                    println!("{}", output);
                    0
                }
                Err(err) => {
                    error!(error = %err, "failed to format output");
                    1
                }
            }
        }
        Err(err) => {
            error!("{}", err);
            eprintln!("Error: {}", err);
            1
        }
    }
}

/// Runs extraction over every candidate build script.
///
/// Candidates are read in discovery order and each hit overrides the
/// previous one, so the last candidate that yields a value wins. A read
/// failure skips that candidate only.
pub fn run_extract<F: FileSystem>(
    fs: &F,
    args: &ExtractArgs,
) -> Result<ExtractReport, VercodeError> {
    let extractor = VersionCodeExtractor::new(&args.key);
    let flavor = args.flavor.as_deref();

    let mut found: Option<(String, PathBuf)> = None;
    for path in candidate_files(fs, args)? {
        let content = match fs.read_to_string(&path) {
            Ok(content) => content,
            Err(err) => {
                warn!(path = %path.display(), error = %err, "skipping unreadable build script");
                continue;
            }
        };

        if let Some(value) = extractor.extract(&content, flavor) {
            found = Some((value, path));
        }
    }

    match found {
        Some((version_code, source_file)) => Ok(ExtractReport {
            version_code,
            key: args.key.clone(),
            flavor: args.flavor.clone(),
            source_file: Some(source_file),
        }),
        None => Err(VercodeError::NoVersionCodeFound {
            key: args.key.clone(),
            app_folder: args.app_folder.clone(),
        }),
    }
}

fn candidate_files<F: FileSystem>(
    fs: &F,
    args: &ExtractArgs,
) -> Result<Vec<PathBuf>, VercodeError> {
    if let Some(path) = &args.gradle_file {
        if !fs.is_file(path) {
            return Err(VercodeError::GradleFileNotFound { path: path.clone() });
        }
        debug!(path = %path.display(), "using explicit gradle file");
        return Ok(vec![path.clone()]);
    }

    let root = args
        .project_path
        .clone()
        .unwrap_or_else(|| PathBuf::from("."));
    let candidates = find_gradle_files(&root, &args.app_folder);
    debug!(
        count = candidates.len(),
        folder = %args.app_folder,
        "discovered candidate build scripts"
    );
    Ok(candidates)
}
