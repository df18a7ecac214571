// Gradle build script analysis
//
// Everything here operates on build script text that has already been read
// from disk. Block lookup and value extraction are pure functions; file
// discovery is the only part that touches the file system.

pub mod blocks;
pub mod discovery;
pub mod extractor;

pub use blocks::find_block;
pub use discovery::{find_gradle_files, DEFAULT_APP_FOLDER};
pub use extractor::{VersionCodeExtractor, DEFAULT_KEY};
