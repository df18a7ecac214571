//! vercode - version code extraction from Gradle build scripts
//!
//! This library reads the integer "version code" of an Android project out
//! of its Gradle build script text. Lookup is layered: a product-flavor
//! block inside `productFlavors` wins over `defaultConfig`, which wins over
//! a plain whole-file line scan.
//!
//! # Core Concepts
//!
//! - **Block extraction**: `name { ... }` regions are located by name and
//!   delimited with a brace-depth scanner, so nesting of any depth is safe
//! - **Layered lookup**: each scope is searched for the first
//!   `<key> <digits>` match before falling back to the next wider scope
//! - **Discovery**: candidate `build.gradle`/`build.gradle.kts` files are
//!   found by walking the project tree for a named application folder
//!
//! # Example Usage
//!
//! ```
//! use vercode::VersionCodeExtractor;
//!
//! let script = r#"
//! android {
//!     defaultConfig {
//!         versionCode 42
//!     }
//! }
//! "#;
//!
//! let extractor = VersionCodeExtractor::default();
//! assert_eq!(extractor.extract(script, Some("paid")), Some("42".to_string()));
//! ```

// Public modules
pub mod cli;
pub mod error;
pub mod fs;
pub mod gradle;

// Re-export key types for convenient access
pub use error::VercodeError;
pub use fs::{FileSystem, MockFileSystem, RealFileSystem};
pub use gradle::{find_block, find_gradle_files, VersionCodeExtractor};
pub use gradle::{DEFAULT_APP_FOLDER, DEFAULT_KEY};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Library name
pub const NAME: &str = env!("CARGO_PKG_NAME");
