//! Version code extractor - layered lookup over one build script's text

use super::blocks::find_block;
use regex::Regex;
use tracing::debug;

/// Default constant name holding the version code in a Gradle build script.
pub const DEFAULT_KEY: &str = "versionCode";

/// Extracts a version code value from Gradle build script text.
///
/// Lookup runs through progressively wider scopes:
/// 1. the requested flavor's block inside `productFlavors` (if a flavor was
///    requested),
/// 2. the `defaultConfig` block,
/// 3. a whole-file line scan, which is also the only path taken when no
///    flavor was requested.
///
/// The first match within a scope wins. A miss at every stage yields `None`;
/// there is no sentinel value.
pub struct VersionCodeExtractor {
    key: String,
    value_pattern: Regex,
}

impl VersionCodeExtractor {
    /// Builds an extractor for the given constant name. The name is escaped
    /// before being compiled into the value pattern, so names containing
    /// regex metacharacters match literally.
    pub fn new(key: &str) -> Self {
        let value_pattern = Regex::new(&format!(r"{}\s+(\d+)", regex::escape(key)))
            .expect("escaped key always compiles");

        Self {
            key: key.to_string(),
            value_pattern,
        }
    }

    /// Runs the layered lookup over `content`.
    pub fn extract(&self, content: &str, flavor: Option<&str>) -> Option<String> {
        if let Some(flavor) = flavor.filter(|f| !f.is_empty()) {
            debug!(flavor, key = %self.key, "looking for version code in product flavor");

            if let Some(value) = self.search_flavor(content, flavor) {
                debug!(flavor, value = %value, "found version code in flavor block");
                return Some(value);
            }

            debug!("falling back to defaultConfig");
            if let Some(value) = self.search_default_config(content) {
                debug!(value = %value, "found version code in defaultConfig");
                return Some(value);
            }
        }

        let value = self.scan_lines(content);
        match &value {
            Some(v) => debug!(value = %v, "found version code by line scan"),
            None => debug!(key = %self.key, "no version code found in file"),
        }
        value
    }

    fn search_flavor(&self, content: &str, flavor: &str) -> Option<String> {
        let flavors = match find_block(content, "productFlavors") {
            Some(body) => body,
            None => {
                debug!("no productFlavors block in build script");
                return None;
            }
        };

        let flavor_body = match find_block(flavors, flavor) {
            Some(body) => body,
            None => {
                debug!(flavor, "flavor block not found in productFlavors");
                return None;
            }
        };

        self.capture_value(flavor_body)
    }

    fn search_default_config(&self, content: &str) -> Option<String> {
        match find_block(content, "defaultConfig") {
            Some(body) => self.capture_value(body),
            None => {
                debug!("no defaultConfig block in build script");
                None
            }
        }
    }

    fn capture_value(&self, scope: &str) -> Option<String> {
        self.value_pattern
            .captures(scope)
            .map(|caps| caps[1].to_string())
    }

    // Legacy whole-file scan: first line containing the key, last whitespace
    // token of that line, surrounding double quotes stripped. The token is
    // returned verbatim and is not validated as numeric, which is what lets
    // `ext.versionCode = "42"` style lines resolve.
    fn scan_lines(&self, content: &str) -> Option<String> {
        for line in content.lines() {
            if line.contains(&self.key) {
                let token = line.split_whitespace().last()?;
                return Some(token.trim_matches('"').to_string());
            }
        }
        None
    }
}

impl Default for VersionCodeExtractor {
    fn default() -> Self {
        Self::new(DEFAULT_KEY)
    }
}
