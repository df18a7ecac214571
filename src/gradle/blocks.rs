//! Named-block extraction from Gradle build script text

use regex::Regex;

/// Returns the interior of the first `name { ... }` block in `source`.
///
/// The block name is matched literally (it is escaped before being compiled
/// into the opener pattern), followed by optional whitespace and `{`. The
/// interior is delimited by counting brace depth, so nested blocks of any
/// depth do not terminate the match early. Returns `None` when the block is
/// absent or its closing brace is missing.
pub fn find_block<'a>(source: &'a str, name: &str) -> Option<&'a str> {
    let opener = Regex::new(&format!(r"{}\s*\{{", regex::escape(name))).ok()?;
    let opened = opener.find(source)?;

    let body_start = opened.end();
    let mut depth = 1usize;

    for (offset, ch) in source[body_start..].char_indices() {
        match ch {
            '{' => depth += 1,
            '}' => {
                depth -= 1;
                if depth == 0 {
                    return Some(&source[body_start..body_start + offset]);
                }
            }
            _ => {}
        }
    }

    // Opening brace without a balanced close
    None
}
