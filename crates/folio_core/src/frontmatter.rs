//! Splitting markdown files into YAML frontmatter and body.
//!
//! A file with frontmatter starts with a `---` line and the YAML block runs
//! until the next line that is exactly `---`.

use serde::de::DeserializeOwned;

/// A markdown file split into typed frontmatter and its body.
#[derive(Debug, Clone, PartialEq)]
pub struct ParsedFile<T> {
    /// Deserialized frontmatter
    pub frontmatter: T,
    /// Everything after the closing delimiter
    pub body: String,
}

/// Split `content` into the raw YAML block and the body.
///
/// Returns `None` when the file does not open with a `---` line or the block
/// is never closed.
pub fn split(content: &str) -> Option<(&str, &str)> {
    let content = content.strip_prefix('\u{feff}').unwrap_or(content);
    let rest = content
        .strip_prefix("---\n")
        .or_else(|| content.strip_prefix("---\r\n"))?;

    let mut offset = 0;
    for line in rest.split_inclusive('\n') {
        if line.trim_end() == "---" {
            return Some((&rest[..offset], &rest[offset + line.len()..]));
        }
        offset += line.len();
    }
    None
}

/// Parse the frontmatter of `content` into `T`.
///
/// `Ok(None)` means the file has no frontmatter block at all; a block that
/// fails to deserialize is an error.
pub fn parse<T: DeserializeOwned>(content: &str) -> Result<Option<ParsedFile<T>>, serde_yaml::Error> {
    let Some((yaml, body)) = split(content) else {
        return Ok(None);
    };

    let frontmatter = serde_yaml::from_str(yaml)?;
    Ok(Some(ParsedFile {
        frontmatter,
        body: body.to_string(),
    }))
}
