use std::path::Path;

use log::debug;

use crate::front_matter::types::FrontMatter;
use crate::utils::error::{BuildError, BuildResult};

/// Delimiter line around the metadata block
const DELIMITER: &str = "---";

/// Split a raw document into its metadata and body segments.
///
/// The document must open with a `---` line (blank lines before it are
/// allowed) and the metadata block ends at the next `---` line. Anything after
/// that, further `---` lines included, is body.
pub fn split_document(content: &str) -> Result<(&str, &str), &'static str> {
    let content = content.strip_prefix('\u{feff}').unwrap_or(content);

    let mut offset = 0;
    let mut metadata_start = None;

    for line in content.split_inclusive('\n') {
        let end = offset + line.len();
        let text = line.trim_end();

        if text == DELIMITER {
            match metadata_start {
                None => metadata_start = Some(end),
                Some(start) => return Ok((&content[start..offset], &content[end..])),
            }
        } else if metadata_start.is_none() && !text.is_empty() {
            return Err("document must start with a `---` line");
        }

        offset = end;
    }

    match metadata_start {
        None => Err("missing opening `---` delimiter"),
        Some(_) => Err("missing closing `---` delimiter"),
    }
}

/// Parse the front matter of a document and return it with the body
pub fn parse_document<'a>(path: &Path, content: &'a str) -> BuildResult<(FrontMatter, &'a str)> {
    let (metadata, body) =
        split_document(content).map_err(|reason| BuildError::invalid_front_matter(path, reason))?;

    let front_matter: FrontMatter =
        serde_yaml::from_str(metadata).map_err(|source| BuildError::UnmarshalFrontMatter {
            path: path.to_path_buf(),
            source,
        })?;

    debug!("Parsed front matter of {}: {:?}", path.display(), front_matter.title);
    Ok((front_matter, body))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn path() -> &'static Path {
        Path::new("content/test.md")
    }

    #[test]
    fn test_parse_front_matter() {
        let content = "---\ntitle: Hello\ndate: 2024-01-02\ndescription: First\n---\n# Hi\n";
        let (fm, body) = parse_document(path(), content).unwrap();

        assert_eq!(fm.title, "Hello");
        assert_eq!(fm.description, "First");
        assert_eq!(fm.date.format("%Y-%m-%d").to_string(), "2024-01-02");
        assert!(!fm.draft);
        assert_eq!(fm.layout, None);
        assert_eq!(body, "# Hi\n");
    }

    #[test]
    fn test_draft_and_layout() {
        let content = "---\ntitle: WIP\ndate: 2024-01-02\ndraft: true\nlayout: wide\n---\nbody";
        let (fm, _) = parse_document(path(), content).unwrap();
        assert!(fm.draft);
        assert_eq!(fm.layout.as_deref(), Some("wide"));
    }

    #[test]
    fn test_body_keeps_horizontal_rules() {
        let content = "---\ndate: 2024-01-02\n---\nabove\n\n---\n\nbelow\n";
        let (_, body) = parse_document(path(), content).unwrap();
        assert_eq!(body, "above\n\n---\n\nbelow\n");
    }

    #[test]
    fn test_crlf_and_leading_blank_lines() {
        let content = "\r\n---\r\ndate: 2024-01-02\r\n---\r\nbody";
        let (fm, body) = parse_document(path(), content).unwrap();
        assert_eq!(fm.title, "");
        assert_eq!(body, "body");
    }

    #[test]
    fn test_missing_closing_delimiter() {
        let content = "---\ntitle: Hello\ndate: 2024-01-02\n# Hi\n";
        let err = parse_document(path(), content).unwrap_err();
        assert_eq!(err.kind(), "InvalidFrontMatter");
        assert!(err.to_string().contains("content/test.md"));
    }

    #[test]
    fn test_missing_front_matter() {
        let err = parse_document(path(), "# Just markdown\n").unwrap_err();
        assert_eq!(err.kind(), "InvalidFrontMatter");
    }

    #[test]
    fn test_missing_date_is_unmarshal_error() {
        let err = parse_document(path(), "---\ntitle: Hello\n---\nbody").unwrap_err();
        assert_eq!(err.kind(), "UnmarshalFrontMatter");
    }

    #[test]
    fn test_malformed_yaml_is_unmarshal_error() {
        let err = parse_document(path(), "---\ntitle: [oops\ndate: 2024-01-02\n---\n").unwrap_err();
        assert_eq!(err.kind(), "UnmarshalFrontMatter");

        let err = parse_document(path(), "---\ndate: 2024-01-02\ndraft: maybe\n---\n").unwrap_err();
        assert_eq!(err.kind(), "UnmarshalFrontMatter");
    }

    #[test]
    fn test_empty_metadata_block() {
        let err = parse_document(path(), "---\n---\nbody").unwrap_err();
        assert_eq!(err.kind(), "UnmarshalFrontMatter");
    }
}
