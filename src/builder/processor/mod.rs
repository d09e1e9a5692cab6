use log::debug;

use crate::builder::page::{build_page, Page, SourceDocument};
use crate::config::Config;
use crate::front_matter::parse_document;
use crate::markdown::{MarkdownRenderer, Sanitizer};
use crate::utils::error::BuildResult;

/// Per-document pipeline: front matter, markdown, sanitizing, page.
///
/// Shared by reference across worker threads; every call is independent.
pub struct DocumentProcessor<'a> {
    config: &'a Config,
    markdown: MarkdownRenderer,
    sanitizer: Sanitizer,
    include_drafts: bool,
}

impl<'a> DocumentProcessor<'a> {
    pub fn new(config: &'a Config, include_drafts: bool) -> BuildResult<Self> {
        Ok(DocumentProcessor {
            config,
            markdown: MarkdownRenderer::new(config)?,
            sanitizer: Sanitizer::new(),
            include_drafts,
        })
    }

    /// Turn one document into a page. Drafts parse fully but yield `None`.
    pub fn process(&self, document: &SourceDocument) -> BuildResult<Option<Page>> {
        let (front_matter, body) = parse_document(&document.path, &document.content)?;

        if front_matter.draft && !self.include_drafts {
            debug!("Skipping draft {}", document.path.display());
            return Ok(None);
        }

        let html = self.markdown.render(&document.path, body)?;
        let content = self.sanitizer.sanitize(&html);

        Ok(Some(build_page(&document.path, front_matter, content, self.config)))
    }

    pub fn markdown(&self) -> &MarkdownRenderer {
        &self.markdown
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn document(name: &str, content: &str) -> SourceDocument {
        SourceDocument {
            path: PathBuf::from("content").join(name),
            content: content.to_string(),
        }
    }

    #[test]
    fn test_round_trip() {
        let config = Config::default();
        let processor = DocumentProcessor::new(&config, false).unwrap();
        let doc = document("Hello.md", "---\ntitle: \"Hello\"\ndate: 2024-01-02\ndraft: false\n---\n# Hi\n");

        let page = processor.process(&doc).unwrap().unwrap();
        assert_eq!(page.title, "Hello");
        assert_eq!(page.date, "2024-01-02");
        assert!(page.content.contains("<h1>"));
        assert!(page.content.contains("id=\"hi\""));
        assert_eq!(page.source_path, PathBuf::from("content/Hello.md"));
    }

    #[test]
    fn test_script_is_removed() {
        let config = Config::default();
        let processor = DocumentProcessor::new(&config, false).unwrap();
        let doc = document(
            "x.md",
            "---\ndate: 2024-01-02\n---\nText\n\n<script>alert('x')</script>\n\n<div onmouseover=\"x()\">hover</div>\n",
        );

        let page = processor.process(&doc).unwrap().unwrap();
        assert!(!page.content.contains("<script"));
        assert!(!page.content.contains("onmouseover"));
        assert!(page.content.contains("Text"));
    }

    #[test]
    fn test_drafts() {
        let config = Config::default();
        let doc = document("wip.md", "---\ndate: 2024-01-02\ndraft: true\n---\nbody");

        let processor = DocumentProcessor::new(&config, false).unwrap();
        assert_eq!(processor.process(&doc).unwrap(), None);

        let processor = DocumentProcessor::new(&config, true).unwrap();
        assert!(processor.process(&doc).unwrap().is_some());
    }

    #[test]
    fn test_broken_draft_still_fails() {
        let config = Config::default();
        let processor = DocumentProcessor::new(&config, false).unwrap();
        let doc = document("wip.md", "---\ndraft: true\n---\nbody");

        let err = processor.process(&doc).unwrap_err();
        assert_eq!(err.kind(), "UnmarshalFrontMatter");
    }
}
