use std::path::Path;

use crate::config::Config;
use crate::markdown::engine::{create_comrak_options, render_markdown};
use crate::markdown::renderer::syntax::SyntaxHighlighter;
use crate::utils::error::{BuildError, BuildResult};

/// Markdown to HTML converter, configured once per run.
///
/// Holds no per-document state, so one instance is shared by every worker.
pub struct MarkdownRenderer {
    options: comrak::Options<'static>,
    syntax_highlighter: SyntaxHighlighter,
}

impl MarkdownRenderer {
    /// Create a new markdown renderer from config
    pub fn new(config: &Config) -> BuildResult<Self> {
        let syntax_highlighter = SyntaxHighlighter::new(&config.highlight_theme).ok_or_else(|| {
            BuildError::Config(format!("unknown highlight_theme `{}`", config.highlight_theme))
        })?;

        Ok(MarkdownRenderer {
            options: create_comrak_options(),
            syntax_highlighter,
        })
    }

    /// Render the body of the document at `path` to (unsanitized) HTML
    pub fn render(&self, path: &Path, content: &str) -> BuildResult<String> {
        let html = render_markdown(content, &self.options).map_err(|e| BuildError::convert(path, e))?;

        self.syntax_highlighter
            .highlight_html(&html)
            .map_err(|e| BuildError::convert(path, e))
    }

    /// Stylesheet for highlighted code blocks
    pub fn syntax_stylesheet(&self) -> BuildResult<String> {
        self.syntax_highlighter
            .stylesheet()
            .map_err(|e| BuildError::Config(format!("cannot render highlight theme: {}", e)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn renderer() -> MarkdownRenderer {
        MarkdownRenderer::new(&Config::default()).unwrap()
    }

    #[test]
    fn test_markdown_rendering() {
        let html = renderer()
            .render(Path::new("a.md"), "# Hello, World!\n\nThis is a **bold** statement.")
            .unwrap();

        assert!(html.contains("<h1>"));
        assert!(html.contains("<strong>bold</strong>"));
    }

    #[test]
    fn test_syntax_highlighting() {
        let markdown = "```rust\nfn main() {\n    println!(\"Hello, World!\");\n}\n```";
        let html = renderer().render(Path::new("a.md"), markdown).unwrap();

        assert!(html.contains("<div class=\"highlight\">"));
        assert!(html.contains("<pre class=\"highlight rust\">"));
    }

    #[test]
    fn test_conversion_is_order_insensitive() {
        let renderer = renderer();
        let a = "# Shared\n\nText[^n]\n\n[^n]: note";
        let b = "# Shared\n\n## Shared";

        let a_first = renderer.render(Path::new("a.md"), a).unwrap();
        let _ = renderer.render(Path::new("b.md"), b).unwrap();
        let a_again = renderer.render(Path::new("a.md"), a).unwrap();

        assert_eq!(a_first, a_again);
    }

    #[test]
    fn test_unknown_theme_is_config_error() {
        let mut config = Config::default();
        config.highlight_theme = "nope".to_string();
        assert!(MarkdownRenderer::new(&config).is_err());
    }
}
