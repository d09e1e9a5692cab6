use lazy_static::lazy_static;
use regex::Regex;
use syntect::highlighting::{Theme, ThemeSet};
use syntect::html::{css_for_theme_with_class_style, ClassStyle, ClassedHTMLGenerator};
use syntect::parsing::SyntaxSet;
use syntect::util::LinesWithEndings;

lazy_static! {
    // Fenced code blocks as comrak emits them; code text is entity-escaped
    static ref CODE_BLOCK_REGEX: Regex =
        Regex::new(r#"<pre><code class="language-([^"]+)">([^<]*)</code></pre>"#).unwrap();
}

/// Class style shared by the generated markup and its stylesheet
const CLASS_STYLE: ClassStyle = ClassStyle::Spaced;

/// Component for syntax highlighting code blocks in HTML.
///
/// Highlighting emits CSS classes rather than inline styles so the markup
/// survives sanitizing; [`SyntaxHighlighter::stylesheet`] renders the theme.
pub struct SyntaxHighlighter {
    syntax_set: SyntaxSet,
    theme: Theme,
}

impl SyntaxHighlighter {
    /// Create a highlighter for one of syntect's bundled themes
    pub fn new(theme_name: &str) -> Option<Self> {
        let mut theme_set = ThemeSet::load_defaults();
        let theme = theme_set.themes.remove(theme_name)?;

        Some(SyntaxHighlighter {
            syntax_set: SyntaxSet::load_defaults_newlines(),
            theme,
        })
    }

    /// Process HTML content to add syntax highlighting to fenced code blocks
    pub fn highlight_html(&self, html: &str) -> Result<String, syntect::Error> {
        let mut output = String::with_capacity(html.len());
        let mut last = 0;

        for caps in CODE_BLOCK_REGEX.captures_iter(html) {
            let Some(block) = caps.get(0) else { continue };
            let lang = html_escape::decode_html_entities(&caps[1]);
            let code = html_escape::decode_html_entities(&caps[2]);

            output.push_str(&html[last..block.start()]);
            output.push_str(&self.highlight_code(&code, &lang)?);
            last = block.end();
        }

        output.push_str(&html[last..]);
        Ok(output)
    }

    /// Highlight a specific code block with specified language
    pub fn highlight_code(&self, code: &str, lang: &str) -> Result<String, syntect::Error> {
        // Unknown languages still get the wrapper, as plain text
        let syntax = self
            .syntax_set
            .find_syntax_by_token(lang)
            .unwrap_or_else(|| self.syntax_set.find_syntax_plain_text());

        let mut html_generator =
            ClassedHTMLGenerator::new_with_class_style(syntax, &self.syntax_set, CLASS_STYLE);

        for line in LinesWithEndings::from(code) {
            html_generator.parse_html_for_line_which_includes_newline(line)?;
        }

        Ok(format!(
            "<div class=\"highlight\"><pre class=\"highlight {}\"><code>{}</code></pre></div>",
            html_escape::encode_double_quoted_attribute(lang),
            html_generator.finalize()
        ))
    }

    /// CSS for the configured theme, matching the emitted classes
    pub fn stylesheet(&self) -> Result<String, syntect::Error> {
        css_for_theme_with_class_style(&self.theme, CLASS_STYLE)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn highlighter() -> SyntaxHighlighter {
        SyntaxHighlighter::new("InspiredGitHub").unwrap()
    }

    #[test]
    fn test_unknown_theme() {
        assert!(SyntaxHighlighter::new("no-such-theme").is_none());
    }

    #[test]
    fn test_syntax_highlighting() {
        let code = "fn main() {\n    println!(\"Hello, World!\");\n}";
        let html = highlighter().highlight_code(code, "rust").unwrap();

        assert!(html.contains("<div class=\"highlight\">"));
        assert!(html.contains("<pre class=\"highlight rust\">"));
        assert!(html.contains("<span class=\""));
    }

    #[test]
    fn test_html_processing() {
        let html = "<p>before</p>\n<pre><code class=\"language-rust\">fn main() {\n    let a = 1 &lt; 2;\n}\n</code></pre>\n<p>after</p>";
        let processed = highlighter().highlight_html(html).unwrap();

        assert!(processed.starts_with("<p>before</p>"));
        assert!(processed.ends_with("<p>after</p>"));
        assert!(processed.contains("<pre class=\"highlight rust\">"));
        assert!(!processed.contains("language-rust"));
    }

    #[test]
    fn test_language_escaped_once() {
        let html = "<pre><code class=\"language-c&amp;d\">x\n</code></pre>";
        let processed = highlighter().highlight_html(html).unwrap();

        assert!(processed.contains("<pre class=\"highlight c&amp;d\">"));
        assert!(!processed.contains("&amp;amp;"));
    }

    #[test]
    fn test_plain_blocks_untouched() {
        let html = "<pre><code>plain\n</code></pre>";
        assert_eq!(highlighter().highlight_html(html).unwrap(), html);
    }

    #[test]
    fn test_stylesheet() {
        let css = highlighter().stylesheet().unwrap();
        assert!(css.contains("color"));
    }
}
