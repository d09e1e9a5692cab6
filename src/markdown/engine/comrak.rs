use comrak::{format_html, parse_document, Arena, Options};

/// Create the comrak options used for every document of a run.
///
/// GitHub flavoured extensions plus footnotes and heading anchors. Heading
/// ids are derived from the heading text with no prefix, so `# Hi` gets the
/// anchor `#hi`.
pub fn create_comrak_options() -> Options<'static> {
    let mut options = Options::default();

    // Extension options - GitHub Flavored Markdown
    options.extension.strikethrough = true;
    options.extension.tagfilter = true;
    options.extension.table = true;
    options.extension.autolink = true;
    options.extension.tasklist = true;
    options.extension.superscript = true;
    options.extension.header_ids = Some(String::new());
    options.extension.footnotes = true;
    options.extension.description_lists = true;

    // Render options
    options.render.hardbreaks = false;
    // `<pre><code class="language-x">`, which the highlighter looks for
    options.render.github_pre_lang = false;
    // Raw HTML is passed through and left to the sanitizer
    options.render.unsafe_ = true;

    options
}

/// Render markdown to HTML using Comrak.
///
/// Each call parses into its own arena, so nothing carries over between
/// documents (footnote numbering and heading ids included).
pub fn render_markdown(content: &str, options: &Options) -> std::io::Result<String> {
    let arena = Arena::new();
    let root = parse_document(&arena, content, options);

    let mut html = Vec::new();
    format_html(root, options, &mut html)?;

    String::from_utf8(html).map_err(|e| std::io::Error::new(std::io::ErrorKind::InvalidData, e))
}
