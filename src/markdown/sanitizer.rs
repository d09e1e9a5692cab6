use ammonia::Builder;

/// Tags the converter emits on top of ammonia's defaults
const EXTRA_TAGS: [&str; 2] = ["section", "input"];

/// Tags that may carry a `class`, for highlighting, heading anchors and footnotes
const CLASSED_TAGS: [&str; 7] = ["a", "code", "div", "pre", "section", "span", "sup"];

/// HTML sanitizer with a user-generated-content policy.
///
/// Keeps formatting, links, images, tables, code blocks and the `id`/`class`
/// attributes the converter relies on; drops scripts, event handlers, styles
/// and `javascript:` URLs. Cleaning cannot fail.
pub struct Sanitizer {
    policy: Builder<'static>,
}

impl Sanitizer {
    pub fn new() -> Self {
        let mut policy = Builder::default();

        policy
            .add_tags(EXTRA_TAGS)
            .add_generic_attributes(["id"])
            .add_tag_attributes("input", ["type", "checked", "disabled"]);

        for tag in CLASSED_TAGS {
            policy.add_tag_attributes(tag, ["class"]);
        }

        Sanitizer { policy }
    }

    /// Sanitize converted HTML. Idempotent: cleaning clean output is a no-op.
    pub fn sanitize(&self, html: &str) -> String {
        self.policy.clean(html).to_string()
    }
}

impl Default for Sanitizer {
    fn default() -> Self {
        Self::new()
    }
}
