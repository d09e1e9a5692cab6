use liquid::model::Value;
use liquid::Object;

use crate::builder::page::Page;
use crate::config::SiteConfig;

/// Plain text as a Liquid scalar, escaped for both element and quoted
/// attribute context. Liquid does not escape on output.
fn text(value: &str) -> Value {
    Value::scalar(html_escape::encode_quoted_attribute(value).into_owned())
}

/// Convert a page to a Liquid value for template rendering.
///
/// Every field is escaped except `content`, which is already sanitized HTML,
/// and `raw_date`, which feeds the `format_date` filter.
pub fn page_to_liquid(page: &Page) -> Value {
    let mut obj = Object::new();

    obj.insert("title".into(), text(&page.title));
    obj.insert("description".into(), text(&page.description));
    obj.insert("date".into(), text(&page.date));
    // RFC 3339, for the `format_date` filter
    obj.insert("raw_date".into(), Value::scalar(page.raw_date.to_rfc3339()));
    obj.insert("content".into(), Value::scalar(page.content.clone()));
    obj.insert("slug".into(), text(&page.slug));
    obj.insert("url".into(), text(&format!("{}.html", page.slug)));
    obj.insert("source_path".into(), text(&page.source_path.to_string_lossy()));
    obj.insert("output_path".into(), text(&page.output_path.to_string_lossy()));

    if let Some(layout) = &page.layout {
        obj.insert("layout".into(), text(layout));
    }

    Value::Object(obj)
}

/// Convert the site configuration to the `site` object
pub fn site_to_liquid(site: &SiteConfig) -> Value {
    let mut obj = Object::new();

    obj.insert("title".into(), text(&site.title));
    obj.insert("name".into(), text(&site.name));
    obj.insert("author".into(), text(&site.author));
    obj.insert("description".into(), text(&site.description));
    obj.insert("year".into(), Value::scalar(i64::from(site.year)));

    Value::Object(obj)
}
