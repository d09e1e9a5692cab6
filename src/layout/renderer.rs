use std::path::PathBuf;

use liquid::model::Value;
use liquid::Object;
use log::debug;

use crate::builder::page::Page;
use crate::builder::site::{page_to_liquid, site_to_liquid};
use crate::config::Config;
use crate::template::TemplateStore;
use crate::utils::error::BuildResult;

/// File name of the listing page in the destination
pub const INDEX_FILE: &str = "index.html";

/// A rendered output file, not yet written
#[derive(Debug, Clone, PartialEq)]
pub struct RenderedFile {
    pub path: PathBuf,
    pub contents: String,
}

/// Binds pages and site configuration to templates.
///
/// Pages render with `{ page, site }`, the index with `{ site, posts }`.
pub struct SiteRenderer<'a, T: TemplateStore> {
    templates: &'a T,
    config: &'a Config,
    site: Value,
}

impl<'a, T: TemplateStore> SiteRenderer<'a, T> {
    pub fn new(templates: &'a T, config: &'a Config) -> Self {
        SiteRenderer {
            templates,
            config,
            site: site_to_liquid(&config.site),
        }
    }

    /// Template used for `page`: `<layout>.html` when set, else the default
    pub fn template_for(&self, page: &Page) -> String {
        match &page.layout {
            Some(layout) => format!("{}.html", layout),
            None => self.config.page_template.clone(),
        }
    }

    /// Render a single page
    pub fn render_page(&self, page: &Page) -> BuildResult<String> {
        let template = self.template_for(page);
        debug!("Rendering {} with {}", page.source_path.display(), template);

        let mut globals = Object::new();
        globals.insert("page".into(), page_to_liquid(page));
        globals.insert("site".into(), self.site.clone());

        self.templates.render(&template, &globals)
    }

    /// Render the listing of all pages, in the order given
    pub fn render_index(&self, pages: &[Page]) -> BuildResult<String> {
        let posts = pages.iter().map(page_to_liquid).collect::<Vec<_>>();

        let mut globals = Object::new();
        globals.insert("site".into(), self.site.clone());
        globals.insert("posts".into(), Value::Array(posts));

        self.templates.render(&self.config.index_template, &globals)
    }

    /// Render every page plus the index. Fails on the first template error.
    pub fn render_site(&self, pages: &[Page]) -> BuildResult<Vec<RenderedFile>> {
        let mut files = Vec::with_capacity(pages.len() + 1);

        for page in pages {
            files.push(RenderedFile {
                path: page.output_path.clone(),
                contents: self.render_page(page)?,
            });
        }

        files.push(RenderedFile {
            path: self.config.destination.join(INDEX_FILE),
            contents: self.render_index(pages)?,
        });

        Ok(files)
    }
}
