mod model;
mod collector;
mod utils;

pub use model::{Page, DISPLAY_DATE_FORMAT};
pub use collector::{collect_documents, SourceDocument};
pub use utils::{derive_slug, determine_output_path};

use std::path::Path;

use crate::config::Config;
use crate::front_matter::FrontMatter;

/// Assemble a page from its parsed metadata and sanitized HTML
pub fn build_page(source_path: &Path, front_matter: FrontMatter, content: String, config: &Config) -> Page {
    let slug = derive_slug(source_path, &config.markdown_ext);
    let output_path = determine_output_path(&config.destination, &slug);

    Page {
        title: front_matter.title,
        description: front_matter.description,
        date: front_matter.date.format(DISPLAY_DATE_FORMAT).to_string(),
        raw_date: front_matter.date,
        content,
        slug,
        output_path,
        source_path: source_path.to_path_buf(),
        layout: front_matter.layout,
    }
}
