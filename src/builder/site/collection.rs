use std::collections::HashMap;
use std::path::PathBuf;

use log::debug;

use crate::builder::page::Page;
use crate::layout::INDEX_FILE;
use crate::utils::error::{BuildError, BuildResult};

/// Slug whose output file is the listing page
fn index_slug() -> &'static str {
    INDEX_FILE.trim_end_matches(".html")
}

/// Order published pages newest first.
///
/// Equal dates fall back to source path order so the output is the same on
/// every platform. Two pages with the same slug would overwrite each other's
/// output file, so that is rejected, as is a page that would be overwritten
/// by the index.
pub fn assemble_collection(mut pages: Vec<Page>) -> BuildResult<Vec<Page>> {
    pages.sort_by(|a, b| {
        b.raw_date
            .cmp(&a.raw_date)
            .then_with(|| a.source_path.cmp(&b.source_path))
    });

    {
        let mut seen: HashMap<&str, &Page> = HashMap::with_capacity(pages.len());
        for page in &pages {
            if page.slug == index_slug() {
                return Err(BuildError::DuplicateSlug {
                    slug: page.slug.clone(),
                    first: PathBuf::from(INDEX_FILE),
                    second: page.source_path.clone(),
                });
            }
            if let Some(first) = seen.insert(page.slug.as_str(), page) {
                return Err(BuildError::DuplicateSlug {
                    slug: page.slug.clone(),
                    first: first.source_path.clone(),
                    second: page.source_path.clone(),
                });
            }
        }
    }

    debug!("Assembled collection of {} pages", pages.len());
    Ok(pages)
}
