use std::time::Instant;

use log::{debug, info};
use rayon::prelude::*;

use crate::assets::{copy_static_assets, write_syntax_stylesheet};
use crate::builder::page::{collect_documents, Page};
use crate::builder::processor::DocumentProcessor;
use crate::builder::site::collection::assemble_collection;
use crate::config::Config;
use crate::layout::SiteRenderer;
use crate::template::LiquidTemplates;
use crate::utils::error::{BuildError, BuildResult};
use crate::utils::fs::{create_directory, write_file};

/// Switches for a single run
#[derive(Debug, Clone, Default)]
pub struct BuildOptions {
    /// Publish documents marked `draft: true`
    pub include_drafts: bool,
    /// Run the whole pipeline but write nothing
    pub dry_run: bool,
}

/// Summary of a finished run
#[derive(Debug, Clone, Default, PartialEq)]
pub struct BuildStats {
    pub documents: usize,
    pub published: usize,
    pub drafts_skipped: usize,
    pub files_written: usize,
    pub static_files: usize,
}

/// Build the site.
///
/// Every document is parsed, converted and rendered in memory before the
/// first file is written, so a content or template error leaves the
/// destination untouched. The first error aborts the run.
pub fn build_site(config: &Config, options: &BuildOptions) -> BuildResult<BuildStats> {
    let start_time = Instant::now();
    let mut stats = BuildStats::default();

    info!("Loading templates from {}", config.templates_path().display());
    let templates = LiquidTemplates::load(&config.templates_path())?;
    debug!("Loaded {} templates", templates.len());
    for name in [&config.page_template, &config.index_template] {
        if !templates.contains(name) {
            return Err(BuildError::template(name.as_str(), "template not found"));
        }
    }

    let processor = DocumentProcessor::new(config, options.include_drafts)?;

    let content_root = config.content_path();
    info!("Reading content from {}", content_root.display());
    let documents = collect_documents(&content_root, &config.markdown_ext)?;
    stats.documents = documents.len();

    // Order of completion does not matter: results keep the input order and
    // the collection imposes its own total order anyway.
    let processed = documents
        .par_iter()
        .map(|document| processor.process(document))
        .collect::<BuildResult<Vec<Option<Page>>>>()?;

    let pages: Vec<Page> = processed.into_iter().flatten().collect();
    stats.published = pages.len();
    stats.drafts_skipped = stats.documents - stats.published;

    let pages = assemble_collection(pages)?;

    info!("Rendering {} pages...", pages.len());
    let renderer = SiteRenderer::new(&templates, config);
    let files = renderer.render_site(&pages)?;
    let stylesheet = processor.markdown().syntax_stylesheet()?;

    if options.dry_run {
        info!("Check finished in {:?}, nothing written", start_time.elapsed());
        return Ok(stats);
    }

    create_directory(&config.destination)?;
    for file in &files {
        debug!("Writing {}", file.path.display());
        write_file(&file.path, &file.contents)?;
    }
    stats.files_written = files.len();

    write_syntax_stylesheet(&config.destination, &stylesheet)?;

    info!("Copying static files...");
    stats.static_files = copy_static_assets(&config.public_path(), &config.destination)?;
    info!("Copied {} static files", stats.static_files);

    info!(
        "Built {} pages ({} drafts skipped) in {:?}",
        stats.published,
        stats.drafts_skipped,
        start_time.elapsed()
    );

    Ok(stats)
}
