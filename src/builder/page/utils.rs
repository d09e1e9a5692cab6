use std::path::{Path, PathBuf};

use crate::utils::path::file_name;

/// Derive the slug of a content file: base name without the markdown
/// extension, lowercased, spaces replaced by hyphens.
pub fn derive_slug(path: &Path, markdown_ext: &str) -> String {
    let name = file_name(path);
    let suffix = format!(".{}", markdown_ext);
    let stem = name.strip_suffix(&suffix).unwrap_or(&name);

    stem.to_lowercase().replace(' ', "-")
}

/// Output file of a page: `<destination>/<slug>.html`
pub fn determine_output_path(destination: &Path, slug: &str) -> PathBuf {
    destination.join(format!("{}.html", slug))
}
