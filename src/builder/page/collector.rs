use std::io;
use std::path::{Path, PathBuf};

use log::debug;
use walkdir::WalkDir;

use crate::utils::error::{BuildError, BuildResult};
use crate::utils::fs::read_file;
use crate::utils::path::has_extension;

/// Raw content file, consumed right away by the front matter parser
#[derive(Debug, Clone)]
pub struct SourceDocument {
    pub path: PathBuf,
    pub content: String,
}

/// Lazily walk `root` and read every regular file ending in `.<markdown_ext>`.
///
/// Directories are entered recursively in file name order. Other files are
/// skipped silently. Any traversal or read failure is yielded as an
/// [`BuildError::Access`]; a file that is not UTF-8 as
/// [`BuildError::InvalidFrontMatter`].
pub fn load_documents<'a>(
    root: &'a Path,
    markdown_ext: &'a str,
) -> impl Iterator<Item = BuildResult<SourceDocument>> + 'a {
    WalkDir::new(root)
        .sort_by_file_name()
        .into_iter()
        .filter_map(move |entry| {
            let entry = match entry {
                Ok(entry) => entry,
                Err(e) => {
                    let path = e.path().unwrap_or(root).to_path_buf();
                    return Some(Err(BuildError::access(path, io::Error::from(e))));
                }
            };

            let path = entry.path();
            if !entry.file_type().is_file() || !has_extension(path, markdown_ext) {
                return None;
            }

            debug!("Reading {}", path.display());
            Some(read_document(path))
        })
}

/// Undecodable bytes are a content problem, not an I/O one
fn read_document(path: &Path) -> BuildResult<SourceDocument> {
    let bytes = read_file(path)?;
    let content = String::from_utf8(bytes)
        .map_err(|e| BuildError::invalid_front_matter(path, format!("document is not valid UTF-8: {}", e)))?;

    Ok(SourceDocument {
        path: path.to_path_buf(),
        content,
    })
}

/// Read all documents, stopping at the first failure
pub fn collect_documents(root: &Path, markdown_ext: &str) -> BuildResult<Vec<SourceDocument>> {
    let documents = load_documents(root, markdown_ext).collect::<BuildResult<Vec<_>>>()?;
    debug!("Collected {} documents from {}", documents.len(), root.display());
    Ok(documents)
}
