use std::fs;
use std::path::Path;

use log::debug;
use walkdir::WalkDir;

use crate::utils::error::{BuildError, BuildResult};
use crate::utils::fs::{create_directory, write_file};

/// Where the highlighting stylesheet lands, relative to the destination
pub const SYNTAX_STYLESHEET: &str = "css/syntax.css";

/// Copy every file under `public_dir` into `destination`, keeping the
/// directory layout. A missing `public_dir` copies nothing.
pub fn copy_static_assets(public_dir: &Path, destination: &Path) -> BuildResult<usize> {
    if !public_dir.is_dir() {
        debug!("No static assets at {}", public_dir.display());
        return Ok(0);
    }

    let mut copied_count = 0;

    for entry in WalkDir::new(public_dir).sort_by_file_name() {
        let entry = entry.map_err(|e| {
            let path = e.path().unwrap_or(public_dir).to_path_buf();
            BuildError::access(path, e.into())
        })?;

        if !entry.file_type().is_file() {
            continue;
        }

        let path = entry.path();
        let Ok(rel_path) = path.strip_prefix(public_dir) else {
            continue;
        };
        let dest_path = destination.join(rel_path);

        if let Some(parent) = dest_path.parent() {
            create_directory(parent)?;
        }

        fs::copy(path, &dest_path).map_err(|e| BuildError::write(&dest_path, e))?;
        debug!("Copied static file: {} -> {}", path.display(), dest_path.display());
        copied_count += 1;
    }

    Ok(copied_count)
}

/// Write the code highlighting stylesheet into the destination
pub fn write_syntax_stylesheet(destination: &Path, css: &str) -> BuildResult<()> {
    write_file(destination.join(SYNTAX_STYLESHEET), css)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_copies_tree() {
        let dir = tempfile::tempdir().unwrap();
        let public = dir.path().join("public");
        let build = dir.path().join("build");
        fs::create_dir_all(public.join("fonts/Inter")).unwrap();
        fs::create_dir_all(public.join("style")).unwrap();
        fs::write(public.join("style/style.css"), "body{}").unwrap();
        fs::write(public.join("fonts/Inter/Inter.woff2"), [0u8, 1, 2]).unwrap();

        let count = copy_static_assets(&public, &build).unwrap();

        assert_eq!(count, 2);
        assert_eq!(fs::read_to_string(build.join("style/style.css")).unwrap(), "body{}");
        assert_eq!(fs::read(build.join("fonts/Inter/Inter.woff2")).unwrap(), vec![0u8, 1, 2]);
    }

    #[test]
    fn test_missing_public_dir() {
        let dir = tempfile::tempdir().unwrap();
        let count = copy_static_assets(&dir.path().join("public"), &dir.path().join("build")).unwrap();
        assert_eq!(count, 0);
    }

    #[test]
    fn test_syntax_stylesheet() {
        let dir = tempfile::tempdir().unwrap();
        write_syntax_stylesheet(dir.path(), ".code{}").unwrap();
        assert_eq!(fs::read_to_string(dir.path().join("css/syntax.css")).unwrap(), ".code{}");
    }
}
