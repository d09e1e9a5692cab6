use std::env;
use std::path::{Component, Path, PathBuf};

/// Check if a path has exactly the given extension (case-sensitive)
pub fn has_extension<P: AsRef<Path>>(path: P, ext: &str) -> bool {
    path.as_ref()
        .extension()
        .and_then(|e| e.to_str())
        .map_or(false, |e| e == ext)
}

/// File name of a path as a string, lossy for non UTF-8 names
pub fn file_name<P: AsRef<Path>>(path: P) -> String {
    path.as_ref()
        .file_name()
        .map(|n| n.to_string_lossy().to_string())
        .unwrap_or_default()
}

/// Absolute form of `path` with `.` and `..` folded away.
///
/// Purely lexical: the path does not have to exist and symlinks are not
/// followed. Relative paths are taken from the working directory.
pub fn normalize<P: AsRef<Path>>(path: P) -> PathBuf {
    let path = path.as_ref();
    let absolute = if path.is_absolute() {
        path.to_path_buf()
    } else {
        env::current_dir().map(|cwd| cwd.join(path)).unwrap_or_else(|_| path.to_path_buf())
    };

    let mut normalized = PathBuf::new();
    for component in absolute.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => {
                normalized.pop();
            }
            other => normalized.push(other),
        }
    }
    normalized
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_has_extension_is_case_sensitive() {
        assert!(has_extension("content/post.md", "md"));
        assert!(!has_extension("content/post.MD", "md"));
        assert!(!has_extension("content/post.markdown", "md"));
        assert!(!has_extension("content/README", "md"));
    }

    #[test]
    fn test_normalize() {
        assert_eq!(normalize("/site/./content/../build"), PathBuf::from("/site/build"));
        assert_eq!(normalize("./content"), normalize("content"));
        assert!(normalize("content").is_absolute());
    }

    #[test]
    fn test_file_name() {
        assert_eq!(file_name("content/nested/My Post.md"), "My Post.md");
        assert_eq!(file_name("/"), "");
    }
}
