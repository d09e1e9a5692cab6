use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Common result type for Markpress operations
pub type BuildResult<T> = Result<T, BuildError>;

/// Every error a build can raise. None of them are recoverable: the first one
/// seen stops the run.
#[derive(Error, Debug)]
pub enum BuildError {
    /// File system failure while walking or reading the content root
    #[error("error accessing {}: {source}", path.display())]
    Access {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The document does not have the `---` / metadata / `---` / body shape
    #[error("invalid front matter in {}: {reason}", path.display())]
    InvalidFrontMatter { path: PathBuf, reason: String },

    /// The metadata block is not valid YAML or does not match the schema
    #[error("error while unmarshaling front matter in {}: {source}", path.display())]
    UnmarshalFrontMatter {
        path: PathBuf,
        #[source]
        source: serde_yaml::Error,
    },

    /// Markdown to HTML conversion failed
    #[error("error while converting markdown to HTML in {}: {message}", path.display())]
    ConvertMarkdown { path: PathBuf, message: String },

    /// Template loading, lookup or rendering failed
    #[error("template error in {name}: {message}")]
    Template { name: String, message: String },

    /// Two published documents map to the same output file
    #[error("duplicate slug `{slug}` derived from {} and {}", first.display(), second.display())]
    DuplicateSlug {
        slug: String,
        first: PathBuf,
        second: PathBuf,
    },

    /// Writing generated output failed
    #[error("failed to write {}: {source}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Configuration error
    #[error("configuration error: {0}")]
    Config(String),
}

impl BuildError {
    pub fn access(path: impl Into<PathBuf>, source: io::Error) -> Self {
        Self::Access {
            path: path.into(),
            source,
        }
    }

    pub fn invalid_front_matter(path: impl Into<PathBuf>, reason: impl Into<String>) -> Self {
        Self::InvalidFrontMatter {
            path: path.into(),
            reason: reason.into(),
        }
    }

    pub fn convert(path: impl Into<PathBuf>, message: impl ToString) -> Self {
        Self::ConvertMarkdown {
            path: path.into(),
            message: message.to_string(),
        }
    }

    pub fn template(name: impl Into<String>, message: impl ToString) -> Self {
        Self::Template {
            name: name.into(),
            message: message.to_string(),
        }
    }

    pub fn write(path: impl Into<PathBuf>, source: io::Error) -> Self {
        Self::Write {
            path: path.into(),
            source,
        }
    }

    /// Short label naming the error class, used in the fatal log line
    pub fn kind(&self) -> &'static str {
        match self {
            BuildError::Access { .. } => "AccessError",
            BuildError::InvalidFrontMatter { .. } => "InvalidFrontMatter",
            BuildError::UnmarshalFrontMatter { .. } => "UnmarshalFrontMatter",
            BuildError::ConvertMarkdown { .. } => "ConvertMarkdown",
            BuildError::Template { .. } => "TemplateError",
            BuildError::DuplicateSlug { .. } => "DuplicateSlug",
            BuildError::Write { .. } => "WriteError",
            BuildError::Config(_) => "ConfigError",
        }
    }
}
