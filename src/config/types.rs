use std::path::PathBuf;

use serde::Deserialize;

use crate::config::defaults;

/// Site-wide values handed to every template as `site`
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct SiteConfig {
    /// Site title
    #[serde(default = "defaults::default_site_title")]
    pub title: String,

    /// Site name
    #[serde(default)]
    pub name: String,

    /// Site author
    #[serde(default)]
    pub author: String,

    /// Site description
    #[serde(default)]
    pub description: String,

    /// Year of the build, stamped by the loader
    #[serde(skip)]
    pub year: i32,
}

impl Default for SiteConfig {
    fn default() -> Self {
        SiteConfig {
            title: defaults::default_site_title(),
            name: String::new(),
            author: String::new(),
            description: String::new(),
            year: 0,
        }
    }
}

/// Build configuration
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    /// Site root; the other directories are resolved against it
    #[serde(skip, default = "defaults::default_source")]
    pub source: PathBuf,

    /// Directory holding the markdown documents
    #[serde(default = "defaults::default_content_dir")]
    pub content_dir: PathBuf,

    /// Directory holding the `*.html` templates
    #[serde(default = "defaults::default_templates_dir")]
    pub templates_dir: PathBuf,

    /// Static assets copied verbatim into the output
    #[serde(default = "defaults::default_public_dir")]
    pub public_dir: PathBuf,

    /// Destination directory for generated site
    #[serde(default = "defaults::default_destination")]
    pub destination: PathBuf,

    /// Extension marking content files, without the dot
    #[serde(default = "defaults::default_markdown_ext")]
    pub markdown_ext: String,

    /// syntect theme used for fenced code blocks
    #[serde(default = "defaults::default_highlight_theme")]
    pub highlight_theme: String,

    /// Template used for pages without a `layout`
    #[serde(default = "defaults::default_page_template")]
    pub page_template: String,

    /// Template used for `index.html`
    #[serde(default = "defaults::default_index_template")]
    pub index_template: String,

    #[serde(default)]
    pub site: SiteConfig,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            source: defaults::default_source(),
            content_dir: defaults::default_content_dir(),
            templates_dir: defaults::default_templates_dir(),
            public_dir: defaults::default_public_dir(),
            destination: defaults::default_destination(),
            markdown_ext: defaults::default_markdown_ext(),
            highlight_theme: defaults::default_highlight_theme(),
            page_template: defaults::default_page_template(),
            index_template: defaults::default_index_template(),
            site: SiteConfig::default(),
        }
    }
}

impl Config {
    /// Content root resolved against the site root
    pub fn content_path(&self) -> PathBuf {
        self.source.join(&self.content_dir)
    }

    /// Templates directory resolved against the site root
    pub fn templates_path(&self) -> PathBuf {
        self.source.join(&self.templates_dir)
    }

    /// Static asset directory resolved against the site root
    pub fn public_path(&self) -> PathBuf {
        self.source.join(&self.public_dir)
    }
}
