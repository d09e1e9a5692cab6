use std::path::PathBuf;

/// Default site root
pub fn default_source() -> PathBuf {
    PathBuf::from(".")
}

/// Default content directory, relative to the site root
pub fn default_content_dir() -> PathBuf {
    PathBuf::from("content")
}

/// Default templates directory, relative to the site root
pub fn default_templates_dir() -> PathBuf {
    PathBuf::from("templates")
}

/// Default static asset directory, relative to the site root
pub fn default_public_dir() -> PathBuf {
    PathBuf::from("public")
}

/// Default destination directory
pub fn default_destination() -> PathBuf {
    PathBuf::from("build")
}

/// Default markdown extension
pub fn default_markdown_ext() -> String {
    "md".to_string()
}

/// Default syntax highlighting theme
pub fn default_highlight_theme() -> String {
    "InspiredGitHub".to_string()
}

/// Default template for individual pages
pub fn default_page_template() -> String {
    "base.html".to_string()
}

/// Default template for the listing page
pub fn default_index_template() -> String {
    "index.tmpl.html".to_string()
}

/// Default site title
pub fn default_site_title() -> String {
    "Your awesome site".to_string()
}
