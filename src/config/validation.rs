use syntect::highlighting::ThemeSet;

use crate::config::Config;
use crate::utils::error::{BuildError, BuildResult};
use crate::utils::path::normalize;

/// Validate the configuration
pub fn validate_config(config: &Config) -> BuildResult<()> {
    validate_markdown_ext(config)?;
    validate_templates(config)?;
    validate_highlight_theme(config)?;
    validate_destination(config)?;
    Ok(())
}

fn validate_markdown_ext(config: &Config) -> BuildResult<()> {
    if config.markdown_ext.is_empty() {
        return Err(BuildError::Config("markdown_ext must not be empty".to_string()));
    }
    if config.markdown_ext.starts_with('.') {
        return Err(BuildError::Config(format!(
            "markdown_ext must not start with a dot: {}",
            config.markdown_ext
        )));
    }
    Ok(())
}

fn validate_templates(config: &Config) -> BuildResult<()> {
    if config.page_template.trim().is_empty() || config.index_template.trim().is_empty() {
        return Err(BuildError::Config(
            "page_template and index_template must name a template".to_string(),
        ));
    }
    Ok(())
}

fn validate_highlight_theme(config: &Config) -> BuildResult<()> {
    let themes = ThemeSet::load_defaults();
    if !themes.themes.contains_key(&config.highlight_theme) {
        let mut available: Vec<_> = themes.themes.keys().cloned().collect();
        available.sort();
        return Err(BuildError::Config(format!(
            "unknown highlight_theme `{}` (available: {})",
            config.highlight_theme,
            available.join(", ")
        )));
    }
    Ok(())
}

/// The destination is wiped by `clean` and rewritten by every build, so it
/// must not hold any input. Output inside the content root would also be
/// picked up by the next run.
fn validate_destination(config: &Config) -> BuildResult<()> {
    let destination = normalize(&config.destination);

    let inputs = [
        ("site root", config.source.clone()),
        ("content", config.content_path()),
        ("templates", config.templates_path()),
        ("public", config.public_path()),
    ];
    for (label, input) in inputs {
        if normalize(&input).starts_with(&destination) {
            return Err(BuildError::Config(format!(
                "destination {} would contain the {} directory {}",
                config.destination.display(),
                label,
                input.display()
            )));
        }
    }

    if destination.starts_with(normalize(config.content_path())) {
        return Err(BuildError::Config(format!(
            "destination must not be inside the content directory: {}",
            config.destination.display()
        )));
    }
    Ok(())
}
