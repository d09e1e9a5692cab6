pub mod filters;

use std::collections::HashMap;
use std::path::Path;

use liquid::partials::{EagerCompiler, InMemorySource};
use liquid::{Object, Parser, ParserBuilder, Template};
use log::debug;

use crate::utils::error::{BuildError, BuildResult};

/// Named-template rendering port used by the site renderer
pub trait TemplateStore {
    /// Render the template called `name` against `globals`
    fn render(&self, name: &str, globals: &Object) -> BuildResult<String>;
}

/// Sibling templates, available to `{% include %}` by file name
type Partials = EagerCompiler<InMemorySource>;

/// Create a Liquid parser with the stdlib, our custom filters and `partials`
pub fn create_parser(partials: Partials) -> BuildResult<Parser> {
    filters::register_filters(ParserBuilder::with_stdlib())
        .partials(partials)
        .build()
        .map_err(|e| BuildError::template("<parser>", e))
}

/// Liquid templates keyed by file name, parsed once at startup
pub struct LiquidTemplates {
    templates: HashMap<String, Template>,
}

impl LiquidTemplates {
    /// Parse every `*.html` file directly inside `dir`
    pub fn load(dir: &Path) -> BuildResult<Self> {
        if !dir.is_dir() {
            return Err(BuildError::template(
                dir.display().to_string(),
                "templates directory not found",
            ));
        }

        let pattern = format!("{}/*.html", glob::Pattern::escape(&dir.to_string_lossy()));
        let paths = glob::glob(&pattern).map_err(|e| BuildError::template(pattern.clone(), e))?;

        let mut sources = Vec::new();
        for entry in paths {
            let path = entry.map_err(|e| BuildError::template(e.path().display().to_string(), e.error()))?;
            let source = std::fs::read_to_string(&path)
                .map_err(|e| BuildError::template(path.display().to_string(), e))?;
            let name = path
                .file_name()
                .map(|n| n.to_string_lossy().to_string())
                .unwrap_or_default();
            sources.push((name, source));
        }

        Self::from_sources(sources)
    }

    /// Parse templates from `(name, source)` pairs.
    ///
    /// Every template can include any other one by name.
    pub fn from_sources<I, N, S>(sources: I) -> BuildResult<Self>
    where
        I: IntoIterator<Item = (N, S)>,
        N: Into<String>,
        S: Into<String>,
    {
        let sources: Vec<(String, String)> = sources
            .into_iter()
            .map(|(name, source)| (name.into(), source.into()))
            .collect();

        let mut partials = Partials::empty();
        for (name, source) in &sources {
            partials.add(name.as_str(), source.as_str());
        }

        let parser = create_parser(partials)?;
        let mut templates = HashMap::new();

        for (name, source) in sources {
            let template = parser
                .parse(&source)
                .map_err(|e| BuildError::template(name.clone(), e))?;
            debug!("Loaded template {}", name);
            templates.insert(name, template);
        }

        Ok(LiquidTemplates { templates })
    }

    pub fn contains(&self, name: &str) -> bool {
        self.templates.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.templates.len()
    }
}

impl TemplateStore for LiquidTemplates {
    fn render(&self, name: &str, globals: &Object) -> BuildResult<String> {
        let template = self
            .templates
            .get(name)
            .ok_or_else(|| BuildError::template(name, "template not found"))?;

        template
            .render(globals)
            .map_err(|e| BuildError::template(name, e))
    }
}
