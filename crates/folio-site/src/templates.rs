//! Template engine for rendering site pages.

use std::path::Path;

use minijinja::{path_loader, AutoEscape, Environment, ErrorKind};
use serde::Serialize;

use crate::filters::year_from_date;

/// Errors that can occur while producing a page from a template.
#[derive(Debug, thiserror::Error)]
pub enum TemplateError {
    /// The template is missing or does not compile
    #[error("Error loading template {name}: {source}")]
    Load {
        name: String,
        source: minijinja::Error,
    },

    /// The template compiled but failed while rendering
    #[error("Error rendering template {name}: {source}")]
    Render {
        name: String,
        source: minijinja::Error,
    },
}

impl TemplateError {
    /// Whether the template file could not be found at all.
    pub fn is_not_found(&self) -> bool {
        match self {
            TemplateError::Load { source, .. } => source.kind() == ErrorKind::TemplateNotFound,
            TemplateError::Render { .. } => false,
        }
    }
}

/// Template engine using minijinja, loading templates from disk.
pub struct TemplateEngine {
    env: Environment<'static>,
}

impl TemplateEngine {
    /// Create an engine that resolves template names under `template_dir`.
    pub fn new(template_dir: &Path) -> Self {
        let mut env = Environment::new();

        env.set_loader(path_loader(template_dir));
        env.set_trim_blocks(true);
        env.set_lstrip_blocks(true);
        env.set_auto_escape_callback(|_| AutoEscape::None);
        env.add_filter("year_from_date", year_from_date);

        Self { env }
    }

    /// Render the named template with `context`.
    pub fn render<S: Serialize>(&self, name: &str, context: S) -> Result<String, TemplateError> {
        let tmpl = self
            .env
            .get_template(name)
            .map_err(|source| TemplateError::Load {
                name: name.to_string(),
                source,
            })?;

        tmpl.render(context)
            .map_err(|source| TemplateError::Render {
                name: name.to_string(),
                source,
            })
    }
}
