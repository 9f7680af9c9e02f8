//! Static page builder for a personal academic website.
//!
//! Renders a fixed set of pages from minijinja templates and YAML data files,
//! and copies static assets next to them.

pub mod assets;
pub mod builder;
pub mod config;
pub mod data;
pub mod filters;
pub mod pages;
pub mod templates;

pub use builder::{BuildError, BuildReport, PageOutcome, SiteBuilder};
pub use config::{ConfigError, SiteConfig};
pub use data::{DataError, DataSource, Loaded};
pub use templates::{TemplateEngine, TemplateError};
