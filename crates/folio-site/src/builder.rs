//! Site builder.
//!
//! Runs the whole build in a fixed order: reset the output directory, copy
//! static assets, load the data files, render every page. Missing optional
//! inputs and broken templates are logged and skipped; filesystem failures and
//! malformed data abort the build.

use std::collections::BTreeMap;
use std::fs;
use std::path::PathBuf;
use std::time::Instant;

use chrono::{Local, NaiveDate};
use minijinja::Value;

use crate::assets::{self, AssetError};
use crate::config::SiteConfig;
use crate::data::{self, DataError, DataSource, Loaded};
use crate::pages::{page_name, PAGES};
use crate::templates::{TemplateEngine, TemplateError};

/// Entry in the output directory that a reset never removes.
const PRESERVED_ENTRY: &str = ".git";

const BANNER_WIDTH: usize = 50;

/// Variables available to one template render.
pub type RenderContext = BTreeMap<String, Value>;

/// Errors that abort a build.
#[derive(Debug, thiserror::Error)]
pub enum BuildError {
    #[error("Failed to clean output directory {path}: {source}")]
    Clean {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error(transparent)]
    Assets(#[from] AssetError),

    #[error(transparent)]
    Data(#[from] DataError),

    #[error("Failed to write {path}: {source}")]
    Write {
        path: PathBuf,
        source: std::io::Error,
    },
}

/// What happened to a single page.
#[derive(Debug)]
pub enum PageOutcome {
    /// Page written to this path
    Built(PathBuf),

    /// Page skipped because its template failed to load or render
    Skipped(TemplateError),
}

/// Result of a full build.
#[derive(Debug)]
pub struct BuildReport {
    /// Number of pages written
    pub pages_built: usize,

    /// Output names of pages that were skipped
    pub pages_skipped: Vec<String>,

    /// Asset categories copied into the output
    pub assets_copied: Vec<&'static str>,

    /// Data sources whose file was absent
    pub missing_data: Vec<DataSource>,

    /// Total build time in milliseconds
    pub duration_ms: u64,

    /// Output directory
    pub output_dir: PathBuf,
}

/// Static site builder.
pub struct SiteBuilder {
    config: SiteConfig,
    templates: TemplateEngine,
    build_date: Option<NaiveDate>,
}

impl SiteBuilder {
    /// Create a builder for the site described by `config`.
    pub fn new(config: SiteConfig) -> Self {
        let templates = TemplateEngine::new(&config.template_dir);
        Self {
            config,
            templates,
            build_date: None,
        }
    }

    /// Stamp pages with `date` instead of today's date.
    pub fn with_build_date(mut self, date: NaiveDate) -> Self {
        self.build_date = Some(date);
        self
    }

    /// Load one data file, falling back to an empty mapping when it is absent.
    pub fn load_data(&self, source: DataSource) -> Result<serde_yaml::Value, DataError> {
        Ok(self.load_source(source)?.into_document())
    }

    fn load_source(&self, source: DataSource) -> Result<Loaded, DataError> {
        let loaded = data::load_document(&self.config.data_dir.join(source.file_name()))?;
        if loaded.is_absent() {
            tracing::warn!("{} not found, using empty data", source.file_name());
        } else {
            tracing::debug!("Loaded {}", source.file_name());
        }
        Ok(loaded)
    }

    /// Make the output directory exist and hold nothing but `.git`.
    pub fn reset_output(&self) -> Result<(), BuildError> {
        let output_dir = &self.config.output_dir;
        let clean_err =
            |path: PathBuf| move |source: std::io::Error| BuildError::Clean { path, source };

        if !output_dir.exists() {
            fs::create_dir_all(output_dir).map_err(clean_err(output_dir.clone()))?;
            return Ok(());
        }

        for entry in fs::read_dir(output_dir).map_err(clean_err(output_dir.clone()))? {
            let entry = entry.map_err(clean_err(output_dir.clone()))?;
            if entry.file_name() == PRESERVED_ENTRY {
                continue;
            }

            let path = entry.path();
            let file_type = entry.file_type().map_err(clean_err(path.clone()))?;
            if file_type.is_dir() {
                fs::remove_dir_all(&path).map_err(clean_err(path.clone()))?;
            } else {
                fs::remove_file(&path).map_err(clean_err(path.clone()))?;
            }
        }

        Ok(())
    }

    /// Copy the static asset directories into the output.
    pub fn copy_assets(&self) -> Result<Vec<&'static str>, BuildError> {
        Ok(assets::copy_assets(
            &self.config.static_dir,
            &self.config.output_dir,
        )?)
    }

    /// Render one template to `output` under the output directory.
    ///
    /// `current_page` and `build_date` are added to `context`. A template that
    /// fails to load or render is logged and reported as skipped; only a
    /// failed write is an error.
    pub fn render_page(
        &self,
        template: &str,
        output: &str,
        mut context: RenderContext,
    ) -> Result<PageOutcome, BuildError> {
        context.insert("current_page".to_string(), Value::from(page_name(output)));
        context.insert("build_date".to_string(), Value::from(self.build_date_string()));

        let html = match self.templates.render(template, &context) {
            Ok(html) => html,
            Err(e) if e.is_not_found() => {
                tracing::error!(
                    "Template {} not found in {}",
                    template,
                    self.config.template_dir.display()
                );
                return Ok(PageOutcome::Skipped(e));
            }
            Err(e) => {
                tracing::error!("{}", e);
                return Ok(PageOutcome::Skipped(e));
            }
        };

        let output_path = self.config.output_dir.join(output);
        fs::write(&output_path, html).map_err(|e| BuildError::Write {
            path: output_path.clone(),
            source: e,
        })?;

        tracing::info!("✓ Built: {}", output);
        Ok(PageOutcome::Built(output_path))
    }

    /// Build the entire site.
    pub fn build_all(&self) -> Result<BuildReport, BuildError> {
        let start = Instant::now();

        banner();
        tracing::info!("Starting website build...");
        banner();

        tracing::info!("[1/4] Cleaning output directory...");
        self.reset_output()?;

        tracing::info!("[2/4] Copying static files...");
        let assets_copied = self.copy_assets()?;

        tracing::info!("[3/4] Loading data files...");
        let mut documents = BTreeMap::new();
        let mut missing_data = Vec::new();
        for source in DataSource::ALL {
            let loaded = self.load_source(source)?;
            if loaded.is_absent() {
                missing_data.push(source);
            }
            documents.insert(source, loaded.into_document());
        }

        tracing::info!("[4/4] Building pages...");
        let mut pages_built = 0;
        let mut pages_skipped = Vec::new();
        for page in PAGES {
            let context: RenderContext = page
                .bindings
                .iter()
                .map(|(name, source)| {
                    let doc = documents
                        .get(source)
                        .map(Value::from_serialize)
                        .unwrap_or_else(|| Value::from_serialize(data::empty_document()));
                    (name.to_string(), doc)
                })
                .collect();

            match self.render_page(page.template, page.output, context)? {
                PageOutcome::Built(_) => pages_built += 1,
                PageOutcome::Skipped(_) => pages_skipped.push(page.output.to_string()),
            }
        }

        banner();
        tracing::info!("✓ Build complete!");
        banner();
        tracing::info!("Output directory: {}", self.config.output_dir.display());
        tracing::info!(
            "Open: {}",
            self.config.output_dir.join("index.html").display()
        );

        Ok(BuildReport {
            pages_built,
            pages_skipped,
            assets_copied,
            missing_data,
            duration_ms: start.elapsed().as_millis() as u64,
            output_dir: self.config.output_dir.clone(),
        })
    }

    fn build_date_string(&self) -> String {
        format_build_date(self.build_date.unwrap_or_else(|| Local::now().date_naive()))
    }
}

/// Human-readable build date, e.g. `January 05, 2025`.
pub fn format_build_date(date: NaiveDate) -> String {
    date.format("%B %d, %Y").to_string()
}

fn banner() {
    tracing::info!("{}", "=".repeat(BANNER_WIDTH));
}
