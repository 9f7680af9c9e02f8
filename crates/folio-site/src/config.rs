//! Site paths and the optional `folio.toml` overrides.

use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;

/// Name of the optional configuration file in the project root.
pub const CONFIG_FILE: &str = "folio.toml";

/// Resolved, immutable locations used by a build.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SiteConfig {
    /// Project root all other paths are resolved against
    pub root: PathBuf,

    /// Source root (`src/`)
    pub src_dir: PathBuf,

    /// Output root (`docs/`)
    pub output_dir: PathBuf,

    /// Template root (`src/templates/`)
    pub template_dir: PathBuf,

    /// Data root (`src/data/`)
    pub data_dir: PathBuf,

    /// Static asset root (`src/static/`)
    pub static_dir: PathBuf,
}

impl SiteConfig {
    /// Resolve the fixed layout under `root`.
    pub fn from_root(root: impl Into<PathBuf>) -> Self {
        Self::with_dirs(root, &PathsConfig::default())
    }

    /// Resolve the layout under `root`, applying `folio.toml` if present.
    ///
    /// A missing config file is not an error; a malformed one is.
    pub fn load(root: impl Into<PathBuf>) -> Result<Self, ConfigError> {
        let root = root.into();
        let file = ConfigFile::load(&root)?;
        Ok(Self::with_dirs(root, &file.paths))
    }

    fn with_dirs(root: impl Into<PathBuf>, paths: &PathsConfig) -> Self {
        let root = root.into();
        let src_dir = root.join(&paths.src);
        let output_dir = root.join(&paths.output);

        Self {
            template_dir: src_dir.join("templates"),
            data_dir: src_dir.join("data"),
            static_dir: src_dir.join("static"),
            src_dir,
            output_dir,
            root,
        }
    }
}

/// Configuration file structure (folio.toml).
#[derive(Debug, Deserialize, Default)]
struct ConfigFile {
    #[serde(default)]
    paths: PathsConfig,
}

#[derive(Debug, Deserialize)]
struct PathsConfig {
    #[serde(default = "default_src")]
    src: String,
    #[serde(default = "default_output")]
    output: String,
}

impl Default for PathsConfig {
    fn default() -> Self {
        Self {
            src: default_src(),
            output: default_output(),
        }
    }
}

fn default_src() -> String {
    "src".to_string()
}
fn default_output() -> String {
    "docs".to_string()
}

impl ConfigFile {
    fn load(root: &Path) -> Result<Self, ConfigError> {
        let path = root.join(CONFIG_FILE);
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&path).map_err(|e| ConfigError::Read {
            path: path.clone(),
            source: e,
        })?;
        let config = toml::from_str(&content).map_err(|e| ConfigError::Parse {
            path: path.clone(),
            message: e.to_string(),
        })?;
        tracing::info!("Loaded config from {}", path.display());
        Ok(config)
    }
}

/// Errors that can occur when loading `folio.toml`.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to parse {path}: {message}")]
    Parse { path: PathBuf, message: String },
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn resolves_fixed_layout() {
        let config = SiteConfig::from_root("/site");

        assert_eq!(config.src_dir, PathBuf::from("/site/src"));
        assert_eq!(config.output_dir, PathBuf::from("/site/docs"));
        assert_eq!(config.template_dir, PathBuf::from("/site/src/templates"));
        assert_eq!(config.data_dir, PathBuf::from("/site/src/data"));
        assert_eq!(config.static_dir, PathBuf::from("/site/src/static"));
    }

    #[test]
    fn missing_config_file_uses_defaults() {
        let temp = tempdir().unwrap();

        let config = SiteConfig::load(temp.path()).unwrap();

        assert_eq!(config, SiteConfig::from_root(temp.path()));
    }

    #[test]
    fn config_file_overrides_output() {
        let temp = tempdir().unwrap();
        fs::write(temp.path().join(CONFIG_FILE), "[paths]\noutput = \"public\"\n").unwrap();

        let config = SiteConfig::load(temp.path()).unwrap();

        assert_eq!(config.output_dir, temp.path().join("public"));
        assert_eq!(config.template_dir, temp.path().join("src/templates"));
    }

    #[test]
    fn errors_on_malformed_config() {
        let temp = tempdir().unwrap();
        fs::write(temp.path().join(CONFIG_FILE), "[paths\noutput = ").unwrap();

        let result = SiteConfig::load(temp.path());

        assert!(matches!(result, Err(ConfigError::Parse { .. })));
    }
}
