//! YAML data documents.
//!
//! Documents are schema-less `serde_yaml::Value` trees. A missing file is an
//! expected condition and is reported as [`Loaded::Absent`]; only malformed
//! YAML is an error.

use std::fs;
use std::path::{Path, PathBuf};

use serde_yaml::{Mapping, Value};

/// The data files a build reads, in load order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum DataSource {
    Profile,
    Academics,
    Experience,
    Research,
    Professional,
    Personal,
}

impl DataSource {
    /// Every source, in the order the builder loads them.
    pub const ALL: [DataSource; 6] = [
        DataSource::Profile,
        DataSource::Academics,
        DataSource::Experience,
        DataSource::Research,
        DataSource::Professional,
        DataSource::Personal,
    ];

    /// File name under the data root.
    pub fn file_name(self) -> &'static str {
        match self {
            DataSource::Profile => "profile.yaml",
            DataSource::Academics => "academics.yaml",
            DataSource::Experience => "experience.yaml",
            DataSource::Research => "research.yaml",
            DataSource::Professional => "professional.yaml",
            DataSource::Personal => "personal.yaml",
        }
    }
}

/// Outcome of reading one data file.
#[derive(Debug, Clone, PartialEq)]
pub enum Loaded {
    /// The file existed and parsed
    Present(Value),

    /// The file does not exist
    Absent,
}

impl Loaded {
    /// The document, with the empty-mapping default applied when absent.
    pub fn into_document(self) -> Value {
        match self {
            Loaded::Present(value) => value,
            Loaded::Absent => empty_document(),
        }
    }

    pub fn is_absent(&self) -> bool {
        matches!(self, Loaded::Absent)
    }
}

/// An empty mapping.
pub fn empty_document() -> Value {
    Value::Mapping(Mapping::new())
}

/// Read and parse a YAML document.
///
/// An empty or `null` document is treated as an empty mapping.
pub fn load_document(path: &Path) -> Result<Loaded, DataError> {
    if !path.exists() {
        return Ok(Loaded::Absent);
    }

    let content = fs::read_to_string(path).map_err(|e| DataError::Read {
        path: path.to_path_buf(),
        source: e,
    })?;

    if content.trim().is_empty() {
        return Ok(Loaded::Present(empty_document()));
    }

    let value: Value = serde_yaml::from_str(&content).map_err(|e| DataError::Parse {
        path: path.to_path_buf(),
        message: e.to_string(),
    })?;

    let value = match value {
        Value::Null => empty_document(),
        other => other,
    };

    Ok(Loaded::Present(value))
}

/// Errors that can occur when loading a data file.
#[derive(Debug, thiserror::Error)]
pub enum DataError {
    #[error("Failed to read {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Invalid YAML in {path}: {message}")]
    Parse { path: PathBuf, message: String },
}
