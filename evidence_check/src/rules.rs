//! The required sections and checked items a report must contain.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Errors that prevent a validation from completing.
#[derive(Debug, Error)]
pub enum CheckError {
    #[error("failed to read {path}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid rules file: {0}")]
    InvalidRules(#[from] toml::de::Error),
}

/// What a report must contain to pass.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rules {
    /// Heading titles, matched case-insensitively.
    #[serde(default)]
    pub required_sections: Vec<String>,

    /// Checklist item texts that must appear ticked (`- [x] ...`).
    /// Matched case-insensitively as a prefix of the item text.
    #[serde(default)]
    pub required_checked_items: Vec<String>,
}

impl Default for Rules {
    fn default() -> Self {
        Self {
            required_sections: vec![
                "Summary".to_string(),
                "Changes".to_string(),
                "Verification".to_string(),
            ],
            required_checked_items: vec![
                "Tests pass".to_string(),
                "Documentation updated".to_string(),
            ],
        }
    }
}

impl Rules {
    pub fn from_toml_str(source: &str) -> Result<Self, CheckError> {
        Ok(toml::from_str(source)?)
    }

    pub fn from_file(path: &Path) -> Result<Self, CheckError> {
        let source = read_text(path)?;
        Self::from_toml_str(&source)
    }
}

/// Read a whole text file, attaching the path to any IO error.
pub fn read_text(path: &Path) -> Result<String, CheckError> {
    std::fs::read_to_string(path).map_err(|source| CheckError::Io {
        path: path.to_path_buf(),
        source,
    })
}
