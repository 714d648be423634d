//! Error Types
//!
//! Corpus acquisition is the only fallible operation at runtime. Template
//! errors come from the strict structural check and never from rendering.

use std::path::{Path, PathBuf};

use thiserror::Error;

/// Why a question corpus could not be acquired
#[derive(Debug, Error)]
pub enum CorpusError {
    /// Resource does not exist
    #[error("question corpus not found at {}", .path.display())]
    NotFound { path: PathBuf },

    /// Resource exists but could not be read
    #[error("failed to read question corpus at {}: {source}", .path.display())]
    Unreadable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Resource was read but is not a JSON array of strings
    #[error("malformed question corpus at {}: {source}", .path.display())]
    Malformed {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

impl CorpusError {
    /// Path of the resource that failed
    pub fn path(&self) -> &Path {
        match self {
            CorpusError::NotFound { path }
            | CorpusError::Unreadable { path, .. }
            | CorpusError::Malformed { path, .. } => path.as_path(),
        }
    }

    /// True when the resource is simply absent
    pub fn is_not_found(&self) -> bool {
        matches!(self, CorpusError::NotFound { .. })
    }
}

/// Structural defect in a template body
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TemplateError {
    /// `{{` without a closing `}}`
    #[error("template '{template}': unterminated placeholder at byte {offset}")]
    Unterminated { template: &'static str, offset: usize },

    /// `{{ }}` with nothing inside
    #[error("template '{template}': empty placeholder at byte {offset}")]
    EmptyPlaceholder { template: &'static str, offset: usize },

    /// Placeholder that is not the template's slot
    #[error("template '{template}': unknown placeholder '{name}' at byte {offset}")]
    UnknownPlaceholder {
        template: &'static str,
        name: String,
        offset: usize,
    },

    /// Slot never appears in the body
    #[error("template '{template}': slot '{slot}' is never used")]
    MissingSlot {
        template: &'static str,
        slot: &'static str,
    },
}

/// Result type alias for corpus operations
pub type CorpusResult<T> = Result<T, CorpusError>;

/// Result type alias for template checks
pub type TemplateResult<T> = Result<T, TemplateError>;
