//! # Error Types

use std::path::PathBuf;

/// Errors from wordseam operations.
#[derive(Debug, thiserror::Error)]
pub enum WordseamError {
    /// The language code is not one of the built-in languages.
    #[error("unsupported language code: {code:?}")]
    UnsupportedLanguage {
        /// The code that failed to parse.
        code: String,
    },

    /// A built-in language was requested, but no dictionary directory
    /// was configured to resolve its artifact against.
    #[error("no dictionary directory configured for {artifact:?}")]
    NoDictionaryDir {
        /// The artifact file name that could not be resolved.
        artifact: String,
    },

    /// The dictionary artifact path does not exist.
    #[error("dictionary artifact not found: {path:?}")]
    ArtifactNotFound {
        /// The missing path.
        path: PathBuf,
    },

    /// The artifact decodes, but does not contain valid UTF-8 word lines.
    #[error("malformed dictionary artifact: {0}")]
    MalformedArtifact(String),

    /// The final word list is too small for the rank cost formula.
    ///
    /// A single-word list makes `ln(N)` zero and the rank-0 cost `-inf`.
    #[error("dictionary yields {len} words; at least 2 are required")]
    DegenerateLexicon {
        /// The number of words that survived filtering.
        len: usize,
    },

    /// I/O error.
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl WordseamError {
    /// True if this error is a caller configuration problem
    /// (as opposed to a problem with the artifact contents).
    ///
    /// A nonexistent artifact path counts as configuration: the caller
    /// named the path, and nothing was read from it.
    pub fn is_configuration(&self) -> bool {
        matches!(
            self,
            WordseamError::UnsupportedLanguage { .. }
                | WordseamError::NoDictionaryDir { .. }
                | WordseamError::ArtifactNotFound { .. }
        )
    }
}

/// Result type for wordseam operations.
pub type WSResult<T> = core::result::Result<T, WordseamError>;
