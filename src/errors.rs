use thiserror::Error;

/// Raised when a string is not a valid NACA four digit designation. No geometry is produced for
/// a rejected designation.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum InvalidDesignation {
    #[error("a NACA 4 series designation has exactly 4 characters, got {found}")]
    WrongLength { found: usize },

    #[error("character {found:?} at position {index} is not a decimal digit")]
    NotADigit { index: usize, found: char },
}

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("failed to read configuration: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to parse configuration: {0}")]
    Json(#[from] serde_json::Error),
}
