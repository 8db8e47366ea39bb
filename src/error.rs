use thiserror::Error;

/// Unified error type for fist-bump operations
#[derive(Error, Debug)]
pub enum FistBumpError {
    #[error("Git operation failed: {0}")]
    Git(#[from] git2::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Version error: {0}")]
    Version(String),

    #[error("Manifest error: {0}")]
    Manifest(String),

    #[error("Hook error: {0}")]
    Hook(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("TOML error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("TOML edit error: {0}")]
    TomlEdit(#[from] toml_edit::TomlError),
}

/// Convenience type alias for Results in fist-bump
pub type Result<T> = std::result::Result<T, FistBumpError>;

impl FistBumpError {
    /// Create a configuration error with context
    pub fn config(msg: impl Into<String>) -> Self {
        FistBumpError::Config(msg.into())
    }

    /// Create a version error with context
    pub fn version(msg: impl Into<String>) -> Self {
        FistBumpError::Version(msg.into())
    }

    /// Create a manifest error with context
    pub fn manifest(msg: impl Into<String>) -> Self {
        FistBumpError::Manifest(msg.into())
    }

    /// Create a hook error with context
    pub fn hook(msg: impl Into<String>) -> Self {
        FistBumpError::Hook(msg.into())
    }
}

impl From<semver::Error> for FistBumpError {
    fn from(err: semver::Error) -> Self {
        FistBumpError::Version(err.to_string())
    }
}
