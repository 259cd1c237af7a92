use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("config file not found: {0}")]
    FileNotFound(PathBuf),

    #[error("config parse error: {0}")]
    ParseError(String),

    #[error("config validation error: {0}")]
    ValidationError(String),
}

/// Why a unit of CSS was dropped (or, for `OversizedInput`, cut short).
///
/// Sanitization never surfaces these to the caller. They exist so that
/// every drop can be logged with a stable, greppable reason.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Rejection {
    #[error("input rejected: not valid UTF-8 text")]
    RejectedInput,

    #[error("input truncated from {length} to {max_length} characters")]
    OversizedInput { length: usize, max_length: usize },

    #[error("property not allowed: {0}")]
    DisallowedProperty(String),

    #[error("url origin not allowed: {0}")]
    DisallowedUrlOrigin(String),

    #[error("invalid url: {0}")]
    InvalidUrl(String),

    #[error("nested block outside an allowed context: {0}")]
    DisallowedStructuralContext(String),
}

#[derive(Debug, thiserror::Error)]
pub enum CssGuardError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error("{0}")]
    Other(String),
}
