use thiserror::Error;

/// Unified error type for the Petal configuration system.
#[derive(Error, Debug)]
pub enum PetalError {
    // ── Document errors ────────────────────────────────────────
    #[error("invalid glob pattern '{pattern}': {reason}")]
    InvalidGlobPattern { pattern: String, reason: String },

    #[error("invalid color format '{value}': expected #RRGGBB")]
    InvalidColorFormat { value: String },

    #[error("duplicate token name in {category}: {name}")]
    DuplicateTokenName { category: String, name: String },

    #[error("unknown token in {category}: {name}")]
    UnknownToken { category: String, name: String },

    // ── Config errors ──────────────────────────────────────────
    #[error("config error: {0}")]
    Config(String),

    // ── Generic wrappers ───────────────────────────────────────
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("{0}")]
    Other(#[from] anyhow::Error),
}

pub type Result<T> = std::result::Result<T, PetalError>;
