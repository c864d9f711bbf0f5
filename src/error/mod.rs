mod context;
mod exit_codes;
mod format;

pub use context::ErrorContext;
pub use exit_codes::get_exit_code;
pub use format::format_error_with_color;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum SemvError {
    #[error("Malformed version '{0}'")]
    MalformedVersion(String),

    #[error("Invalid {component} version number '{value}'")]
    InvalidVersionNumber {
        component: &'static str,
        value: String,
    },

    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, SemvError>;
