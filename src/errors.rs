use thiserror::Error;

/// Errors that can occur while configuring or using a list-item formatter.
#[derive(Error, Debug)]
pub enum ListItemError {
    #[error("invalid argument: {message} (value: {value:?})")]
    InvalidArgument { message: String, value: String },

    #[error("config error: {message}")]
    Config { message: String },

    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Convenience alias for results using `ListItemError`.
pub type Result<T> = std::result::Result<T, ListItemError>;
