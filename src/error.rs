#[derive(Debug, thiserror::Error)]
pub enum CraftshopError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("server error (HTTP {status}): {message}")]
    Api { status: u16, message: String },

    #[error("non-JSON response from server: {body}")]
    NonJson { body: String },

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Invalid argument: {0}")]
    InvalidArgument(String),
}

pub type Result<T> = std::result::Result<T, CraftshopError>;
