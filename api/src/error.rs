use thiserror::Error;

#[derive(Error, Debug)]
pub enum ApiError {
    /// A network-level or server failure, reduced to the original error's message.
    #[error("{message}")]
    Runtime { message: String },

    #[error(transparent)]
    Http(#[from] reqwest::Error),

    #[error("Invalid configuration: {message}")]
    InvalidConfig { message: String },

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl ApiError {
    /// HTTP status of the failed request, when the error still carries one.
    pub fn status(&self) -> Option<u16> {
        match self {
            ApiError::Http(err) => err.status().map(|s| s.as_u16()),
            _ => None,
        }
    }

    pub fn is_runtime(&self) -> bool {
        matches!(self, ApiError::Runtime { .. })
    }
}

pub type ApiResult<T> = Result<T, ApiError>;
