use thiserror::Error;

/// Why a backend request produced no usable payload.
///
/// Every variant degrades to the embedded sample data; none of them is ever
/// shown to the user beyond the "backend offline" badge.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum FetchError {
    #[error("network error: {0}")]
    Network(String),

    #[error("API {status}: {path}")]
    Status { status: u16, path: String },

    #[error("failed to decode response: {0}")]
    Decode(String),
}

impl From<serde_json::Error> for FetchError {
    fn from(err: serde_json::Error) -> Self {
        FetchError::Decode(err.to_string())
    }
}
