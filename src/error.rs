/// Result type for gateway operations
pub type Result<T> = std::result::Result<T, GatewayError>;

/// Errors from talking to the listings backend
#[derive(Debug, thiserror::Error)]
pub enum GatewayError {
    #[error("request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("backend returned {status}: {message}")]
    Backend { status: u16, message: String },

    #[error("could not decode backend response: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("expected at most one row for {table} id {id}, got {count}")]
    MultipleRows {
        table: &'static str,
        id: String,
        count: usize,
    },
}
