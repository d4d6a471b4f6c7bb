use thiserror::Error;

#[derive(Error, Debug)]
pub enum CapsError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("cannot open snapshot {path}: {source}")]
    Open {
        path: String,
        source: std::io::Error,
    },

    #[error("malformed snapshot JSON: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, CapsError>;
