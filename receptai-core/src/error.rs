use thiserror::Error;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum ImageError {
    #[error("Failed to read image: {0}")]
    Unreadable(String),

    #[error("Could not detect image format")]
    UnknownFormat,

    #[error("Unsupported image format: {0}. Allowed: JPEG, PNG, WebP")]
    UnsupportedFormat(String),

    #[error("Failed to decode image: {0}")]
    Undecodable(String),
}

#[derive(Error, Debug)]
pub enum CatalogError {
    #[error("Failed to read catalog file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid catalog JSON: {0}")]
    InvalidJson(#[from] serde_json::Error),

    #[error("Entry {index}: title must not be empty")]
    EmptyTitle { index: usize },

    #[error("Entry {index} ({title}): unknown difficulty '{value}', expected easy, medium or hard")]
    InvalidDifficulty {
        index: usize,
        title: String,
        value: String,
    },
}
