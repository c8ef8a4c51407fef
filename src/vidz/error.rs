use thiserror::Error;

#[derive(Error, Debug)]
pub enum VidzError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Catalog error: {0}")]
    Catalog(String),
}

pub type Result<T> = std::result::Result<T, VidzError>;
