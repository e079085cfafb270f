use thiserror::Error;

#[derive(Error, Debug)]
pub enum ShowroomError {
    #[error("Product not found: {0}")]
    ProductNotFound(String),

    #[error("Admin login required")]
    Unauthorized,

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Store error: {0}")]
    Store(String),

    #[error("Config error: {0}")]
    Config(String),
}

pub type Result<T> = std::result::Result<T, ShowroomError>;
