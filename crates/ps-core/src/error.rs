use thiserror::Error;

#[derive(Error, Debug)]
pub enum SlimError {
    #[error("Invalid JSON: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("Unknown compression level: {0}")]
    InvalidLevel(String),
    #[error("Config error: {0}")]
    Config(String),
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, SlimError>;
