use thiserror::Error;

#[derive(Debug, Error)]
pub enum DoniaiError {
    #[error("Invalid preferences: {0}")]
    Preferences(String),

    #[error("Invalid server URL: {0}")]
    InvalidServerUrl(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
