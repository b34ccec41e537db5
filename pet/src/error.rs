use thiserror::Error;

#[derive(Error, Debug)]
pub enum PetError {
    #[error("I/O failure: {0}")]
    Io(#[from] std::io::Error),
    #[error("Malformed chat history: {0}")]
    Json(#[from] serde_json::Error),
    #[error("Malformed configuration: {0}")]
    Config(#[from] toml::de::Error),
    #[error(transparent)]
    Game(#[from] murka_core::GameError),
}

pub type Result<T> = std::result::Result<T, PetError>;
