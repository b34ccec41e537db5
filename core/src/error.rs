use thiserror::Error;

#[derive(Error, Debug, Copy, Clone, PartialEq, Eq)]
pub enum GameError {
    #[error("Position out of bounds")]
    InvalidPosition,
    #[error("Board dimension must be at least one")]
    InvalidGridSize,
    #[error("Token palette must not be empty")]
    EmptyPalette,
    #[error("Token data does not match declared board size")]
    BoardShapeMismatch,
    #[error("Token kind outside the palette")]
    UnknownTokenKind,
}

pub type Result<T> = core::result::Result<T, GameError>;
