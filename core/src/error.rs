use thiserror::Error;

use crate::Count;

#[derive(Error, Debug, Copy, Clone, PartialEq, Eq)]
pub enum GameError {
    #[error("Cannot build {pairs} pairs from a catalog of {available} symbols")]
    InvalidConfiguration { pairs: Count, available: usize },
    #[error("Board does not hold exactly two cards per symbol")]
    InvalidBoard,
}

pub type Result<T> = core::result::Result<T, GameError>;
