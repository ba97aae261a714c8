use thiserror::Error;

use crate::Position;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum Error {
    #[error("{what} {index} out of bounds (len {len})")]
    OutOfBounds { what: &'static str, index: i64, len: usize },

    #[error("cell at {0} is out of bounds")]
    CellOutOfBounds(Position),

    #[error("point ({x}, {y}) is outside {shape} shape '{name}'")]
    NotAMember { shape: &'static str, name: String, x: i32, y: i32 },

    #[error("invalid dimension: {0}")]
    InvalidDimension(String),

    #[error("{what} '{name}' not found")]
    NotFound { what: &'static str, name: String },

    #[error("invalid argument: {0}")]
    InvalidArgument(String),
}

impl Error {
    pub(crate) fn out_of_bounds(what: &'static str, index: i64, len: usize) -> Self {
        Error::OutOfBounds { what, index, len }
    }

    pub(crate) fn not_found(what: &'static str, name: &str) -> Self {
        Error::NotFound { what, name: name.to_owned() }
    }
}
