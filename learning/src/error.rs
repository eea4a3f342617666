//! Error types for the greeting program

use thiserror::Error;

#[derive(Error, Debug)]
pub enum HelloError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type HelloResult<T> = Result<T, HelloError>;
