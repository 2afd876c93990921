// src/math/error.rs
use thiserror::Error;

#[derive(Error, Debug)]
pub enum MathError {
    #[error("Invalid configuration: {message}")]
    InvalidConfiguration { message: String },

    #[error("Invalid argument: {message}")]
    InvalidArgument { message: String },

    #[error("Export failed: {message}")]
    Export { message: String },
}

pub type MathResult<T> = Result<T, MathError>;
