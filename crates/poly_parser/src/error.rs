use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    #[error("parse error: {0}")]
    Syntax(String),
    #[error("unconsumed input: {0}")]
    TrailingInput(String),
    #[error("not a valid integer: {0}")]
    InvalidInteger(String),
}
