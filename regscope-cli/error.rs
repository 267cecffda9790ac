use regscope_raw::RegisterError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum RegscopeError {
    #[error("Register error: {0}")]
    Register(#[from] RegisterError),

    #[error("Unknown register: {0}")]
    UnknownRegister(String),

    #[error("Parse error: {0}")]
    ParseError(String),

    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, RegscopeError>;
