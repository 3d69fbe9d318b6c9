use std::result;

use thiserror::Error;

pub type Result<T> = result::Result<T, CommonError>;

#[derive(Error, Debug)]
pub enum CommonError {
    #[error("config: {0:?}")]
    Config(#[from] config::ConfigError),
    #[error("url: {0:?}")]
    Url(#[from] url::ParseError),
    #[error("duration: {0:?}")]
    Duration(#[from] humantime::DurationError),
    #[error("invalid log level: {0:?}")]
    InvalidLogLevel(String),
    #[error("logging: {0}")]
    Logging(String),
}
