use std::result;

use common::http::ApiError;
use common::CommonError;
use reqwest::StatusCode;
use thiserror::Error;

pub type Result<T> = result::Result<T, SdkError>;

#[derive(Error, Debug)]
pub enum SdkError {
    #[error("url: {0:?}")]
    Url(#[from] url::ParseError),
    #[error("invalid request: {0:?}")]
    InvalidRequest(String),
    #[error("serde: {0:?}")]
    Serde(#[from] serde_json::Error),
    #[error("http: {0:?}")]
    Http(#[from] reqwest::Error),
    #[error("api: {0}")]
    Api(ApiError),
    #[error("decode: {0:?}")]
    Decode(serde_json::Error),
    #[error("common: {0:?}")]
    Common(#[from] CommonError),
    #[error("internal: {0:?}")]
    Internal(String),
}

impl SdkError {
    /// Status of the response when the API rejected the request.
    pub fn status(&self) -> Option<StatusCode> {
        match self {
            SdkError::Api(err) => Some(err.status),
            _ => None,
        }
    }
}

impl From<ApiError> for SdkError {
    fn from(err: ApiError) -> Self {
        SdkError::Api(err)
    }
}
