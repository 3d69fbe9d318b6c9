use std::fmt::Display;
use std::fmt::Formatter;

use http::StatusCode;
use serde::de;
use serde::Deserialize;
use serde::Deserializer;
use serde::Serialize;
use serde::Serializer;
use thiserror::Error;

/// Error document returned by the API for non-success responses.
#[derive(Error, Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct ApiError {
    #[serde(
        serialize_with = "serialize_http_code",
        deserialize_with = "deserialize_http_code"
    )]
    pub status: StatusCode,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub detail: Option<String>,
}

impl Display for ApiError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let title = match &self.title {
            Some(title) => title.as_str(),
            None => self.status.canonical_reason().unwrap_or_default(),
        };
        write!(f, "{}: {}", self.status.as_u16(), title)?;
        if let Some(detail) = &self.detail {
            write!(f, ": {}", detail)?;
        }

        Ok(())
    }
}

pub fn serialize_http_code<S: Serializer>(
    status: &StatusCode,
    ser: S,
) -> std::result::Result<S::Ok, S::Error> {
    ser.serialize_u16(status.as_u16())
}

pub fn deserialize_http_code<'de, D>(de: D) -> std::result::Result<StatusCode, D::Error>
where D: Deserializer<'de> {
    let code = u16::deserialize(de)?;
    StatusCode::from_u16(code).map_err(de::Error::custom)
}

// Body shape used only to pick up title and detail; the status is taken from
// the response line.
#[derive(Deserialize)]
struct ErrorBody {
    #[serde(default)]
    title: Option<String>,
    #[serde(default)]
    detail: Option<String>,
}

impl ApiError {
    pub fn new(status: StatusCode) -> Self {
        Self {
            status,
            title: None,
            detail: None,
        }
    }

    pub fn with_title(self, title: impl Into<String>) -> Self {
        Self {
            status: self.status,
            title: Some(title.into()),
            detail: self.detail,
        }
    }

    pub fn with_detail(self, detail: impl Into<String>) -> Self {
        Self {
            status: self.status,
            title: self.title,
            detail: Some(detail.into()),
        }
    }

    /// Builds an error from a non-success response. JSON error documents are
    /// decoded, any other non-empty body becomes the detail.
    pub fn from_body(status: StatusCode, body: &[u8]) -> Self {
        let err = ApiError::new(status);
        match serde_json::from_slice::<ErrorBody>(body) {
            Ok(ErrorBody { title, detail }) if title.is_some() || detail.is_some() => ApiError {
                status,
                title,
                detail,
            },
            _ => {
                let text = String::from_utf8_lossy(body);
                let text = text.trim();
                if text.is_empty() {
                    err
                } else {
                    err.with_detail(text)
                }
            }
        }
    }
}
