use std::sync::Mutex;

use async_trait::async_trait;
use bytes::Bytes;
use common::config::Config;
use common::http::ApiError;
use reqwest::Method;
use reqwest::StatusCode;
use serde_json::Value;
use url::Url;

use crate::error::SdkError;
use crate::transport::join_url;
use crate::transport::Request;
use crate::transport::Transport;
use crate::Result;

/// What a [`StubTransport`] answers with.
#[derive(Debug, Clone)]
pub enum StubResponse {
    /// The request body is sent back as the response body (`null` without body).
    Echo,
    Json(Value),
    Error(StatusCode, Value),
}

/// In-memory transport that records requests instead of sending them.
pub struct StubTransport {
    endpoint: Url,
    response: StubResponse,
    requests: Mutex<Vec<Request>>,
}

impl StubTransport {
    pub fn new(response: StubResponse) -> Self {
        Self {
            endpoint: Config::default().api.endpoint,
            response,
            requests: Mutex::new(vec![]),
        }
    }

    /// Requests sent so far, oldest first.
    pub fn requests(&self) -> Vec<Request> {
        match self.requests.lock() {
            Ok(reqs) => reqs.clone(),
            Err(poisoned) => poisoned.into_inner().clone(),
        }
    }
}

#[async_trait]
impl Transport for StubTransport {
    fn new_request(
        &self,
        method: Method,
        base_path: &str,
        sub_path: &str,
        body: Option<Value>,
    ) -> Result<Request> {
        Ok(Request {
            method,
            url: join_url(&self.endpoint, base_path, sub_path)?,
            body,
        })
    }

    async fn send(&self, req: Request) -> Result<Bytes> {
        let body = req.body.clone().unwrap_or(Value::Null);
        self.requests
            .lock()
            .map_err(|err| SdkError::Internal(err.to_string()))?
            .push(req);

        match &self.response {
            StubResponse::Echo => Ok(Bytes::from(serde_json::to_vec(&body)?)),
            StubResponse::Json(v) => Ok(Bytes::from(serde_json::to_vec(v)?)),
            StubResponse::Error(status, v) => {
                let body = serde_json::to_vec(v)?;
                Err(ApiError::from_body(*status, &body).into())
            }
        }
    }
}
