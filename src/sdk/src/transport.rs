use async_trait::async_trait;
use bytes::Bytes;
use common::config::normalize_endpoint;
use common::config::Api;
use common::http::ApiError;
use reqwest::Method;
use serde_json::Value;
use tracing::debug;
use tracing::warn;
use url::Url;

use crate::error::SdkError;
use crate::Result;

/// A request ready to be sent by a [`Transport`].
#[derive(Debug, Clone, PartialEq)]
pub struct Request {
    pub method: Method,
    pub url: Url,
    pub body: Option<Value>,
}

/// The shared HTTP transport every resource client goes through.
///
/// Implementations own authentication, base URL resolution and the mapping of
/// non-success statuses to [`SdkError::Api`]. `send` performs exactly one round
/// trip; dropping the returned future cancels it.
#[async_trait]
pub trait Transport: Send + Sync {
    fn new_request(
        &self,
        method: Method,
        base_path: &str,
        sub_path: &str,
        body: Option<Value>,
    ) -> Result<Request>;

    /// Returns the raw body of a successful response.
    async fn send(&self, req: Request) -> Result<Bytes>;
}

/// Resolves `base_path[/sub_path]` against the API endpoint.
pub fn join_url(endpoint: &Url, base_path: &str, sub_path: &str) -> Result<Url> {
    let base_path = base_path.trim_matches('/');
    if base_path.is_empty() {
        return Err(SdkError::InvalidRequest("empty base path".to_string()));
    }

    let sub_path = sub_path.trim_matches('/');
    let path = if sub_path.is_empty() {
        base_path.to_string()
    } else {
        format!("{base_path}/{sub_path}")
    };

    Ok(endpoint.join(path.as_str())?)
}

pub struct HttpTransport {
    client: reqwest::Client,
    endpoint: Url,
    token: Option<String>,
}

impl HttpTransport {
    pub fn try_new(cfg: &Api) -> Result<Self> {
        let client = reqwest::Client::builder()
            .user_agent(cfg.user_agent.as_str())
            .timeout(cfg.timeout)
            .build()?;

        Ok(Self {
            client,
            endpoint: normalize_endpoint(cfg.endpoint.clone()),
            token: cfg.token.clone(),
        })
    }

    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }
}

#[async_trait]
impl Transport for HttpTransport {
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
        debug!(method = %req.method, url = %req.url, "sending request");

        let mut builder = self.client.request(req.method.clone(), req.url.clone());
        if let Some(token) = &self.token {
            builder = builder.bearer_auth(token);
        }
        if let Some(body) = &req.body {
            builder = builder.json(body);
        }

        let resp = builder.send().await?;
        let status = resp.status();
        let body = resp.bytes().await?;
        debug!(
            method = %req.method,
            url = %req.url,
            status = status.as_u16(),
            "received response"
        );

        if !status.is_success() {
            let err = ApiError::from_body(status, &body);
            warn!(method = %req.method, url = %req.url, error = %err, "request rejected");
            return Err(err.into());
        }

        Ok(body)
    }
}
