//! Generic request builder shared by all resource families.
//!
//! Every family client is a [`ResourceClient`] bound to a base path. The
//! builder turns (verb, sub path, optional body) into one transport round trip
//! and decodes the response into the requested type:
//!
//! ```ignore
//! let robots = ResourceClient::new(transport, "v2/robots");
//! let robot: RobotResponse = robots.get(id).await?;
//! let path = sub_path(&[&id, &"tokens"]);
//! let tokens: TokensResponse = robots.fetch(Method::GET, &path, None).await?;
//! ```

use std::fmt::Display;
use std::sync::Arc;

use reqwest::Method;
use serde::de::DeserializeOwned;
use serde::Deserialize;
use serde::Serialize;
use serde_json::Map;
use serde_json::Value;

use crate::error::SdkError;
use crate::transport::Transport;
use crate::Result;

/// Links a create parameter type to its JSON:API type tag and to the response
/// type returned by the create call.
pub trait CreateParameters: Serialize + Sync {
    const TYPE: &'static str;
    type Response: DeserializeOwned;
}

/// Top level `{"data": ...}` wrapper.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct DataEnvelope<T> {
    pub data: T,
}

/// Create payload: the type tag followed by the flattened parameters.
#[derive(Serialize, Debug)]
pub struct TypedData<'a, P> {
    #[serde(rename = "type")]
    pub type_: &'static str,
    #[serde(flatten)]
    pub params: &'a P,
}

/// A single JSON:API resource object as returned by the API.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct DataSet<I, A> {
    pub id: I,
    #[serde(rename = "type")]
    pub type_: String,
    pub attributes: A,
    #[serde(default)]
    pub meta: Map<String, Value>,
    #[serde(default)]
    pub relationships: Map<String, Value>,
}

/// Relationship mutation body, `{"data": [identifier, ...]}`.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct RelationshipList<T> {
    pub data: Vec<T>,
}

impl<T> RelationshipList<T> {
    pub fn single(identifier: T) -> Self {
        Self {
            data: vec![identifier],
        }
    }
}

/// Joins path segments with `/`, skipping empty ones.
pub fn sub_path(segments: &[&dyn Display]) -> String {
    segments
        .iter()
        .map(|segment| segment.to_string())
        .filter(|segment| !segment.is_empty())
        .collect::<Vec<_>>()
        .join("/")
}

pub fn to_body<B: Serialize + ?Sized>(body: &B) -> Result<Value> {
    serde_json::to_value(body).map_err(SdkError::Serde)
}

#[derive(Clone)]
pub struct ResourceClient {
    transport: Arc<dyn Transport>,
    base_path: &'static str,
}

impl ResourceClient {
    pub fn new(transport: Arc<dyn Transport>, base_path: &'static str) -> Self {
        Self {
            transport,
            base_path,
        }
    }

    /// Sends the request and decodes the response body into `T`.
    pub async fn fetch<T: DeserializeOwned>(
        &self,
        method: Method,
        sub_path: &str,
        body: Option<Value>,
    ) -> Result<T> {
        let req = self
            .transport
            .new_request(method, self.base_path, sub_path, body)?;
        let resp = self.transport.send(req).await?;

        serde_json::from_slice(&resp).map_err(SdkError::Decode)
    }

    /// Sends the request and discards whatever the API answers with.
    pub async fn call(&self, method: Method, sub_path: &str, body: Option<Value>) -> Result<()> {
        let req = self
            .transport
            .new_request(method, self.base_path, sub_path, body)?;
        self.transport.send(req).await?;

        Ok(())
    }

    /// POSTs `{"data": {"type": P::TYPE, ...params}}` to the base path.
    pub async fn create<P: CreateParameters>(&self, params: &P) -> Result<P::Response> {
        let body = to_body(&DataEnvelope {
            data: TypedData {
                type_: P::TYPE,
                params,
            },
        })?;

        self.fetch(Method::POST, "", Some(body)).await
    }

    pub async fn get<T: DeserializeOwned>(&self, id: impl Display) -> Result<T> {
        self.fetch(Method::GET, id.to_string().as_str(), None).await
    }

    pub async fn delete(&self, id: impl Display) -> Result<()> {
        self.call(Method::DELETE, id.to_string().as_str(), None).await
    }
}
