pub mod types;

use std::sync::Arc;

use reqwest::Method;

use crate::ids::TeamId;
use crate::organizations::Team;
use crate::resource::to_body;
use crate::resource::ResourceClient;
use crate::transport::Transport;
use crate::Result;
pub use types::TeamCreateParameters;

pub const BASE_PATH: &str = "v1/teams";

pub struct Teams {
    resource: ResourceClient,
}

impl Teams {
    pub fn new(transport: Arc<dyn Transport>) -> Self {
        Self {
            resource: ResourceClient::new(transport, BASE_PATH),
        }
    }

    pub async fn create(&self, params: &TeamCreateParameters) -> Result<Team> {
        self.resource
            .fetch(Method::POST, "", Some(to_body(params)?))
            .await
    }

    pub async fn get(&self, id: TeamId) -> Result<Team> {
        self.resource.get(id).await
    }

    pub async fn delete(&self, id: TeamId) -> Result<()> {
        self.resource.delete(id).await
    }
}
