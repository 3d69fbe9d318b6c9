//! Robots are non-human identities owned by an organization. Besides the usual
//! create/get/delete calls a robot exposes its tokens and its team
//! memberships, the latter as JSON:API relationship mutations.

pub mod types;

use std::sync::Arc;

use reqwest::Method;

use crate::ids::RobotId;
use crate::resource::sub_path;
use crate::resource::to_body;
use crate::resource::ResourceClient;
use crate::tokens::TokensResponse;
use crate::transport::Transport;
use crate::Result;
pub use types::RobotAttributes;
pub use types::RobotCreateParameters;
pub use types::RobotOwnerType;
pub use types::RobotResponse;
pub use types::RobotTeamMembershipRelationshipList;
pub use types::RobotTeamMembershipResourceIdentifier;

pub const BASE_PATH: &str = "v2/robots";
const TOKENS_PATH: &str = "tokens";
const TEAMS_RELATION_PATH: &str = "relationships/teams";

pub struct Robots {
    resource: ResourceClient,
}

impl Robots {
    pub fn new(transport: Arc<dyn Transport>) -> Self {
        Self {
            resource: ResourceClient::new(transport, BASE_PATH),
        }
    }

    pub async fn create(&self, params: &RobotCreateParameters) -> Result<RobotResponse> {
        self.resource.create(params).await
    }

    pub async fn get(&self, id: RobotId) -> Result<RobotResponse> {
        self.resource.get(id).await
    }

    pub async fn list_tokens(&self, id: RobotId) -> Result<TokensResponse> {
        let path = sub_path(&[&id, &TOKENS_PATH]);
        self.resource.fetch(Method::GET, &path, None).await
    }

    pub async fn delete(&self, id: RobotId) -> Result<()> {
        self.resource.delete(id).await
    }

    pub async fn create_team_membership(
        &self,
        id: RobotId,
        params: &RobotTeamMembershipResourceIdentifier,
    ) -> Result<()> {
        self.mutate_team_membership(Method::POST, id, params).await
    }

    pub async fn delete_team_membership(
        &self,
        id: RobotId,
        params: &RobotTeamMembershipResourceIdentifier,
    ) -> Result<()> {
        self.mutate_team_membership(Method::DELETE, id, params).await
    }

    async fn mutate_team_membership(
        &self,
        method: Method,
        id: RobotId,
        params: &RobotTeamMembershipResourceIdentifier,
    ) -> Result<()> {
        let body = to_body(&RobotTeamMembershipRelationshipList::single(*params))?;
        let path = sub_path(&[&id, &TEAMS_RELATION_PATH]);
        self.resource.call(method, &path, Some(body)).await
    }
}
