pub mod types;

use std::sync::Arc;

use reqwest::Method;

use crate::ids::InviteId;
use crate::ids::OrganizationId;
use crate::ids::UserId;
use crate::resource::sub_path;
use crate::resource::to_body;
use crate::resource::ResourceClient;
use crate::transport::Transport;
use crate::Result;
pub use types::Invite;
pub use types::Member;
pub use types::Organization;
pub use types::OrganizationCreateParameters;
pub use types::OrganizationInviteCreateParameters;
pub use types::OrganizationPermissionGroup;
pub use types::Robot;
pub use types::Team;
pub use types::User;

pub const BASE_PATH: &str = "v1/organizations";
const MEMBERS_PATH: &str = "members";
const INVITES_PATH: &str = "invites";
const ROBOTS_PATH: &str = "robots";
const TEAMS_PATH: &str = "teams";

pub struct Organizations {
    resource: ResourceClient,
}

impl Organizations {
    pub fn new(transport: Arc<dyn Transport>) -> Self {
        Self {
            resource: ResourceClient::new(transport, BASE_PATH),
        }
    }

    pub async fn create(&self, params: &OrganizationCreateParameters) -> Result<Organization> {
        self.resource
            .fetch(Method::POST, "", Some(to_body(params)?))
            .await
    }

    pub async fn get(&self, id: OrganizationId) -> Result<Organization> {
        self.resource.get(id).await
    }

    pub async fn list(&self) -> Result<Vec<Organization>> {
        self.resource.fetch(Method::GET, "", None).await
    }

    pub async fn delete(&self, id: OrganizationId) -> Result<()> {
        self.resource.delete(id).await
    }

    pub async fn list_members(&self, id: OrganizationId) -> Result<Vec<Member>> {
        let path = sub_path(&[&id, &MEMBERS_PATH]);
        self.resource.fetch(Method::GET, &path, None).await
    }

    pub async fn remove_member(&self, id: OrganizationId, user_id: UserId) -> Result<()> {
        let path = sub_path(&[&id, &MEMBERS_PATH, &user_id]);
        self.resource.call(Method::DELETE, &path, None).await
    }

    pub async fn list_invites(&self, id: OrganizationId) -> Result<Vec<Invite>> {
        let path = sub_path(&[&id, &INVITES_PATH]);
        self.resource.fetch(Method::GET, &path, None).await
    }

    pub async fn create_invite(
        &self,
        id: OrganizationId,
        params: &OrganizationInviteCreateParameters,
    ) -> Result<()> {
        let body = to_body(params)?;
        let path = sub_path(&[&id, &INVITES_PATH]);
        self.resource.call(Method::POST, &path, Some(body)).await
    }

    pub async fn delete_invite(&self, id: OrganizationId, invite_id: InviteId) -> Result<()> {
        let path = sub_path(&[&id, &INVITES_PATH, &invite_id]);
        self.resource.call(Method::DELETE, &path, None).await
    }

    pub async fn list_robots(&self, id: OrganizationId) -> Result<Vec<Robot>> {
        let path = sub_path(&[&id, &ROBOTS_PATH]);
        self.resource.fetch(Method::GET, &path, None).await
    }

    pub async fn list_teams(&self, id: OrganizationId) -> Result<Vec<Team>> {
        let path = sub_path(&[&id, &TEAMS_PATH]);
        self.resource.fetch(Method::GET, &path, None).await
    }
}
