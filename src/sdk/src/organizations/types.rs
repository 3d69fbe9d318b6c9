use chrono::DateTime;
use chrono::Utc;
use serde::Deserialize;
use serde::Serialize;

use crate::ids::InviteId;
use crate::ids::OrganizationId;
use crate::ids::RobotId;
use crate::ids::TeamId;
use crate::ids::TokenId;
use crate::ids::UserId;

/// Permission a user holds in an organization.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum OrganizationPermissionGroup {
    /// Basic permission on an organization.
    Member,
    /// Full access to an organization.
    Owner,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Organization {
    #[serde(default)]
    pub id: OrganizationId,
    pub name: String,
    pub display_name: String,
    #[serde(default)]
    pub creator_id: UserId,
    /// Permission of the calling user, absent when the API does not report it.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub role: Option<OrganizationPermissionGroup>,
    #[serde(default)]
    pub reserved_environments: i64,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct OrganizationCreateParameters {
    pub name: String,
    pub display_name: String,
}

/// A robot as listed under its organization.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Robot {
    pub id: RobotId,
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(rename = "teamIDs", default)]
    pub team_ids: Vec<TeamId>,
    #[serde(rename = "tokenIDs", default)]
    pub token_ids: Vec<TokenId>,
    pub created_at: DateTime<Utc>,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Team {
    pub id: TeamId,
    pub name: String,
    pub created_at: DateTime<Utc>,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct User {
    pub id: UserId,
    pub name: String,
    pub email: String,
    pub username: String,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct Member {
    pub permission: OrganizationPermissionGroup,
    pub user: User,
}

/// A pending organization member.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Invite {
    pub id: InviteId,
    pub email: String,
    pub permission: OrganizationPermissionGroup,
    pub created_at: String,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct OrganizationInviteCreateParameters {
    pub email: String,
    #[serde(rename = "organizationPermission")]
    pub permission: OrganizationPermissionGroup,
}
