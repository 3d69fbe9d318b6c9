use chrono::DateTime;
use chrono::Utc;
use serde::Deserialize;
use serde::Serialize;

use crate::ids::OrganizationId;
use crate::ids::RobotId;
use crate::ids::TeamId;
use crate::resource::CreateParameters;
use crate::resource::DataSet;
use crate::resource::RelationshipList;

pub const ROBOT_TYPE: &str = "robots";

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum RobotOwnerType {
    Organization,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, Default)]
#[serde(rename_all = "camelCase")]
pub struct RobotAttributes {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct RobotOwnerData {
    #[serde(rename = "type")]
    pub type_: RobotOwnerType,
    pub id: String,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct RobotOwner {
    pub data: RobotOwnerData,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct RobotRelationships {
    pub owner: RobotOwner,
}

/// Parameters for creating a robot owned by an organization.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct RobotCreateParameters {
    pub attributes: RobotAttributes,
    pub relationships: RobotRelationships,
}

impl RobotCreateParameters {
    pub fn new(
        name: impl Into<String>,
        description: impl Into<String>,
        organization_id: OrganizationId,
    ) -> Self {
        Self {
            attributes: RobotAttributes {
                name: name.into(),
                description: description.into(),
                created_at: None,
            },
            relationships: RobotRelationships {
                owner: RobotOwner {
                    data: RobotOwnerData {
                        type_: RobotOwnerType::Organization,
                        id: organization_id.to_string(),
                    },
                },
            },
        }
    }
}

impl CreateParameters for RobotCreateParameters {
    const TYPE: &'static str = ROBOT_TYPE;
    type Response = RobotResponse;
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct RobotResponse {
    pub data: DataSet<RobotId, RobotAttributes>,
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum RobotTeamMembershipType {
    Team,
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub struct RobotTeamMembershipResourceIdentifier {
    #[serde(rename = "type")]
    pub type_: RobotTeamMembershipType,
    pub id: TeamId,
}

impl RobotTeamMembershipResourceIdentifier {
    pub fn team(id: TeamId) -> Self {
        Self {
            type_: RobotTeamMembershipType::Team,
            id,
        }
    }
}

pub type RobotTeamMembershipRelationshipList =
    RelationshipList<RobotTeamMembershipResourceIdentifier>;
