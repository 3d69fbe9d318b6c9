use serde::Deserialize;
use serde::Serialize;

use crate::ids::OrganizationId;

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct TeamCreateParameters {
    pub name: String,
    pub organization_id: OrganizationId,
}
