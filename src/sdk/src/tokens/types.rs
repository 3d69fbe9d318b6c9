use chrono::DateTime;
use chrono::Utc;
use serde::Deserialize;
use serde::Deserializer;
use serde::Serialize;

use crate::ids::RobotId;
use crate::ids::TokenId;
use crate::ids::UserId;
use crate::resource::CreateParameters;
use crate::resource::DataSet;

pub const TOKEN_TYPE: &str = "tokens";

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenOwnerType {
    #[serde(rename = "users")]
    User,
    #[serde(rename = "robots")]
    Robot,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, Default)]
#[serde(rename_all = "camelCase")]
pub struct TokenAttributes {
    #[serde(default)]
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct TokenOwnerData {
    #[serde(rename = "type")]
    pub type_: TokenOwnerType,
    pub id: String,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct TokenOwner {
    pub data: TokenOwnerData,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct TokenRelationships {
    pub owner: TokenOwner,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct TokenCreateParameters {
    pub attributes: TokenAttributes,
    pub relationships: TokenRelationships,
}

impl TokenCreateParameters {
    fn new(name: impl Into<String>, type_: TokenOwnerType, id: String) -> Self {
        Self {
            attributes: TokenAttributes {
                name: name.into(),
                created_at: None,
            },
            relationships: TokenRelationships {
                owner: TokenOwner {
                    data: TokenOwnerData { type_, id },
                },
            },
        }
    }

    pub fn for_robot(name: impl Into<String>, robot_id: RobotId) -> Self {
        Self::new(name, TokenOwnerType::Robot, robot_id.to_string())
    }

    pub fn for_user(name: impl Into<String>, user_id: UserId) -> Self {
        Self::new(name, TokenOwnerType::User, user_id.to_string())
    }
}

impl CreateParameters for TokenCreateParameters {
    const TYPE: &'static str = TOKEN_TYPE;
    type Response = TokenResponse;
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct TokenResponse {
    pub data: DataSet<TokenId, TokenAttributes>,
}

impl TokenResponse {
    /// The token secret. Only present in the response to a create call.
    pub fn jwt(&self) -> Option<&str> {
        self.data.meta.get("jwt").and_then(|v| v.as_str())
    }
}

/// Token listing. The collection is read from `data` or `tokens`; a missing or
/// `null` collection decodes as empty.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Default)]
pub struct TokensResponse {
    #[serde(default, alias = "tokens", deserialize_with = "deserialize_null_as_empty")]
    pub data: Vec<DataSet<TokenId, TokenAttributes>>,
}

fn deserialize_null_as_empty<'de, D, T>(de: D) -> std::result::Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Ok(Option::<Vec<T>>::deserialize(de)?.unwrap_or_default())
}
