use serde::{Deserialize, Serialize};

use crate::decode::null_default;

/// An operational group: who owns a set of resources and how they are shown.
///
/// Returned as an immutable snapshot; the client never mutates it.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OpsGroup {
    #[serde(default, deserialize_with = "null_default")]
    pub id: i64,
    #[serde(default, deserialize_with = "null_default")]
    pub name: String,
    #[serde(default, deserialize_with = "null_default")]
    pub proxy_id: i64,
    #[serde(default, deserialize_with = "null_default")]
    pub description: String,
    #[serde(default, deserialize_with = "null_default")]
    pub template: String,
    #[serde(default, deserialize_with = "null_default")]
    pub duty_id: i64,
    #[serde(default, deserialize_with = "null_default")]
    pub views: Vec<View>,
    #[serde(default, deserialize_with = "null_default")]
    pub users: Vec<OpsUser>,
    #[serde(default, deserialize_with = "null_default")]
    pub owner: OpsUser,
}

impl OpsGroup {
    pub fn is_member(&self, username: &str) -> bool {
        self.owner.username == username || self.users.iter().any(|u| u.username == username)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct View {
    #[serde(default, deserialize_with = "null_default")]
    pub id: i64,
    #[serde(default, deserialize_with = "null_default")]
    pub name: String,
    #[serde(default, deserialize_with = "null_default")]
    pub source: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct OpsUser {
    #[serde(default, deserialize_with = "null_default")]
    pub id: i64,
    #[serde(default, deserialize_with = "null_default")]
    pub username: String,
}
