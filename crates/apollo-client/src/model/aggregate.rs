use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;

use crate::decode::{null_default, null_lists_default};

/// A grouped aggregation result.
///
/// Each level holds the grouped values in `data` and the next grouping level
/// in `children`. The depth follows the `fields` of the query and is not
/// bounded by the client.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AggRes {
    #[serde(default, deserialize_with = "null_default", skip_serializing_if = "serde_json::Map::is_empty")]
    pub data: serde_json::Map<String, Value>,
    #[serde(default, deserialize_with = "null_default", skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<AggRes>,
}

impl AggRes {
    /// Number of nodes in the tree, this one included.
    pub fn len(&self) -> usize {
        1 + self.children.iter().map(AggRes::len).sum::<usize>()
    }

    /// True when the node carries neither data nor children.
    pub fn is_empty(&self) -> bool {
        self.data.is_empty() && self.children.is_empty()
    }

    /// Longest path from this node to a leaf, counted in nodes.
    pub fn depth(&self) -> usize {
        1 + self.children.iter().map(AggRes::depth).max().unwrap_or(0)
    }
}

/// A left-join shaped aggregation result: a forest rooted at the query's
/// `root` type.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AggResLeftJoin {
    #[serde(default, deserialize_with = "null_default", skip_serializing_if = "Vec::is_empty")]
    pub data: Vec<AggResLeftJoinItem>,
}

/// One node of an [`AggResLeftJoin`] forest; children are keyed by relation
/// name.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AggResLeftJoinItem {
    #[serde(default, deserialize_with = "null_default", skip_serializing_if = "serde_json::Map::is_empty")]
    pub data: serde_json::Map<String, Value>,
    #[serde(default, deserialize_with = "null_lists_default", skip_serializing_if = "BTreeMap::is_empty")]
    pub children: BTreeMap<String, Vec<AggResLeftJoinItem>>,
}

impl AggResLeftJoinItem {
    /// Items joined through `relation`, empty if there are none.
    pub fn joined(&self, relation: &str) -> &[AggResLeftJoinItem] {
        self.children.get(relation).map(Vec::as_slice).unwrap_or_default()
    }
}
