//! Typed result decoding.
//!
//! The service returns one of a closed set of result shapes, and every call
//! site knows statically which one to expect. [`RpcResult`] is implemented for
//! exactly those shapes, so [`decode`] can only be asked for one of them.
//!
//! Decoding is where the wire's looseness is normalized away:
//! - a missing or `null` result becomes the shape's zero value
//! - a `Resource` whose `relations` (or `attributes`) is absent or `null` gets
//!   an empty mapping, at every nesting depth
//! - a `null` relation list, in a `Resource` or an `AggResLeftJoinItem`,
//!   becomes an empty list
//!
//! After this step no caller-facing value holds a null collection.

use serde::{Deserialize, Deserializer};

use crate::codec::EnvelopeCodec;
use crate::error::Result;
use crate::model::{AggRes, AggResLeftJoin, Attr, OpsGroup, Rel, Resource, ResourceType};
use crate::protocol::ResultShape;
use std::collections::BTreeMap;

mod sealed {
    pub trait Sealed {}
}

/// A result shape the service can return.
///
/// Sealed: implemented for `Resource`, `Vec<Resource>`, `String`,
/// `Vec<String>`, `bool`, `AggRes`, `AggResLeftJoin` and `OpsGroup` only.
pub trait RpcResult: serde::de::DeserializeOwned + Default + sealed::Sealed {
    const SHAPE: ResultShape;
}

macro_rules! rpc_results {
    ($($ty:ty => $shape:ident),* $(,)?) => {
        $(
            impl sealed::Sealed for $ty {}

            impl RpcResult for $ty {
                const SHAPE: ResultShape = ResultShape::$shape;
            }
        )*
    };
}

rpc_results! {
    Resource => Resource,
    Vec<Resource> => ResourceList,
    String => Text,
    Vec<String> => TextList,
    bool => Bool,
    AggRes => AggRes,
    AggResLeftJoin => AggResLeftJoin,
    OpsGroup => OpsGroup,
}

/// Decodes a response body into the statically expected result shape.
///
/// # Errors
///
/// Returns [`ApolloError::DecodeFailed`](crate::ApolloError::DecodeFailed) if
/// the body is not a JSON envelope or its result does not fit `T`.
pub fn decode<T: RpcResult>(data: &[u8]) -> Result<T> {
    let response = EnvelopeCodec::decode_response::<T>(data).inspect_err(|e| {
        tracing::debug!(
            shape = %T::SHAPE,
            error = ?std::error::Error::source(e),
            "apollo response decode failed"
        );
    })?;

    Ok(response.result.unwrap_or_default())
}

/// Wire form of a [`Resource`], where every member may be missing or null.
#[derive(Deserialize, Default)]
#[serde(default)]
pub(crate) struct RawResource {
    id: Option<i64>,
    #[serde(rename = "type")]
    kind: Option<ResourceType>,
    attributes: Option<Attr>,
    #[serde(deserialize_with = "null_lists_default")]
    relations: Rel,
}

impl From<RawResource> for Resource {
    fn from(raw: RawResource) -> Self {
        Resource {
            id: raw.id,
            kind: raw.kind.unwrap_or_default(),
            attributes: raw.attributes.unwrap_or_default(),
            relations: raw.relations,
        }
    }
}

/// Deserializes `null` as the type's zero value.
///
/// Pair with `#[serde(default)]` so a missing member behaves the same way.
pub(crate) fn null_default<'de, D, T>(deserializer: D) -> std::result::Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// Deserializes a mapping of lists, reading a `null` mapping or a `null`
/// list inside it as empty.
pub(crate) fn null_lists_default<'de, D, T>(
    deserializer: D,
) -> std::result::Result<BTreeMap<String, Vec<T>>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    let lists = Option::<BTreeMap<String, Option<Vec<T>>>>::deserialize(deserializer)?;
    Ok(lists
        .unwrap_or_default()
        .into_iter()
        .map(|(name, list)| (name, list.unwrap_or_default()))
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;
    use serde_json::json;

    fn envelope(result: serde_json::Value) -> Vec<u8> {
        serde_json::to_vec(&json!({"jsonrpc": "2.0", "id": 0, "result": result})).unwrap()
    }

    #[test]
    fn test_resource_without_relations() {
        let body = envelope(json!({"id": 1, "type": {"name": "host"}, "attributes": {"name": "host1"}}));
        let resource: Resource = decode(&body).unwrap();

        assert_eq!(resource.id, Some(1));
        assert_eq!(resource.type_name(), "host");
        assert_eq!(resource.attributes["name"], json!("host1"));
        assert!(resource.relations.is_empty());
    }

    #[test]
    fn test_resource_with_null_relations_and_attributes() {
        let body = envelope(json!({"id": 1, "type": {"name": "host"}, "attributes": null, "relations": null}));
        let resource: Resource = decode(&body).unwrap();

        assert!(resource.attributes.is_empty());
        assert!(resource.relations.is_empty());
    }

    #[test]
    fn test_nested_resources_are_normalized() {
        let body = envelope(json!({
            "id": 1,
            "type": {"name": "host"},
            "attributes": {},
            "relations": {
                "rack": [{"id": 2, "type": {"name": "rack"}, "attributes": {"name": "r1"}, "relations": null}],
                "disk": null
            }
        }));
        let resource: Resource = decode(&body).unwrap();

        let rack = &resource.related("rack")[0];
        assert_eq!(rack.id, Some(2));
        assert!(rack.relations.is_empty());
        assert!(resource.relations.contains_key("disk"));
        assert!(resource.related("disk").is_empty());
    }

    #[test]
    fn test_resource_list_preserves_order() {
        let body = envelope(json!([
            {"id": 3, "type": {"name": "host"}},
            {"id": 1, "type": {"name": "host"}, "relations": null},
            {"id": 2, "type": {"name": "host"}, "relations": {"rack": []}}
        ]));
        let resources: Vec<Resource> = decode(&body).unwrap();

        let ids: Vec<_> = resources.iter().map(|r| r.id).collect();
        assert_eq!(ids, vec![Some(3), Some(1), Some(2)]);
        assert!(resources[0].relations.is_empty());
        assert!(resources[1].relations.is_empty());
        assert_eq!(resources[2].related("rack").len(), 0);
    }

    #[test]
    fn test_empty_and_null_lists() {
        let resources: Vec<Resource> = decode(&envelope(json!([]))).unwrap();
        assert!(resources.is_empty());

        let resources: Vec<Resource> = decode(&envelope(json!(null))).unwrap();
        assert!(resources.is_empty());

        let names: Vec<String> = decode(br#"{"jsonrpc":"2.0","id":0}"#).unwrap();
        assert!(names.is_empty());
    }

    #[test]
    fn test_scalar_shapes_pass_through() {
        let owner: String = decode(&envelope(json!("alice"))).unwrap();
        assert_eq!(owner, "alice");

        let ok: bool = decode(&envelope(json!(true))).unwrap();
        assert!(ok);

        let missing: bool = decode(&envelope(json!(null))).unwrap();
        assert!(!missing);

        let types: Vec<String> = decode(&envelope(json!(["host", "rack"]))).unwrap();
        assert_eq!(types, vec!["host", "rack"]);
    }

    #[test]
    fn test_aggregate_shapes() {
        let tree: AggRes = decode(&envelope(json!({"data": {"idc": "bj"}, "children": [{"data": {"n": 1}}]}))).unwrap();
        assert_eq!(tree.children.len(), 1);

        let forest: AggResLeftJoin =
            decode(&envelope(json!({"data": [{"data": {"name": "h1"}, "children": {"disk": []}}]}))).unwrap();
        assert_eq!(forest.data.len(), 1);
    }

    #[test]
    fn test_left_join_null_child_lists() {
        let body = br#"{"jsonrpc":"2.0","id":0,"result":{"data":[{"data":{"name":"h1"},"children":{"disk":null,"nic":[{"data":{"mac":"aa"},"children":null}]}}]}}"#;
        let forest: AggResLeftJoin = decode(body).unwrap();

        let host = &forest.data[0];
        assert!(host.children.contains_key("disk"));
        assert!(host.joined("disk").is_empty());
        assert_eq!(host.joined("nic").len(), 1);
        assert!(host.joined("nic")[0].children.is_empty());
    }

    #[test]
    fn test_null_envelope_members() {
        let ok: bool = decode(br#"{"jsonrpc":null,"id":null,"result":true}"#).unwrap();
        assert!(ok);
    }

    #[test]
    fn test_ops_group_shape() {
        let group: OpsGroup = decode(&envelope(json!({"id": 5, "name": "sre", "owner": {"id": 1, "username": "bob"}}))).unwrap();
        assert_eq!(group.name, "sre");
        assert_eq!(group.owner.username, "bob");
    }

    #[test]
    fn test_truncated_body_fails_for_every_shape() {
        let body = br#"{"jsonrpc":"2.0","id":0,"result":"#;

        assert_eq!(decode::<Resource>(body).unwrap_err().kind(), ErrorKind::DecodeFailed);
        assert_eq!(decode::<Vec<Resource>>(body).unwrap_err().kind(), ErrorKind::DecodeFailed);
        assert_eq!(decode::<String>(body).unwrap_err().kind(), ErrorKind::DecodeFailed);
        assert_eq!(decode::<Vec<String>>(body).unwrap_err().kind(), ErrorKind::DecodeFailed);
        assert_eq!(decode::<bool>(body).unwrap_err().kind(), ErrorKind::DecodeFailed);
        assert_eq!(decode::<AggRes>(body).unwrap_err().kind(), ErrorKind::DecodeFailed);
        assert_eq!(decode::<AggResLeftJoin>(body).unwrap_err().kind(), ErrorKind::DecodeFailed);
        assert_eq!(decode::<OpsGroup>(body).unwrap_err().kind(), ErrorKind::DecodeFailed);
    }

    #[test]
    fn test_shape_mismatch_fails() {
        let err = decode::<bool>(&envelope(json!({"id": 1}))).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::DecodeFailed);

        let err = decode::<Vec<Resource>>(&envelope(json!({"id": 1}))).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::DecodeFailed);
    }

    #[test]
    fn test_shape_tags() {
        assert_eq!(<Resource as RpcResult>::SHAPE, ResultShape::Resource);
        assert_eq!(<Vec<Resource> as RpcResult>::SHAPE, ResultShape::ResourceList);
        assert_eq!(<String as RpcResult>::SHAPE, ResultShape::Text);
        assert_eq!(<bool as RpcResult>::SHAPE, ResultShape::Bool);
    }
}
