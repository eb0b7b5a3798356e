use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;

use crate::decode::{null_default, RawResource};

/// Free-form attribute mapping of a resource.
pub type Attr = serde_json::Map<String, Value>;

/// Relations of a resource, keyed by relation name.
pub type Rel = BTreeMap<String, Vec<Resource>>;

/// The type a resource belongs to, e.g. `host` or `rack`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ResourceType {
    #[serde(default, deserialize_with = "null_default")]
    pub name: String,
}

impl ResourceType {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

/// A CMDB record.
///
/// Resources are created by the service; the client only builds a skeleton to
/// send and receives a fully populated one back. A decoded resource always
/// has a (possibly empty) `relations` mapping, whether or not the wire
/// payload carried one.
///
/// # Wire Format
///
/// ```json
/// {"id": 42, "type": {"name": "host"}, "attributes": {"name": "host1"}, "relations": {}}
/// ```
///
/// `id` is omitted when absent.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(from = "RawResource")]
pub struct Resource {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    #[serde(rename = "type")]
    pub kind: ResourceType,
    pub attributes: Attr,
    pub relations: Rel,
}

impl Resource {
    /// Creates an empty resource of the given type.
    pub fn new(type_name: impl Into<String>) -> Self {
        Self {
            kind: ResourceType::new(type_name),
            ..Self::default()
        }
    }

    pub fn with_id(mut self, id: i64) -> Self {
        self.id = Some(id);
        self
    }

    pub fn with_attribute(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.attributes.insert(key.into(), value.into());
        self
    }

    pub fn with_attributes(mut self, attributes: Attr) -> Self {
        self.attributes.extend(attributes);
        self
    }

    /// Appends `resources` to the relation named `name`.
    pub fn with_relation(mut self, name: impl Into<String>, resources: Vec<Resource>) -> Self {
        self.relations.entry(name.into()).or_default().extend(resources);
        self
    }

    pub fn type_name(&self) -> &str {
        &self.kind.name
    }

    pub fn attribute(&self, key: &str) -> Option<&Value> {
        self.attributes.get(key)
    }

    /// Views the attributes through a typed struct such as [`AttrBase`].
    pub fn attributes_as<T: DeserializeOwned>(&self) -> serde_json::Result<T> {
        serde_json::from_value(Value::Object(self.attributes.clone()))
    }

    /// Resources related through `name`, empty if the relation is absent.
    pub fn related(&self, name: &str) -> &[Resource] {
        self.relations.get(name).map(Vec::as_slice).unwrap_or_default()
    }
}

/// Attributes shared by most resource types.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AttrBase {
    #[serde(default, deserialize_with = "null_default")]
    pub name: String,
    #[serde(default, deserialize_with = "null_default")]
    pub state: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub create_time: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub update_time: Option<i64>,
}

impl AttrBase {
    pub fn new(name: impl Into<String>, state: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            state: state.into(),
            ..Self::default()
        }
    }
}

impl From<AttrBase> for Attr {
    fn from(base: AttrBase) -> Self {
        let mut attr = Attr::new();
        attr.insert("name".into(), Value::String(base.name));
        attr.insert("state".into(), Value::String(base.state));
        if let Some(ts) = base.create_time {
            attr.insert("create_time".into(), Value::from(ts));
        }
        if let Some(ts) = base.update_time {
            attr.insert("update_time".into(), Value::from(ts));
        }
        attr
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::consts::state;
    use serde_json::json;

    #[test]
    fn test_resource_builder() {
        let rack = Resource::new("rack").with_id(7);
        let host = Resource::new("host")
            .with_attribute("name", "host1")
            .with_relation("rack", vec![rack.clone()]);

        assert_eq!(host.type_name(), "host");
        assert_eq!(host.id, None);
        assert_eq!(host.attribute("name"), Some(&json!("host1")));
        assert_eq!(host.related("rack"), &[rack]);
        assert!(host.related("switch").is_empty());
    }

    #[test]
    fn test_resource_serialization_omits_missing_id() {
        let value = serde_json::to_value(Resource::new("host").with_attribute("name", "host1")).unwrap();
        assert_eq!(
            value,
            json!({"type": {"name": "host"}, "attributes": {"name": "host1"}, "relations": {}})
        );

        let value = serde_json::to_value(Resource::new("host").with_id(3)).unwrap();
        assert_eq!(value["id"], json!(3));
    }

    #[test]
    fn test_attributes_as_typed_view() {
        let host = Resource::new("host")
            .with_attribute("name", "host1")
            .with_attribute("state", state::ONLINE)
            .with_attribute("create_time", 1_700_000_000);

        let base: AttrBase = host.attributes_as().unwrap();
        assert_eq!(base.name, "host1");
        assert_eq!(base.state, ":online");
        assert_eq!(base.create_time, Some(1_700_000_000));
        assert_eq!(base.update_time, None);
    }

    #[test]
    fn test_attr_base_into_attr() {
        let attr: Attr = AttrBase::new("host1", state::INVENTORY).into();
        assert_eq!(attr.get("name"), Some(&json!("host1")));
        assert_eq!(attr.get("state"), Some(&json!(":inventory")));
        assert!(!attr.contains_key("create_time"));
    }
}
