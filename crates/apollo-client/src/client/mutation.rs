use super::ApolloClient;
use crate::error::Result;
use crate::model::{Attr, Rel, Resource};
use crate::protocol::operations::*;

/// State-changing operations.
///
/// Each is sent once. A call that fails in transit may or may not have been
/// applied by the service.
impl ApolloClient {
    /// Creates a resource in an ops group and returns it as stored, id
    /// included.
    pub async fn create_resource(&self, resource: &Resource, group: &str) -> Result<Resource> {
        self.invoke(
            &CREATE_RESOURCE,
            params! { "resource" => resource, "group_name" => group },
        )
        .await
    }

    pub async fn create_resources(&self, resources: &[Resource], group: &str) -> Result<bool> {
        self.invoke(
            &CREATE_RESOURCES,
            params! { "resources" => resources, "group_name" => group },
        )
        .await
    }

    /// Replaces a resource, matched by its id.
    pub async fn update_resource(&self, resource: &Resource) -> Result<bool> {
        self.invoke(&UPDATE_RESOURCE, params! { "resource" => resource }).await
    }

    pub async fn update_resources(&self, resources: &[Resource]) -> Result<bool> {
        self.invoke(&UPDATE_RESOURCES, params! { "resources" => resources }).await
    }

    /// Merges `attributes` into the resource `id`.
    pub async fn update_resource_by_id(&self, id: i64, attributes: &Attr) -> Result<bool> {
        self.invoke(
            &UPDATE_RESOURCE_BY_ID,
            params! { "id" => id, "attributes" => attributes },
        )
        .await
    }

    pub async fn update_resource_by_type_and_name(
        &self,
        type_name: &str,
        name: &str,
        attributes: &Attr,
    ) -> Result<bool> {
        self.invoke(
            &UPDATE_RESOURCE_BY_TYPE_AND_NAME,
            params! { "type" => type_name, "name" => name, "attributes" => attributes },
        )
        .await
    }

    /// Updates the relations of the resource `id`.
    ///
    /// `mode` is passed through to the service untouched.
    pub async fn update_resource_relations(&self, id: i64, relations: &Rel, mode: &str) -> Result<bool> {
        self.invoke(
            &UPDATE_RESOURCE_RELATIONS,
            params! { "id" => id, "rels" => relations, "rels_mode" => mode },
        )
        .await
    }

    /// Hands the resource `id` over to another ops group.
    pub async fn deliver_resource(&self, target_group: &str, id: i64) -> Result<bool> {
        self.invoke(
            &DELIVER_RESOURCE,
            params! { "id" => id, "target_group_name" => target_group },
        )
        .await
    }

    pub async fn delete_resource_by_id(&self, id: i64) -> Result<bool> {
        self.invoke(&DELETE_RESOURCE_BY_ID, params! { "id" => id }).await
    }

    pub async fn delete_resource_by_type_and_name(&self, type_name: &str, name: &str) -> Result<bool> {
        self.invoke(
            &DELETE_RESOURCE_BY_TYPE_AND_NAME,
            params! { "type" => type_name, "name" => name },
        )
        .await
    }
}
