use super::ApolloClient;
use crate::error::Result;
use crate::model::{AggRes, AggResLeftJoin, Attr, OpsGroup, Resource};
use crate::protocol::operations::*;

/// Read-only operations.
impl ApolloClient {
    /// Fetches one resource by id.
    ///
    /// An unknown id yields an empty resource rather than an error; the
    /// service answers with a `null` result.
    pub async fn query_resource_by_id(&self, id: i64) -> Result<Resource> {
        self.invoke(&QUERY_RESOURCE_BY_ID, params! { "id" => id }).await
    }

    pub async fn query_resource_by_type_and_name(&self, type_name: &str, name: &str) -> Result<Resource> {
        self.invoke(
            &QUERY_RESOURCE_BY_TYPE_AND_NAME,
            params! { "type" => type_name, "name" => name },
        )
        .await
    }

    /// Lists every resource of a type.
    pub async fn query_resources_by_type(&self, type_name: &str) -> Result<Vec<Resource>> {
        self.invoke(&QUERY_RESOURCES_BY_TYPE, params! { "type" => type_name }).await
    }

    /// Walks `graph` and returns the resources reachable as `target`.
    pub async fn query_resources_by_graph_and_target(&self, graph: &str, target: &str) -> Result<Vec<Resource>> {
        self.invoke(
            &QUERY_RESOURCES_BY_GRAPH_AND_TARGET,
            params! { "graph" => graph, "target" => target },
        )
        .await
    }

    pub async fn query_resources_by_name(&self, name: &str) -> Result<Vec<Resource>> {
        self.invoke(&QUERY_RESOURCES_BY_NAME, params! { "name" => name }).await
    }

    /// Lists the resources of a type owned by an ops group.
    pub async fn query_resources_by_group_and_type(&self, type_name: &str, group: &str) -> Result<Vec<Resource>> {
        self.invoke(
            &QUERY_RESOURCES_BY_GROUP_AND_TYPE,
            params! { "type" => type_name, "group_name" => group },
        )
        .await
    }

    /// Lists the resources of a type whose attributes match `conditions`.
    pub async fn query_resources_by_type_and_conditions(
        &self,
        type_name: &str,
        conditions: &Attr,
    ) -> Result<Vec<Resource>> {
        self.invoke(
            &QUERY_RESOURCES_BY_TYPE_AND_CONDITIONS,
            params! { "type" => type_name, "conditions" => conditions },
        )
        .await
    }

    /// Lists `primary_type` resources linked to `secondary_type` resources
    /// through `relationship`.
    pub async fn query_resources_by_relationship(
        &self,
        primary_type: &str,
        relationship: &str,
        secondary_type: &str,
    ) -> Result<Vec<Resource>> {
        self.invoke(
            &QUERY_RESOURCES_BY_RELATIONSHIP,
            params! {
                "primary_type" => primary_type,
                "relationship" => relationship,
                "secondary_type" => secondary_type,
            },
        )
        .await
    }

    /// Lists the resources that reference the resource `id`.
    pub async fn query_resources_by_referenced_id(&self, id: i64) -> Result<Vec<Resource>> {
        self.invoke(&QUERY_RESOURCES_BY_REFERENCED_ID, params! { "referenced_id" => id }).await
    }

    /// Names of every resource type.
    pub async fn list_types(&self) -> Result<Vec<String>> {
        self.invoke(&LIST_TYPES, params! {}).await
    }

    /// Names of every ops group.
    pub async fn list_ops_groups(&self) -> Result<Vec<String>> {
        self.invoke(&LIST_OPS_GROUPS, params! {}).await
    }

    /// Names of the ops groups `username` belongs to.
    pub async fn list_ops_groups_with_user(&self, username: &str) -> Result<Vec<String>> {
        self.invoke(&LIST_OPS_GROUPS_WITH_USER, params! { "username" => username }).await
    }

    /// Usernames of the members of an ops group.
    pub async fn list_users(&self, group: &str) -> Result<Vec<String>> {
        self.invoke(&LIST_USERS, params! { "group_name" => group }).await
    }

    pub async fn query_ops_group_owner(&self, group: &str) -> Result<String> {
        self.invoke(&QUERY_OPS_GROUP_OWNER, params! { "group_name" => group }).await
    }

    /// Aggregates `graph`, one field list per level of the tree.
    pub async fn query_aggregate(&self, graph: &str, fields: &[Vec<String>]) -> Result<AggRes> {
        self.invoke(&QUERY_AGGREGATE, params! { "graph" => graph, "fields" => fields }).await
    }

    /// Like [`query_aggregate`](Self::query_aggregate), restricted to one ops
    /// group.
    pub async fn query_aggregate_with_group(
        &self,
        graph: &str,
        group: &str,
        fields: &[Vec<String>],
    ) -> Result<AggRes> {
        self.invoke(
            &QUERY_AGGREGATE_WITH_GROUP,
            params! { "graph" => graph, "fields" => fields, "group_name" => group },
        )
        .await
    }

    /// Aggregates `graph` from `root`, keeping roots without matches.
    pub async fn query_aggregate_left_join(
        &self,
        graph: &str,
        root: &str,
        fields: &[String],
    ) -> Result<AggResLeftJoin> {
        self.invoke(
            &QUERY_AGGREGATE_LEFT_JOIN,
            params! { "graph" => graph, "fields" => fields, "root" => root },
        )
        .await
    }

    /// Ops group owning the resource `id`.
    pub async fn query_ops_group_by_id(&self, id: i64) -> Result<OpsGroup> {
        self.invoke(&QUERY_OPS_GROUP_BY_ID, params! { "id" => id }).await
    }

    pub async fn query_ops_group_by_type_and_name(&self, type_name: &str, name: &str) -> Result<OpsGroup> {
        self.invoke(
            &QUERY_OPS_GROUP_BY_TYPE_AND_NAME,
            params! { "type" => type_name, "name" => name },
        )
        .await
    }
}
