//! Operation lookup table.
//!
//! Every public operation of [`ApolloClient`](crate::ApolloClient) is one row
//! of [`OPERATIONS`]: its name, the wire method it calls, the parameter keys it
//! sends and the result shape it decodes. The client core stays free of
//! per-operation branching; the surface methods only pick their row.

use std::fmt;
use std::str::FromStr;

/// Wire method names understood by the service.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Method {
    QueryResource,
    QueryCiTypes,
    QueryOpsGroup,
    QueryOpsGroupMembers,
    QueryOpsGroupOwner,
    QueryCiOpsGroup,
    QueryAggregate,
    CreateResource,
    UpdateResource,
    UpdateCiOpsGroup,
    DeleteResource,
}

impl Method {
    pub const ALL: [Method; 11] = [
        Method::QueryResource,
        Method::QueryCiTypes,
        Method::QueryOpsGroup,
        Method::QueryOpsGroupMembers,
        Method::QueryOpsGroupOwner,
        Method::QueryCiOpsGroup,
        Method::QueryAggregate,
        Method::CreateResource,
        Method::UpdateResource,
        Method::UpdateCiOpsGroup,
        Method::DeleteResource,
    ];

    pub const fn as_str(&self) -> &'static str {
        match self {
            Method::QueryResource => "query.resource",
            Method::QueryCiTypes => "query.ci.types",
            Method::QueryOpsGroup => "query.ops.group",
            Method::QueryOpsGroupMembers => "query.ops.group.members",
            Method::QueryOpsGroupOwner => "query.ops.group.owner",
            Method::QueryCiOpsGroup => "query.ci.ops.group",
            Method::QueryAggregate => "query.aggregate",
            Method::CreateResource => "create.resource",
            Method::UpdateResource => "update.resource",
            Method::UpdateCiOpsGroup => "update.ci.ops.group",
            Method::DeleteResource => "delete.resource",
        }
    }

    /// Whether the method changes state on the service.
    pub const fn is_mutation(&self) -> bool {
        matches!(
            self,
            Method::CreateResource
                | Method::UpdateResource
                | Method::UpdateCiOpsGroup
                | Method::DeleteResource
        )
    }
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Method {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Method::ALL
            .into_iter()
            .find(|m| m.as_str() == s)
            .ok_or_else(|| format!("unknown method '{}'", s))
    }
}

/// The closed set of result shapes a call can decode into.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ResultShape {
    Resource,
    ResourceList,
    Text,
    TextList,
    Bool,
    AggRes,
    AggResLeftJoin,
    OpsGroup,
}

impl fmt::Display for ResultShape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ResultShape::Resource => "resource",
            ResultShape::ResourceList => "[resource]",
            ResultShape::Text => "string",
            ResultShape::TextList => "[string]",
            ResultShape::Bool => "bool",
            ResultShape::AggRes => "agg_res",
            ResultShape::AggResLeftJoin => "agg_res_left_join",
            ResultShape::OpsGroup => "ops_group",
        };
        f.write_str(name)
    }
}

/// One row of the operation table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Operation {
    /// Operation name, matching the client method
    pub name: &'static str,
    /// Wire method the operation calls
    pub method: Method,
    /// Parameter keys sent, in order
    pub params: &'static [&'static str],
    /// Shape the result decodes into
    pub result: ResultShape,
}

macro_rules! operations {
    ($($ident:ident: $name:literal => $method:ident [$($param:literal),*] -> $shape:ident;)*) => {
        $(
            pub const $ident: Operation = Operation {
                name: $name,
                method: Method::$method,
                params: &[$($param),*],
                result: ResultShape::$shape,
            };
        )*

        /// Every public operation, in declaration order.
        pub const OPERATIONS: &[Operation] = &[$($ident),*];
    };
}

operations! {
    QUERY_RESOURCE_BY_ID: "query_resource_by_id" => QueryResource ["id"] -> Resource;
    QUERY_RESOURCE_BY_TYPE_AND_NAME: "query_resource_by_type_and_name" => QueryResource ["type", "name"] -> Resource;
    QUERY_RESOURCES_BY_TYPE: "query_resources_by_type" => QueryResource ["type"] -> ResourceList;
    QUERY_RESOURCES_BY_GRAPH_AND_TARGET: "query_resources_by_graph_and_target" => QueryResource ["graph", "target"] -> ResourceList;
    QUERY_RESOURCES_BY_NAME: "query_resources_by_name" => QueryResource ["name"] -> ResourceList;
    QUERY_RESOURCES_BY_GROUP_AND_TYPE: "query_resources_by_group_and_type" => QueryResource ["type", "group_name"] -> ResourceList;
    QUERY_RESOURCES_BY_TYPE_AND_CONDITIONS: "query_resources_by_type_and_conditions" => QueryResource ["type", "conditions"] -> ResourceList;
    QUERY_RESOURCES_BY_RELATIONSHIP: "query_resources_by_relationship" => QueryResource ["primary_type", "relationship", "secondary_type"] -> ResourceList;
    QUERY_RESOURCES_BY_REFERENCED_ID: "query_resources_by_referenced_id" => QueryResource ["referenced_id"] -> ResourceList;
    LIST_TYPES: "list_types" => QueryCiTypes [] -> TextList;
    LIST_OPS_GROUPS: "list_ops_groups" => QueryOpsGroup [] -> TextList;
    LIST_OPS_GROUPS_WITH_USER: "list_ops_groups_with_user" => QueryOpsGroup ["username"] -> TextList;
    LIST_USERS: "list_users" => QueryOpsGroupMembers ["group_name"] -> TextList;
    QUERY_OPS_GROUP_OWNER: "query_ops_group_owner" => QueryOpsGroupOwner ["group_name"] -> Text;
    QUERY_AGGREGATE: "query_aggregate" => QueryAggregate ["graph", "fields"] -> AggRes;
    QUERY_AGGREGATE_WITH_GROUP: "query_aggregate_with_group" => QueryAggregate ["graph", "fields", "group_name"] -> AggRes;
    QUERY_AGGREGATE_LEFT_JOIN: "query_aggregate_left_join" => QueryAggregate ["graph", "fields", "root"] -> AggResLeftJoin;
    QUERY_OPS_GROUP_BY_ID: "query_ops_group_by_id" => QueryCiOpsGroup ["id"] -> OpsGroup;
    QUERY_OPS_GROUP_BY_TYPE_AND_NAME: "query_ops_group_by_type_and_name" => QueryCiOpsGroup ["type", "name"] -> OpsGroup;
    CREATE_RESOURCE: "create_resource" => CreateResource ["resource", "group_name"] -> Resource;
    CREATE_RESOURCES: "create_resources" => CreateResource ["resources", "group_name"] -> Bool;
    UPDATE_RESOURCE: "update_resource" => UpdateResource ["resource"] -> Bool;
    UPDATE_RESOURCES: "update_resources" => UpdateResource ["resources"] -> Bool;
    UPDATE_RESOURCE_BY_ID: "update_resource_by_id" => UpdateResource ["id", "attributes"] -> Bool;
    UPDATE_RESOURCE_BY_TYPE_AND_NAME: "update_resource_by_type_and_name" => UpdateResource ["type", "name", "attributes"] -> Bool;
    UPDATE_RESOURCE_RELATIONS: "update_resource_relations" => UpdateResource ["id", "rels", "rels_mode"] -> Bool;
    DELIVER_RESOURCE: "deliver_resource" => UpdateCiOpsGroup ["id", "target_group_name"] -> Bool;
    DELETE_RESOURCE_BY_ID: "delete_resource_by_id" => DeleteResource ["id"] -> Bool;
    DELETE_RESOURCE_BY_TYPE_AND_NAME: "delete_resource_by_type_and_name" => DeleteResource ["type", "name"] -> Bool;
}

/// Looks up an operation by name.
pub fn operation(name: &str) -> Option<&'static Operation> {
    OPERATIONS.iter().find(|op| op.name == name)
}
