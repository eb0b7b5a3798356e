//! Tests for the protocol module
//!
//! These tests verify the envelope shape and the consistency of the
//! operation table.

#[cfg(test)]
mod tests {
    use super::super::*;
    use serde_json::json;
    use std::collections::HashSet;

    #[test]
    fn test_request_has_exactly_four_fields() {
        let mut params = Params::new();
        params.insert("id".into(), json!(42));

        let value = serde_json::to_value(RpcRequest::new("query.resource", params)).unwrap();
        let object = value.as_object().unwrap();

        let keys: HashSet<_> = object.keys().map(String::as_str).collect();
        assert_eq!(keys, HashSet::from(["method", "params", "jsonrpc", "id"]));
        assert_eq!(object["method"], json!("query.resource"));
        assert_eq!(object["params"], json!({"id": 42}));
        assert_eq!(object["jsonrpc"], json!("2.0"));
        assert_eq!(object["id"], json!(0));
    }

    #[test]
    fn test_request_with_empty_params() {
        let value = serde_json::to_value(RpcRequest::new("query.ci.types", Params::new())).unwrap();
        assert_eq!(
            value,
            json!({"method": "query.ci.types", "params": {}, "jsonrpc": "2.0", "id": 0})
        );
    }

    #[test]
    fn test_response_missing_members_default() {
        let resp: RpcResponse<bool> = serde_json::from_value(json!({"result": true})).unwrap();
        assert_eq!(resp.jsonrpc, "");
        assert_eq!(resp.id, 0);
        assert_eq!(resp.result, Some(true));

        let resp: RpcResponse<bool> = serde_json::from_value(json!({"jsonrpc": "2.0", "id": 7})).unwrap();
        assert_eq!(resp.id, 7);
        assert_eq!(resp.result, None);

        let resp: RpcResponse<bool> = serde_json::from_value(json!({"result": null})).unwrap();
        assert_eq!(resp.result, None);

        let resp: RpcResponse<bool> =
            serde_json::from_value(json!({"jsonrpc": null, "id": null, "result": true})).unwrap();
        assert_eq!(resp.jsonrpc, "");
        assert_eq!(resp.id, 0);
        assert_eq!(resp.result, Some(true));
    }

    #[test]
    fn test_method_names() {
        assert_eq!(Method::QueryResource.as_str(), "query.resource");
        assert_eq!(Method::QueryOpsGroupMembers.to_string(), "query.ops.group.members");
        assert_eq!("update.ci.ops.group".parse::<Method>(), Ok(Method::UpdateCiOpsGroup));
        assert!("query.nothing".parse::<Method>().is_err());

        for method in Method::ALL {
            assert_eq!(method.as_str().parse::<Method>(), Ok(method));
        }
    }

    #[test]
    fn test_mutation_methods() {
        let mutations: Vec<_> = Method::ALL.into_iter().filter(Method::is_mutation).collect();
        assert_eq!(
            mutations,
            vec![
                Method::CreateResource,
                Method::UpdateResource,
                Method::UpdateCiOpsGroup,
                Method::DeleteResource,
            ]
        );
    }

    #[test]
    fn test_operation_names_unique() {
        let names: HashSet<_> = OPERATIONS.iter().map(|op| op.name).collect();
        assert_eq!(names.len(), OPERATIONS.len());
        assert_eq!(OPERATIONS.len(), 29);
    }

    #[test]
    fn test_every_method_is_used() {
        let used: HashSet<_> = OPERATIONS.iter().map(|op| op.method).collect();
        for method in Method::ALL {
            assert!(used.contains(&method), "{} has no operation", method);
        }
    }

    #[test]
    fn test_operation_lookup() {
        let op = operation("query_resource_by_type_and_name").unwrap();
        assert_eq!(op.method, Method::QueryResource);
        assert_eq!(op.params, &["type", "name"]);
        assert_eq!(op.result, ResultShape::Resource);

        let op = operation("list_types").unwrap();
        assert!(op.params.is_empty());
        assert_eq!(op.result, ResultShape::TextList);

        assert!(operation("drop_everything").is_none());
    }

    #[test]
    fn test_mutations_return_bool_except_single_create() {
        for op in OPERATIONS.iter().filter(|op| op.method.is_mutation()) {
            if op.name == "create_resource" {
                assert_eq!(op.result, ResultShape::Resource);
            } else {
                assert_eq!(op.result, ResultShape::Bool, "{}", op.name);
            }
        }
    }
}
