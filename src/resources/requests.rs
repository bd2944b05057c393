//! Request descriptors for resource operations.
//!
//! Each function renders one high-level operation into an [`SdataRequest`]
//! without touching the network, so the exact wire shape of every operation
//! can be inspected and tested on its own.

use std::collections::BTreeMap;

use serde_json::{json, Map, Value};

use crate::clients::{HttpMethod, SdataRequest};
use crate::resources::path::{
    collection_path, instance_path, read_fragment, service_path, with_json_format,
};

/// Field holding the canonical identifier of a resource.
pub const KEY_FIELD: &str = "$key";

/// Builds a collection read, optionally filtered by a `where` clause.
#[must_use]
pub fn read(
    resource_kind: &str,
    where_clause: Option<&str>,
    query_args: Option<&BTreeMap<String, String>>,
) -> SdataRequest {
    SdataRequest::get(read_fragment(resource_kind, where_clause, query_args))
}

/// Builds the creation of a resource.
#[must_use]
pub fn create(resource_kind: &str, data: Value) -> SdataRequest {
    SdataRequest::new(
        HttpMethod::Post,
        with_json_format(&collection_path(resource_kind)),
    )
    .with_payload(data)
}

/// Builds the update of a resource identified by the `$key` of `data`.
///
/// A string key is used verbatim, any other JSON value by its JSON text.
/// Data without a key renders `undefined`, which the server rejects.
#[must_use]
pub fn update(resource_kind: &str, data: Value) -> SdataRequest {
    let key = key_of(&data);
    SdataRequest::new(
        HttpMethod::Put,
        with_json_format(&instance_path(resource_kind, &key)),
    )
    .with_payload(data)
}

/// Builds the deletion of a resource.
#[must_use]
pub fn delete(resource_kind: &str, key: &str) -> SdataRequest {
    SdataRequest::new(
        HttpMethod::Delete,
        with_json_format(&instance_path(resource_kind, key)),
    )
}

/// Builds the invocation of a business rule against a record.
///
/// The payload is `{"$name": operation, "request": {"entity": {"$key": id}, ...}}`
/// where `parameters` are merged into `request`, overriding `entity` if
/// they carry one.
#[must_use]
pub fn call_business_rule(
    resource_kind: &str,
    operation_name: &str,
    record_id: &str,
    parameters: Option<&Map<String, Value>>,
) -> SdataRequest {
    let mut request = Map::new();
    request.insert("entity".to_string(), json!({ "$key": record_id }));
    if let Some(parameters) = parameters {
        for (name, value) in parameters {
            request.insert(name.clone(), value.clone());
        }
    }

    let payload = json!({
        "$name": operation_name,
        "request": request,
    });

    SdataRequest::new(
        HttpMethod::Post,
        with_json_format(&service_path(resource_kind, operation_name)),
    )
    .with_payload(payload)
}

/// Extracts the result of a business rule response.
///
/// Returns the value of `response.Result` when the field exists, even if
/// it is `null`. A missing result is not an error.
#[must_use]
pub fn business_rule_result(body: &Value) -> Option<Value> {
    body.get("response")?.get("Result").cloned()
}

fn key_of(data: &Value) -> String {
    match data.get(KEY_FIELD) {
        Some(Value::String(key)) => key.clone(),
        Some(other) => other.to_string(),
        None => "undefined".to_string(),
    }
}
