//! URL fragment building for SData resources.
//!
//! Fragments are relative to the SData root URI. Resources live under the
//! dynamic resource area:
//!
//! - Collection: `slx/dynamic/-/{kind}?format=json`
//! - Single resource: `slx/dynamic/-/{kind}("{key}")?format=json`
//! - Business rule: `slx/dynamic/-/{kind}/$service/{operation}?format=json`
//!
//! # Encoding
//!
//! Query values are percent-encoded with space as `%20`. SData cannot parse
//! form-style `+` spaces, so form encoders must not be used here.
//!
//! # Example
//!
//! ```rust
//! use sdata::resources::{collection_path, instance_path, encode_query_value};
//!
//! assert_eq!(collection_path("Account"), "slx/dynamic/-/Account");
//! assert_eq!(instance_path("Account", "abc"), "slx/dynamic/-/Account(\"abc\")");
//! assert_eq!(encode_query_value("Name eq 'A B'"), "Name%20eq%20%27A%20B%27");
//! ```

use std::collections::BTreeMap;

use crate::config::DYNAMIC_RESOURCE_PATH;

/// Query string selecting the JSON representation.
pub const FORMAT_JSON: &str = "format=json";

/// Percent-encodes a query value. Spaces become `%20`, never `+`.
#[must_use]
pub fn encode_query_value(value: &str) -> String {
    urlencoding::encode(value).into_owned()
}

/// Returns the path of a resource collection.
#[must_use]
pub fn collection_path(resource_kind: &str) -> String {
    format!("{DYNAMIC_RESOURCE_PATH}/{resource_kind}")
}

/// Returns the path of a single resource.
///
/// The key is inserted verbatim between `("` and `")`; embedded double
/// quotes are not escaped.
#[must_use]
pub fn instance_path(resource_kind: &str, key: &str) -> String {
    format!("{}(\"{key}\")", collection_path(resource_kind))
}

/// Returns the path of a business rule exposed by a resource kind.
#[must_use]
pub fn service_path(resource_kind: &str, operation_name: &str) -> String {
    format!("{}/$service/{operation_name}", collection_path(resource_kind))
}

/// Appends `?format=json` to a path.
#[must_use]
pub fn with_json_format(path: &str) -> String {
    format!("{path}?{FORMAT_JSON}")
}

/// Builds the fragment of a collection read.
///
/// The `where` clause comes first, followed by the extra query parameters
/// in key order. Parameter names are inserted verbatim; values are encoded.
#[must_use]
pub fn read_fragment(
    resource_kind: &str,
    where_clause: Option<&str>,
    query_args: Option<&BTreeMap<String, String>>,
) -> String {
    let mut url = with_json_format(&collection_path(resource_kind));

    if let Some(where_clause) = where_clause.filter(|w| !w.is_empty()) {
        url.push_str("&where=");
        url.push_str(&encode_query_value(where_clause));
    }

    for (name, value) in query_args.into_iter().flatten() {
        url.push('&');
        url.push_str(name);
        url.push('=');
        url.push_str(&encode_query_value(value));
    }

    url
}
