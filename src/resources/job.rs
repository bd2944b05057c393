//! Request shapes of the SData scheduling service.
//!
//! Jobs are triggered by posting a trigger resource to
//! `$app/scheduling/-/triggers` and polled through the executions feed,
//! filtered by trigger id.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::clients::{HttpMethod, SdataRequest};
use crate::resources::path::{encode_query_value, with_json_format};

/// Root of the scheduling service, relative to the SData root URI.
pub const SCHEDULING_PATH: &str = "$app/scheduling/-";

/// A named job parameter, serialized as `{"Name": ..., "Value": ...}`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct JobParameter {
    /// Parameter name, as declared by the job definition.
    #[serde(rename = "Name")]
    pub name: String,
    /// Parameter value.
    #[serde(rename = "Value")]
    pub value: Value,
}

/// Reference to a job definition.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct JobReference {
    /// The job definition id, e.g. `Saleslogix.Reporting.Jobs.CrystalReportsJob`.
    #[serde(rename = "$key")]
    pub key: String,
}

/// Payload posted to the triggers collection.
///
/// # Example
///
/// ```rust
/// use sdata::resources::TriggerPayload;
/// use serde_json::json;
///
/// let payload = TriggerPayload::new("JobX", None, None);
/// assert_eq!(
///     serde_json::to_value(&payload).unwrap(),
///     json!({"$descriptor": "JobX", "job": {"$key": "JobX"}, "parameters": []})
/// );
/// ```
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct TriggerPayload {
    /// Human readable description; defaults to the job id.
    #[serde(rename = "$descriptor")]
    pub descriptor: String,
    /// The job to run.
    pub job: JobReference,
    /// Job parameters.
    pub parameters: Vec<JobParameter>,
}

impl TriggerPayload {
    /// Builds a trigger payload. An empty or missing descriptor falls back
    /// to the job id.
    #[must_use]
    pub fn new(
        job_id: &str,
        descriptor: Option<&str>,
        params: Option<&BTreeMap<String, Value>>,
    ) -> Self {
        let descriptor = descriptor.filter(|d| !d.is_empty()).unwrap_or(job_id);
        let parameters = params
            .into_iter()
            .flatten()
            .map(|(name, value)| JobParameter {
                name: name.clone(),
                value: value.clone(),
            })
            .collect();

        Self {
            descriptor: descriptor.to_string(),
            job: JobReference {
                key: job_id.to_string(),
            },
            parameters,
        }
    }
}

/// Builds the request triggering a job.
///
/// # Errors
///
/// Returns the serialization error if the payload cannot be converted to JSON.
pub fn trigger(payload: &TriggerPayload) -> Result<SdataRequest, serde_json::Error> {
    let body = serde_json::to_value(payload)?;
    let fragment = with_json_format(&format!("{SCHEDULING_PATH}/triggers"));
    Ok(SdataRequest::new(HttpMethod::Post, fragment).with_payload(body))
}

/// Builds the request reading the executions of a trigger.
///
/// The trigger id is percent-encoded and single-quoted inside the filter.
#[must_use]
pub fn execution_status(trigger_id: &str) -> SdataRequest {
    let filter = format!("triggerId%20eq%20'{}'", encode_query_value(trigger_id));
    let fragment = with_json_format(&format!("{SCHEDULING_PATH}/executions({filter})"));
    SdataRequest::get(fragment)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_trigger_payload_defaults_descriptor_to_job_id() {
        let mut params = BTreeMap::new();
        params.insert("Foo".to_string(), json!("bar"));

        let payload = TriggerPayload::new("JobX", None, Some(&params));

        assert_eq!(
            serde_json::to_value(&payload).unwrap(),
            json!({
                "$descriptor": "JobX",
                "job": {"$key": "JobX"},
                "parameters": [{"Name": "Foo", "Value": "bar"}]
            })
        );
    }

    #[test]
    fn test_trigger_payload_with_descriptor() {
        let payload = TriggerPayload::new("JobX", Some("Nightly report"), None);
        assert_eq!(payload.descriptor, "Nightly report");
        assert_eq!(payload.job.key, "JobX");
        assert!(payload.parameters.is_empty());
    }

    #[test]
    fn test_trigger_request_shape() {
        let payload = TriggerPayload::new("JobX", None, None);
        let request = trigger(&payload).unwrap();

        assert_eq!(request.method, HttpMethod::Post);
        assert_eq!(request.url, "$app/scheduling/-/triggers?format=json");
        assert_eq!(request.payload.unwrap()["job"]["$key"], "JobX");
    }

    #[test]
    fn test_execution_status_request_quotes_and_encodes_trigger_id() {
        let request = execution_status("abc 12/3");

        assert_eq!(request.method, HttpMethod::Get);
        assert_eq!(
            request.url,
            "$app/scheduling/-/executions(triggerId%20eq%20'abc%2012%2F3')?format=json"
        );
        assert!(request.payload.is_none());
    }
}
