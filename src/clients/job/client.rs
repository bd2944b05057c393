//! Client for the SData scheduling service.

use std::collections::BTreeMap;

use serde_json::Value;

use crate::clients::{SdataClient, SdataError};
use crate::resources::job::{self, TriggerPayload};
use crate::resources::KEY_FIELD;

/// Client for triggering jobs and polling their executions.
///
/// Borrows an [`SdataClient`] and reuses its credentials and error handling.
///
/// # Example
///
/// ```rust,ignore
/// use std::collections::BTreeMap;
/// use serde_json::json;
///
/// let jobs = client.jobs();
///
/// let mut params = BTreeMap::new();
/// params.insert("ReportId".to_string(), json!("p6UJ9A0002VB"));
///
/// let trigger_id = jobs
///     .trigger_job("Saleslogix.Reporting.Jobs.CrystalReportsJob", None, Some(&params))
///     .await?;
///
/// if let Some(trigger_id) = trigger_id {
///     let status = jobs.get_execution_status(&trigger_id).await?;
/// }
/// ```
#[derive(Clone, Copy, Debug)]
pub struct JobClient<'a> {
    client: &'a SdataClient,
}

// Verify JobClient is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<JobClient<'static>>();
};

impl<'a> JobClient<'a> {
    /// Creates a job client on top of a resource client.
    #[must_use]
    pub const fn new(client: &'a SdataClient) -> Self {
        Self { client }
    }

    /// Triggers a job to be executed immediately.
    ///
    /// # Arguments
    ///
    /// * `job_id` - Job definition id, e.g. `Saleslogix.Reporting.Jobs.CrystalReportsJob`
    /// * `descriptor` - Job descriptor; defaults to the job id
    /// * `params` - Job parameters, sent as `{"Name", "Value"}` pairs
    ///
    /// Resolves to the `$key` of the created trigger, used to poll the
    /// execution status, or `None` if the server returned no key.
    ///
    /// # Errors
    ///
    /// Returns [`SdataError`] if the request fails.
    pub async fn trigger_job(
        &self,
        job_id: &str,
        descriptor: Option<&str>,
        params: Option<&BTreeMap<String, Value>>,
    ) -> Result<Option<String>, SdataError> {
        let payload = TriggerPayload::new(job_id, descriptor, params);
        let request = job::trigger(&payload).map_err(|e| SdataError::InvalidRequest {
            reason: e.to_string(),
        })?;

        let response = self.client.send(&request).await?;
        let trigger_id = response
            .get(KEY_FIELD)
            .and_then(Value::as_str)
            .map(str::to_string);

        tracing::debug!("Triggered job {job_id}: trigger {trigger_id:?}");
        Ok(trigger_id)
    }

    /// Retrieves the executions of a trigger.
    ///
    /// Resolves to the raw executions feed; a trigger without executions
    /// yields a feed without matching entries rather than an error.
    ///
    /// # Errors
    ///
    /// Returns [`SdataError`] if the request fails.
    pub async fn get_execution_status(&self, trigger_id: &str) -> Result<Value, SdataError> {
        self.client.send(&job::execution_status(trigger_id)).await
    }
}
