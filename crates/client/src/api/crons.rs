//! Cron job endpoints (`/open/crons`)

use qinglong_domain::constants::paths;
use qinglong_domain::{IdList, JobSpec, LabelChange, LabelList, Result, WithId};
use serde_json::Value;
use tracing::{debug, instrument};

use super::client::QlClient;
use super::request::ApiRequest;

/// Cron job operations, obtained from [`QlClient::crons`]
#[derive(Debug, Clone, Copy)]
pub struct Crons<'a> {
    client: &'a QlClient,
}

impl<'a> Crons<'a> {
    pub(crate) fn new(client: &'a QlClient) -> Self {
        Self { client }
    }

    /// List every cron job
    #[instrument(skip(self))]
    pub fn list(&self) -> Result<Value> {
        self.client.execute(ApiRequest::get(paths::CRONS))
    }

    /// Get one job by id
    #[instrument(skip(self))]
    pub fn get(&self, id: i64) -> Result<Value> {
        self.client.execute(ApiRequest::get(paths::cron(id)))
    }

    /// Create a job; the response carries the server-assigned `id`
    ///
    /// # Errors
    ///
    /// Returns error if the panel rejects the payload
    #[instrument(skip(self, spec), fields(name = %spec.name))]
    pub fn create(&self, spec: &JobSpec) -> Result<Value> {
        let created = self.client.execute(ApiRequest::post(paths::CRONS).json(spec)?)?;
        debug!(id = ?created.get("id"), "Cron job created");
        Ok(created)
    }

    /// Replace a job's definition
    #[instrument(skip(self, spec), fields(name = %spec.name))]
    pub fn update(&self, id: i64, spec: &JobSpec) -> Result<Value> {
        self.client.execute(ApiRequest::put(paths::CRONS).json(&WithId::new(id, spec))?)
    }

    #[instrument(skip(self, ids))]
    pub fn delete(&self, ids: impl Into<IdList>) -> Result<Value> {
        self.bulk(ApiRequest::delete(paths::CRONS), ids.into())
    }

    /// Start the jobs now, outside their schedule
    #[instrument(skip(self, ids))]
    pub fn run(&self, ids: impl Into<IdList>) -> Result<Value> {
        self.bulk(ApiRequest::put(paths::CRONS_RUN), ids.into())
    }

    #[instrument(skip(self, ids))]
    pub fn stop(&self, ids: impl Into<IdList>) -> Result<Value> {
        self.bulk(ApiRequest::put(paths::CRONS_STOP), ids.into())
    }

    #[instrument(skip(self, ids))]
    pub fn enable(&self, ids: impl Into<IdList>) -> Result<Value> {
        self.bulk(ApiRequest::put(paths::CRONS_ENABLE), ids.into())
    }

    #[instrument(skip(self, ids))]
    pub fn disable(&self, ids: impl Into<IdList>) -> Result<Value> {
        self.bulk(ApiRequest::put(paths::CRONS_DISABLE), ids.into())
    }

    /// Attach labels to every given job
    #[instrument(skip(self, ids, labels))]
    pub fn add_labels(
        &self,
        ids: impl Into<IdList>,
        labels: impl Into<LabelList>,
    ) -> Result<Value> {
        let change = LabelChange { ids: ids.into(), labels: labels.into() };
        self.client.execute(ApiRequest::post(paths::CRONS_LABELS).json(&change)?)
    }

    /// Detach labels from every given job
    #[instrument(skip(self, ids, labels))]
    pub fn remove_labels(
        &self,
        ids: impl Into<IdList>,
        labels: impl Into<LabelList>,
    ) -> Result<Value> {
        let change = LabelChange { ids: ids.into(), labels: labels.into() };
        self.client.execute(ApiRequest::delete(paths::CRONS_LABELS).json(&change)?)
    }

    /// Log files recorded for a job (each entry has `directory`/`filename`)
    #[instrument(skip(self))]
    pub fn logs(&self, id: i64) -> Result<Value> {
        self.client.execute(ApiRequest::get(paths::cron_logs(id)))
    }

    /// Content of the job's most recent log
    #[instrument(skip(self))]
    pub fn latest_log(&self, id: i64) -> Result<Value> {
        self.client.execute(ApiRequest::get(paths::cron_log(id)))
    }

    fn bulk(&self, request: ApiRequest, ids: IdList) -> Result<Value> {
        debug!(count = ids.len(), "Bulk cron operation");
        self.client.execute(request.json(&ids)?)
    }
}
