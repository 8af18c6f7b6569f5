//! Environment variable endpoints (`/open/envs`)

use qinglong_domain::constants::paths;
use qinglong_domain::{EnvQuery, EnvVarSpec, IdList, QlError, Result, WithId};
use serde_json::Value;
use tracing::{debug, instrument};

use super::client::QlClient;
use super::request::ApiRequest;

/// Environment variable operations, obtained from [`QlClient::envs`]
#[derive(Debug, Clone, Copy)]
pub struct Envs<'a> {
    client: &'a QlClient,
}

impl<'a> Envs<'a> {
    pub(crate) fn new(client: &'a QlClient) -> Self {
        Self { client }
    }

    /// Read variables: all of them, a server-side search, or one by id
    #[instrument(skip(self))]
    pub fn get(&self, query: EnvQuery) -> Result<Value> {
        let request = match query {
            EnvQuery::All => ApiRequest::get(paths::ENVS),
            EnvQuery::Search(value) => ApiRequest::get(paths::ENVS).query("searchValue", value),
            EnvQuery::ById(id) => ApiRequest::get(paths::env(id)),
        };
        self.client.execute(request)
    }

    pub fn list(&self) -> Result<Value> {
        self.get(EnvQuery::All)
    }

    pub fn search(&self, value: impl Into<String>) -> Result<Value> {
        self.get(EnvQuery::Search(value.into()))
    }

    pub fn get_by_id(&self, id: i64) -> Result<Value> {
        self.get(EnvQuery::ById(id))
    }

    /// Add one variable and return the created record
    ///
    /// # Errors
    ///
    /// Returns [`QlError::Decode`] if the panel answers without a record
    #[instrument(skip(self, spec), fields(name = %spec.name))]
    pub fn add(&self, spec: &EnvVarSpec) -> Result<Value> {
        let created = self.add_many(std::slice::from_ref(spec))?;
        match created {
            Value::Array(mut records) if !records.is_empty() => Ok(records.swap_remove(0)),
            other => Err(QlError::Decode(format!("expected a list of created variables, got {other}"))),
        }
    }

    /// Add several variables in one request; returns the created records
    #[instrument(skip(self, specs), fields(count = specs.len()))]
    pub fn add_many(&self, specs: &[EnvVarSpec]) -> Result<Value> {
        let created = self.client.execute(ApiRequest::post(paths::ENVS).json(specs)?)?;
        debug!("Environment variables added");
        Ok(created)
    }

    #[instrument(skip(self, spec), fields(name = %spec.name))]
    pub fn update(&self, id: i64, spec: &EnvVarSpec) -> Result<Value> {
        self.client.execute(ApiRequest::put(paths::ENVS).json(&WithId::new(id, spec))?)
    }

    #[instrument(skip(self, ids))]
    pub fn enable(&self, ids: impl Into<IdList>) -> Result<Value> {
        self.client.execute(ApiRequest::put(paths::ENVS_ENABLE).json(&ids.into())?)
    }

    #[instrument(skip(self, ids))]
    pub fn disable(&self, ids: impl Into<IdList>) -> Result<Value> {
        self.client.execute(ApiRequest::put(paths::ENVS_DISABLE).json(&ids.into())?)
    }

    #[instrument(skip(self, ids))]
    pub fn delete(&self, ids: impl Into<IdList>) -> Result<Value> {
        self.client.execute(ApiRequest::delete(paths::ENVS).json(&ids.into())?)
    }
}
