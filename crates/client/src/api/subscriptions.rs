//! Subscription endpoints (`/open/subscriptions`)

use qinglong_domain::constants::paths;
use qinglong_domain::{IdList, Result, SubscriptionSpec, WithId};
use serde_json::Value;
use tracing::{debug, instrument};

use super::client::QlClient;
use super::request::ApiRequest;

/// Subscription operations, obtained from [`QlClient::subscriptions`]
#[derive(Debug, Clone, Copy)]
pub struct Subscriptions<'a> {
    client: &'a QlClient,
}

impl<'a> Subscriptions<'a> {
    pub(crate) fn new(client: &'a QlClient) -> Self {
        Self { client }
    }

    #[instrument(skip(self))]
    pub fn list(&self) -> Result<Value> {
        self.client.execute(ApiRequest::get(paths::SUBSCRIPTIONS))
    }

    #[instrument(skip(self, spec), fields(alias = %spec.alias, kind = %spec.kind))]
    pub fn create(&self, spec: &SubscriptionSpec) -> Result<Value> {
        let created = self.client.execute(ApiRequest::post(paths::SUBSCRIPTIONS).json(spec)?)?;
        debug!(id = ?created.get("id"), "Subscription created");
        Ok(created)
    }

    #[instrument(skip(self, spec), fields(alias = %spec.alias))]
    pub fn update(&self, id: i64, spec: &SubscriptionSpec) -> Result<Value> {
        self.client.execute(ApiRequest::put(paths::SUBSCRIPTIONS).json(&WithId::new(id, spec))?)
    }

    #[instrument(skip(self, ids))]
    pub fn delete(&self, ids: impl Into<IdList>) -> Result<Value> {
        self.bulk(ApiRequest::delete(paths::SUBSCRIPTIONS), ids.into())
    }

    /// Pull the sources now, outside their schedule
    #[instrument(skip(self, ids))]
    pub fn run(&self, ids: impl Into<IdList>) -> Result<Value> {
        self.bulk(ApiRequest::put(paths::SUBSCRIPTIONS_RUN), ids.into())
    }

    #[instrument(skip(self, ids))]
    pub fn stop(&self, ids: impl Into<IdList>) -> Result<Value> {
        self.bulk(ApiRequest::put(paths::SUBSCRIPTIONS_STOP), ids.into())
    }

    #[instrument(skip(self, ids))]
    pub fn enable(&self, ids: impl Into<IdList>) -> Result<Value> {
        self.bulk(ApiRequest::put(paths::SUBSCRIPTIONS_ENABLE), ids.into())
    }

    #[instrument(skip(self, ids))]
    pub fn disable(&self, ids: impl Into<IdList>) -> Result<Value> {
        self.bulk(ApiRequest::put(paths::SUBSCRIPTIONS_DISABLE), ids.into())
    }

    #[instrument(skip(self))]
    pub fn detail(&self, id: i64) -> Result<Value> {
        self.client.execute(ApiRequest::get(paths::subscription(id)))
    }

    /// Output of the subscription's last pull
    #[instrument(skip(self))]
    pub fn log(&self, id: i64) -> Result<Value> {
        self.client.execute(ApiRequest::get(paths::subscription_log(id)))
    }

    fn bulk(&self, request: ApiRequest, ids: IdList) -> Result<Value> {
        debug!(count = ids.len(), "Bulk subscription operation");
        self.client.execute(request.json(&ids)?)
    }
}
