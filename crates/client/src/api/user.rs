//! User settings endpoints (`/open/user`)

use qinglong_domain::constants::paths;
use qinglong_domain::{NotificationChannel, Result};
use serde_json::Value;
use tracing::instrument;

use super::client::QlClient;
use super::request::ApiRequest;

/// User settings, obtained from [`QlClient::user`]
#[derive(Debug, Clone, Copy)]
pub struct User<'a> {
    client: &'a QlClient,
}

impl<'a> User<'a> {
    pub(crate) fn new(client: &'a QlClient) -> Self {
        Self { client }
    }

    /// Configure the notification channel by type name and key
    ///
    /// # Errors
    ///
    /// Returns [`QlError::Unsupported`](qinglong_domain::QlError::Unsupported)
    /// without contacting the panel for any type other than `lark`
    #[instrument(skip(self, key))]
    pub fn notification(&self, kind: &str, key: &str) -> Result<Value> {
        let channel = NotificationChannel::parse(kind, key)?;
        self.set_notification(&channel)
    }

    #[instrument(skip(self, channel), fields(kind = channel.kind()))]
    pub fn set_notification(&self, channel: &NotificationChannel) -> Result<Value> {
        self.client.execute(ApiRequest::post(paths::USER_NOTIFICATION).json(channel)?)
    }
}
