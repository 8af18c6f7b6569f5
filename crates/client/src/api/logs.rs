//! Log file endpoints (`/open/logs`)

use qinglong_domain::constants::paths;
use qinglong_domain::Result;
use serde_json::Value;
use tracing::instrument;

use super::client::QlClient;
use super::request::ApiRequest;

/// Log store operations, obtained from [`QlClient::logs`]
#[derive(Debug, Clone, Copy)]
pub struct Logs<'a> {
    client: &'a QlClient,
}

impl<'a> Logs<'a> {
    pub(crate) fn new(client: &'a QlClient) -> Self {
        Self { client }
    }

    /// Tree of every log directory and file
    #[instrument(skip(self))]
    pub fn list(&self) -> Result<Value> {
        self.client.execute(ApiRequest::get(paths::LOGS))
    }

    /// Content of one log file, addressed by directory and filename
    #[instrument(skip(self))]
    pub fn detail(&self, directory: &str, filename: &str) -> Result<Value> {
        let request = ApiRequest::get(paths::LOGS_DETAIL)
            .query("file", filename)
            .query("path", directory);
        self.client.execute(request)
    }
}
