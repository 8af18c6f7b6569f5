//! Config file endpoints (`/open/configs`)

use qinglong_domain::constants::paths;
use qinglong_domain::{ConfigSave, Result};
use serde_json::Value;
use tracing::instrument;

use super::client::QlClient;
use super::request::ApiRequest;

/// Config file operations, obtained from [`QlClient::configs`]
#[derive(Debug, Clone, Copy)]
pub struct Configs<'a> {
    client: &'a QlClient,
}

impl<'a> Configs<'a> {
    pub(crate) fn new(client: &'a QlClient) -> Self {
        Self { client }
    }

    /// Names of the editable config files
    #[instrument(skip(self))]
    pub fn files(&self) -> Result<Value> {
        self.client.execute(ApiRequest::get(paths::CONFIGS_FILES))
    }

    /// Content of one config file, e.g. `config.sh`
    #[instrument(skip(self))]
    pub fn detail(&self, path: &str) -> Result<Value> {
        self.client.execute(ApiRequest::get(paths::CONFIGS_DETAIL).query("path", path))
    }

    /// Overwrite a config file
    #[instrument(skip(self, content), fields(bytes = content.len()))]
    pub fn save(&self, name: &str, content: &str) -> Result<Value> {
        let body = ConfigSave { name: name.to_string(), content: content.to_string() };
        self.client.execute(ApiRequest::post(paths::CONFIGS_SAVE).json(&body)?)
    }
}
