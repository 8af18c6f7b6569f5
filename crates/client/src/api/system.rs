//! System endpoints (`/open/system`)

use qinglong_domain::constants::paths;
use qinglong_domain::Result;
use serde_json::Value;
use tracing::{info, instrument};

use super::client::QlClient;
use super::request::ApiRequest;

/// System operations, obtained from [`QlClient::system`]
#[derive(Debug, Clone, Copy)]
pub struct System<'a> {
    client: &'a QlClient,
}

impl<'a> System<'a> {
    pub(crate) fn new(client: &'a QlClient) -> Self {
        Self { client }
    }

    /// Ask the panel to reload its own configuration
    #[instrument(skip(self))]
    pub fn reload(&self) -> Result<Value> {
        let data = self.client.execute(ApiRequest::put(paths::SYSTEM_RELOAD))?;
        info!("QingLong panel reload requested");
        Ok(data)
    }
}
