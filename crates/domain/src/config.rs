//! Client configuration

use std::fmt;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::constants::DEFAULT_BASE_URL;
use crate::errors::{QlError, Result};

/// Connection parameters for a QingLong panel
///
/// Loaded from the environment or from a TOML/JSON file by the client crate's
/// config loader, or built directly with [`ClientConfig::new`].
#[derive(Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ClientConfig {
    /// Panel address, e.g. `http://127.0.0.1:5700`
    #[serde(default = "default_base_url")]
    pub base_url: String,
    /// Application client id issued by the panel
    pub client_id: String,
    /// Application client secret issued by the panel
    pub client_secret: String,
    /// Per-request timeout; the transport default applies when unset
    #[serde(default)]
    pub timeout_secs: Option<u64>,
    /// Accept self-signed or otherwise invalid TLS certificates
    #[serde(default)]
    pub accept_invalid_certs: bool,
    /// Overrides the default `User-Agent` header
    #[serde(default)]
    pub user_agent: Option<String>,
}

fn default_base_url() -> String {
    DEFAULT_BASE_URL.to_string()
}

impl ClientConfig {
    pub fn new(
        base_url: impl Into<String>,
        client_id: impl Into<String>,
        client_secret: impl Into<String>,
    ) -> Self {
        Self {
            base_url: base_url.into(),
            client_id: client_id.into(),
            client_secret: client_secret.into(),
            timeout_secs: None,
            accept_invalid_certs: false,
            user_agent: None,
        }
    }

    /// Sets the request timeout, rounded up to whole seconds.
    ///
    /// Durations under one second become one second; a zero timeout would
    /// fail every request before it is sent.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        let secs = timeout.as_secs() + u64::from(timeout.subsec_nanos() > 0);
        self.timeout_secs = Some(secs.max(1));
        self
    }

    pub fn timeout(&self) -> Option<Duration> {
        self.timeout_secs.map(Duration::from_secs)
    }

    /// Rejects a zero timeout, which the transport treats as "expire now".
    ///
    /// # Errors
    /// Returns [`QlError::Config`] when `timeout_secs` is `Some(0)`.
    pub fn check_timeout(&self) -> Result<()> {
        match self.timeout_secs {
            Some(0) => Err(QlError::Config("timeout must be at least one second".to_string())),
            _ => Ok(()),
        }
    }

    /// Base URL without trailing slashes, ready to be joined with a path.
    pub fn normalized_base_url(&self) -> &str {
        self.base_url.trim_end_matches('/')
    }
}

// Keeps the secret out of logs and panic messages.
impl fmt::Debug for ClientConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ClientConfig")
            .field("base_url", &self.base_url)
            .field("client_id", &self.client_id)
            .field("client_secret", &"<redacted>")
            .field("timeout_secs", &self.timeout_secs)
            .field("accept_invalid_certs", &self.accept_invalid_certs)
            .field("user_agent", &self.user_agent)
            .finish()
    }
}
