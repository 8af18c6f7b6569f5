//! Configuration loader
//!
//! Loads [`ClientConfig`] from environment variables or files.
//!
//! ## Loading Strategy
//! 1. Loads a `.env` file from the working directory, if present
//! 2. Attempts to load from environment variables
//! 3. If incomplete, falls back to loading from file
//! 4. Probes multiple paths for config files
//! 5. Supports JSON and TOML formats
//!
//! ## Environment Variables
//! - `QL_URL`: Panel address (default `http://127.0.0.1:5700`)
//! - `QL_CLIENT_ID`: Application client id (required)
//! - `QL_CLIENT_SECRET`: Application client secret (required)
//! - `QL_TIMEOUT_SECS`: Request timeout in seconds
//! - `QL_ACCEPT_INVALID_CERTS`: Accept invalid TLS certificates (true/false)
//!
//! ## File Locations
//! The loader probes the following paths (in order):
//! 1. `./qinglong.toml` or `./qinglong.json` (current working directory)
//! 2. `./config.toml` or `./config.json` (current working directory)
//! 3. The same names in the parent and grandparent directories
//! 4. The same names relative to the executable location

use std::path::{Path, PathBuf};

use qinglong_domain::constants::{
    DEFAULT_BASE_URL, ENV_ACCEPT_INVALID_CERTS, ENV_BASE_URL, ENV_CLIENT_ID, ENV_CLIENT_SECRET,
    ENV_TIMEOUT_SECS,
};
use qinglong_domain::{ClientConfig, QlError, Result};
use url::Url;

const CONFIG_FILE_NAMES: [&str; 4] =
    ["qinglong.toml", "qinglong.json", "config.toml", "config.json"];

/// Load configuration with automatic fallback strategy
///
/// Reads `.env` first, then the environment. Only when the credential
/// variables are absent does it fall back to a config file found by
/// [`probe_config_paths`].
///
/// # Errors
/// Returns `QlError::Config` if:
/// - An environment value is malformed (it is not masked by the file fallback)
/// - Configuration cannot be loaded from either source
/// - File format is invalid
/// - Required fields are missing
pub fn load() -> Result<ClientConfig> {
    if let Ok(path) = dotenvy::dotenv() {
        tracing::debug!(path = %path.display(), "Loaded .env file");
    }

    if !credentials_in_env() {
        tracing::debug!("Credentials not set in environment, trying file");
        return load_from_file(None);
    }

    let config = load_from_env()?;
    tracing::info!("Configuration loaded from environment variables");
    Ok(config)
}

fn credentials_in_env() -> bool {
    std::env::var_os(ENV_CLIENT_ID).is_some() && std::env::var_os(ENV_CLIENT_SECRET).is_some()
}

/// Load configuration from environment variables
///
/// # Errors
/// Returns `QlError::Config` if the client id or secret is missing, or a
/// value is malformed.
pub fn load_from_env() -> Result<ClientConfig> {
    let base_url = std::env::var(ENV_BASE_URL).unwrap_or_else(|_| DEFAULT_BASE_URL.to_string());
    let client_id = env_var(ENV_CLIENT_ID)?;
    let client_secret = env_var(ENV_CLIENT_SECRET)?;

    let timeout_secs = match std::env::var(ENV_TIMEOUT_SECS) {
        Ok(raw) => Some(
            raw.parse::<u64>()
                .map_err(|e| QlError::Config(format!("Invalid {}: {}", ENV_TIMEOUT_SECS, e)))?,
        ),
        Err(_) => None,
    };
    let accept_invalid_certs = env_bool(ENV_ACCEPT_INVALID_CERTS, false);

    let config = ClientConfig {
        base_url,
        client_id,
        client_secret,
        timeout_secs,
        accept_invalid_certs,
        user_agent: None,
    };
    validate(&config)?;
    Ok(config)
}

/// Load configuration from a file
///
/// If `path` is `None`, probes multiple locations for config files.
/// Supports both JSON and TOML formats (detected by file extension).
///
/// # Errors
/// Returns `QlError::Config` if:
/// - File not found (when path is specified)
/// - No config file found (when path is `None`)
/// - File format is invalid
/// - Required fields are missing
pub fn load_from_file(path: Option<PathBuf>) -> Result<ClientConfig> {
    let config_path = match path {
        Some(p) => {
            if !p.exists() {
                return Err(QlError::Config(format!("Config file not found: {}", p.display())));
            }
            p
        }
        None => probe_config_paths().ok_or_else(|| {
            QlError::Config("No config file found in any of the standard locations".to_string())
        })?,
    };

    tracing::info!(path = %config_path.display(), "Loading configuration from file");

    let contents = std::fs::read_to_string(&config_path)
        .map_err(|e| QlError::Config(format!("Failed to read config file: {}", e)))?;

    let config = parse_config(&contents, &config_path)?;
    validate(&config)?;
    Ok(config)
}

/// Parse configuration from string content
///
/// Format is detected by file extension (`.json` or `.toml`).
fn parse_config(contents: &str, path: &Path) -> Result<ClientConfig> {
    let extension = path.extension().and_then(|e| e.to_str()).unwrap_or("json");

    match extension {
        "toml" => toml::from_str(contents)
            .map_err(|e| QlError::Config(format!("Invalid TOML format: {}", e))),
        "json" => serde_json::from_str(contents)
            .map_err(|e| QlError::Config(format!("Invalid JSON format: {}", e))),
        _ => Err(QlError::Config(format!("Unsupported config format: {}", extension))),
    }
}

/// Probe multiple paths for configuration files
///
/// # Returns
/// The first config file found, or `None` if no file exists.
pub fn probe_config_paths() -> Option<PathBuf> {
    let mut bases = Vec::new();

    if let Ok(cwd) = std::env::current_dir() {
        bases.extend([cwd.clone(), cwd.join(".."), cwd.join("../..")]);
    }

    if let Ok(exe_path) = std::env::current_exe() {
        if let Some(exe_dir) = exe_path.parent() {
            bases.extend([exe_dir.to_path_buf(), exe_dir.join(".."), exe_dir.join("../..")]);
        }
    }

    bases
        .iter()
        .flat_map(|base| CONFIG_FILE_NAMES.iter().map(move |name| base.join(name)))
        .find(|path| path.exists())
}

/// Reject configurations that cannot produce a working client.
fn validate(config: &ClientConfig) -> Result<()> {
    Url::parse(config.normalized_base_url())
        .map_err(|e| QlError::Config(format!("Invalid panel address '{}': {}", config.base_url, e)))?;

    if config.client_id.trim().is_empty() || config.client_secret.trim().is_empty() {
        return Err(QlError::Config("client_id and client_secret must not be empty".to_string()));
    }

    config.check_timeout()
}

/// Get required environment variable
fn env_var(key: &str) -> Result<String> {
    std::env::var(key)
        .map_err(|_| QlError::Config(format!("Missing required environment variable: {}", key)))
}

/// Parse boolean from environment variable
///
/// Accepts: `1`/`0`, `true`/`false`, `yes`/`no`, `on`/`off` (case-insensitive)
fn env_bool(key: &str, default: bool) -> bool {
    std::env::var(key)
        .ok()
        .map(|s| matches!(s.to_ascii_lowercase().as_str(), "1" | "true" | "yes" | "on"))
        .unwrap_or(default)
}
