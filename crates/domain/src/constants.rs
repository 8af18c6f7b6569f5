//! Endpoint paths and client constants
//!
//! Centralized location for every fixed path the open API exposes. Paths that
//! take an id are built with the helper functions below.

/// Panel address used when nothing else is configured
pub const DEFAULT_BASE_URL: &str = "http://127.0.0.1:5700";

/// Content type sent with every request
pub const CONTENT_TYPE_JSON: &str = "application/json";

// Environment variables read by the config loader
pub const ENV_BASE_URL: &str = "QL_URL";
pub const ENV_CLIENT_ID: &str = "QL_CLIENT_ID";
pub const ENV_CLIENT_SECRET: &str = "QL_CLIENT_SECRET";
pub const ENV_TIMEOUT_SECS: &str = "QL_TIMEOUT_SECS";
pub const ENV_ACCEPT_INVALID_CERTS: &str = "QL_ACCEPT_INVALID_CERTS";

/// Fixed open API paths
pub mod paths {
    pub const AUTH_TOKEN: &str = "/open/auth/token";

    pub const CRONS: &str = "/open/crons";
    pub const CRONS_RUN: &str = "/open/crons/run";
    pub const CRONS_STOP: &str = "/open/crons/stop";
    pub const CRONS_ENABLE: &str = "/open/crons/enable";
    pub const CRONS_DISABLE: &str = "/open/crons/disable";
    pub const CRONS_LABELS: &str = "/open/crons/labels";

    pub const LOGS: &str = "/open/logs";
    pub const LOGS_DETAIL: &str = "/open/logs/detail";

    pub const SUBSCRIPTIONS: &str = "/open/subscriptions";
    pub const SUBSCRIPTIONS_RUN: &str = "/open/subscriptions/run";
    pub const SUBSCRIPTIONS_STOP: &str = "/open/subscriptions/stop";
    pub const SUBSCRIPTIONS_ENABLE: &str = "/open/subscriptions/enable";
    pub const SUBSCRIPTIONS_DISABLE: &str = "/open/subscriptions/disable";

    pub const CONFIGS_FILES: &str = "/open/configs/files";
    pub const CONFIGS_DETAIL: &str = "/open/configs/detail";
    pub const CONFIGS_SAVE: &str = "/open/configs/save";

    pub const ENVS: &str = "/open/envs";
    pub const ENVS_ENABLE: &str = "/open/envs/enable";
    pub const ENVS_DISABLE: &str = "/open/envs/disable";

    pub const USER_NOTIFICATION: &str = "/open/user/notification";

    pub const SYSTEM_RELOAD: &str = "/open/system/reload";

    /// `/open/crons/{id}`
    pub fn cron(id: i64) -> String {
        format!("{CRONS}/{id}")
    }

    /// `/open/crons/{id}/logs`
    pub fn cron_logs(id: i64) -> String {
        format!("{CRONS}/{id}/logs")
    }

    /// `/open/crons/{id}/log`
    pub fn cron_log(id: i64) -> String {
        format!("{CRONS}/{id}/log")
    }

    /// `/open/subscriptions/{id}`
    pub fn subscription(id: i64) -> String {
        format!("{SUBSCRIPTIONS}/{id}")
    }

    /// `/open/subscriptions/{id}/log`
    pub fn subscription_log(id: i64) -> String {
        format!("{SUBSCRIPTIONS}/{id}/log")
    }

    /// `/open/envs/{id}`
    pub fn env(id: i64) -> String {
        format!("{ENVS}/{id}")
    }
}
