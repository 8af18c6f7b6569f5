//! # QingLong Client
//!
//! Blocking client for the QingLong panel open API.
//!
//! This crate contains:
//! - The authenticated client and its per-resource handles
//! - The blocking HTTP transport
//! - Configuration loading from the environment, `.env` and TOML/JSON files
//!
//! ## Architecture
//! - Depends on `qinglong-domain` for payloads, errors and configuration
//! - Contains all "impure" code (network and file I/O)
//!
//! ## Example
//!
//! ```no_run
//! use qinglong_client::{JobSpec, QlClient};
//!
//! # fn main() -> qinglong_client::Result<()> {
//! let client = QlClient::new("http://127.0.0.1:5700", "client-id", "client-secret")?;
//! let created = client.crons().create(&JobSpec::new("task demo.js", "0 0 * * *", "demo"))?;
//! println!("{created}");
//! # Ok(())
//! # }
//! ```

pub mod api;
pub mod config;
pub(crate) mod errors;
pub mod http;

// Re-export commonly used items
pub use api::{
    ApiRequest, Configs, Crons, Envs, Logs, QlClient, RequestBody, Session, Subscriptions, System,
    User,
};
pub use http::{HttpClient, HttpClientBuilder};
pub use qinglong_domain::{
    constants, BearerToken, ClientConfig, ConfigSave, EnvQuery, EnvVarSpec, IdList,
    IntervalSchedule, IntervalUnit, JobSpec, LabelChange, LabelList, NotificationChannel,
    PullOption, PullType, QlError, Result, ScheduleType, SubscriptionKind, SubscriptionSpec,
    TokenResponse, WithId,
};
