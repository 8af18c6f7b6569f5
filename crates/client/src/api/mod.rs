//! QingLong open API client
//!
//! This module provides the blocking client and one handle per resource
//! group. Every handle method is a thin shaping function over
//! [`QlClient::execute`].
//!
//! # Architecture
//!
//! - Uses the blocking [`HttpClient`](crate::http::HttpClient) transport
//! - Logs in once at construction; `login` re-authenticates explicitly
//! - No retries, no caching, no background work
//! - Returns the `data` field of the response envelope as JSON

pub mod auth;
pub mod client;
pub mod configs;
pub mod crons;
pub mod envs;
pub mod logs;
pub mod request;
pub mod subscriptions;
pub mod system;
pub mod user;

pub use auth::Session;
pub use client::QlClient;
pub use configs::Configs;
pub use crons::Crons;
pub use envs::Envs;
pub use logs::Logs;
pub use request::{ApiRequest, RequestBody};
pub use subscriptions::Subscriptions;
pub use system::System;
pub use user::User;
