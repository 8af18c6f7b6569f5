//! Request payload types
//!
//! Every structure here mirrors one JSON body the open API accepts. Optional
//! fields left unset serialize as `null` so the panel applies its defaults.

pub mod auth;
pub mod cron;
pub mod env;
pub mod ids;
pub mod notification;
pub mod subscription;

use serde::{Deserialize, Serialize};

pub use auth::{BearerToken, TokenResponse};
pub use cron::JobSpec;
pub use env::{EnvQuery, EnvVarSpec};
pub use ids::{IdList, LabelChange, LabelList, WithId};
pub use notification::NotificationChannel;
pub use subscription::{
    IntervalSchedule, IntervalUnit, PullOption, PullType, ScheduleType, SubscriptionKind,
    SubscriptionSpec,
};

/// Body of `POST /open/configs/save`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ConfigSave {
    pub name: String,
    pub content: String,
}
