//! Subscription payloads
//!
//! A subscription tells the panel to pull a repository (or a single file) on a
//! schedule and optionally register the scripts it finds as cron jobs.

use serde::{Deserialize, Serialize};

use crate::impl_wire_conversions;

/// Source kind of a subscription
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SubscriptionKind {
    PublicRepo,
    PrivateRepo,
    File,
}

impl_wire_conversions!(SubscriptionKind {
    PublicRepo => "public-repo",
    PrivateRepo => "private-repo",
    File => "file",
});

/// How the pull schedule is expressed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ScheduleType {
    Crontab,
    Interval,
}

impl_wire_conversions!(ScheduleType {
    Crontab => "crontab",
    Interval => "interval",
});

/// Credential style used for private repositories
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum PullType {
    SshKey,
    UserPwd,
}

impl_wire_conversions!(PullType {
    SshKey => "ssh-key",
    UserPwd => "user-pwd",
});

/// Unit of an interval schedule
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum IntervalUnit {
    Days,
    Hours,
    Minutes,
    Seconds,
}

impl_wire_conversions!(IntervalUnit {
    Days => "days",
    Hours => "hours",
    Minutes => "minutes",
    Seconds => "seconds",
});

/// Interval-based schedule object; the panel requires `value >= 1`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct IntervalSchedule {
    #[serde(rename = "type")]
    pub unit: IntervalUnit,
    pub value: u32,
}

impl IntervalSchedule {
    pub fn new(unit: IntervalUnit, value: u32) -> Self {
        Self { unit, value }
    }
}

/// Pull credentials matching [`PullType`]
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum PullOption {
    UserPassword { username: String, password: String },
    PrivateKey { private_key: String },
}

impl std::fmt::Debug for PullOption {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UserPassword { username, .. } => f
                .debug_struct("UserPassword")
                .field("username", username)
                .field("password", &"<redacted>")
                .finish(),
            Self::PrivateKey { .. } => {
                f.debug_struct("PrivateKey").field("private_key", &"<redacted>").finish()
            }
        }
    }
}

/// Body of `POST /open/subscriptions`; wrapped in [`WithId`](super::WithId)
/// for updates
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubscriptionSpec {
    #[serde(rename = "type")]
    pub kind: SubscriptionKind,
    pub url: String,
    pub schedule_type: ScheduleType,
    pub alias: String,
    /// Cron expression, used with [`ScheduleType::Crontab`]
    pub schedule: Option<String>,
    /// Used with [`ScheduleType::Interval`]
    pub interval_schedule: Option<IntervalSchedule>,
    pub name: Option<String>,
    /// Only scripts matching this pattern are registered
    pub whitelist: Option<String>,
    /// Scripts matching this pattern are skipped
    pub blacklist: Option<String>,
    pub branch: Option<String>,
    /// Dependency file pattern copied alongside the scripts
    pub dependences: Option<String>,
    pub pull_type: Option<PullType>,
    pub pull_option: Option<PullOption>,
    /// File extensions treated as scripts
    pub extensions: Option<String>,
    /// Command run before pulling
    pub sub_before: Option<String>,
    /// Command run after pulling
    pub sub_after: Option<String>,
    pub proxy: Option<String>,
    /// Register new scripts as cron jobs
    #[serde(rename = "autoAddCron")]
    pub auto_add_cron: Option<bool>,
    /// Remove cron jobs whose scripts disappeared
    #[serde(rename = "autoDelCron")]
    pub auto_del_cron: Option<bool>,
}

impl SubscriptionSpec {
    pub fn new(
        kind: SubscriptionKind,
        url: impl Into<String>,
        schedule_type: ScheduleType,
        alias: impl Into<String>,
    ) -> Self {
        Self {
            kind,
            url: url.into(),
            schedule_type,
            alias: alias.into(),
            schedule: None,
            interval_schedule: None,
            name: None,
            whitelist: None,
            blacklist: None,
            branch: None,
            dependences: None,
            pull_type: None,
            pull_option: None,
            extensions: None,
            sub_before: None,
            sub_after: None,
            proxy: None,
            auto_add_cron: None,
            auto_del_cron: None,
        }
    }

    pub fn schedule(mut self, schedule: impl Into<String>) -> Self {
        self.schedule = Some(schedule.into());
        self
    }

    pub fn interval_schedule(mut self, interval: IntervalSchedule) -> Self {
        self.interval_schedule = Some(interval);
        self
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn whitelist(mut self, pattern: impl Into<String>) -> Self {
        self.whitelist = Some(pattern.into());
        self
    }

    pub fn blacklist(mut self, pattern: impl Into<String>) -> Self {
        self.blacklist = Some(pattern.into());
        self
    }

    pub fn branch(mut self, branch: impl Into<String>) -> Self {
        self.branch = Some(branch.into());
        self
    }

    pub fn dependences(mut self, pattern: impl Into<String>) -> Self {
        self.dependences = Some(pattern.into());
        self
    }

    /// Sets both `pull_type` and `pull_option` so they cannot disagree.
    pub fn credentials(mut self, option: PullOption) -> Self {
        self.pull_type = Some(match option {
            PullOption::UserPassword { .. } => PullType::UserPwd,
            PullOption::PrivateKey { .. } => PullType::SshKey,
        });
        self.pull_option = Some(option);
        self
    }

    pub fn extensions(mut self, extensions: impl Into<String>) -> Self {
        self.extensions = Some(extensions.into());
        self
    }

    pub fn sub_before(mut self, command: impl Into<String>) -> Self {
        self.sub_before = Some(command.into());
        self
    }

    pub fn sub_after(mut self, command: impl Into<String>) -> Self {
        self.sub_after = Some(command.into());
        self
    }

    pub fn proxy(mut self, proxy: impl Into<String>) -> Self {
        self.proxy = Some(proxy.into());
        self
    }

    pub fn auto_add_cron(mut self, enabled: bool) -> Self {
        self.auto_add_cron = Some(enabled);
        self
    }

    pub fn auto_del_cron(mut self, enabled: bool) -> Self {
        self.auto_del_cron = Some(enabled);
        self
    }
}
