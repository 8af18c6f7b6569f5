//! Cron job payloads

use serde::{Deserialize, Serialize};

/// Body of `POST /open/crons`; wrapped in [`WithId`](super::WithId) for updates
///
/// `command`, `schedule` and `name` are required by the panel. Everything else
/// is forwarded as-is and sent as `null` when unset.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct JobSpec {
    /// Shell command the panel executes, e.g. `task demo.js`
    pub command: String,
    /// Cron expression
    pub schedule: String,
    pub name: String,
    pub labels: Option<Vec<String>>,
    /// Subscription that owns this job
    pub sub_id: Option<i64>,
    /// Additional cron expressions that also trigger the job
    pub extra_schedules: Option<Vec<String>>,
    /// Commands run before the job
    pub task_before: Option<Vec<String>>,
    /// Commands run after the job
    pub task_after: Option<Vec<String>>,
}

impl JobSpec {
    pub fn new(
        command: impl Into<String>,
        schedule: impl Into<String>,
        name: impl Into<String>,
    ) -> Self {
        Self {
            command: command.into(),
            schedule: schedule.into(),
            name: name.into(),
            labels: None,
            sub_id: None,
            extra_schedules: None,
            task_before: None,
            task_after: None,
        }
    }

    pub fn labels<I, S>(mut self, labels: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.labels = Some(labels.into_iter().map(Into::into).collect());
        self
    }

    pub fn sub_id(mut self, sub_id: i64) -> Self {
        self.sub_id = Some(sub_id);
        self
    }

    pub fn extra_schedules<I, S>(mut self, schedules: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.extra_schedules = Some(schedules.into_iter().map(Into::into).collect());
        self
    }

    pub fn task_before<I, S>(mut self, commands: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.task_before = Some(commands.into_iter().map(Into::into).collect());
        self
    }

    pub fn task_after<I, S>(mut self, commands: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.task_after = Some(commands.into_iter().map(Into::into).collect());
        self
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;
    use crate::types::WithId;

    #[test]
    fn unset_fields_are_sent_as_null() {
        let spec = JobSpec::new("echo hello, world!", "30 0 * * *", "test");
        assert_eq!(
            serde_json::to_value(&spec).unwrap(),
            json!({
                "command": "echo hello, world!",
                "schedule": "30 0 * * *",
                "name": "test",
                "labels": null,
                "sub_id": null,
                "extra_schedules": null,
                "task_before": null,
                "task_after": null
            })
        );
    }

    #[test]
    fn update_payload_carries_id_alongside_fields() {
        let spec = JobSpec::new("echo hi", "* * * * *", "first").labels(["tag1"]).name("second");
        let body = serde_json::to_value(WithId::new(11, &spec)).unwrap();

        assert_eq!(body["id"], json!(11));
        assert_eq!(body["name"], json!("second"));
        assert_eq!(body["labels"], json!(["tag1"]));
    }
}
