//! Environment variable payloads

use serde::{Deserialize, Serialize};

/// One entry of the `POST /open/envs` body (the panel takes a list)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EnvVarSpec {
    pub name: String,
    pub value: String,
    /// Free-form note; sent as an empty string when not given
    #[serde(default)]
    pub remarks: String,
}

impl EnvVarSpec {
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self { name: name.into(), value: value.into(), remarks: String::new() }
    }

    pub fn remarks(mut self, remarks: impl Into<String>) -> Self {
        self.remarks = remarks.into();
        self
    }
}

/// Which environment variables a read should return
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum EnvQuery {
    #[default]
    All,
    /// Server-side search on names and values
    Search(String),
    ById(i64),
}
