//! Notification channel payloads
//!
//! The panel knows many push channels, but the client only implements Lark.
//! Any other channel name is rejected before a request is built.

use serde::ser::SerializeMap;
use serde::{Serialize, Serializer};

use crate::errors::{QlError, Result};

/// A configured notification channel, ready to be sent to
/// `POST /open/user/notification`
#[derive(Clone, PartialEq, Eq)]
pub enum NotificationChannel {
    /// Lark (Feishu) bot webhook key
    Lark { key: String },
}

impl NotificationChannel {
    pub const LARK: &'static str = "lark";

    /// Builds a channel from its type name and key.
    ///
    /// # Errors
    /// Returns [`QlError::Unsupported`] for every type other than `lark`.
    pub fn parse(kind: &str, key: impl Into<String>) -> Result<Self> {
        match kind {
            Self::LARK => Ok(Self::Lark { key: key.into() }),
            other => Err(QlError::Unsupported(format!("notification type: {other}"))),
        }
    }

    pub fn kind(&self) -> &'static str {
        match self {
            Self::Lark { .. } => Self::LARK,
        }
    }
}

impl Serialize for NotificationChannel {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(2))?;
        map.serialize_entry("type", self.kind())?;
        match self {
            Self::Lark { key } => map.serialize_entry("larkKey", key)?,
        }
        map.end()
    }
}

impl std::fmt::Debug for NotificationChannel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("NotificationChannel")
            .field("type", &self.kind())
            .field("key", &"<redacted>")
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn lark_serializes_with_lark_key() {
        let channel = NotificationChannel::parse("lark", "hook-key").unwrap();
        assert_eq!(
            serde_json::to_value(&channel).unwrap(),
            json!({"type": "lark", "larkKey": "hook-key"})
        );
    }

    #[test]
    fn other_types_are_unsupported() {
        for kind in ["telegram", "bark", "a", "Lark", ""] {
            let err = NotificationChannel::parse(kind, "k").unwrap_err();
            assert!(matches!(err, QlError::Unsupported(_)), "{kind} should be rejected");
        }
    }
}
