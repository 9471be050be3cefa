use chrono::NaiveDate;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::enums::{NotificationTarget, Role};

/// Broadcast message shown in dashboard feeds. Deletion is a flag, never a removal.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Notification {
    pub id: u32,
    pub title: String,
    pub message: String,
    pub target: NotificationTarget,
    pub date: NaiveDate,
    #[serde(default)]
    pub is_read: bool,
    #[serde(default)]
    pub is_deleted: bool,
}

impl Notification {
    /// Whether this notification belongs in the feed of an actor with `role`.
    #[must_use]
    pub const fn is_visible_to(&self, role: Role) -> bool {
        !self.is_deleted && self.target.is_visible_to(role)
    }
}
