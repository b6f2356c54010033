//! Smart reminder entity.
//!
//! # Responsibility
//! - Define the notification record rendered by the reminders section.
//! - Own the visibility rule shared by views and the urgent banner.
//!
//! # Invariants
//! - Visible iff `is_active` and `snoozed_until` is absent or not in the future.

use crate::clock::{EpochMs, MINUTE_MS};
use crate::model::{validate_identity, EntityId, ModelValidationError};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReminderPriority {
    Low,
    Medium,
    High,
    Urgent,
}

impl ReminderPriority {
    /// Urgent and high reminders count toward the "high priority" stat.
    pub fn is_high(self) -> bool {
        matches!(self, Self::High | Self::Urgent)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReminderKind {
    Task,
    Meeting,
    Deadline,
    Event,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReminderSource {
    Whatsapp,
    Gmail,
    Notion,
    Slack,
    Calendar,
}

/// Time-triggered notification with priority and snooze state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "ReminderWire")]
pub struct Reminder {
    pub id: EntityId,
    pub title: String,
    pub description: String,
    /// Epoch milliseconds.
    pub time: EpochMs,
    pub priority: ReminderPriority,
    /// Serialized as `type` to match the reminder card schema.
    #[serde(rename = "type")]
    pub kind: ReminderKind,
    pub source: ReminderSource,
    pub is_active: bool,
    pub snoozed_until: Option<EpochMs>,
}

impl Reminder {
    /// Creates an active, unsnoozed reminder.
    pub fn new(
        id: impl Into<EntityId>,
        title: impl Into<String>,
        description: impl Into<String>,
        time: EpochMs,
        priority: ReminderPriority,
        kind: ReminderKind,
        source: ReminderSource,
    ) -> Result<Self, ModelValidationError> {
        let reminder = Self {
            id: id.into(),
            title: title.into(),
            description: description.into(),
            time,
            priority,
            kind,
            source,
            is_active: true,
            snoozed_until: None,
        };
        reminder.validate()?;
        Ok(reminder)
    }

    pub fn validate(&self) -> Result<(), ModelValidationError> {
        validate_identity(&self.id, &self.title)
    }

    /// Returns whether the reminder should be rendered at `now_ms`.
    pub fn is_visible(&self, now_ms: EpochMs) -> bool {
        self.is_active && self.snoozed_until.map_or(true, |until| until <= now_ms)
    }

    /// Whole minutes until `time`, clamped at zero.
    pub fn minutes_until(&self, now_ms: EpochMs) -> i64 {
        (self.time - now_ms).max(0) / MINUTE_MS
    }

    pub fn is_overdue(&self, now_ms: EpochMs) -> bool {
        self.time <= now_ms
    }
}

#[derive(Deserialize)]
struct ReminderWire {
    id: EntityId,
    title: String,
    #[serde(default)]
    description: String,
    time: EpochMs,
    priority: ReminderPriority,
    #[serde(rename = "type")]
    kind: ReminderKind,
    source: ReminderSource,
    #[serde(default = "default_active")]
    is_active: bool,
    #[serde(default)]
    snoozed_until: Option<EpochMs>,
}

fn default_active() -> bool {
    true
}

impl TryFrom<ReminderWire> for Reminder {
    type Error = ModelValidationError;

    fn try_from(wire: ReminderWire) -> Result<Self, Self::Error> {
        let reminder = Self {
            id: wire.id,
            title: wire.title,
            description: wire.description,
            time: wire.time,
            priority: wire.priority,
            kind: wire.kind,
            source: wire.source,
            is_active: wire.is_active,
            snoozed_until: wire.snoozed_until,
        };
        reminder.validate()?;
        Ok(reminder)
    }
}
