//! Timeline task entity.
//!
//! # Responsibility
//! - Define the to-do record rendered by the timeline section.
//! - Expose category metadata used for bucketing.
//!
//! # Invariants
//! - `id` and `title` are non-empty for every constructed or decoded task.
//! - `category` is a creation-time label; rescheduling never rewrites it.

use crate::clock::EpochMs;
use crate::model::{validate_identity, EntityId, ModelValidationError};
use serde::{Deserialize, Serialize};

/// Task urgency shown on timeline cards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TaskPriority {
    Low,
    Medium,
    High,
}

/// Display tag for where a task came from. Carries no integration behavior.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TaskSource {
    Whatsapp,
    Gmail,
    Notion,
    Slack,
    Manual,
}

/// Timeline bucket a task was filed under.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Category {
    Today,
    Tomorrow,
    ThisWeek,
    ThisMonth,
}

impl Category {
    /// All categories in timeline display order.
    pub const ALL: [Category; 4] = [
        Category::Today,
        Category::Tomorrow,
        Category::ThisWeek,
        Category::ThisMonth,
    ];

    /// Stable key, identical to the serialized form.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Today => "today",
            Self::Tomorrow => "tomorrow",
            Self::ThisWeek => "thisWeek",
            Self::ThisMonth => "thisMonth",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Today => "Today",
            Self::Tomorrow => "Tomorrow",
            Self::ThisWeek => "This Week",
            Self::ThisMonth => "This Month",
        }
    }

    /// Parses a category key. Accepts the serialized form and snake_case.
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim() {
            "today" => Some(Self::Today),
            "tomorrow" => Some(Self::Tomorrow),
            "thisWeek" | "this_week" => Some(Self::ThisWeek),
            "thisMonth" | "this_month" => Some(Self::ThisMonth),
            _ => None,
        }
    }
}

/// A to-do item with a due date and completion state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "TaskWire")]
pub struct Task {
    pub id: EntityId,
    pub title: String,
    pub description: String,
    /// Epoch milliseconds.
    pub due_date: EpochMs,
    pub priority: TaskPriority,
    pub source: TaskSource,
    pub completed: bool,
    pub category: Category,
}

impl Task {
    /// Creates an open task with `medium` priority from a `manual` source.
    ///
    /// # Errors
    /// - `EmptyId` / `EmptyTitle` when identity fields are blank.
    pub fn new(
        id: impl Into<EntityId>,
        title: impl Into<String>,
        description: impl Into<String>,
        due_date: EpochMs,
        category: Category,
    ) -> Result<Self, ModelValidationError> {
        let task = Self {
            id: id.into(),
            title: title.into(),
            description: description.into(),
            due_date,
            priority: TaskPriority::Medium,
            source: TaskSource::Manual,
            completed: false,
            category,
        };
        task.validate()?;
        Ok(task)
    }

    pub fn with_priority(mut self, priority: TaskPriority) -> Self {
        self.priority = priority;
        self
    }

    pub fn with_source(mut self, source: TaskSource) -> Self {
        self.source = source;
        self
    }

    pub fn with_completed(mut self, completed: bool) -> Self {
        self.completed = completed;
        self
    }

    pub fn validate(&self) -> Result<(), ModelValidationError> {
        validate_identity(&self.id, &self.title)
    }

    /// Past due and still open.
    pub fn is_overdue(&self, now_ms: EpochMs) -> bool {
        self.due_date < now_ms && !self.completed
    }
}

#[derive(Deserialize)]
struct TaskWire {
    id: EntityId,
    title: String,
    #[serde(default)]
    description: String,
    due_date: EpochMs,
    priority: TaskPriority,
    source: TaskSource,
    #[serde(default)]
    completed: bool,
    category: Category,
}

impl TryFrom<TaskWire> for Task {
    type Error = ModelValidationError;

    fn try_from(wire: TaskWire) -> Result<Self, Self::Error> {
        let task = Self {
            id: wire.id,
            title: wire.title,
            description: wire.description,
            due_date: wire.due_date,
            priority: wire.priority,
            source: wire.source,
            completed: wire.completed,
            category: wire.category,
        };
        task.validate()?;
        Ok(task)
    }
}
