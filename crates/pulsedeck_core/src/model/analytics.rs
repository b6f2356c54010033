//! Productivity analytics record.
//!
//! # Invariants
//! - `weekly_progress` holds one percent score per weekday, Monday first.
//! - `category_breakdown` counts are shares of `total_tasks`.

use serde::{Deserialize, Serialize};

/// Task count filed under one analytics category.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryCount {
    pub category: String,
    pub count: u32,
}

/// Number of tasks worked in one hour of the day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct HourLoad {
    /// Hour of day, 0-23.
    pub hour: u8,
    pub tasks: u32,
}

/// Aggregates behind the analytics section.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Analytics {
    pub completed_tasks: u32,
    pub pending_tasks: u32,
    pub total_tasks: u32,
    pub productivity_score: u8,
    pub streak_days: u32,
    pub weekly_progress: Vec<u8>,
    pub category_breakdown: Vec<CategoryCount>,
    pub time_distribution: Vec<HourLoad>,
}
