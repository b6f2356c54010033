//! Domain model for timeline tasks and smart reminders.
//!
//! # Responsibility
//! - Define the two entity kinds held by the store.
//! - Validate identity and title before an entity can exist.
//!
//! # Invariants
//! - Every entity carries a non-empty opaque string id.
//! - Task `category` is assigned at creation and never derived from `due_date`.

pub mod analytics;
pub mod reminder;
pub mod task;

use std::error::Error;
use std::fmt::{Display, Formatter};

/// Opaque entity identifier shared by tasks and reminders.
pub type EntityId = String;

/// Validation failures for entity construction and decoding.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ModelValidationError {
    EmptyId,
    EmptyTitle { id: EntityId },
}

impl Display for ModelValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyId => write!(f, "entity id must not be empty"),
            Self::EmptyTitle { id } => write!(f, "entity `{id}` must have a non-empty title"),
        }
    }
}

impl Error for ModelValidationError {}

pub(crate) fn validate_identity(id: &str, title: &str) -> Result<(), ModelValidationError> {
    if id.trim().is_empty() {
        return Err(ModelValidationError::EmptyId);
    }
    if title.trim().is_empty() {
        return Err(ModelValidationError::EmptyTitle { id: id.to_string() });
    }
    Ok(())
}
