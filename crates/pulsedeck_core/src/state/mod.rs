//! Unidirectional state flow: action → reducer → snapshot.
//!
//! # Responsibility
//! - Own the immutable task/reminder snapshot.
//! - Route every mutation through pure transition functions.
//! - Schedule and cancel deferred snooze reactivations.
//!
//! # Invariants
//! - Single logical thread of mutation; no locks.
//! - Transition operations are total over their input id.

pub mod action;
pub mod reducer;
pub mod scheduler;
pub mod snapshot;
pub mod store;
