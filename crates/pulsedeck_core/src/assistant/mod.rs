//! Simulated assistant behaviors for the chat section.
//!
//! Everything here is canned: keyword matching and fixed replies on fixed
//! delays. Accepted smart replies hand a `Task` back to the caller, which
//! dispatches it into the store.

pub mod chat;
