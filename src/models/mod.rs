//! Data models for the timetable backend.
//!
//! Field names match the JSON documents the timetable frontend reads and writes.

mod subjects;
mod teacher;
mod timetable;

pub use subjects::*;
pub use teacher::*;
pub use timetable::*;

/// Reads a JSON list field, treating an explicit `null` like a missing field.
fn null_as_empty<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let list: Option<Vec<String>> = serde::Deserialize::deserialize(deserializer)?;
    Ok(list.unwrap_or_default())
}

/// Outcome of an upsert on a singleton document.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Upserted {
    Created,
    Updated,
}

/// Response body carrying a single status message.
#[derive(Debug, serde::Serialize)]
pub struct MessageResponse {
    pub message: String,
}

impl MessageResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}
