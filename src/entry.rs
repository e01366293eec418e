// 🧾 Entry - one recorded weekly contribution
// Stored exactly as the user typed it; only ever appended or deleted

use serde::{Deserialize, Serialize};

/// A weekly contribution.
///
/// Field names are the persisted JSON names, so the blob written under the
/// storage key stays `[{"id": .., "value": .., "date": ..}, ...]`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Entry {
    /// Opaque unique token (creation time in milliseconds)
    pub id: String,

    /// Amount as entered, never normalized
    pub value: String,

    /// Locale-formatted creation date, captured once
    pub date: String,
}

impl Entry {
    pub fn new(id: impl Into<String>, value: impl Into<String>, date: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            value: value.into(),
            date: date.into(),
        }
    }

    /// Numeric amount of this entry. Anything that is not a finite number
    /// counts as zero.
    pub fn amount(&self) -> f64 {
        match self.value.trim().parse::<f64>() {
            Ok(v) if v.is_finite() => v,
            _ => 0.0,
        }
    }
}

/// Id for a new entry created at `now_millis`.
///
/// Ids are the creation timestamp, bumped past the newest existing numeric id
/// so two entries created within the same millisecond never collide.
pub fn next_id(now_millis: i64, existing: &[Entry]) -> String {
    let newest = existing
        .iter()
        .filter_map(|e| e.id.parse::<i64>().ok())
        .max();

    let id = match newest {
        Some(max) if max >= now_millis => max + 1,
        _ => now_millis,
    };

    id.to_string()
}
