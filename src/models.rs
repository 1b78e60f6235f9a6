//! Frontend Models
//!
//! Data structures matching the habit service's JSON payloads.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Habit record (matches backend)
///
/// `streak` is recomputed server-side after every upload or upload deletion;
/// the client only ever displays it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Habit {
    #[serde(alias = "_id")]
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub streak: u32,
    #[serde(default)]
    pub is_completed: bool,
    #[serde(default)]
    pub uploads: Vec<Upload>,
}

/// One daily proof photo, appended server-side in upload-time order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Upload {
    pub date: DateTime<Utc>,
    /// Opaque image reference assigned by the server.
    #[serde(default)]
    pub photo: Option<String>,
}

/// Unsaved name/description pair edited in the create/edit modal.
///
/// Serialized wholesale as the create/update request body; the server's
/// response becomes the new truth, never the draft itself.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct HabitDraft {
    pub name: String,
    pub description: String,
}

/// Presented ordering of the habit grid.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SortOrder {
    /// Insertion order as returned by the server.
    #[default]
    Unsorted,
    /// Streak low to high.
    Ascending,
    /// Streak high to low.
    Descending,
}

/// Aggregates derived from the current collection.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Analytics {
    pub highest_streak: u32,
    pub total_completed: usize,
    pub total_habits: usize,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_habit_decodes_mongo_style_id() {
        let json = r#"{"_id":"65af","name":"Read","description":"30m/day","streak":3,"is_completed":false,"uploads":[]}"#;
        let habit: Habit = serde_json::from_str(json).unwrap();
        assert_eq!(habit.id, "65af");
        assert_eq!(habit.streak, 3);
    }

    #[test]
    fn test_habit_missing_optional_fields_default() {
        // Older records carry neither uploads nor the completion flag.
        let json = r#"{"id":"h1","name":"Run"}"#;
        let habit: Habit = serde_json::from_str(json).unwrap();
        assert_eq!(habit.description, "");
        assert_eq!(habit.streak, 0);
        assert!(!habit.is_completed);
        assert!(habit.uploads.is_empty());
    }

    #[test]
    fn test_upload_decodes_date_and_photo() {
        let json = r#"{"date":"2026-08-04T09:30:00Z","photo":"uploads/abc.jpg"}"#;
        let upload: Upload = serde_json::from_str(json).unwrap();
        assert_eq!(upload.photo.as_deref(), Some("uploads/abc.jpg"));
    }

    #[test]
    fn test_draft_serializes_name_and_description() {
        let draft = HabitDraft {
            name: "Read".to_string(),
            description: "30m/day".to_string(),
        };
        let json = serde_json::to_string(&draft).unwrap();
        assert_eq!(json, r#"{"name":"Read","description":"30m/day"}"#);
    }
}
