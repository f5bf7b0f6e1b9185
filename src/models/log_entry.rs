//! Log Entry model
//!
//! One recorded food intake event. Created by the data source, read-only here.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::Macros;

/// A food intake log entry
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LogEntry {
    pub id: String,
    #[serde(alias = "userId")]
    pub user_id: String,
    pub timestamp: DateTime<Utc>,
    #[serde(alias = "foodName")]
    pub food_name: String,
    pub calories: u64,
    pub macros: Macros,
    #[serde(default, alias = "imageUrl", skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
    #[serde(default, alias = "audioUrl", skip_serializing_if = "Option::is_none")]
    pub audio_url: Option<String>,
    #[serde(default, alias = "textContent", skip_serializing_if = "Option::is_none")]
    pub text_content: Option<String>,
}

impl LogEntry {
    /// Create an entry without attachments
    pub fn new(
        id: impl Into<String>,
        user_id: impl Into<String>,
        timestamp: DateTime<Utc>,
        food_name: impl Into<String>,
        calories: u64,
        macros: Macros,
    ) -> Self {
        Self {
            id: id.into(),
            user_id: user_id.into(),
            timestamp,
            food_name: food_name.into(),
            calories,
            macros,
            image_url: None,
            audio_url: None,
            text_content: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_deserialize_camel_case_record() {
        let json = r#"{
            "id": "1",
            "userId": "user1",
            "timestamp": "2024-01-01T11:30:00.000Z",
            "foodName": "Pão integral com ovo",
            "calories": 280,
            "macros": { "carbs": 28, "protein": 15, "fats": 12 },
            "imageUrl": "https://example.com/1.jpg"
        }"#;

        let entry: LogEntry = serde_json::from_str(json).unwrap();
        assert_eq!(entry.user_id, "user1");
        assert_eq!(entry.food_name, "Pão integral com ovo");
        assert_eq!(entry.timestamp, Utc.with_ymd_and_hms(2024, 1, 1, 11, 30, 0).unwrap());
        assert_eq!(entry.macros, Macros::new(28, 15, 12));
        assert_eq!(entry.image_url.as_deref(), Some("https://example.com/1.jpg"));
        assert_eq!(entry.audio_url, None);
    }

    #[test]
    fn test_serialize_skips_missing_attachments() {
        let entry = LogEntry::new(
            "1",
            "user1",
            Utc.with_ymd_and_hms(2024, 1, 1, 12, 0, 0).unwrap(),
            "Sopa",
            180,
            Macros::new(25, 8, 5),
        );
        let value = serde_json::to_value(&entry).unwrap();
        assert_eq!(value["food_name"], "Sopa");
        assert!(value.get("image_url").is_none());
    }

    #[test]
    fn test_rejects_malformed_timestamp() {
        let json = r#"{
            "id": "1", "user_id": "u", "timestamp": "yesterday",
            "food_name": "x", "calories": 1,
            "macros": { "carbs": 0, "protein": 0, "fats": 0 }
        }"#;
        assert!(serde_json::from_str::<LogEntry>(json).is_err());
    }
}
