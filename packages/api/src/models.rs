//! # Wire models for the activities API
//!
//! `GET /activities` answers with a JSON object keyed by activity name:
//!
//! ```json
//! {
//!   "Chess Club": {
//!     "description": "Learn strategies and compete in chess tournaments",
//!     "schedule": "Fridays, 3:30 PM - 5:00 PM",
//!     "max_participants": 12,
//!     "participants": ["michael@mergington.edu"]
//!   }
//! }
//! ```
//!
//! The object's key order is the order the board displays, so it is decoded
//! into an [`ActivityDirectory`] (an ordered list) rather than a hash map.

use std::fmt;

use serde::de::{MapAccess, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// One activity as returned by the API.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Activity {
    pub description: String,
    pub schedule: String,
    pub max_participants: u32,
    #[serde(default)]
    pub participants: Vec<String>,
}

impl Activity {
    /// Remaining capacity, never below zero.
    pub fn spots_left(&self) -> u32 {
        let taken = u32::try_from(self.participants.len()).unwrap_or(u32::MAX);
        self.max_participants.saturating_sub(taken)
    }

    pub fn has_participant(&self, email: &str) -> bool {
        self.participants.iter().any(|p| p == email)
    }
}

/// An activity together with its name (the key it was listed under).
#[derive(Debug, Clone, PartialEq)]
pub struct ActivityEntry {
    pub name: String,
    pub activity: Activity,
}

/// Ordered listing of all activities.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ActivityDirectory {
    entries: Vec<ActivityEntry>,
}

impl ActivityDirectory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an activity, replacing an existing entry with the same name in place.
    pub fn insert(&mut self, name: impl Into<String>, activity: Activity) {
        let name = name.into();
        match self.entries.iter_mut().find(|e| e.name == name) {
            Some(entry) => entry.activity = activity,
            None => self.entries.push(ActivityEntry { name, activity }),
        }
    }

    pub fn get(&self, name: &str) -> Option<&Activity> {
        self.entries
            .iter()
            .find(|e| e.name == name)
            .map(|e| &e.activity)
    }

    pub fn get_mut(&mut self, name: &str) -> Option<&mut Activity> {
        self.entries
            .iter_mut()
            .find(|e| e.name == name)
            .map(|e| &mut e.activity)
    }

    pub fn iter(&self) -> impl Iterator<Item = &ActivityEntry> {
        self.entries.iter()
    }

    /// Activity names in display order.
    pub fn names(&self) -> Vec<String> {
        self.entries.iter().map(|e| e.name.clone()).collect()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl FromIterator<(String, Activity)> for ActivityDirectory {
    fn from_iter<I: IntoIterator<Item = (String, Activity)>>(iter: I) -> Self {
        let mut directory = Self::new();
        for (name, activity) in iter {
            directory.insert(name, activity);
        }
        directory
    }
}

impl Serialize for ActivityDirectory {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for entry in &self.entries {
            map.serialize_entry(&entry.name, &entry.activity)?;
        }
        map.end()
    }
}

impl<'de> Deserialize<'de> for ActivityDirectory {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct DirectoryVisitor;

        impl<'de> Visitor<'de> for DirectoryVisitor {
            type Value = ActivityDirectory;

            fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
                f.write_str("a map of activity name to activity")
            }

            fn visit_map<M: MapAccess<'de>>(self, mut access: M) -> Result<Self::Value, M::Error> {
                let mut directory = ActivityDirectory::new();
                while let Some((name, activity)) = access.next_entry::<String, Activity>()? {
                    directory.insert(name, activity);
                }
                Ok(directory)
            }
        }

        deserializer.deserialize_map(DirectoryVisitor)
    }
}

/// Body of a successful sign-up or unregister call.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MessageResponse {
    pub message: String,
}

/// Body of a rejected call. `detail` is usually a string but validation
/// failures may carry structured data.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ErrorBody {
    #[serde(default)]
    pub detail: Option<serde_json::Value>,
}

impl ErrorBody {
    /// Human-readable detail, if the server sent a non-empty one.
    pub fn detail_text(&self) -> Option<String> {
        match self.detail.as_ref()? {
            serde_json::Value::Null => None,
            serde_json::Value::String(s) if s.trim().is_empty() => None,
            serde_json::Value::String(s) => Some(s.clone()),
            other => Some(other.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn activity(max: u32, participants: &[&str]) -> Activity {
        Activity {
            description: "desc".to_string(),
            schedule: "Mondays".to_string(),
            max_participants: max,
            participants: participants.iter().map(|p| p.to_string()).collect(),
        }
    }

    #[test]
    fn test_directory_keeps_key_order() {
        let body = r#"{
            "Programming Class": {"description": "a", "schedule": "b", "max_participants": 20, "participants": []},
            "Chess Club": {"description": "c", "schedule": "d", "max_participants": 12, "participants": ["x@m.edu"]},
            "Art Studio": {"description": "e", "schedule": "f", "max_participants": 5, "participants": []}
        }"#;

        let directory: ActivityDirectory = serde_json::from_str(body).unwrap();
        assert_eq!(
            directory.names(),
            vec!["Programming Class", "Chess Club", "Art Studio"]
        );
        assert_eq!(
            directory.get("Chess Club").unwrap().participants,
            vec!["x@m.edu"]
        );
    }

    #[test]
    fn test_missing_participants_is_empty() {
        let body = r#"{"Drama": {"description": "a", "schedule": "b", "max_participants": 3}}"#;
        let directory: ActivityDirectory = serde_json::from_str(body).unwrap();
        let drama = directory.get("Drama").unwrap();
        assert!(drama.participants.is_empty());
        assert_eq!(drama.spots_left(), 3);
    }

    #[test]
    fn test_spots_left_saturates() {
        assert_eq!(activity(2, &["a@x", "b@x"]).spots_left(), 0);
        assert_eq!(activity(1, &["a@x", "b@x"]).spots_left(), 0);
        assert_eq!(activity(10, &["a@x"]).spots_left(), 9);
    }

    #[test]
    fn test_insert_replaces_in_place() {
        let mut directory = ActivityDirectory::new();
        directory.insert("A", activity(1, &[]));
        directory.insert("B", activity(2, &[]));
        directory.insert("A", activity(7, &[]));

        assert_eq!(directory.names(), vec!["A", "B"]);
        assert_eq!(directory.get("A").unwrap().max_participants, 7);
    }

    #[test]
    fn test_serialize_preserves_order() {
        let directory: ActivityDirectory = [
            ("Zeta".to_string(), activity(1, &[])),
            ("Alpha".to_string(), activity(1, &[])),
        ]
        .into_iter()
        .collect();

        let json = serde_json::to_string(&directory).unwrap();
        assert!(json.find("Zeta").unwrap() < json.find("Alpha").unwrap());
    }

    #[test]
    fn test_error_detail_text() {
        let body: ErrorBody =
            serde_json::from_str(r#"{"detail": "Activity not found"}"#).unwrap();
        assert_eq!(body.detail_text().as_deref(), Some("Activity not found"));

        let body: ErrorBody = serde_json::from_str(r#"{"detail": ""}"#).unwrap();
        assert_eq!(body.detail_text(), None);

        let body: ErrorBody = serde_json::from_str(r#"{}"#).unwrap();
        assert_eq!(body.detail_text(), None);

        let body: ErrorBody =
            serde_json::from_str(r#"{"detail": [{"msg": "field required"}]}"#).unwrap();
        assert_eq!(
            body.detail_text().as_deref(),
            Some(r#"[{"msg":"field required"}]"#)
        );
    }
}
