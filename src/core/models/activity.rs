use std::fmt;

use serde::de::{Deserializer, MapAccess, Visitor};
use serde::Deserialize;

#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct Activity {
    pub description: String,
    pub schedule: String,
    pub max_participants: u32,
    #[serde(default)]
    pub participants: Vec<String>,
}

impl Activity {
    /// Remaining capacity. Goes negative when the server reports more
    /// participants than the activity allows.
    pub fn spots_left(&self) -> i64 {
        i64::from(self.max_participants) - self.participants.len() as i64
    }
}

/// The full roster returned by `GET /activities`, in server order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ActivityCatalog {
    entries: Vec<(String, Activity)>,
}

impl ActivityCatalog {
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Activity)> {
        self.entries.iter().map(|(name, activity)| (name.as_str(), activity))
    }

    #[cfg(test)]
    pub fn get(&self, name: &str) -> Option<&Activity> {
        self.entries
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, activity)| activity)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    // A repeated key keeps its first position and takes the later value
    fn insert(&mut self, name: String, activity: Activity) {
        match self.entries.iter_mut().find(|(n, _)| *n == name) {
            Some(slot) => slot.1 = activity,
            None => self.entries.push((name, activity)),
        }
    }
}

impl FromIterator<(String, Activity)> for ActivityCatalog {
    fn from_iter<I: IntoIterator<Item = (String, Activity)>>(iter: I) -> Self {
        let mut catalog = ActivityCatalog::default();
        for (name, activity) in iter {
            catalog.insert(name, activity);
        }
        catalog
    }
}

impl<'de> Deserialize<'de> for ActivityCatalog {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct CatalogVisitor;

        impl<'de> Visitor<'de> for CatalogVisitor {
            type Value = ActivityCatalog;

            fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
                f.write_str("a map of activity name to activity details")
            }

            fn visit_map<A: MapAccess<'de>>(self, mut map: A) -> Result<Self::Value, A::Error> {
                let mut catalog = ActivityCatalog {
                    entries: Vec::with_capacity(map.size_hint().unwrap_or(0)),
                };
                while let Some((name, activity)) = map.next_entry::<String, Activity>()? {
                    catalog.insert(name, activity);
                }
                Ok(catalog)
            }
        }

        deserializer.deserialize_map(CatalogVisitor)
    }
}

/// What the activity list currently shows.
#[derive(Debug, Clone, Default, PartialEq)]
pub enum CatalogState {
    #[default]
    Loading,
    Ready(ActivityCatalog),
    Failed,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn activity(max: u32, participants: &[&str]) -> Activity {
        Activity {
            description: "Learn strategies".to_string(),
            schedule: "Fridays, 3:30 PM".to_string(),
            max_participants: max,
            participants: participants.iter().map(|p| p.to_string()).collect(),
        }
    }

    #[test]
    fn spots_left_subtracts_participants() {
        assert_eq!(activity(12, &[]).spots_left(), 12);
        assert_eq!(activity(12, &["a@b.com", "c@d.com"]).spots_left(), 10);
    }

    #[test]
    fn spots_left_goes_negative_when_oversubscribed() {
        assert_eq!(activity(1, &["a@b.com", "c@d.com", "e@f.com"]).spots_left(), -2);
    }

    #[test]
    fn catalog_keeps_server_order() {
        let body = r#"{
            "Programming Class": {"description": "d", "schedule": "s", "max_participants": 20, "participants": []},
            "Chess Club": {"description": "d", "schedule": "s", "max_participants": 12, "participants": ["a@b.com"]},
            "Art Studio": {"description": "d", "schedule": "s", "max_participants": 15, "participants": []}
        }"#;
        let catalog: ActivityCatalog = serde_json::from_str(body).unwrap();
        let names: Vec<&str> = catalog.iter().map(|(name, _)| name).collect();
        assert_eq!(names, vec!["Programming Class", "Chess Club", "Art Studio"]);
        assert_eq!(catalog.get("Chess Club").unwrap().participants, vec!["a@b.com"]);
    }

    #[test]
    fn duplicate_key_keeps_first_position_with_last_value() {
        let body = r#"{
            "Chess Club": {"description": "old", "schedule": "s", "max_participants": 12, "participants": []},
            "Gym": {"description": "d", "schedule": "s", "max_participants": 30, "participants": []},
            "Chess Club": {"description": "new", "schedule": "s", "max_participants": 12, "participants": []}
        }"#;
        let catalog: ActivityCatalog = serde_json::from_str(body).unwrap();
        assert_eq!(catalog.len(), 2);
        assert_eq!(catalog.iter().next().unwrap().1.description, "new");
    }

    #[test]
    fn missing_participants_defaults_to_empty() {
        let body = r#"{"Gym": {"description": "d", "schedule": "s", "max_participants": 30}}"#;
        let catalog: ActivityCatalog = serde_json::from_str(body).unwrap();
        assert!(catalog.get("Gym").unwrap().participants.is_empty());
    }

    #[test]
    fn rejects_non_object_payload() {
        assert!(serde_json::from_str::<ActivityCatalog>("[1, 2, 3]").is_err());
        assert!(serde_json::from_str::<ActivityCatalog>(r#"{"Gym": {"description": "d"}}"#).is_err());
    }
}
