//! Extended profile attached to a user by id and username.

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use shopfront_core::EntityId;

use crate::address::Address;
use crate::preferences::UserPreferences;

/// Keys that must be present for a profile to count as complete.
pub const REQUIRED_PROFILE_FIELDS: [&str; 3] = ["first_name", "last_name", "phone"];

const LAST_UPDATED_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Profile data that lives beside a [`crate::User`] without being owned by the
/// manager. Every mutation refreshes `last_updated`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserProfile {
    user_id: EntityId,
    username: String,
    profile_data: BTreeMap<String, Value>,
    address: Option<Address>,
    preferences: UserPreferences,
    last_updated: DateTime<Utc>,
}

impl UserProfile {
    pub fn new(user_id: EntityId, username: impl Into<String>) -> Self {
        Self {
            user_id,
            username: username.into(),
            profile_data: BTreeMap::new(),
            address: None,
            preferences: UserPreferences::default(),
            last_updated: Utc::now(),
        }
    }

    pub fn user_id(&self) -> EntityId {
        self.user_id
    }

    pub fn username(&self) -> &str {
        &self.username
    }

    pub fn address(&self) -> Option<&Address> {
        self.address.as_ref()
    }

    pub fn preferences(&self) -> &UserPreferences {
        &self.preferences
    }

    pub fn last_updated(&self) -> DateTime<Utc> {
        self.last_updated
    }

    pub fn set_address(&mut self, address: Address) {
        self.address = Some(address);
        self.touch();
    }

    pub fn update_profile_field(&mut self, field: impl Into<String>, value: impl Into<Value>) {
        self.profile_data.insert(field.into(), value.into());
        self.touch();
    }

    pub fn profile_field(&self, field: &str) -> Option<&Value> {
        self.profile_data.get(field)
    }

    pub fn profile_field_or(&self, field: &str, default: Value) -> Value {
        self.profile_field(field).cloned().unwrap_or(default)
    }

    /// Mutate the embedded preferences and refresh `last_updated`.
    pub fn update_preferences<R>(&mut self, f: impl FnOnce(&mut UserPreferences) -> R) -> R {
        let out = f(&mut self.preferences);
        self.touch();
        out
    }

    /// True once every required field has been set, whatever its value.
    pub fn has_complete_profile(&self) -> bool {
        REQUIRED_PROFILE_FIELDS
            .iter()
            .all(|field| self.profile_data.contains_key(*field))
    }

    /// Display mapping: username, user_id, last_updated and (if set) address.
    pub fn display_info(&self) -> BTreeMap<String, String> {
        let mut info = BTreeMap::from([
            ("username".to_string(), self.username.clone()),
            ("user_id".to_string(), self.user_id.to_string()),
            (
                "last_updated".to_string(),
                self.last_updated.format(LAST_UPDATED_FORMAT).to_string(),
            ),
        ]);
        if let Some(address) = &self.address {
            info.insert("address".to_string(), address.full_address());
        }
        info
    }

    fn touch(&mut self) {
        self.last_updated = Utc::now();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use serde_json::json;

    fn profile() -> UserProfile {
        UserProfile::new(EntityId::new(7), "jdoe")
    }

    /// Back-date the timestamp so refreshes are observable.
    fn stale(mut profile: UserProfile) -> UserProfile {
        profile.last_updated = Utc.with_ymd_and_hms(2020, 1, 1, 0, 0, 0).unwrap();
        profile
    }

    #[test]
    fn starts_empty() {
        let p = profile();
        assert!(p.address().is_none());
        assert!(p.profile_field("first_name").is_none());
        assert!(!p.has_complete_profile());
    }

    #[test]
    fn update_profile_field_stores_value_and_refreshes_timestamp() {
        let mut p = stale(profile());
        let before = p.last_updated();
        p.update_profile_field("first_name", "John");

        assert_eq!(p.profile_field("first_name"), Some(&json!("John")));
        assert!(p.last_updated() > before);
    }

    #[test]
    fn set_address_refreshes_timestamp() {
        let mut p = stale(profile());
        let before = p.last_updated();
        p.set_address(Address::new("1 Main St", "Austin", "TX", "73301"));

        assert!(p.address().is_some());
        assert!(p.last_updated() > before);
    }

    #[test]
    fn update_preferences_refreshes_timestamp() {
        let mut p = stale(profile());
        let before = p.last_updated();
        p.update_preferences(|prefs| prefs.set_theme("dark"));

        assert_eq!(p.preferences().theme(), crate::Theme::Dark);
        assert!(p.last_updated() > before);
    }

    #[test]
    fn profile_field_or_falls_back_to_default() {
        let mut p = profile();
        p.update_profile_field("age", 41);
        assert_eq!(p.profile_field_or("age", json!(0)), json!(41));
        assert_eq!(p.profile_field_or("phone", Value::Null), Value::Null);
    }

    #[test]
    fn complete_profile_requires_all_keys_regardless_of_value() {
        let mut p = profile();
        p.update_profile_field("first_name", "John");
        p.update_profile_field("last_name", "Doe");
        assert!(!p.has_complete_profile());

        p.update_profile_field("phone", Value::Null);
        assert!(p.has_complete_profile());
    }

    #[test]
    fn display_info_includes_address_only_when_set() {
        let mut p = profile();
        let info = p.display_info();
        assert_eq!(info.get("username").map(String::as_str), Some("jdoe"));
        assert_eq!(info.get("user_id").map(String::as_str), Some("7"));
        assert!(!info.contains_key("address"));

        p.set_address(Address::new("1 Main St", "Austin", "TX", "73301"));
        let info = p.display_info();
        assert_eq!(
            info.get("address").map(String::as_str),
            Some("1 Main St, Austin, TX 73301, USA")
        );
    }

    #[test]
    fn display_info_formats_last_updated() {
        let p = stale(profile());
        assert_eq!(
            p.display_info().get("last_updated").map(String::as_str),
            Some("2020-01-01 00:00:00")
        );
    }

    #[test]
    fn each_profile_gets_its_own_data_map() {
        let mut a = profile();
        let b = profile();
        a.update_profile_field("phone", "555-0100");
        assert!(b.profile_field("phone").is_none());
    }
}
