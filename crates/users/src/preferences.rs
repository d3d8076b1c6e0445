//! Per-user interface and privacy preferences.

use core::str::FromStr;
use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use shopfront_core::{DomainError, DomainResult};

pub const PROFILE_VISIBLE: &str = "profile_visible";
pub const EMAIL_VISIBLE: &str = "email_visible";
pub const PHONE_VISIBLE: &str = "phone_visible";

/// UI theme.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Light,
    Dark,
    Auto,
}

impl Theme {
    pub fn as_str(self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
            Theme::Auto => "auto",
        }
    }
}

impl core::fmt::Display for Theme {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Exact, case-sensitive match on the lowercase name.
impl FromStr for Theme {
    type Err = DomainError;

    fn from_str(s: &str) -> DomainResult<Self> {
        match s {
            "light" => Ok(Theme::Light),
            "dark" => Ok(Theme::Dark),
            "auto" => Ok(Theme::Auto),
            other => Err(DomainError::validation(format!("unknown theme: {other}"))),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NotificationPreferences {
    pub enabled: bool,
    pub frequency: String,
}

/// User preferences.
///
/// Invalid input to the setters (unknown theme, unknown privacy key) is
/// ignored and leaves the preferences unchanged.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserPreferences {
    theme: Theme,
    language: String,
    notifications_enabled: bool,
    email_frequency: String,
    privacy_settings: BTreeMap<String, bool>,
}

impl Default for UserPreferences {
    fn default() -> Self {
        Self {
            theme: Theme::Light,
            language: "en".to_string(),
            notifications_enabled: true,
            email_frequency: "daily".to_string(),
            privacy_settings: BTreeMap::from([
                (PROFILE_VISIBLE.to_string(), true),
                (EMAIL_VISIBLE.to_string(), false),
                (PHONE_VISIBLE.to_string(), false),
            ]),
        }
    }
}

impl UserPreferences {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn theme(&self) -> Theme {
        self.theme
    }

    pub fn language(&self) -> &str {
        &self.language
    }

    pub fn notifications_enabled(&self) -> bool {
        self.notifications_enabled
    }

    pub fn email_frequency(&self) -> &str {
        &self.email_frequency
    }

    pub fn privacy_settings(&self) -> &BTreeMap<String, bool> {
        &self.privacy_settings
    }

    /// Apply `theme` if it names a known theme; otherwise do nothing.
    pub fn set_theme(&mut self, theme: &str) {
        match theme.parse::<Theme>() {
            Ok(theme) => self.theme = theme,
            Err(_) => tracing::debug!(theme, "ignored unknown theme"),
        }
    }

    pub fn set_language(&mut self, language: impl Into<String>) {
        self.language = language.into();
    }

    pub fn toggle_notifications(&mut self) {
        self.notifications_enabled = !self.notifications_enabled;
    }

    /// Update an existing privacy setting. Unknown keys are ignored.
    pub fn update_privacy_setting(&mut self, setting: &str, value: bool) {
        match self.privacy_settings.get_mut(setting) {
            Some(slot) => *slot = value,
            None => tracing::debug!(setting, "ignored unknown privacy setting"),
        }
    }

    pub fn notification_preferences(&self) -> NotificationPreferences {
        NotificationPreferences {
            enabled: self.notifications_enabled,
            frequency: self.email_frequency.clone(),
        }
    }

    pub fn is_profile_public(&self) -> bool {
        self.privacy_settings
            .get(PROFILE_VISIBLE)
            .copied()
            .unwrap_or(false)
    }
}
