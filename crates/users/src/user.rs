//! User entity and role model.

use core::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use shopfront_core::{DomainError, DomainResult, Entity, EntityId};

// ─────────────────────────────────────────────────────────────────────────────
// User Role
// ─────────────────────────────────────────────────────────────────────────────

/// Closed set of user roles.
///
/// Declaration order is significant: reports iterate roles in this order, and
/// it doubles as the privilege hierarchy (`Guest` lowest, `Admin` highest).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum UserRole {
    Admin,
    #[default]
    Member,
    Guest,
}

impl UserRole {
    /// All roles in declaration order.
    pub const ALL: [UserRole; 3] = [UserRole::Admin, UserRole::Member, UserRole::Guest];

    /// Fixed lowercase label.
    pub fn label(self) -> &'static str {
        match self {
            UserRole::Admin => "admin",
            UserRole::Member => "member",
            UserRole::Guest => "guest",
        }
    }

    /// Label with a leading capital, as used in reports.
    pub fn title(self) -> &'static str {
        match self {
            UserRole::Admin => "Admin",
            UserRole::Member => "Member",
            UserRole::Guest => "Guest",
        }
    }

    fn rank(self) -> u8 {
        match self {
            UserRole::Guest => 0,
            UserRole::Member => 1,
            UserRole::Admin => 2,
        }
    }
}

impl core::fmt::Display for UserRole {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for UserRole {
    type Err = DomainError;

    fn from_str(s: &str) -> DomainResult<Self> {
        let needle = s.trim();
        UserRole::ALL
            .into_iter()
            .find(|role| role.label().eq_ignore_ascii_case(needle))
            .ok_or_else(|| DomainError::validation(format!("unknown user role: {needle}")))
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// User
// ─────────────────────────────────────────────────────────────────────────────

/// Trivial email shape check: must contain both `@` and `.`.
pub fn is_valid_email(email: &str) -> bool {
    email.contains('@') && email.contains('.')
}

/// A user account.
///
/// # Invariants
/// - `id` is `None` until a [`crate::UserManager`] assigns one.
/// - `created_at` never changes after construction.
/// - `update_email` only stores addresses that pass [`is_valid_email`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    id: Option<EntityId>,
    name: String,
    email: String,
    role: UserRole,
    is_active: bool,
    created_at: DateTime<Utc>,
}

impl User {
    /// Create an active member. The email is stored as given.
    pub fn new(name: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            id: None,
            name: name.into(),
            email: email.into(),
            role: UserRole::default(),
            is_active: true,
            created_at: Utc::now(),
        }
    }

    pub fn with_role(mut self, role: UserRole) -> Self {
        self.role = role;
        self
    }

    /// Override the creation timestamp (rehydration, deterministic tests).
    pub fn with_created_at(mut self, created_at: DateTime<Utc>) -> Self {
        self.created_at = created_at;
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn role(&self) -> UserRole {
        self.role
    }

    pub fn is_active(&self) -> bool {
        self.is_active
    }

    /// "{name} <{email}>"
    pub fn display_name(&self) -> String {
        format!("{} <{}>", self.name, self.email)
    }

    /// Replace the email if it passes the format check.
    ///
    /// Returns `false` and leaves the current email untouched otherwise.
    pub fn update_email(&mut self, new_email: impl Into<String>) -> bool {
        let new_email = new_email.into();
        if !is_valid_email(&new_email) {
            tracing::debug!(user = %self.name, "rejected email update");
            return false;
        }
        self.email = new_email;
        true
    }

    pub fn is_admin(&self) -> bool {
        self.role == UserRole::Admin
    }

    /// Whether this user's role is at least `required` in the hierarchy.
    pub fn has_permission(&self, required: UserRole) -> bool {
        self.role.rank() >= required.rank()
    }

    pub fn set_role(&mut self, role: UserRole) {
        self.role = role;
    }

    pub fn deactivate(&mut self) {
        self.is_active = false;
    }

    pub fn activate(&mut self) {
        self.is_active = true;
    }

    pub(crate) fn assign_id(&mut self, id: EntityId) {
        self.id = Some(id);
    }
}

impl Entity for User {
    type Id = EntityId;

    fn id(&self) -> Option<&Self::Id> {
        self.id.as_ref()
    }

    fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    fn info(&self) -> String {
        format!("User: {} ({}) - {}", self.name, self.email, self.role.label())
    }
}

impl core::fmt::Display for User {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{} <{}>", self.name, self.email)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, TimeZone};

    fn john() -> User {
        User::new("John Doe", "john@example.com")
    }

    #[test]
    fn new_user_defaults_to_active_member_without_id() {
        let user = john();
        assert_eq!(user.role(), UserRole::Member);
        assert!(user.is_active());
        assert!(user.id().is_none());
    }

    #[test]
    fn info_uses_role_label() {
        let user = User::new("Admin User", "admin@example.com").with_role(UserRole::Admin);
        assert_eq!(user.info(), "User: Admin User (admin@example.com) - admin");
    }

    #[test]
    fn display_matches_display_name() {
        let user = john();
        assert_eq!(user.display_name(), "John Doe <john@example.com>");
        assert_eq!(user.to_string(), user.display_name());
    }

    #[test]
    fn debug_form_includes_constructor_fields() {
        let user = john().with_role(UserRole::Guest);
        let debug = format!("{user:?}");
        assert!(debug.contains("John Doe"));
        assert!(debug.contains("john@example.com"));
        assert!(debug.contains("Guest"));
    }

    #[test]
    fn update_email_accepts_valid_address() {
        let mut user = john();
        assert!(user.update_email("john.doe@example.org"));
        assert_eq!(user.email(), "john.doe@example.org");
    }

    #[test]
    fn update_email_rejects_missing_at_or_dot() {
        let mut user = john();
        assert!(!user.update_email("john.example.com"));
        assert!(!user.update_email("john@localhost"));
        assert!(!user.update_email(""));
        assert_eq!(user.email(), "john@example.com");
    }

    #[test]
    fn is_admin_only_for_admin_role() {
        assert!(john().with_role(UserRole::Admin).is_admin());
        assert!(!john().is_admin());
        assert!(!john().with_role(UserRole::Guest).is_admin());
    }

    #[test]
    fn permission_follows_role_hierarchy() {
        let member = john();
        assert!(member.has_permission(UserRole::Guest));
        assert!(member.has_permission(UserRole::Member));
        assert!(!member.has_permission(UserRole::Admin));

        let admin = john().with_role(UserRole::Admin);
        assert!(UserRole::ALL.iter().all(|r| admin.has_permission(*r)));
    }

    #[test]
    fn deactivate_is_idempotent_and_activate_restores() {
        let mut user = john();
        user.deactivate();
        user.deactivate();
        assert!(!user.is_active());
        user.activate();
        assert!(user.is_active());
    }

    #[test]
    fn age_days_counts_from_created_at() {
        let created = Utc.with_ymd_and_hms(2024, 3, 1, 0, 0, 0).unwrap();
        let user = john().with_created_at(created);
        assert_eq!(user.age_days_at(created + Duration::days(5)), 5);
    }

    #[test]
    fn role_parses_case_insensitively() {
        assert_eq!("ADMIN".parse::<UserRole>().unwrap(), UserRole::Admin);
        assert_eq!(" guest ".parse::<UserRole>().unwrap(), UserRole::Guest);
        match "owner".parse::<UserRole>().unwrap_err() {
            DomainError::Validation(msg) => assert!(msg.contains("owner")),
            _ => panic!("Expected Validation error"),
        }
    }

    #[test]
    fn role_serializes_as_label() {
        let json = serde_json::to_string(&UserRole::Member).unwrap();
        assert_eq!(json, "\"member\"");
    }

    mod proptest_tests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #![proptest_config(ProptestConfig {
                cases: 512,
                ..ProptestConfig::default()
            })]

            /// Property: an email is stored iff it contains both '@' and '.'.
            #[test]
            fn update_email_matches_format_check(candidate in "[a-z@. ]{0,24}") {
                let mut user = john();
                let accepted = user.update_email(candidate.clone());
                let expected = candidate.contains('@') && candidate.contains('.');

                prop_assert_eq!(accepted, expected);
                if expected {
                    prop_assert_eq!(user.email(), candidate.as_str());
                } else {
                    prop_assert_eq!(user.email(), "john@example.com");
                }
            }
        }
    }
}
