//! Entity trait: identity + creation time across state changes.

use chrono::{DateTime, Utc};

const SECONDS_PER_DAY: i64 = 86_400;

/// Capability shared by every identified domain object.
///
/// An entity has no identifier until an aggregate takes ownership of it, and
/// its creation timestamp is fixed at construction.
pub trait Entity {
    /// Strongly-typed entity identifier.
    type Id: Clone + Eq + core::hash::Hash + core::fmt::Debug;

    /// Returns the identifier, or `None` if no aggregate has assigned one yet.
    fn id(&self) -> Option<&Self::Id>;

    /// When the entity was constructed.
    fn created_at(&self) -> DateTime<Utc>;

    /// Human-readable one-line description.
    fn info(&self) -> String;

    /// Whole days elapsed between `created_at` and `now`, rounded down
    /// (a `created_at` in the future yields a negative age).
    fn age_days_at(&self, now: DateTime<Utc>) -> i64 {
        (now - self.created_at()).num_seconds().div_euclid(SECONDS_PER_DAY)
    }

    /// Whole days elapsed since creation.
    fn age_days(&self) -> i64 {
        self.age_days_at(Utc::now())
    }
}
