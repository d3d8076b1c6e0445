//! User management domain module.
//!
//! Users, their in-memory aggregate, and the profile value objects that sit
//! beside them. Pure in-process logic: no IO, no storage.

pub mod address;
pub mod manager;
pub mod preferences;
pub mod profile;
pub mod user;

pub use address::Address;
pub use manager::{UserManager, UserStats};
pub use preferences::{NotificationPreferences, Theme, UserPreferences};
pub use profile::UserProfile;
pub use user::{User, UserRole, is_valid_email};
