//! In-memory aggregate owning the user collection.

use serde::Serialize;

use shopfront_core::{Entity, EntityId};

use crate::user::{User, UserRole};

/// Owns users in insertion order and hands out their identifiers.
///
/// # Invariants
/// - Every stored user carries a unique, manager-assigned id.
/// - `next_id` only grows; ids of removed users are never handed out again.
#[derive(Debug, Clone)]
pub struct UserManager {
    users: Vec<User>,
    next_id: EntityId,
}

impl Default for UserManager {
    fn default() -> Self {
        Self::new()
    }
}

impl UserManager {
    pub fn new() -> Self {
        Self {
            users: Vec::new(),
            next_id: EntityId::FIRST,
        }
    }

    /// Take ownership of `user`, assign it the next id and return that id.
    pub fn add_user(&mut self, mut user: User) -> EntityId {
        let id = self.next_id;
        user.assign_id(id);
        self.next_id = id.next();
        tracing::debug!(user_id = %id, role = %user.role(), "user added");
        self.users.push(user);
        id
    }

    pub fn get_user_by_id(&self, id: EntityId) -> Option<&User> {
        self.users.iter().find(|u| u.id() == Some(&id))
    }

    pub fn get_user_mut(&mut self, id: EntityId) -> Option<&mut User> {
        self.users.iter_mut().find(|u| u.id() == Some(&id))
    }

    /// Exact, case-sensitive match on the stored email.
    pub fn get_user_by_email(&self, email: &str) -> Option<&User> {
        self.users.iter().find(|u| u.email() == email)
    }

    /// Snapshot of every user; changes to it do not reach the manager.
    pub fn get_all_users(&self) -> Vec<User> {
        self.users.clone()
    }

    pub fn get_active_users(&self) -> Vec<&User> {
        self.users.iter().filter(|u| u.is_active()).collect()
    }

    pub fn users_by_role(&self, role: UserRole) -> Vec<&User> {
        self.users.iter().filter(|u| u.role() == role).collect()
    }

    /// Drop the user with `id`. Returns `false` if no such user is stored.
    pub fn remove_user(&mut self, id: EntityId) -> bool {
        let Some(pos) = self.users.iter().position(|u| u.id() == Some(&id)) else {
            return false;
        };
        self.users.remove(pos);
        tracing::debug!(user_id = %id, "user removed");
        true
    }

    pub fn update_user_role(&mut self, id: EntityId, role: UserRole) -> bool {
        match self.get_user_mut(id) {
            Some(user) => {
                user.set_role(role);
                tracing::debug!(user_id = %id, %role, "user role updated");
                true
            }
            None => false,
        }
    }

    pub fn count_users(&self) -> usize {
        self.users.len()
    }

    pub fn count_active_users(&self) -> usize {
        self.users.iter().filter(|u| u.is_active()).count()
    }

    pub fn count_users_by_role(&self, role: UserRole) -> usize {
        self.users.iter().filter(|u| u.role() == role).count()
    }

    pub fn stats(&self) -> UserStats {
        UserStats {
            total: self.count_users(),
            active: self.count_active_users(),
            by_role: UserRole::ALL
                .into_iter()
                .map(|role| (role, self.count_users_by_role(role)))
                .collect(),
        }
    }
}

/// Counts reported by [`UserManager::stats`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UserStats {
    pub total: usize,
    pub active: usize,
    /// One entry per role, in declaration order.
    pub by_role: Vec<(UserRole, usize)>,
}

impl core::fmt::Display for UserStats {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        writeln!(f, "Total users: {}", self.total)?;
        writeln!(f, "Active users: {}", self.active)?;
        for (role, count) in &self.by_role {
            writeln!(f, "{} users: {}", role.title(), count)?;
        }
        Ok(())
    }
}
