//! `InMemoryUserRepository`: process-local user table.
//!
//! Records live in a `BTreeMap` keyed by id behind a `parking_lot::RwLock`.
//! Every write checks the username and email constraints while holding the
//! write lock, so two concurrent registrations of the same name cannot both
//! succeed even when they pass the service pre-check together.

use crate::traits::UserRepository;
use async_trait::async_trait;
use parking_lot::RwLock;
use roster_core::{NewUser, RosterError, RosterResult, User, UserId};
use shaku::Component;
use std::collections::BTreeMap;
use tracing::{debug, info, warn};

/// Storage state guarded by the repository lock.
#[derive(Debug)]
pub struct UserTable {
    users: BTreeMap<UserId, User>,
    next_id: i32,
}

impl Default for UserTable {
    fn default() -> Self {
        Self {
            users: BTreeMap::new(),
            next_id: 1,
        }
    }
}

impl UserTable {
    /// Returns the constraint violated by `username`/`email`, ignoring the
    /// record with id `except`.
    fn conflict(&self, username: &str, email: &str, except: Option<UserId>) -> Option<RosterError> {
        let others = self.users.values().filter(|u| Some(u.id) != except);
        for other in others {
            if other.email == email {
                return Some(RosterError::already_exists(format!(
                    "Email {} is already in use",
                    email
                )));
            }
            if other.username == username {
                return Some(RosterError::already_exists(format!(
                    "Username {} is already in use",
                    username
                )));
            }
        }
        None
    }

    fn allocate_id(&mut self) -> RosterResult<UserId> {
        let id = UserId::new(self.next_id);
        self.next_id = self
            .next_id
            .checked_add(1)
            .ok_or_else(|| RosterError::Database("User id space exhausted".to_string()))?;
        Ok(id)
    }
}

/// User repository backed by a process-local table.
#[derive(Component, Default)]
#[shaku(interface = UserRepository)]
pub struct InMemoryUserRepository {
    #[shaku(default)]
    table: RwLock<UserTable>,
}

impl InMemoryUserRepository {
    /// Creates an empty repository. Ids start at 1.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored users.
    #[must_use]
    pub fn len(&self) -> usize {
        self.table.read().users.len()
    }

    /// Returns true if nothing is stored.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.table.read().users.is_empty()
    }
}

#[async_trait]
impl UserRepository for InMemoryUserRepository {
    async fn find_by_credentials(&self, username: &str, password: &str) -> RosterResult<Option<User>> {
        debug!("Repository: find_by_credentials {}", username);
        Ok(self
            .table
            .read()
            .users
            .values()
            .find(|u| u.matches_credentials(username, password))
            .cloned())
    }

    async fn find_all(&self) -> RosterResult<Vec<User>> {
        debug!("Repository: find_all");
        Ok(self.table.read().users.values().cloned().collect())
    }

    async fn find_by_id(&self, id: UserId) -> RosterResult<Option<User>> {
        debug!("Repository: find_by_id {}", id);
        Ok(self.table.read().users.get(&id).cloned())
    }

    async fn find_by_username(&self, username: &str) -> RosterResult<Option<User>> {
        debug!("Repository: find_by_username {}", username);
        Ok(self
            .table
            .read()
            .users
            .values()
            .find(|u| u.username == username)
            .cloned())
    }

    async fn find_by_email(&self, email: &str) -> RosterResult<Option<User>> {
        debug!("Repository: find_by_email {}", email);
        Ok(self
            .table
            .read()
            .users
            .values()
            .find(|u| u.email == email)
            .cloned())
    }

    async fn save(&self, user: NewUser) -> RosterResult<User> {
        debug!("Repository: save {}", user.username);
        let mut table = self.table.write();

        if let Some(err) = table.conflict(&user.username, &user.email, None) {
            warn!("Repository: rejected save of {}: {}", user.username, err);
            return Err(err);
        }

        let id = table.allocate_id()?;
        let stored = user.into_user(id);
        table.users.insert(id, stored.clone());

        info!("Repository: stored user {} with id {}", stored.username, id);
        Ok(stored)
    }

    async fn update(&self, user: &User) -> RosterResult<()> {
        debug!("Repository: update {}", user.id);
        let mut table = self.table.write();

        if !table.users.contains_key(&user.id) {
            return Err(RosterError::not_found("User", user.id));
        }
        if let Some(err) = table.conflict(&user.username, &user.email, Some(user.id)) {
            warn!("Repository: rejected update of {}: {}", user.id, err);
            return Err(err);
        }

        table.users.insert(user.id, user.clone());
        Ok(())
    }

    async fn delete(&self, user: &User) -> RosterResult<bool> {
        debug!("Repository: delete {}", user.id);
        Ok(self.table.write().users.remove(&user.id).is_some())
    }
}
