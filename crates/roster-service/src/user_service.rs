//! User service trait definition.

use crate::dto::{RegisterUserRequest, UpdateUserRequest};
use async_trait::async_trait;
use roster_core::{Interface, RosterResult, User, UserId};
use std::collections::HashSet;

/// User account service.
#[async_trait]
pub trait UserService: Interface + Send + Sync {
    /// Returns the user whose username and password both match.
    ///
    /// Blank arguments fail with `InvalidRequest`; no match fails with
    /// `AuthenticationFailure`.
    async fn authenticate(&self, username: &str, password: &str) -> RosterResult<User>;

    /// Returns every stored user.
    async fn find_all_users(&self) -> RosterResult<HashSet<User>>;

    /// Gets a user by ID. Non-positive ids fail with `InvalidRequest`.
    async fn find_user_by_id(&self, id: UserId) -> RosterResult<User>;

    /// Gets a user by username.
    async fn find_user_by_username(&self, username: &str) -> RosterResult<User>;

    /// Gets a user by email.
    async fn find_user_by_email(&self, email: &str) -> RosterResult<User>;

    /// Registers a new `USER` account and returns the stored record.
    async fn register(&self, request: RegisterUserRequest) -> RosterResult<User>;

    /// Merges the payload onto the stored record and persists it.
    async fn update(&self, request: UpdateUserRequest) -> RosterResult<User>;

    /// Deletes a user. Deleting an already missing user succeeds.
    async fn delete(&self, user: &User) -> RosterResult<()>;

    /// True iff first name, last name, username, password and email are all
    /// present and non-blank.
    fn is_user_valid(&self, request: &RegisterUserRequest) -> bool;

    /// Replaces the user's password and persists the record.
    async fn update_password(&self, user: &User, new_password: &str) -> RosterResult<()>;
}
