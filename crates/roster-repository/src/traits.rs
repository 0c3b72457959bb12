//! Repository trait definitions.

use async_trait::async_trait;
use roster_core::{Interface, NewUser, RosterResult, User, UserId};

/// User repository trait.
///
/// Lookups return `Ok(None)` for a missing record; `Err` is reserved for
/// storage failures and constraint violations.
#[async_trait]
pub trait UserRepository: Interface + Send + Sync {
    /// Finds the user whose username and password both match exactly.
    async fn find_by_credentials(&self, username: &str, password: &str) -> RosterResult<Option<User>>;

    /// Returns every stored user.
    async fn find_all(&self) -> RosterResult<Vec<User>>;

    /// Finds a user by ID.
    async fn find_by_id(&self, id: UserId) -> RosterResult<Option<User>>;

    /// Finds a user by username.
    async fn find_by_username(&self, username: &str) -> RosterResult<Option<User>>;

    /// Finds a user by email.
    async fn find_by_email(&self, email: &str) -> RosterResult<Option<User>>;

    /// Stores a new user and returns it with its assigned id.
    ///
    /// Fails with `AlreadyExists` when the username or email is taken.
    async fn save(&self, user: NewUser) -> RosterResult<User>;

    /// Replaces the stored record with the same id.
    ///
    /// Fails with `NotFound` for an unknown id and `AlreadyExists` when the
    /// username or email belongs to another record.
    async fn update(&self, user: &User) -> RosterResult<()>;

    /// Deletes the record with the user's id. Returns false if nothing was removed.
    async fn delete(&self, user: &User) -> RosterResult<bool>;
}
