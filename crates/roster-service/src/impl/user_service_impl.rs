//! User service implementation.

use crate::dto::{RegisterUserRequest, UpdateUserRequest};
use crate::user_service::UserService;
use async_trait::async_trait;
use roster_core::validation::is_blank;
use roster_core::{RosterError, RosterResult, User, UserId, ValidateExt};
use roster_repository::UserRepository;
use shaku::Component;
use std::collections::HashSet;
use std::sync::Arc;
use tracing::{debug, info, warn};

/// User service component.
///
/// When `verify_writes` is set, every update re-reads the record it just
/// wrote and fails with `FailedTransaction` if storage does not hold it.
#[derive(Component)]
#[shaku(interface = UserService)]
pub struct UserServiceImpl {
    #[shaku(inject)]
    user_repository: Arc<dyn UserRepository>,
    #[shaku(default = true)]
    verify_writes: bool,
}

impl UserServiceImpl {
    /// Creates a user service with write verification enabled.
    pub fn new(user_repository: Arc<dyn UserRepository>) -> Self {
        Self {
            user_repository,
            verify_writes: true,
        }
    }

    /// Enables or disables post-write verification.
    #[must_use]
    pub fn with_write_verification(mut self, verify_writes: bool) -> Self {
        self.verify_writes = verify_writes;
        self
    }

    /// Fails unless storage holds exactly `expected` under its id.
    async fn verify_stored(&self, expected: &User, operation: &str) -> RosterResult<()> {
        if !self.verify_writes {
            return Ok(());
        }

        let stored = self.user_repository.find_by_id(expected.id).await?;
        if stored.as_ref() == Some(expected) {
            Ok(())
        } else {
            warn!("{} of user {} was not persisted", operation, expected.id);
            Err(RosterError::failed_transaction(format!(
                "{} of user {} could not be verified",
                operation, expected.id
            )))
        }
    }

    /// Fails if a different user already holds `email`.
    async fn ensure_email_free(&self, email: &str, owner: Option<UserId>) -> RosterResult<()> {
        match self.user_repository.find_by_email(email).await? {
            Some(holder) if Some(holder.id) != owner => {
                warn!("Email {} is already in use by user {}", email, holder.id);
                Err(RosterError::already_exists(format!("Email {} is already in use", email)))
            }
            _ => Ok(()),
        }
    }

    /// Fails if a different user already holds `username`.
    async fn ensure_username_free(&self, username: &str, owner: Option<UserId>) -> RosterResult<()> {
        match self.user_repository.find_by_username(username).await? {
            Some(holder) if Some(holder.id) != owner => {
                warn!("Username {} is already in use by user {}", username, holder.id);
                Err(RosterError::already_exists(format!(
                    "Username {} is already in use",
                    username
                )))
            }
            _ => Ok(()),
        }
    }
}

#[async_trait]
impl UserService for UserServiceImpl {
    async fn authenticate(&self, username: &str, password: &str) -> RosterResult<User> {
        debug!("Authenticating user: {}", username);

        if is_blank(Some(username)) || is_blank(Some(password)) {
            return Err(RosterError::invalid_request(
                "Username and password must both be provided",
            ));
        }

        self.user_repository
            .find_by_credentials(username, password)
            .await?
            .ok_or_else(|| {
                debug!("No user matches the credentials for {}", username);
                RosterError::authentication_failure("Invalid username or password")
            })
    }

    async fn find_all_users(&self) -> RosterResult<HashSet<User>> {
        debug!("Finding all users");
        let users = self.user_repository.find_all().await?;
        Ok(users.into_iter().collect())
    }

    async fn find_user_by_id(&self, id: UserId) -> RosterResult<User> {
        debug!("Finding user by id: {}", id);

        if !id.is_valid() {
            return Err(RosterError::invalid_request(format!(
                "User id must be positive, got {}",
                id
            )));
        }

        self.user_repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| RosterError::not_found("User", id))
    }

    async fn find_user_by_username(&self, username: &str) -> RosterResult<User> {
        debug!("Finding user by username: {}", username);

        if username.is_empty() {
            return Err(RosterError::invalid_request("Username must not be empty"));
        }

        self.user_repository
            .find_by_username(username)
            .await?
            .ok_or_else(|| RosterError::not_found("User", username))
    }

    async fn find_user_by_email(&self, email: &str) -> RosterResult<User> {
        debug!("Finding user by email: {}", email);

        if is_blank(Some(email)) {
            return Err(RosterError::invalid_request("Email must not be blank"));
        }

        self.user_repository
            .find_by_email(email)
            .await?
            .ok_or_else(|| RosterError::not_found("User", email))
    }

    async fn register(&self, request: RegisterUserRequest) -> RosterResult<User> {
        debug!("Registering user: {:?}", request.username);

        request.validate_request()?;

        if let Some(email) = request.email.as_deref() {
            self.ensure_email_free(email, None).await?;
        }
        if let Some(username) = request.username.as_deref() {
            self.ensure_username_free(username, None).await?;
        }

        let saved = self.user_repository.save(request.into_new_user()?).await?;

        info!("User registered: {} ({})", saved.id, saved.username);
        Ok(saved)
    }

    async fn update(&self, request: UpdateUserRequest) -> RosterResult<User> {
        debug!("Updating user: {}", request.id);

        let stored = self
            .user_repository
            .find_by_id(request.id)
            .await?
            .ok_or_else(|| RosterError::not_found("User", request.id))?;

        if let Some(email) = request.email_change() {
            self.ensure_email_free(email, Some(stored.id)).await?;
        }
        if let Some(username) = request.username_change() {
            self.ensure_username_free(username, Some(stored.id)).await?;
        }

        let merged = request.merge_onto(&stored);
        self.user_repository.update(&merged).await?;
        self.verify_stored(&merged, "Update").await?;

        info!("User updated: {}", merged.id);
        Ok(merged)
    }

    async fn delete(&self, user: &User) -> RosterResult<()> {
        debug!("Deleting user: {}", user.id);

        if !self.user_repository.delete(user).await? {
            debug!("User {} was not present at delete time", user.id);
        }

        if self.verify_writes {
            match self.find_user_by_id(user.id).await {
                Ok(_) => {
                    warn!("User {} is still present after delete", user.id);
                    return Err(RosterError::failed_transaction(format!(
                        "User {} is still present after delete",
                        user.id
                    )));
                }
                Err(e) if e.is_not_found() => {}
                Err(e) => return Err(e),
            }
        }

        info!("User deleted: {}", user.id);
        Ok(())
    }

    fn is_user_valid(&self, request: &RegisterUserRequest) -> bool {
        request.validate_request().is_ok()
    }

    async fn update_password(&self, user: &User, new_password: &str) -> RosterResult<()> {
        debug!("Updating password for user: {}", user.id);

        if is_blank(Some(new_password)) {
            return Err(RosterError::invalid_request("New password must not be blank"));
        }

        let mut updated = user.clone();
        updated.update_password(new_password);

        self.user_repository.update(&updated).await?;
        self.verify_stored(&updated, "Password update").await?;

        info!("Password updated for user: {}", user.id);
        Ok(())
    }
}

impl std::fmt::Debug for UserServiceImpl {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("UserServiceImpl")
            .field("verify_writes", &self.verify_writes)
            .finish_non_exhaustive()
    }
}
