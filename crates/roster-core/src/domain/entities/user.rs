//! User entity.

use super::super::value_objects::UserRole;
use crate::UserId;
use serde::{Deserialize, Serialize};

/// A persisted user account.
///
/// Equality and hashing cover every field, so two values compare equal only
/// when storage holds exactly the same record. Post-write verification relies
/// on that.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    /// Storage-assigned identifier.
    pub id: UserId,

    /// Unique username.
    pub username: String,

    /// Unique email address.
    pub email: String,

    /// Password as stored (never exposed via serialization).
    #[serde(skip_serializing, default)]
    pub password: String,

    pub first_name: String,

    pub last_name: String,

    pub role: UserRole,

    /// Free-form list of saved locations.
    #[serde(default)]
    pub locations: Vec<String>,

    pub home: Option<String>,

    pub zip_code: Option<String>,
}

impl User {
    /// Returns "first last".
    #[must_use]
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }

    /// Checks if the user is an admin.
    #[must_use]
    pub const fn is_admin(&self) -> bool {
        matches!(self.role, UserRole::Admin)
    }

    /// Replaces the stored password.
    pub fn update_password(&mut self, password: impl Into<String>) {
        self.password = password.into();
    }

    /// Returns true if both credentials match exactly.
    #[must_use]
    pub fn matches_credentials(&self, username: &str, password: &str) -> bool {
        self.username == username && self.password == password
    }
}

/// A validated account that has not been stored yet.
///
/// Storage assigns the id when it persists the record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewUser {
    pub username: String,
    pub email: String,
    pub password: String,
    pub first_name: String,
    pub last_name: String,
    pub role: UserRole,
    pub locations: Vec<String>,
    pub home: Option<String>,
    pub zip_code: Option<String>,
}

impl NewUser {
    /// Creates a new regular user with no profile attributes.
    #[must_use]
    pub fn new(
        username: impl Into<String>,
        email: impl Into<String>,
        password: impl Into<String>,
        first_name: impl Into<String>,
        last_name: impl Into<String>,
    ) -> Self {
        Self {
            username: username.into(),
            email: email.into(),
            password: password.into(),
            first_name: first_name.into(),
            last_name: last_name.into(),
            role: UserRole::User,
            locations: Vec::new(),
            home: None,
            zip_code: None,
        }
    }

    /// Sets the role.
    #[must_use]
    pub fn with_role(mut self, role: UserRole) -> Self {
        self.role = role;
        self
    }

    /// Sets the home attribute.
    #[must_use]
    pub fn with_home(mut self, home: impl Into<String>) -> Self {
        self.home = Some(home.into());
        self
    }

    /// Sets the zip code.
    #[must_use]
    pub fn with_zip_code(mut self, zip_code: impl Into<String>) -> Self {
        self.zip_code = Some(zip_code.into());
        self
    }

    /// Sets the saved locations.
    #[must_use]
    pub fn with_locations(mut self, locations: Vec<String>) -> Self {
        self.locations = locations;
        self
    }

    /// Turns this into a stored record under the given id.
    #[must_use]
    pub fn into_user(self, id: UserId) -> User {
        User {
            id,
            username: self.username,
            email: self.email,
            password: self.password,
            first_name: self.first_name,
            last_name: self.last_name,
            role: self.role,
            locations: self.locations,
            home: self.home,
            zip_code: self.zip_code,
        }
    }
}
