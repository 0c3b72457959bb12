//! User-related request payloads.

use roster_core::validation::{is_blank, rules};
use roster_core::{NewUser, RosterError, RosterResult, User, UserId, UserRole, ValidateExt};
use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationErrors};

/// Registration payload.
///
/// Every field is optional so a partially filled form can be represented and
/// rejected with a field-level message. `id` and `role` are accepted but
/// ignored: storage assigns the id and every new account gets `USER`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RegisterUserRequest {
    pub id: Option<UserId>,
    pub username: Option<String>,
    pub email: Option<String>,
    pub password: Option<String>,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub role: Option<UserRole>,
    pub locations: Option<Vec<String>>,
    pub home: Option<String>,
    pub zip_code: Option<String>,
}

impl RegisterUserRequest {
    /// Creates a payload with the five required fields set.
    #[must_use]
    pub fn new(
        username: impl Into<String>,
        email: impl Into<String>,
        password: impl Into<String>,
        first_name: impl Into<String>,
        last_name: impl Into<String>,
    ) -> Self {
        Self {
            username: Some(username.into()),
            email: Some(email.into()),
            password: Some(password.into()),
            first_name: Some(first_name.into()),
            last_name: Some(last_name.into()),
            ..Self::default()
        }
    }

    /// Sets the requested role (ignored on registration).
    #[must_use]
    pub fn with_role(mut self, role: UserRole) -> Self {
        self.role = Some(role);
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
        self.locations = Some(locations);
        self
    }

    /// Validates the payload and converts it into an unsaved `USER` account.
    pub fn into_new_user(self) -> RosterResult<NewUser> {
        self.validate_request()?;

        let mut user = NewUser::new(
            required("username", self.username)?,
            required("email", self.email)?,
            required("password", self.password)?,
            required("first_name", self.first_name)?,
            required("last_name", self.last_name)?,
        )
        .with_locations(self.locations.unwrap_or_default());
        user.home = self.home;
        user.zip_code = self.zip_code;

        Ok(user)
    }
}

fn required(field: &str, value: Option<String>) -> RosterResult<String> {
    value.ok_or_else(|| RosterError::invalid_request(format!("{}: is required", field)))
}

impl Validate for RegisterUserRequest {
    fn validate(&self) -> Result<(), ValidationErrors> {
        let mut errors = ValidationErrors::new();

        let fields = [
            ("first_name", self.first_name.as_deref()),
            ("last_name", self.last_name.as_deref()),
            ("username", self.username.as_deref()),
            ("password", self.password.as_deref()),
            ("email", self.email.as_deref()),
        ];
        for (field, value) in fields {
            if let Err(error) = rules::required_not_blank(value) {
                errors.add(field, error);
            }
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }
}

impl From<&User> for RegisterUserRequest {
    fn from(user: &User) -> Self {
        Self {
            id: Some(user.id),
            username: Some(user.username.clone()),
            email: Some(user.email.clone()),
            password: Some(user.password.clone()),
            first_name: Some(user.first_name.clone()),
            last_name: Some(user.last_name.clone()),
            role: Some(user.role),
            locations: Some(user.locations.clone()),
            home: user.home.clone(),
            zip_code: user.zip_code.clone(),
        }
    }
}

/// Update payload.
///
/// Absent or blank values keep what is stored (merge-by-omission). For
/// `locations`, only `None` keeps the stored list; an empty list clears it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateUserRequest {
    pub id: UserId,
    #[serde(default)]
    pub username: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub password: Option<String>,
    #[serde(default)]
    pub first_name: Option<String>,
    #[serde(default)]
    pub last_name: Option<String>,
    #[serde(default)]
    pub role: Option<UserRole>,
    #[serde(default)]
    pub locations: Option<Vec<String>>,
    #[serde(default)]
    pub home: Option<String>,
    #[serde(default)]
    pub zip_code: Option<String>,
}

impl UpdateUserRequest {
    /// Creates an empty update for the given user; applying it changes nothing.
    #[must_use]
    pub fn new(id: UserId) -> Self {
        Self {
            id,
            username: None,
            email: None,
            password: None,
            first_name: None,
            last_name: None,
            role: None,
            locations: None,
            home: None,
            zip_code: None,
        }
    }

    #[must_use]
    pub fn with_username(mut self, username: impl Into<String>) -> Self {
        self.username = Some(username.into());
        self
    }

    #[must_use]
    pub fn with_email(mut self, email: impl Into<String>) -> Self {
        self.email = Some(email.into());
        self
    }

    #[must_use]
    pub fn with_password(mut self, password: impl Into<String>) -> Self {
        self.password = Some(password.into());
        self
    }

    #[must_use]
    pub fn with_name(mut self, first_name: impl Into<String>, last_name: impl Into<String>) -> Self {
        self.first_name = Some(first_name.into());
        self.last_name = Some(last_name.into());
        self
    }

    #[must_use]
    pub fn with_role(mut self, role: UserRole) -> Self {
        self.role = Some(role);
        self
    }

    #[must_use]
    pub fn with_locations(mut self, locations: Vec<String>) -> Self {
        self.locations = Some(locations);
        self
    }

    #[must_use]
    pub fn with_home(mut self, home: impl Into<String>) -> Self {
        self.home = Some(home.into());
        self
    }

    #[must_use]
    pub fn with_zip_code(mut self, zip_code: impl Into<String>) -> Self {
        self.zip_code = Some(zip_code.into());
        self
    }

    /// Email to check for conflicts, if the payload changes it.
    #[must_use]
    pub fn email_change(&self) -> Option<&str> {
        non_blank(self.email.as_deref())
    }

    /// Username to check for conflicts, if the payload changes it.
    #[must_use]
    pub fn username_change(&self) -> Option<&str> {
        non_blank(self.username.as_deref())
    }

    /// Applies this payload to the stored record.
    ///
    /// The id always comes from `stored`.
    #[must_use]
    pub fn merge_onto(&self, stored: &User) -> User {
        User {
            id: stored.id,
            username: pick(self.username.as_deref(), &stored.username),
            email: pick(self.email.as_deref(), &stored.email),
            password: pick(self.password.as_deref(), &stored.password),
            first_name: pick(self.first_name.as_deref(), &stored.first_name),
            last_name: pick(self.last_name.as_deref(), &stored.last_name),
            role: self.role.unwrap_or(stored.role),
            locations: self
                .locations
                .clone()
                .unwrap_or_else(|| stored.locations.clone()),
            home: pick_optional(self.home.as_deref(), stored.home.as_ref()),
            zip_code: pick_optional(self.zip_code.as_deref(), stored.zip_code.as_ref()),
        }
    }
}

impl From<User> for UpdateUserRequest {
    fn from(user: User) -> Self {
        Self {
            id: user.id,
            username: Some(user.username),
            email: Some(user.email),
            password: Some(user.password),
            first_name: Some(user.first_name),
            last_name: Some(user.last_name),
            role: Some(user.role),
            locations: Some(user.locations),
            home: user.home,
            zip_code: user.zip_code,
        }
    }
}

fn non_blank(value: Option<&str>) -> Option<&str> {
    if is_blank(value) {
        None
    } else {
        value
    }
}

fn pick(incoming: Option<&str>, stored: &str) -> String {
    non_blank(incoming).unwrap_or(stored).to_string()
}

fn pick_optional(incoming: Option<&str>, stored: Option<&String>) -> Option<String> {
    non_blank(incoming)
        .map(ToString::to_string)
        .or_else(|| stored.cloned())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn stored_user() -> User {
        NewUser::new("alice", "alice@example.com", "secret", "Alice", "Smith")
            .with_home("Springfield")
            .with_zip_code("12345")
            .with_locations(vec!["Shelbyville".to_string()])
            .into_user(UserId(1))
    }

    #[test]
    fn test_register_request_valid() {
        let request = RegisterUserRequest::new("alice", "alice@example.com", "pw", "Alice", "Smith");
        assert!(request.validate().is_ok());
    }

    #[test]
    fn test_register_request_reports_every_missing_field() {
        let request = RegisterUserRequest {
            username: Some("  ".to_string()),
            email: Some("alice@example.com".to_string()),
            ..RegisterUserRequest::default()
        };

        let err = request.validate_request().unwrap_err();
        match err {
            RosterError::InvalidRequest(msg) => assert_eq!(
                msg,
                "first_name: is required; last_name: is required; \
                 password: is required; username: must not be blank"
            ),
            other => panic!("Expected InvalidRequest, got {other:?}"),
        }
    }

    #[test]
    fn test_into_new_user_forces_user_role() {
        let new_user = RegisterUserRequest::new("bob", "bob@example.com", "pw", "Bob", "Jones")
            .with_role(UserRole::Admin)
            .with_home("Capital City")
            .into_new_user()
            .unwrap();

        assert_eq!(new_user.role, UserRole::User);
        assert_eq!(new_user.home.as_deref(), Some("Capital City"));
        assert!(new_user.locations.is_empty());
    }

    #[test]
    fn test_into_new_user_rejects_invalid_payload() {
        let request = RegisterUserRequest::default();
        assert!(matches!(
            request.into_new_user(),
            Err(RosterError::InvalidRequest(_))
        ));
    }

    #[test]
    fn test_empty_update_keeps_everything() {
        let stored = stored_user();
        let merged = UpdateUserRequest::new(stored.id).merge_onto(&stored);
        assert_eq!(merged, stored);
    }

    #[test]
    fn test_blank_values_keep_stored_values() {
        let stored = stored_user();
        let update = UpdateUserRequest::new(stored.id)
            .with_username("")
            .with_email("   ")
            .with_home(" ")
            .with_zip_code("");

        assert_eq!(update.merge_onto(&stored), stored);
        assert!(update.email_change().is_none());
        assert!(update.username_change().is_none());
    }

    #[test]
    fn test_only_email_changes() {
        let stored = stored_user();
        let update = UpdateUserRequest::new(stored.id).with_email("new@example.com");
        let merged = update.merge_onto(&stored);

        assert_eq!(merged.email, "new@example.com");
        assert_eq!(
            User {
                email: stored.email.clone(),
                ..merged
            },
            stored
        );
        assert_eq!(update.email_change(), Some("new@example.com"));
    }

    #[test]
    fn test_locations_merge() {
        let stored = stored_user();

        let cleared = UpdateUserRequest::new(stored.id)
            .with_locations(Vec::new())
            .merge_onto(&stored);
        assert!(cleared.locations.is_empty());

        let kept = UpdateUserRequest::new(stored.id).merge_onto(&stored);
        assert_eq!(kept.locations, stored.locations);
    }

    #[test]
    fn test_merge_fills_missing_optional_attributes() {
        let stored = NewUser::new("carol", "carol@example.com", "pw", "Carol", "White")
            .into_user(UserId(3));
        let merged = UpdateUserRequest::new(stored.id)
            .with_home("Ogdenville")
            .with_role(UserRole::Admin)
            .merge_onto(&stored);

        assert_eq!(merged.home.as_deref(), Some("Ogdenville"));
        assert!(merged.zip_code.is_none());
        assert_eq!(merged.role, UserRole::Admin);
    }

    #[test]
    fn test_update_request_from_user_round_trips_through_merge() {
        let stored = stored_user();
        let update = UpdateUserRequest::from(stored.clone());
        assert_eq!(update.merge_onto(&stored), stored);
    }

    #[test]
    fn test_register_request_deserializes_partial_payload() {
        let request: RegisterUserRequest =
            serde_json::from_str(r#"{"username": "dave", "firstName": "Dave"}"#).unwrap();
        assert_eq!(request.username.as_deref(), Some("dave"));
        assert_eq!(request.first_name.as_deref(), Some("Dave"));
        assert!(request.email.is_none());
        assert!(request.validate().is_err());
    }
}
