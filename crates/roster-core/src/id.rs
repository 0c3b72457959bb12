//! Typed ID wrappers for domain entities.

use serde::{Deserialize, Serialize};
use std::fmt::{self, Display};

/// A strongly-typed wrapper for storage-assigned user IDs.
///
/// Valid ids are positive. The wrapper does not reject other values so that
/// callers can hand in whatever they received and get a proper
/// `InvalidRequest` back from the service.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UserId(pub i32);

impl UserId {
    /// Creates a user ID from a raw value.
    #[must_use]
    pub const fn new(id: i32) -> Self {
        Self(id)
    }

    /// Returns true if this id could have been assigned by storage.
    #[must_use]
    pub const fn is_valid(self) -> bool {
        self.0 > 0
    }

    /// Returns the inner value.
    #[must_use]
    pub const fn into_inner(self) -> i32 {
        self.0
    }
}

impl Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<i32> for UserId {
    fn from(id: i32) -> Self {
        Self(id)
    }
}

impl From<UserId> for i32 {
    fn from(id: UserId) -> Self {
        id.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_id_validity() {
        assert!(UserId::new(1).is_valid());
        assert!(!UserId::new(0).is_valid());
        assert!(!UserId::new(-5).is_valid());
    }

    #[test]
    fn test_user_id_display() {
        assert_eq!(UserId::from(42).to_string(), "42");
        assert_eq!(i32::from(UserId(7)), 7);
    }
}
