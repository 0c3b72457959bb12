//! # Roster Service
//!
//! Account management use cases: authentication, registration, lookup,
//! update, password change and deletion, all backed by an injected
//! [`roster_repository::UserRepository`].

pub mod dto;
pub mod r#impl;
pub mod user_service;

pub use dto::*;
pub use r#impl::{UserServiceImpl, UserServiceImplParameters};
pub use user_service::*;
