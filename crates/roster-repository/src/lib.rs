//! # Roster Repository
//!
//! Storage boundary for user accounts:
//!
//! ```text
//! Service
//!   ↓  Arc<dyn UserRepository>  (domain interface)
//! InMemoryUserRepository        (table + uniqueness constraint)
//! ```
//!
//! Any backend implementing [`UserRepository`] can be injected in place of
//! the in-memory store, provided it reports uniqueness violations as
//! `RosterError::AlreadyExists`.

pub mod memory;
pub mod traits;

pub use memory::InMemoryUserRepository;
pub use traits::*;
