//! # Roster App
//!
//! Wires configuration, tracing, storage and the user service together.

pub mod di;
pub mod startup;

pub use di::{build_module, RosterModule};
pub use startup::{bootstrap, Application};
