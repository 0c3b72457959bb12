//! Request payloads accepted by the service layer.

mod user_dto;

pub use user_dto::*;
