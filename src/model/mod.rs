//! Wire DTOs shared by every controller.
//!
//! All request and response bodies are defined here with serde and utoipa derives so
//! the OpenAPI document stays in sync with the handlers.

pub mod api;
pub mod auth;
pub mod group;
pub mod invitation;
pub mod statistics;
pub mod task;
pub mod time_sheet;
pub mod user;
