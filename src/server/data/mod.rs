//! Database repository layer for all domain entities.
//!
//! This module contains repository structs that handle database operations (CRUD) for each
//! domain in the application. Repositories use SeaORM entity models internally and return
//! domain models to maintain separation between the data layer and business logic layer.
//!
//! Every repository is generic over `ConnectionTrait`, so the same methods run on the
//! connection pool or inside a `DatabaseTransaction` when a service needs several writes
//! to commit together.

pub mod group;
pub mod invitation;
pub mod task;
pub mod time_sheet;
pub mod time_sheet_share;
pub mod time_sheet_task;
pub mod user;
pub mod user_group;

#[cfg(test)]
mod test;
