//! SeaORM entity models for the time-sheet tracking schema.

pub mod prelude;

pub mod group;
pub mod invitation;
pub mod task;
pub mod time_sheet;
pub mod time_sheet_share_group;
pub mod time_sheet_share_user;
pub mod time_sheet_task;
pub mod user;
pub mod user_group;
