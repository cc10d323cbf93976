pub mod auth;
pub mod group;
pub mod invitation;
pub mod statistics;
pub mod task;
pub mod time_sheet;
pub mod user;
