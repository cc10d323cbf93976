mod group;
mod invitation;
mod time_sheet;
mod time_sheet_share;
mod time_sheet_task;
mod user;
mod user_group;
