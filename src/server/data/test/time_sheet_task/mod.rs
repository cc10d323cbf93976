use crate::server::{
    data::time_sheet_task::{TimeSheetTaskRepository, UpdateEntryParam},
    model::task::Task,
};
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod create;
mod get_by_time_sheet_ids_with_tasks;
mod update;
