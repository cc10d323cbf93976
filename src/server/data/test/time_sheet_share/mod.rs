use crate::{
    model::time_sheet::AccessLevel, server::data::time_sheet_share::TimeSheetShareRepository,
};
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod delete_by_time_sheet_id;
mod upsert;
