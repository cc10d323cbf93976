use crate::server::{
    data::time_sheet::TimeSheetRepository,
    model::time_sheet::{DateRange, TimeSheetParam},
};
use chrono::NaiveDate;
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory, factory::time_sheet::TimeSheetFactory};

mod get_by_user_id_between;
mod get_shared;
mod update;

fn date(month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, month, day).unwrap()
}
