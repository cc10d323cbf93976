use crate::server::{
    data::user::UserRepository,
    model::user::{CreateUserParam, Role, UpdateUserParam},
};
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod create;
mod delete;
mod exists;
mod find_by_email;
mod get_by_ids;
mod update;
