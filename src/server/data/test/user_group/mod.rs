use crate::server::{data::user_group::UserGroupRepository, model::group::GroupRole};
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod create;
mod delete_by_group_id;
mod get_by_group_id_with_users;
