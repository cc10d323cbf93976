use crate::server::{data::group::GroupRepository, model::group::CreateGroupParam};
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod count_members;
mod find_by_invit_code;
mod get_by_user_id;
mod update;
