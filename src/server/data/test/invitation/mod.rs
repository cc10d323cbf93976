use crate::server::{
    data::invitation::InvitationRepository,
    model::invitation::{CreateInvitationParam, InvitationStatus},
};
use chrono::Utc;
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod get_by_recipient;
mod update_status;
