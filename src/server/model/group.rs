//! Group and membership domain models.
//!
//! Groups are joined through an invitation code. Each membership carries a role that
//! decides who may manage the group and the time-sheets shared with it.

use crate::{
    model::group::{GroupDto, GroupMemberDto},
    server::model::user::User,
};

#[derive(Debug, Clone, PartialEq)]
pub struct Group {
    pub id: i32,
    pub name: String,
    pub invit_code: String,
}

impl Group {
    pub fn into_dto(self) -> GroupDto {
        GroupDto {
            id: self.id,
            name: self.name,
            invit_code: self.invit_code,
        }
    }

    pub fn from_entity(entity: entity::group::Model) -> Self {
        Self {
            id: entity.id,
            name: entity.name,
            invit_code: entity.invit_code,
        }
    }
}

/// Role of a user inside a group.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GroupRole {
    Owner,
    Member,
}

impl GroupRole {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Owner => "OWNER",
            Self::Member => "MEMBER",
        }
    }

    pub fn from_stored(value: &str) -> Self {
        match value {
            "OWNER" => Self::Owner,
            _ => Self::Member,
        }
    }
}

/// A user's membership in a group.
#[derive(Debug, Clone, PartialEq)]
pub struct Membership {
    pub user_id: i32,
    pub group_id: i32,
    pub role: GroupRole,
}

impl Membership {
    pub fn from_entity(entity: entity::user_group::Model) -> Self {
        Self {
            user_id: entity.user_id,
            group_id: entity.group_id,
            role: GroupRole::from_stored(&entity.role),
        }
    }
}

/// Membership with the member's account loaded.
#[derive(Debug, Clone, PartialEq)]
pub struct GroupMember {
    pub user: User,
    pub role: GroupRole,
}

impl GroupMember {
    pub fn into_dto(self) -> GroupMemberDto {
        GroupMemberDto {
            user: self.user.into_dto(),
            role: self.role.as_str().to_string(),
        }
    }
}

/// Parameters for inserting a group. The code is generated by the group service.
#[derive(Debug, Clone)]
pub struct CreateGroupParam {
    pub name: String,
    pub invit_code: String,
}
