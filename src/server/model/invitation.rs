//! Invitation domain model.

use chrono::{DateTime, Utc};

use crate::model::invitation::InvitationDto;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InvitationStatus {
    Pending,
    Accepted,
    Declined,
}

impl InvitationStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Pending => "PENDING",
            Self::Accepted => "ACCEPTED",
            Self::Declined => "DECLINED",
        }
    }

    pub fn from_stored(value: &str) -> Self {
        match value {
            "ACCEPTED" => Self::Accepted,
            "DECLINED" => Self::Declined,
            _ => Self::Pending,
        }
    }
}

/// An invitation from a group member to another user.
#[derive(Debug, Clone, PartialEq)]
pub struct Invitation {
    pub id: i32,
    pub status: InvitationStatus,
    pub created_at: DateTime<Utc>,
    pub accepted_at: Option<DateTime<Utc>>,
    pub sender_id: i32,
    pub recipient_id: i32,
    pub group_id: i32,
}

impl Invitation {
    pub fn into_dto(self) -> InvitationDto {
        InvitationDto {
            id: self.id,
            status: self.status.as_str().to_string(),
            created_at: self.created_at,
            accepted_at: self.accepted_at,
            sender_id: self.sender_id,
            recipient_id: self.recipient_id,
            group_id: self.group_id,
        }
    }

    pub fn from_entity(entity: entity::invitation::Model) -> Self {
        Self {
            id: entity.id,
            status: InvitationStatus::from_stored(&entity.status),
            created_at: entity.created_at,
            accepted_at: entity.accepted_at,
            sender_id: entity.sender_id,
            recipient_id: entity.recipient_id,
            group_id: entity.group_id,
        }
    }
}

#[derive(Debug, Clone)]
pub struct CreateInvitationParam {
    pub sender_id: i32,
    pub recipient_id: i32,
    pub group_id: i32,
}
