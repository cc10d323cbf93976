use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct InvitationDto {
    pub id: i32,
    /// `PENDING`, `ACCEPTED` or `DECLINED`
    pub status: String,
    pub created_at: DateTime<Utc>,
    pub accepted_at: Option<DateTime<Utc>>,
    pub sender_id: i32,
    pub recipient_id: i32,
    pub group_id: i32,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct SendInvitationDto {
    pub recipient_id: i32,
}
