use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Extension, Json,
};

use crate::{
    model::{
        api::ErrorDto,
        invitation::{InvitationDto, SendInvitationDto},
    },
    server::{
        error::AppError,
        middleware::{auth::AuthGuard, jwt::Principal},
        model::invitation::Invitation,
        service::invitation::InvitationService,
        state::AppState,
    },
};

/// Tag for grouping invitation endpoints in OpenAPI documentation
pub static INVITATION_TAG: &str = "invitation";

/// Invite a user into a group.
///
/// # Access Control
/// - Authenticated, the requester must be a member of the group
///
/// # Arguments
/// - `state` - Application state containing the database connection
/// - `principal` - Identity from the bearer token, used as sender
/// - `group_id` - Group the recipient is invited into
/// - `payload` - Recipient user ID
///
/// # Returns
/// - `201 Created` - Pending invitation
/// - `400 Bad Request` - Recipient unknown or already a member
/// - `403 Forbidden` - Requester is not a member of the group
/// - `404 Not Found` - Group not found
#[utoipa::path(
    post,
    path = "/api/groups/{group_id}/invitations",
    tag = INVITATION_TAG,
    params(("group_id" = i32, Path, description = "Group ID")),
    request_body = SendInvitationDto,
    responses(
        (status = 201, description = "Invitation sent", body = InvitationDto),
        (status = 400, description = "Invalid recipient", body = ErrorDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 403, description = "Access denied", body = ErrorDto),
        (status = 404, description = "Group not found", body = ErrorDto)
    ),
)]
pub async fn send_invitation(
    State(state): State<AppState>,
    principal: Option<Extension<Principal>>,
    Path(group_id): Path<i32>,
    Json(payload): Json<SendInvitationDto>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, principal.as_deref())
        .require(&[])
        .await?;

    let invitation = InvitationService::new(&state.db)
        .send(user.id, payload.recipient_id, group_id)
        .await?;

    Ok((StatusCode::CREATED, Json(invitation.into_dto())))
}

/// List invitations received by the requesting user, newest first.
#[utoipa::path(
    get,
    path = "/api/invitations",
    tag = INVITATION_TAG,
    responses(
        (status = 200, description = "Received invitations", body = Vec<InvitationDto>),
        (status = 401, description = "User not authenticated", body = ErrorDto)
    ),
)]
pub async fn get_invitations(
    State(state): State<AppState>,
    principal: Option<Extension<Principal>>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, principal.as_deref())
        .require(&[])
        .await?;

    let invitations: Vec<InvitationDto> = InvitationService::new(&state.db)
        .list_received(user.id)
        .await?
        .into_iter()
        .map(Invitation::into_dto)
        .collect();

    Ok((StatusCode::OK, Json(invitations)))
}

/// Accept an invitation and join its group.
///
/// # Returns
/// - `200 OK` - Accepted invitation
/// - `400 Bad Request` - Invitation already answered
/// - `403 Forbidden` - Requester is not the recipient
/// - `404 Not Found` - Invitation not found
#[utoipa::path(
    post,
    path = "/api/invitations/{id}/accept",
    tag = INVITATION_TAG,
    params(("id" = i32, Path, description = "Invitation ID")),
    responses(
        (status = 200, description = "Invitation accepted", body = InvitationDto),
        (status = 400, description = "Invitation already answered", body = ErrorDto),
        (status = 403, description = "Access denied", body = ErrorDto),
        (status = 404, description = "Invitation not found", body = ErrorDto)
    ),
)]
pub async fn accept_invitation(
    State(state): State<AppState>,
    principal: Option<Extension<Principal>>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, principal.as_deref())
        .require(&[])
        .await?;

    let invitation = InvitationService::new(&state.db).accept(id, user.id).await?;

    Ok((StatusCode::OK, Json(invitation.into_dto())))
}

/// Decline an invitation.
#[utoipa::path(
    post,
    path = "/api/invitations/{id}/decline",
    tag = INVITATION_TAG,
    params(("id" = i32, Path, description = "Invitation ID")),
    responses(
        (status = 200, description = "Invitation declined", body = InvitationDto),
        (status = 400, description = "Invitation already answered", body = ErrorDto),
        (status = 403, description = "Access denied", body = ErrorDto),
        (status = 404, description = "Invitation not found", body = ErrorDto)
    ),
)]
pub async fn decline_invitation(
    State(state): State<AppState>,
    principal: Option<Extension<Principal>>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, principal.as_deref())
        .require(&[])
        .await?;

    let invitation = InvitationService::new(&state.db)
        .decline(id, user.id)
        .await?;

    Ok((StatusCode::OK, Json(invitation.into_dto())))
}
