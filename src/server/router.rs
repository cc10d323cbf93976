//! Route table and OpenAPI document.
//!
//! Every handler is registered through `utoipa_axum::routes!` so its `#[utoipa::path]`
//! lands in the generated document. The JWT middleware runs for all routes; each
//! handler decides through its `AuthGuard` whether a principal is required.

use axum::{middleware, Router};
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use utoipa::{
    openapi::security::{HttpAuthScheme, HttpBuilder, SecurityScheme},
    Modify, OpenApi,
};
use utoipa_axum::{router::OpenApiRouter, routes};
use utoipa_swagger_ui::SwaggerUi;

use crate::server::{
    controller::{auth, group, invitation, statistics, task, time_sheet, user},
    middleware::jwt::attach_principal,
    state::AppState,
};

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Timetrack API",
        description = "Time-sheets, tasks, groups and statistics"
    ),
    modifiers(&BearerAuth),
    tags(
        (name = "auth", description = "Registration, login and token refresh"),
        (name = "user", description = "User accounts"),
        (name = "group", description = "Groups and memberships"),
        (name = "invitation", description = "Group invitations"),
        (name = "task", description = "Tasks"),
        (name = "timesheet", description = "Time-sheets, their tasks, shares and exports"),
        (name = "statistics", description = "User and group statistics")
    )
)]
struct ApiDoc;

struct BearerAuth;

impl Modify for BearerAuth {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        let components = openapi.components.get_or_insert_with(Default::default);
        components.add_security_scheme(
            "bearer",
            SecurityScheme::Http(
                HttpBuilder::new()
                    .scheme(HttpAuthScheme::Bearer)
                    .bearer_format("JWT")
                    .build(),
            ),
        );
    }
}

/// Builds the application router with documentation, tracing and CORS.
///
/// # Arguments
/// - `state` - Shared application state, also used by the JWT middleware
/// - `cors` - CORS policy built from configuration
///
/// # Returns
/// - `Router` - Ready to be served
pub fn router(state: AppState, cors: CorsLayer) -> Router {
    let (api_router, api) = OpenApiRouter::with_openapi(ApiDoc::openapi())
        // auth
        .routes(routes!(auth::register))
        .routes(routes!(auth::login))
        .routes(routes!(auth::refresh))
        // users
        .routes(routes!(user::get_users))
        .routes(routes!(user::get_me))
        .routes(routes!(user::get_user, user::update_user, user::delete_user))
        // groups
        .routes(routes!(group::create_group, group::get_groups))
        .routes(routes!(group::join_group))
        .routes(routes!(group::get_user_groups))
        .routes(routes!(
            group::get_group,
            group::update_group,
            group::delete_group
        ))
        .routes(routes!(group::get_group_members))
        .routes(routes!(group::leave_group))
        // invitations
        .routes(routes!(invitation::send_invitation))
        .routes(routes!(invitation::get_invitations))
        .routes(routes!(invitation::accept_invitation))
        .routes(routes!(invitation::decline_invitation))
        // tasks
        .routes(routes!(task::create_task, task::get_tasks))
        .routes(routes!(task::get_tasks_by_repetition))
        .routes(routes!(task::get_task, task::update_task, task::delete_task))
        // time-sheets
        .routes(routes!(
            time_sheet::get_time_sheets,
            time_sheet::create_time_sheet
        ))
        .routes(routes!(time_sheet::get_time_sheets_by_date))
        .routes(routes!(time_sheet::get_shared_time_sheets))
        .routes(routes!(time_sheet::get_group_time_sheets))
        .routes(routes!(time_sheet::export_csv))
        .routes(routes!(time_sheet::export_pdf))
        .routes(routes!(
            time_sheet::get_time_sheet,
            time_sheet::update_time_sheet,
            time_sheet::delete_time_sheet
        ))
        .routes(routes!(time_sheet::add_task))
        .routes(routes!(
            time_sheet::update_task_duration,
            time_sheet::remove_task
        ))
        .routes(routes!(time_sheet::update_task_completion))
        .routes(routes!(time_sheet::share_with_user))
        .routes(routes!(time_sheet::share_with_group))
        // statistics
        .routes(routes!(statistics::get_my_statistics))
        .routes(routes!(statistics::get_my_period_statistics))
        .routes(routes!(statistics::get_user_statistics))
        .routes(routes!(statistics::get_user_period_statistics))
        .routes(routes!(statistics::get_group_statistics))
        .split_for_parts();

    api_router
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", api))
        .layer(middleware::from_fn_with_state(
            state.clone(),
            attach_principal,
        ))
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}
