use axum::{
    body::{to_bytes, Body},
    http::{Request, StatusCode},
    middleware,
    routing::get,
    Extension, Router,
};
use tower::ServiceExt;

use crate::server::{
    middleware::jwt::{attach_principal, Principal},
    model::user::{Role, User},
    service::auth::token::TokenService,
    state::AppState,
};
use test_utils::builder::TestBuilder;

const SECRET: &str = "middleware-test-secret";

async fn whoami(principal: Option<Extension<Principal>>) -> String {
    match principal {
        Some(Extension(principal)) => format!("{}:{}", principal.id, principal.username),
        None => "anonymous".to_string(),
    }
}

async fn app() -> Router {
    let test = TestBuilder::new().build().await.unwrap();
    let db = test.db.unwrap();
    let state = AppState::new(
        db,
        TokenService::new(SECRET, 60_000),
        "Authorization".to_string(),
        "Bearer ".to_string(),
    );

    Router::new()
        .route("/whoami", get(whoami))
        .layer(middleware::from_fn_with_state(state.clone(), attach_principal))
        .with_state(state)
}

fn user() -> User {
    User {
        id: 7,
        pseudo: "alice".to_string(),
        email: "alice@example.com".to_string(),
        password: String::new(),
        role: Role::User,
    }
}

async fn call(router: Router, authorization: Option<String>) -> String {
    let mut request = Request::builder().uri("/whoami");
    if let Some(value) = authorization {
        request = request.header("Authorization", value);
    }

    let response = router
        .oneshot(request.body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    String::from_utf8(body.to_vec()).unwrap()
}

/// Tests a request carrying a valid bearer token.
///
/// Expected: Principal with the token's ID and email attached to the request
#[tokio::test]
async fn attaches_principal_for_valid_token() {
    let token = TokenService::new(SECRET, 60_000).issue(&user()).unwrap();

    let body = call(app().await, Some(format!("Bearer {}", token))).await;

    assert_eq!(body, "7:alice@example.com");
}

/// Tests requests with missing, malformed or foreign tokens.
///
/// Verifies that the middleware never rejects a request itself.
///
/// Expected: Request passes through without a principal
#[tokio::test]
async fn skips_missing_or_invalid_token() {
    let foreign = TokenService::new("another-secret", 60_000)
        .issue(&user())
        .unwrap();

    assert_eq!(call(app().await, None).await, "anonymous");
    assert_eq!(
        call(app().await, Some("Bearer not-a-jwt".to_string())).await,
        "anonymous"
    );
    assert_eq!(
        call(app().await, Some(format!("Bearer {}", foreign))).await,
        "anonymous"
    );
}

/// Tests a valid token sent without the configured prefix.
///
/// Expected: Request passes through without a principal
#[tokio::test]
async fn requires_configured_prefix() {
    let token = TokenService::new(SECRET, 60_000).issue(&user()).unwrap();

    assert_eq!(call(app().await, Some(token)).await, "anonymous");
}
