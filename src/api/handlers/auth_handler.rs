//! Authentication handlers.

use axum::{extract::State, http::StatusCode, response::Json, routing::post, Router};

use crate::api::extractors::ValidatedJson;
use crate::api::AppState;
use crate::config::MSG_USER_CREATED;
use crate::domain::{SignUpRequest, UserResponse};
use crate::errors::AppResult;
use crate::types::ApiResponse;

/// Create authentication routes
pub fn auth_routes() -> Router<AppState> {
    Router::new().route("/sign-up", post(sign_up))
}

/// Register a new user account
#[utoipa::path(
    post,
    path = "/api/auth/sign-up",
    tag = "Authentication",
    request_body = SignUpRequest,
    responses(
        (status = 201, description = "User created successfully", body = UserResponse),
        (status = 400, description = "Missing field or email already registered"),
        (status = 500, description = "Store failure")
    )
)]
pub async fn sign_up(
    State(state): State<AppState>,
    ValidatedJson(payload): ValidatedJson<SignUpRequest>,
) -> AppResult<(StatusCode, Json<ApiResponse<UserResponse>>)> {
    let user = state
        .signup_service
        .sign_up(payload.name, payload.email, payload.password)
        .await?;

    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::success(
            StatusCode::CREATED,
            UserResponse::from(user),
            MSG_USER_CREATED,
        )),
    ))
}
