//! Authentication Handlers

use std::time::Duration;

use axum::{extract::State, Extension, Json};

use crate::auth::CurrentUser;
use crate::core::ServerState;
use crate::db::repository::OperatorRepository;
use crate::security_log;
use crate::utils::{ok, AppError, AppResponse, AppResult};

use shared::client::{LoginRequest, LoginResponse, UserInfo};

/// Fixed delay for authentication to prevent timing attacks
const AUTH_FIXED_DELAY_MS: u64 = 500;

/// POST /api/auth/login
///
/// The error message is the same for unknown users and wrong passwords
/// so usernames cannot be enumerated.
pub async fn login(
    State(state): State<ServerState>,
    Json(req): Json<LoginRequest>,
) -> AppResult<Json<LoginResponse>> {
    let repo = OperatorRepository::new(state.get_db());
    let operator = repo.find_by_username(&req.username).await?;

    // Fixed delay before checking the result
    tokio::time::sleep(Duration::from_millis(AUTH_FIXED_DELAY_MS)).await;

    let operator = match operator {
        Some(op) => op,
        None => {
            security_log!("WARN", "login_failed", username = req.username.clone());
            return Err(AppError::invalid_credentials());
        }
    };

    let password_valid = operator
        .verify_password(&req.password)
        .map_err(|e| AppError::internal(format!("Password verification failed: {e}")))?;
    if !password_valid {
        security_log!("WARN", "login_failed", username = req.username.clone());
        return Err(AppError::invalid_credentials());
    }

    let operator_id = operator
        .id
        .as_ref()
        .map(|id| id.to_string())
        .unwrap_or_default();

    let token = state
        .get_jwt_service()
        .generate_token(
            &operator_id,
            &operator.username,
            &operator.display_name,
            &operator.role,
            &operator.permissions,
        )
        .map_err(|e| AppError::internal(format!("Token generation failed: {e}")))?;

    security_log!("INFO", "login_ok", username = operator.username.clone());

    Ok(Json(LoginResponse {
        token,
        user: UserInfo {
            id: operator_id,
            username: operator.username,
            display_name: operator.display_name,
            role: operator.role,
            permissions: operator.permissions,
        },
    }))
}

/// POST /api/auth/logout
///
/// Tokens are stateless, logout is client-side. The endpoint exists so
/// the client has something to call and audit.
pub async fn logout(Extension(user): Extension<CurrentUser>) -> Json<AppResponse<()>> {
    security_log!("INFO", "logout", username = user.username.clone());
    ok(())
}

/// GET /api/auth/me
pub async fn me(Extension(user): Extension<CurrentUser>) -> Json<UserInfo> {
    Json(UserInfo {
        id: user.id,
        username: user.username,
        display_name: user.display_name,
        role: user.role,
        permissions: user.permissions,
    })
}
