use std::sync::Arc;

use axum::{extract::State, Json};

use crate::auth::AuthService;
use crate::error::ApiError;
use crate::extract::ValidatedJson;
use crate::models::{LoginRequest, LoginResponse, RegisterRequest, RegisterResponse};

/// Create an account and return a session token
pub async fn register(
    State(auth_service): State<Arc<AuthService>>,
    ValidatedJson(payload): ValidatedJson<RegisterRequest>,
) -> Result<Json<RegisterResponse>, ApiError> {
    auth_service.register(payload).await.map(Json)
}

/// Exchange credentials for a session token and the display name
pub async fn login(
    State(auth_service): State<Arc<AuthService>>,
    ValidatedJson(payload): ValidatedJson<LoginRequest>,
) -> Result<Json<LoginResponse>, ApiError> {
    auth_service.login(payload).await.map(Json)
}
