use std::sync::Arc;

use axum::{
    extract::{Request, State},
    middleware::Next,
    response::Response,
};
use axum_extra::{
    typed_header::{TypedHeaderRejection, TypedHeaderRejectionReason},
    TypedHeader,
};
use headers::{authorization::Bearer, Authorization};

use crate::auth::AuthService;
use crate::error::ApiError;
use crate::models::AuthUser;

/// Reject requests without a valid bearer token; otherwise attach the
/// caller's `AuthUser` to the request extensions.
///
/// No `Authorization` header at all is 401. A header that is present but is
/// not a bearer credential is treated like a bad token and gets 403.
pub async fn require_auth(
    State(auth_service): State<Arc<AuthService>>,
    bearer: Result<TypedHeader<Authorization<Bearer>>, TypedHeaderRejection>,
    mut request: Request,
    next: Next,
) -> Result<Response, ApiError> {
    let TypedHeader(Authorization(bearer)) = bearer.map_err(|rejection| {
        match rejection.reason() {
            TypedHeaderRejectionReason::Missing => ApiError::MissingToken,
            _ => {
                tracing::debug!(error = %rejection, "authorization header rejected");
                ApiError::InvalidToken
            }
        }
    })?;

    let id = auth_service.authenticate(bearer.token()).await?;
    request.extensions_mut().insert(AuthUser { id });

    Ok(next.run(request).await)
}
