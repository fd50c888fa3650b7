use std::sync::Arc;

use uuid::Uuid;

use super::jwt::TokenKeys;
use super::password::{hash_password, verify_password};
use crate::error::ApiError;
use crate::models::{LoginRequest, LoginResponse, NewUser, RegisterRequest, RegisterResponse};
use crate::store::LedgerStore;

/// Registration, login and token verification
pub struct AuthService {
    store: Arc<dyn LedgerStore>,
    keys: TokenKeys,
    bcrypt_cost: u32,
}

fn normalize_email(email: &str) -> String {
    email.trim().to_lowercase()
}

impl AuthService {
    pub fn new(store: Arc<dyn LedgerStore>, keys: TokenKeys, bcrypt_cost: u32) -> Self {
        Self {
            store,
            keys,
            bcrypt_cost,
        }
    }

    pub async fn register(&self, request: RegisterRequest) -> Result<RegisterResponse, ApiError> {
        let email = normalize_email(&request.email);

        if self.store.find_user_by_email(&email).await?.is_some() {
            tracing::debug!(%email, "registration rejected: email in use");
            return Err(ApiError::EmailTaken);
        }

        let password_hash = hash_password(request.password, self.bcrypt_cost).await?;

        // The unique index still catches a concurrent registration that slips
        // past the lookup above.
        let user = self
            .store
            .create_user(NewUser {
                name: request.name.trim().to_string(),
                email,
                password_hash,
            })
            .await?;

        tracing::info!(user_id = %user.id, "user registered");

        Ok(RegisterResponse {
            token: self.issue_token(user.id)?,
        })
    }

    pub async fn login(&self, request: LoginRequest) -> Result<LoginResponse, ApiError> {
        let email = normalize_email(&request.email);

        let user = self
            .store
            .find_user_by_email(&email)
            .await?
            .ok_or(ApiError::UnknownUser)?;

        if !verify_password(request.password, user.password_hash.clone()).await? {
            tracing::debug!(user_id = %user.id, "login rejected: wrong password");
            return Err(ApiError::InvalidPassword);
        }

        Ok(LoginResponse {
            token: self.issue_token(user.id)?,
            name: user.name,
        })
    }

    /// Resolve a bearer token to the user id it was issued for. A token whose
    /// user no longer exists is rejected like a forged one.
    pub async fn authenticate(&self, token: &str) -> Result<Uuid, ApiError> {
        let user_id = self.keys.verify(token).map_err(|e| {
            tracing::debug!(error = %e, "token rejected");
            ApiError::InvalidToken
        })?;

        if !self.store.user_exists(user_id).await? {
            tracing::warn!(%user_id, "token rejected: unknown user");
            return Err(ApiError::InvalidToken);
        }

        Ok(user_id)
    }

    fn issue_token(&self, user_id: Uuid) -> Result<String, ApiError> {
        self.keys
            .issue(user_id)
            .map_err(|e| ApiError::Internal(anyhow::Error::new(e).context("failed to sign token")))
    }
}
