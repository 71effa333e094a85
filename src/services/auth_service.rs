use std::sync::Arc;

use crate::{
    auth::JwtService,
    errors::{AppError, AppResult},
    models::domain::{RefreshToken, User},
    models::dto::response::AuthResponse,
    repositories::{RefreshTokenRepository, UserRepository},
};

/// Token issuance and rotation. Refresh tokens are persisted by hash so
/// that logout can revoke them server-side.
pub struct AuthService {
    jwt_service: JwtService,
    refresh_tokens: Arc<dyn RefreshTokenRepository>,
    users: Arc<dyn UserRepository>,
}

impl AuthService {
    pub fn new(
        jwt_service: JwtService,
        refresh_tokens: Arc<dyn RefreshTokenRepository>,
        users: Arc<dyn UserRepository>,
    ) -> Self {
        Self {
            jwt_service,
            refresh_tokens,
            users,
        }
    }

    pub async fn issue_tokens(&self, user: &User) -> AppResult<AuthResponse> {
        let token = self.jwt_service.create_token(user)?;
        let refresh_token = self.jwt_service.create_refresh_token(&user.id)?;

        let stored = RefreshToken::new(
            &user.id,
            &refresh_token,
            self.jwt_service.refresh_expiration_hours(),
        );
        self.refresh_tokens.create(stored).await?;

        Ok(AuthResponse {
            token,
            refresh_token,
            username: user.username.clone(),
            role: user.role,
        })
    }

    /// Rotates a refresh token: the presented token is revoked and a fresh
    /// pair is issued for the same user.
    pub async fn refresh(&self, raw_refresh_token: &str) -> AppResult<AuthResponse> {
        let claims = self.jwt_service.validate_refresh_token(raw_refresh_token)?;

        let hash = RefreshToken::hash_token(raw_refresh_token);
        let stored = self
            .refresh_tokens
            .find_by_token_hash(&hash)
            .await?
            .ok_or_else(|| AppError::Unauthorized("Refresh token not recognized".to_string()))?;

        if !stored.is_usable() {
            return Err(AppError::Unauthorized(
                "Refresh token has been revoked or expired".to_string(),
            ));
        }

        let user = self.users.find_by_id(&claims.sub).await?.ok_or_else(|| {
            AppError::Unauthorized("User associated with refresh token not found".to_string())
        })?;

        self.refresh_tokens.revoke_by_token_hash(&hash).await?;

        // Piggyback cleanup of expired tokens on the rotation path
        if let Ok(removed) = self.refresh_tokens.delete_expired().await {
            if removed > 0 {
                log::debug!("Removed {} expired refresh tokens", removed);
            }
        }

        log::info!("Token refreshed for user: {}", user.username);
        self.issue_tokens(&user).await
    }

    /// Revokes the presented refresh token. Unknown tokens are rejected
    /// rather than silently accepted.
    pub async fn logout(&self, raw_refresh_token: &str) -> AppResult<()> {
        let hash = RefreshToken::hash_token(raw_refresh_token);

        self.refresh_tokens
            .revoke_by_token_hash(&hash)
            .await
            .map_err(|err| match err {
                AppError::NotFound(_) => {
                    AppError::Unauthorized("Refresh token not recognized".to_string())
                }
                other => other,
            })
    }
}
