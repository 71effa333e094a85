use actix_web::{post, web, HttpResponse};

use crate::{
    app_state::AppState,
    errors::AppError,
    models::dto::request::{LoginRequest, RefreshTokenRequest, RegisterRequest},
    models::dto::response::MessageResponse,
};

/// Creates a standard user account and logs it straight in.
#[post("/api/auth/register")]
pub async fn register(
    state: web::Data<AppState>,
    request: web::Json<RegisterRequest>,
) -> Result<HttpResponse, AppError> {
    let user = state.user_service.register(request.into_inner()).await?;
    log::info!("Registered new user: {}", user.username);

    let response = state.auth_service.issue_tokens(&user).await?;
    Ok(HttpResponse::Created().json(response))
}

#[post("/api/auth/login")]
pub async fn login(
    state: web::Data<AppState>,
    request: web::Json<LoginRequest>,
) -> Result<HttpResponse, AppError> {
    let user = state
        .user_service
        .authenticate(request.into_inner())
        .await?;

    let response = state.auth_service.issue_tokens(&user).await?;
    Ok(HttpResponse::Ok().json(response))
}

#[post("/api/auth/refresh")]
pub async fn refresh_token(
    state: web::Data<AppState>,
    request: web::Json<RefreshTokenRequest>,
) -> Result<HttpResponse, AppError> {
    let response = state.auth_service.refresh(&request.refresh_token).await?;
    Ok(HttpResponse::Ok().json(response))
}

/// Revokes the presented refresh token server-side.
#[post("/api/auth/logout")]
pub async fn logout(
    state: web::Data<AppState>,
    request: web::Json<RefreshTokenRequest>,
) -> Result<HttpResponse, AppError> {
    state.auth_service.logout(&request.refresh_token).await?;
    Ok(HttpResponse::Ok().json(MessageResponse {
        message: "Logged out".to_string(),
    }))
}
