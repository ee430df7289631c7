use std::sync::Arc;

use actix_web::{get, post, web, HttpResponse};
use chrono::Utc;

use crate::{
    app_state::AppState,
    auth::JwtService,
    errors::AppError,
    models::dto::{
        request::{LoginRequest, RegisterRequest},
        response::AuthResponse,
    },
};

#[post("/api/auth/register")]
pub async fn register(
    state: web::Data<Arc<AppState>>,
    jwt: web::Data<JwtService>,
    request: web::Json<RegisterRequest>,
) -> Result<HttpResponse, AppError> {
    let account = state.account_service.register(request.into_inner()).await?;
    let token = jwt.create_token(&account)?;

    Ok(HttpResponse::Created().json(AuthResponse {
        token,
        username: account.username,
    }))
}

#[post("/api/auth/login")]
pub async fn login(
    state: web::Data<Arc<AppState>>,
    jwt: web::Data<JwtService>,
    request: web::Json<LoginRequest>,
) -> Result<HttpResponse, AppError> {
    let account = state
        .account_service
        .login(&request.username, &request.password, Utc::now())
        .await?;
    let token = jwt.create_token(&account)?;

    Ok(HttpResponse::Ok().json(AuthResponse {
        token,
        username: account.username,
    }))
}

/// Sessions are stateless bearer tokens; logout is the client discarding
/// its token. The endpoint exists so the route surface is complete.
#[post("/api/auth/logout")]
pub async fn logout() -> HttpResponse {
    HttpResponse::NoContent().finish()
}

#[get("/health")]
pub async fn health_check() -> HttpResponse {
    HttpResponse::Ok().json(serde_json::json!({
        "status": "healthy",
        "version": env!("CARGO_PKG_VERSION")
    }))
}

#[get("/health/ready")]
pub async fn health_check_ready(state: web::Data<Arc<AppState>>) -> HttpResponse {
    let db_health = state.db.health_check().await;

    let status = if db_health.is_ok() {
        "ready"
    } else {
        "not_ready"
    };

    let response = serde_json::json!({
        "status": status,
        "version": env!("CARGO_PKG_VERSION"),
        "dependencies": {
            "mongodb": if db_health.is_ok() { "ok" } else { "error" }
        }
    });

    if db_health.is_ok() {
        HttpResponse::Ok().json(response)
    } else {
        HttpResponse::ServiceUnavailable().json(response)
    }
}

#[get("/health/live")]
pub async fn health_check_live() -> HttpResponse {
    HttpResponse::Ok().json(serde_json::json!({
        "status": "alive",
        "version": env!("CARGO_PKG_VERSION")
    }))
}
