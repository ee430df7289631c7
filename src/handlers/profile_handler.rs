use std::sync::Arc;

use actix_web::{get, web, HttpResponse};

use crate::{app_state::AppState, auth::AuthenticatedAccount, errors::AppError};

/// XP and streak are always re-read from the account store; nothing in the
/// session token is trusted for progress data.
#[get("/api/profile")]
pub async fn get_profile(
    state: web::Data<Arc<AppState>>,
    auth: AuthenticatedAccount,
) -> Result<HttpResponse, AppError> {
    let profile = state.progress_service.profile(&auth.0.sub).await?;
    Ok(HttpResponse::Ok().json(profile))
}
