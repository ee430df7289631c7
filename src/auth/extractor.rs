use std::future::{ready, Ready};

use actix_web::{http::header::AUTHORIZATION, web, FromRequest, HttpRequest};

use crate::{
    auth::{claims::Claims, jwt::JwtService},
    errors::AppError,
};

/// The auth gate for protected routes. Extracting it validates the bearer
/// token and yields the session claims; handlers that take it answer 401
/// when the token is missing, malformed or expired.
pub struct AuthenticatedAccount(pub Claims);

impl FromRequest for AuthenticatedAccount {
    type Error = AppError;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut actix_web::dev::Payload) -> Self::Future {
        ready(authenticate(req).map(AuthenticatedAccount))
    }
}

fn authenticate(req: &HttpRequest) -> Result<Claims, AppError> {
    let jwt_service = req
        .app_data::<web::Data<JwtService>>()
        .ok_or_else(|| AppError::InternalError("JWT service not configured".to_string()))?;

    let auth_header = req
        .headers()
        .get(AUTHORIZATION)
        .and_then(|h| h.to_str().ok())
        .ok_or_else(|| AppError::Unauthorized("Missing authorization header".to_string()))?;

    let token = auth_header.strip_prefix("Bearer ").ok_or_else(|| {
        AppError::Unauthorized("Invalid authorization header format".to_string())
    })?;

    jwt_service.validate_token(token)
}

#[cfg(test)]
mod tests {
    use actix_web::{get, test, App, HttpResponse};
    use secrecy::SecretString;

    use super::*;
    use crate::models::domain::Account;

    #[get("/protected")]
    async fn protected(auth: AuthenticatedAccount) -> HttpResponse {
        HttpResponse::Ok().body(auth.0.username)
    }

    fn jwt_service() -> JwtService {
        JwtService::new(&SecretString::from("test_jwt_secret_key".to_string()), 1)
    }

    #[actix_web::test]
    async fn test_missing_header_is_unauthorized() {
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(jwt_service()))
                .service(protected),
        )
        .await;

        let req = test::TestRequest::get().uri("/protected").to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status().as_u16(), 401);
    }

    #[actix_web::test]
    async fn test_malformed_header_is_unauthorized() {
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(jwt_service()))
                .service(protected),
        )
        .await;

        let req = test::TestRequest::get()
            .uri("/protected")
            .insert_header((AUTHORIZATION, "Token abc"))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status().as_u16(), 401);
    }

    #[actix_web::test]
    async fn test_valid_token_passes_through() {
        let service = jwt_service();
        let account = Account::new("alice", "$argon2id$fake");
        let token = service.create_token(&account).unwrap();

        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(service))
                .service(protected),
        )
        .await;

        let req = test::TestRequest::get()
            .uri("/protected")
            .insert_header((AUTHORIZATION, format!("Bearer {}", token)))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert!(resp.status().is_success());
    }
}
