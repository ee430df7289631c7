use std::sync::Arc;

use actix_cors::Cors;
use actix_web::{middleware::Logger, web, App, HttpServer};

use studia_server::{
    app_state::AppState,
    auth::JwtService,
    config::Config,
    handlers::{auth_handler, lesson_handler, profile_handler},
};

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    dotenvy::dotenv().ok();
    env_logger::init_from_env(env_logger::Env::default().default_filter_or("info"));

    let config = Config::from_env();
    if std::env::var("APP_ENV").as_deref() == Ok("production") {
        config.validate_for_production();
    }

    let jwt_service = JwtService::new(&config.jwt_secret, config.jwt_expiration_hours);
    let bind_addr = (config.web_server_host.clone(), config.web_server_port);

    let state = Arc::new(
        AppState::new(config)
            .await
            .map_err(|e| std::io::Error::other(e.to_string()))?,
    );

    log::info!(
        "starting HTTP server on {}:{} with {} lessons",
        bind_addr.0,
        bind_addr.1,
        state.catalog.len()
    );

    HttpServer::new(move || {
        App::new()
            .app_data(web::Data::new(state.clone()))
            .app_data(web::Data::new(jwt_service.clone()))
            .wrap(Logger::default())
            .wrap(Cors::permissive())
            .service(auth_handler::register)
            .service(auth_handler::login)
            .service(auth_handler::logout)
            .service(auth_handler::health_check)
            .service(auth_handler::health_check_ready)
            .service(auth_handler::health_check_live)
            .service(lesson_handler::list_lessons)
            .service(lesson_handler::get_lesson)
            .service(lesson_handler::submit_quiz)
            .service(profile_handler::get_profile)
    })
    .bind(bind_addr)?
    .run()
    .await
}
