use actix_cors::Cors;
use actix_web::{middleware::Logger, web, App, HttpServer};

use quizcraft_server::{
    app_state::AppState,
    auth::AuthMiddleware,
    config::Config,
    handlers::{
        create_quiz, current_user, delete_quiz, get_quiz, grade_quiz, health_check,
        health_check_live, health_check_ready, list_quizzes, login, logout, refresh_token,
        register,
    },
};

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    dotenvy::dotenv().ok();
    env_logger::init_from_env(env_logger::Env::default().default_filter_or("info"));

    let config = Config::from_env();
    if std::env::var("APP_ENV").as_deref() == Ok("production") {
        config.validate_for_production();
    }

    let host = config.web_server_host.clone();
    let port = config.web_server_port;

    let state = AppState::new(config)
        .await
        .unwrap_or_else(|e| panic!("failed to initialize application state: {}", e));

    log::info!("Starting HTTP server on {}:{}", host, port);

    HttpServer::new(move || {
        App::new()
            .app_data(web::Data::new(state.clone()))
            .app_data(web::Data::new(state.jwt_service.clone()))
            .wrap(Logger::default())
            .wrap(Cors::permissive())
            .service(health_check)
            .service(health_check_ready)
            .service(health_check_live)
            .service(register)
            .service(login)
            .service(refresh_token)
            .service(logout)
            .service(list_quizzes)
            .service(grade_quiz)
            .service(get_quiz)
            .service(
                web::scope("")
                    .wrap(AuthMiddleware)
                    .service(create_quiz)
                    .service(delete_quiz)
                    .service(current_user),
            )
    })
    .bind((host.as_str(), port))?
    .run()
    .await
}
