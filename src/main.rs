use actix_web::{middleware::Logger, web, App, HttpServer};

use notes_quiz_server::{
    app_state::AppState,
    config::Config,
    handlers::{generate_quiz, health_check, index},
    middleware::RequestIdMiddleware,
};

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    env_logger::init_from_env(env_logger::Env::default().default_filter_or("info"));

    if let Some(path) = Config::load_env_file() {
        log::info!("Loaded environment from {}", path);
    }
    let config = Config::from_env();
    if !config.has_api_key() {
        log::warn!("GEMINI_API_KEY is not set; quiz generation requests will fail");
    }

    let host = config.web_server_host.clone();
    let port = config.web_server_port;
    let state = AppState::new(&config);

    log::info!("starting HTTP server on http://{}:{}", host, port);

    HttpServer::new(move || {
        App::new()
            .app_data(web::Data::new(state.clone()))
            .wrap(RequestIdMiddleware)
            .wrap(Logger::default())
            .service(index)
            .service(health_check)
            .service(generate_quiz)
    })
    .bind((host.as_str(), port))?
    .run()
    .await
}
