use actix_cors::Cors;
use actix_web::{middleware, web, App, HttpServer};
use desk_triage::config::Settings;
use desk_triage::routes::{self, webhook::AppState};
use desk_triage::services::CompletionClient;
use std::sync::Arc;
use tracing::{error, info};

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    // Load .env file if present
    dotenv::dotenv().ok();

    // Initialize logging
    let log_format = std::env::var("LOG_FORMAT").unwrap_or_else(|_| "json".to_string());

    let subscriber = tracing_subscriber::fmt()
        .with_target(false)
        .with_level(true);

    if log_format == "pretty" {
        subscriber.pretty().init();
    } else {
        subscriber.init();
    }

    info!("Starting desk-triage webhook service...");

    // Load configuration
    let settings = Settings::load().unwrap_or_else(|e| {
        error!("Failed to load configuration: {}", e);
        panic!("Configuration error: {}", e);
    });

    info!("Configuration loaded successfully");

    if settings.webhook.shared_secret.is_empty() {
        error!("No shared secret configured; all webhook requests will be rejected");
    }
    if settings.completion.api_key.is_empty() {
        error!("No completion API credential configured; classification will fail");
    }

    // Initialize the completion client
    let client = Arc::new(CompletionClient::from_settings(&settings.completion));

    info!(
        "Completion client initialized (endpoint: {}, model: {})",
        settings.completion.endpoint, settings.completion.model
    );

    // Build application state
    let app_state = AppState {
        client,
        shared_secret: settings.webhook.shared_secret.clone(),
    };

    // Configure HTTP server
    let host = settings.server.host.clone();
    let port = settings.server.port;
    let workers = settings.server.workers.unwrap_or(4);
    let max_body_bytes = settings.server.max_body_bytes;

    info!("Starting HTTP server on {}:{}", host, port);

    HttpServer::new(move || {
        let cors = Cors::permissive();

        App::new()
            .app_data(web::Data::new(app_state.clone()))
            .app_data(web::PayloadConfig::new(max_body_bytes))
            .wrap(cors)
            .wrap(middleware::Logger::default())
            .wrap(middleware::Compress::default())
            .configure(routes::configure_routes)
    })
    .workers(workers)
    .bind((host, port))?
    .run()
    .await
}
