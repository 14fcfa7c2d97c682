mod api;
mod config;
mod database;
mod models;
mod services;
mod utils;

use actix_cors::Cors;
use actix_web::{middleware::Compress, middleware::Logger, web, App, HttpServer};
use dotenv::dotenv;
use std::time::Duration;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

const STORE_RETRY: Duration = Duration::from_secs(30);

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    // Load environment variables
    dotenv().ok();

    // Initialize logger
    env_logger::init_from_env(env_logger::Env::new().default_filter_or("info"));

    let config = match config::Config::from_env() {
        Ok(config) => config,
        Err(e) => {
            log::error!("❌ Invalid configuration: {}", e);
            return Err(std::io::Error::new(std::io::ErrorKind::InvalidInput, e.to_string()));
        }
    };

    log::info!("🚀 Starting LingoLink service...");
    log::info!("📊 Database: {} ({})", config.redacted_uri(), config.database);

    let db = database::MongoDB::new(&config.mongodb_uri, &config.database);

    // An unreachable store is not fatal: requests fail one by one until it is back.
    let warmup = db.clone();
    actix_web::rt::spawn(async move {
        loop {
            match warmup.ping().await {
                Ok(()) => {
                    log::info!("✅ MongoDB connected successfully");
                    warmup.ensure_indexes().await;
                    break;
                }
                Err(e) => {
                    log::error!(
                        "❌ MongoDB unreachable, serving anyway; retrying in {}s: {}",
                        STORE_RETRY.as_secs(),
                        e
                    );
                    tokio::time::sleep(STORE_RETRY).await;
                }
            }
        }
    });

    let db_data = web::Data::new(db);

    log::info!("🌐 Server starting on {}:{}", config.host, config.port);
    log::info!("📚 Swagger UI available at: http://{}:{}/swagger-ui/", config.host, config.port);

    HttpServer::new(move || {
        let cors = Cors::default()
            .allow_any_origin()
            .allow_any_method()
            .allow_any_header()
            .max_age(3600);

        let openapi = api::swagger::ApiDoc::openapi();

        App::new()
            .app_data(db_data.clone())
            .wrap(cors)
            .wrap(Compress::default())
            .wrap(Logger::default())
            .service(
                SwaggerUi::new("/swagger-ui/{_:.*}")
                    .url("/api-docs/openapi.json", openapi)
            )
            .configure(api::configure)
    })
    .bind((config.host.as_str(), config.port))?
    .run()
    .await
}
