use actix_cors::Cors;
use actix_web::{middleware, App, HttpServer};
use babycare_advisor::config::{LoggingSettings, Settings};
use babycare_advisor::{build_state, configure_app};
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

fn init_logging(logging: &LoggingSettings) {
    // RUST_LOG wins over the configured level
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&logging.level));

    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_level(true);

    if logging.format == "pretty" {
        subscriber.pretty().init();
    } else {
        subscriber.compact().init();
    }
}

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    // Load .env file if present
    dotenv::dotenv().ok();

    let settings = match Settings::load() {
        Ok(settings) => settings,
        Err(e) => {
            eprintln!("Failed to load configuration: {}", e);
            return Err(std::io::Error::new(std::io::ErrorKind::InvalidInput, e.to_string()));
        }
    };

    init_logging(&settings.logging);

    info!("Starting Babycare Advisor service...");
    info!("Configuration loaded successfully");

    let state = build_state(&settings).map_err(|e| {
        error!("Failed to build Q&A matcher: {}", e);
        std::io::Error::new(std::io::ErrorKind::Other, e.to_string())
    })?;

    info!(
        "Advisor initialized with thresholds: {:?}",
        state.advisor.thresholds()
    );
    info!(
        "Session store initialized ({} entries, TTL: {}s)",
        settings.session.max_entries, settings.session.ttl_secs
    );

    let host = settings.server.host.clone();
    let port = settings.server.port;
    let workers = settings.server.worker_count();

    info!("Starting HTTP server on {}:{}", host, port);

    HttpServer::new(move || {
        let cors = Cors::permissive();

        App::new()
            .configure(configure_app(state.clone()))
            .wrap(cors)
            .wrap(middleware::Logger::default())
            .wrap(middleware::Compress::default())
    })
    .workers(workers)
    .bind((host, port))?
    .run()
    .await
}
