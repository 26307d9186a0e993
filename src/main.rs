//! Creative DNA server binary.
//!
//! Loads configuration, initializes tracing, connects to PostgreSQL and
//! serves the HTTP API.

use std::error::Error;
use std::sync::Arc;

use http::{HeaderValue, Method};
use sqlx::postgres::PgPoolOptions;
use tower::ServiceBuilder;
use tower_http::{
    cors::{AllowOrigin, Any, CorsLayer},
    timeout::TimeoutLayer,
    trace::TraceLayer,
};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use creative_dna::adapters::{
    api_router, DnaHandlers, PostgresActivityReader, PostgresCreativeDnaRepository,
};
use creative_dna::application::{
    AnalyzeDnaHandler, EnhancePromptHandler, GetDnaHandler, GetDnaSummaryHandler,
    UpdateStylePreferenceHandler,
};
use creative_dna::config::{AppConfig, ServerConfig};
use creative_dna::ports::{ActivityReader, CreativeDnaRepository};

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error + Send + Sync>> {
    let config = AppConfig::load()?;
    config.validate()?;

    init_tracing(&config.server);

    let pool = PgPoolOptions::new()
        .min_connections(config.database.min_connections)
        .max_connections(config.database.max_connections)
        .acquire_timeout(config.database.acquire_timeout())
        .connect(&config.database.url)
        .await?;

    if config.database.run_migrations {
        sqlx::migrate!("./migrations").run(&pool).await?;
        tracing::info!("Database migrations applied");
    }

    let repository: Arc<dyn CreativeDnaRepository> =
        Arc::new(PostgresCreativeDnaRepository::new(pool.clone()));
    let activity: Arc<dyn ActivityReader> = Arc::new(PostgresActivityReader::new(pool));

    let handlers = DnaHandlers::new(
        Arc::new(
            AnalyzeDnaHandler::new(repository.clone(), activity)
                .with_action_limit(config.analysis.action_limit),
        ),
        Arc::new(GetDnaHandler::new(repository.clone())),
        Arc::new(GetDnaSummaryHandler::new(repository.clone())),
        Arc::new(EnhancePromptHandler::new(repository.clone())),
        Arc::new(UpdateStylePreferenceHandler::new(repository)),
    );

    let app = api_router(handlers).layer(
        ServiceBuilder::new()
            .layer(TraceLayer::new_for_http())
            .layer(cors_layer(&config.server))
            .layer(TimeoutLayer::new(config.server.request_timeout())),
    );

    let addr = config.server.socket_addr()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!(%addr, environment = ?config.server.environment, "Creative DNA server listening");

    axum::serve(listener, app).await?;

    Ok(())
}

fn init_tracing(server: &ServerConfig) {
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&server.log_level));
    let registry = tracing_subscriber::registry().with(env_filter);

    if server.json_logs() {
        registry.with(tracing_subscriber::fmt::layer().json()).init();
    } else {
        registry.with(tracing_subscriber::fmt::layer().pretty()).init();
    }
}

fn cors_layer(server: &ServerConfig) -> CorsLayer {
    let origins: Vec<HeaderValue> = server
        .cors_origins_list()
        .iter()
        .filter_map(|origin| origin.parse().ok())
        .collect();

    let allow_origin = if origins.is_empty() {
        AllowOrigin::from(Any)
    } else {
        AllowOrigin::list(origins)
    };

    CorsLayer::new()
        .allow_origin(allow_origin)
        .allow_methods([Method::GET, Method::POST, Method::PUT])
        .allow_headers(Any)
}
