use std::sync::Arc;

use auth::Authenticator;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use trip_service::config::Config;
use trip_service::domain::post::service::PostService;
use trip_service::domain::trip::service::TripService;
use trip_service::inbound::http::router::create_router;
use trip_service::outbound::repositories;
use trip_service::outbound::repositories::ScyllaPostRepository;
use trip_service::outbound::repositories::ScyllaTripRepository;

#[tokio::main]
async fn main() -> Result<(), anyhow::Error> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "trip_service=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!(
        service = "trip-service",
        version = env!("CARGO_PKG_VERSION"),
        "Service starting"
    );

    let config = Config::load()?;

    tracing::info!(
        keyspace = %config.cassandra.keyspace,
        http_port = config.server.http_port,
        "Configuration loaded"
    );

    // Refuses an empty secret: no insecure default exists. The secret must
    // match account-service's so credentials issued there verify here.
    let authenticator = Arc::new(Authenticator::new(config.auth.secret.as_bytes())?);

    let session = repositories::connect(&config).await?;
    tracing::info!(database = "scylla", "Database session created");

    let trip_repository = Arc::new(ScyllaTripRepository::new(Arc::clone(&session)));
    let post_repository = Arc::new(ScyllaPostRepository::new(session));

    let trip_service = Arc::new(TripService::new(Arc::clone(&trip_repository)));
    let post_service = Arc::new(PostService::new(post_repository, trip_repository));

    let http_address = format!("0.0.0.0:{}", config.server.http_port);
    let http_listener = tokio::net::TcpListener::bind(&http_address).await?;
    tracing::info!(
        address = %http_address,
        port = config.server.http_port,
        protocol = "http",
        "Http server listening"
    );

    let application = create_router(trip_service, post_service, authenticator);
    axum::serve(http_listener, application).await?;

    Ok(())
}
