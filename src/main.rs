use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

use axum::{Router, http::header, routing::get};
use tiffin::api::{handlers, openapi::ApiDoc};
use tiffin::config::Config;
use tiffin::core::services::TiffinService;
use tiffin::infrastructure::{
    media::local::LocalMediaStore, payments::stub::StubPaymentGateway, storage::in_memory::InMemoryStorage,
};
use tower_http::{
    compression::CompressionLayer,
    cors::{Any, CorsLayer},
    timeout::TimeoutLayer,
    trace::TraceLayer,
};
use tracing::info;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = Config::from_env();

    tracing_subscriber::fmt().with_env_filter(config.log_level.clone()).init();
    info!(?config, "Starting up");

    // Collaborators are constructed here and injected; no globals.
    let storage = InMemoryStorage::new();
    let media = LocalMediaStore::new(config.upload_dir.clone());
    let payments = StubPaymentGateway::new(config.checkout_base_url.clone());
    let service = Arc::new(TiffinService::new(
        storage,
        media,
        payments,
        config.jwt_secret.clone(),
        config.admin_email.clone(),
    ));

    let app = Router::new()
        // add / route with a simple health check
        .route("/", get(|| async { "OK" }))
        .nest("/api", handlers::api_routes(service))
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .layer(CompressionLayer::new()) // Gzip compression
        .layer(TimeoutLayer::new(Duration::from_secs(30))) // 30-second timeout
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods([http::Method::GET, http::Method::POST])
                .allow_headers([header::CONTENT_TYPE, header::AUTHORIZATION]),
        )
        .layer(TraceLayer::new_for_http()); // Request tracing

    let addr = SocketAddr::from(([127, 0, 0, 1], config.port));
    info!("Server running at http://{}", addr);
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
