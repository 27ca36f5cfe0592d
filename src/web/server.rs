use axum::{routing::get, routing::post, Router};
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use super::api::feasibility as feasibility_handlers;
use super::api::sensors as sensor_handlers;
use super::api_doc::ApiDoc;
use super::auth::AppState;
use super::config::Config;

pub fn router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/api/feasibility", get(feasibility_handlers::estimate))
        .route(
            "/api/feasibility/aoi",
            post(feasibility_handlers::estimate_aoi),
        )
        .route("/api/sensors", get(sensor_handlers::list_sensors))
        .merge(SwaggerUi::new("/swagger-ui").url("/api-doc/openapi.json", ApiDoc::openapi()))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

pub async fn run_server(config: Config) -> std::io::Result<()> {
    let bind_addr = config.web.bind.clone();
    log::info!(
        "Loaded {} API key(s), AOI rate {} USD/km2",
        config.api_keys.len(),
        config.aoi.cost_per_sq_km_usd
    );

    let app = router(AppState {
        config: Arc::new(config),
    });

    log::info!("Starting server on {}", bind_addr);

    let listener = tokio::net::TcpListener::bind(&bind_addr).await?;
    axum::serve(listener, app).await
}
