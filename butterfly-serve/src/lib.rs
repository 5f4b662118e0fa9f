//! HTTP surface for the routing core: `GET /`, `GET /submit`,
//! `GET /images/{marker,polygon,rectangle}.svg`, and `POST /run`.
//!
//! Unlike the source, which `fork`s and `execvp`s a separate
//! `OpenPathCL_serial`/`OpenPathCL_parallel` binary per request and pipes
//! its stdout back to the client, `/run` calls `butterfly_routing::run`
//! in-process — both algorithms already live in the same library here, so
//! the process boundary the source needed for its two-binary build layout
//! has no counterpart to preserve.

mod handlers;

use axum::routing::{get, post};
use axum::Router;
use std::sync::Arc;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use butterfly_common::Config;

#[derive(OpenApi)]
#[openapi(
    paths(handlers::run_handler),
    components(schemas(handlers::RunRequestBody, handlers::ErrorBody))
)]
struct ApiDoc;

pub struct ServeState {
    pub config: Config,
}

pub fn app(config: Config) -> Router {
    let state = Arc::new(ServeState { config });

    Router::new()
        .route("/", get(handlers::input_map))
        .route("/submit", get(handlers::output_map))
        .route("/images/marker.svg", get(handlers::marker_svg))
        .route("/images/polygon.svg", get(handlers::polygon_svg))
        .route("/images/rectangle.svg", get(handlers::rectangle_svg))
        .route("/run", post(handlers::run_handler))
        .merge(SwaggerUi::new("/docs").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Binds `app(config)` to `0.0.0.0:{port}` and serves until the process is
/// terminated.
pub async fn run_server(config: Config, port: u16) -> std::io::Result<()> {
    let addr = format!("0.0.0.0:{port}");
    tracing::info!(%addr, "butterfly-serve listening");
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app(config)).await
}
