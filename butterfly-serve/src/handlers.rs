use crate::ServeState;
use axum::extract::State;
use axum::http::{header, StatusCode};
use axum::response::{Html, IntoResponse, Response};
use axum::Json;
use butterfly_plan::Algorithm;
use butterfly_routing::{RunRequest, RunResult};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use utoipa::ToSchema;

const INPUT_MAP_HTML: &str = include_str!("../assets/input_map.html");
const OUTPUT_MAP_HTML: &str = include_str!("../assets/output_map.html");
const MARKER_SVG: &[u8] = include_bytes!("../assets/marker.svg");
const POLYGON_SVG: &[u8] = include_bytes!("../assets/polygon.svg");
const RECTANGLE_SVG: &[u8] = include_bytes!("../assets/rectangle.svg");

pub async fn input_map() -> Html<&'static str> {
    Html(INPUT_MAP_HTML)
}

pub async fn output_map() -> Html<&'static str> {
    Html(OUTPUT_MAP_HTML)
}

pub async fn marker_svg() -> impl IntoResponse {
    svg_response(MARKER_SVG)
}

pub async fn polygon_svg() -> impl IntoResponse {
    svg_response(POLYGON_SVG)
}

pub async fn rectangle_svg() -> impl IntoResponse {
    svg_response(RECTANGLE_SVG)
}

fn svg_response(bytes: &'static [u8]) -> Response {
    ([(header::CONTENT_TYPE, "image/svg+xml")], bytes).into_response()
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct RunRequestBody {
    /// "serial" or "parallel"
    pub algorithm: String,
    /// [lat, lon]
    pub start: [f64; 2],
    /// [lat, lon]
    pub dest: [f64; 2],
    /// bounding-box polygon vertices, at least 3
    pub bbox: Vec<[f64; 2]>,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct ErrorBody {
    pub success: bool,
    pub error: String,
}

#[utoipa::path(
    post,
    path = "/run",
    request_body = RunRequestBody,
    responses(
        (status = 200, description = "Route computed"),
        (status = 400, description = "Malformed request", body = ErrorBody),
        (status = 502, description = "Routing failed", body = ErrorBody),
    ),
    tag = "routing"
)]
pub async fn run_handler(
    State(state): State<Arc<ServeState>>,
    Json(body): Json<RunRequestBody>,
) -> Response {
    let algorithm = match body.algorithm.as_str() {
        "serial" => Algorithm::Serial,
        "parallel" => Algorithm::Parallel,
        other => {
            return error_response(
                StatusCode::BAD_REQUEST,
                format!("unknown algorithm '{other}', expected 'serial' or 'parallel'"),
            )
        }
    };

    let request = RunRequest {
        start: (body.start[0], body.start[1]),
        dest: (body.dest[0], body.dest[1]),
        bbox: body.bbox.iter().map(|p| (p[0], p[1])).collect(),
        algorithm,
        delta_m: None,
        config: state.config.clone(),
    };

    match butterfly_routing::run(request).await {
        Ok(result) => Json(result).into_response(),
        Err(e) => {
            let status = if e.is_recoverable() {
                StatusCode::BAD_REQUEST
            } else {
                StatusCode::BAD_GATEWAY
            };
            error_response(status, e.to_string())
        }
    }
}

fn error_response(status: StatusCode, message: String) -> Response {
    (
        status,
        Json(ErrorBody {
            success: false,
            error: message,
        }),
    )
        .into_response()
}
