//! End-to-end request pipeline: fetches map data, resolves start/destination
//! nodes, builds the graph, runs the chosen algorithm, and reconstructs the
//! path — the same sequence both the CLI and the HTTP server drive, tying
//! together C2 through C9 behind one call.

use crate::csr::flatten;
use crate::delta_stepping::{parallel, serial, Delta};
use crate::graph::build_adjacency_list;
use crate::path::reconstruct;
use butterfly_common::{Config, Error, Result};
use butterfly_plan::Algorithm;
use serde::Serialize;
use std::time::Instant;

pub struct RunRequest {
    pub start: (f64, f64),
    pub dest: (f64, f64),
    pub bbox: Vec<(f64, f64)>,
    pub algorithm: Algorithm,
    pub delta_m: Option<f64>,
    pub config: Config,
}

/// The result-JSON object described by the routing contract's external
/// interface section: one object per invocation, `route` in
/// destination-first order.
#[derive(Debug, Serialize)]
pub struct RunResult {
    #[serde(rename = "startNode")]
    pub start_node: i64,
    #[serde(rename = "destNode")]
    pub dest_node: i64,
    #[serde(rename = "nodesInBoundingBox")]
    pub nodes_in_bounding_box: usize,
    #[serde(rename = "roadsInBoundingBox")]
    pub roads_in_bounding_box: usize,
    #[serde(rename = "graphTime")]
    pub graph_time_ms: u128,
    #[serde(rename = "routingTime")]
    pub routing_time_ms: u128,
    #[serde(rename = "totalTime")]
    pub total_time_ms: u128,
    pub route: Vec<[f64; 2]>,
    #[serde(rename = "routeLength")]
    pub route_length: String,
    pub success: bool,
}

/// Runs one full routing request. `bbox` must contain at least 3 vertices
/// (an even count of raw lat/lon scalars, per the CLI contract, collapses
/// to this once parsed into pairs).
pub async fn run(request: RunRequest) -> Result<RunResult> {
    let total_start = Instant::now();

    if request.bbox.len() < 3 {
        return Err(Error::InputMalformed(
            "bounding box must have at least 3 vertices".to_string(),
        ));
    }

    let bbox_query = butterfly_io::bbox_query(&request.bbox);
    let bbox_response = butterfly_io::fetch(&request.config.endpoint, &bbox_query).await?;
    let (nodes, ways) = butterfly_extract::ingest(&bbox_response);

    let start_node = resolve_nearest(&request, request.start, &nodes).await?;
    let dest_node = resolve_nearest(&request, request.dest, &nodes).await?;

    let start_index = index_of(&nodes, start_node, request.start)?;
    let dest_index = index_of(&nodes, dest_node, request.dest)?;

    let graph_start = Instant::now();
    let adjacency = build_adjacency_list(&nodes, &ways);
    let csr = flatten(&adjacency);
    let graph_time_ms = graph_start.elapsed().as_millis();

    let plan = butterfly_plan::for_request(
        csr.node_count(),
        csr.edge_count(),
        request.algorithm,
        request.delta_m,
    )?;
    let delta = Delta::new(plan.delta_m)?;

    let routing_start = Instant::now();
    let shortest_paths = match plan.algorithm {
        Algorithm::Serial => serial::shortest_paths(&csr, start_index, delta),
        Algorithm::Parallel => parallel::shortest_paths(&csr, start_index, delta, plan.thread_count)?,
    };
    let routing_time_ms = routing_start.elapsed().as_millis();

    let path = reconstruct(
        &shortest_paths.dist,
        &shortest_paths.prev,
        &adjacency.positions,
        start_index,
        dest_index,
    )?;

    // The contract's route is destination-first; path::reconstruct returns
    // source-to-destination order.
    let route: Vec<[f64; 2]> = path.polyline.iter().rev().map(|&(lat, lon)| [lat, lon]).collect();

    Ok(RunResult {
        start_node,
        dest_node,
        nodes_in_bounding_box: nodes.len(),
        roads_in_bounding_box: ways.len(),
        graph_time_ms,
        routing_time_ms,
        total_time_ms: total_start.elapsed().as_millis(),
        route,
        route_length: format!("{:.2}m", path.length_m),
        success: true,
    })
}

async fn resolve_nearest(
    request: &RunRequest,
    point: (f64, f64),
    bbox_nodes: &[butterfly_extract::RawNode],
) -> Result<i64> {
    let query = butterfly_io::nearest_node_query(point.0, point.1, request.config.nearest_node_radius_m);
    let response = butterfly_io::fetch(&request.config.endpoint, &query).await?;
    let (candidates, _) = butterfly_extract::ingest(&response);
    let id = butterfly_extract::nearest_node(point.0, point.1, &candidates);

    if id == -1 {
        return Err(Error::NearestNodeNotFound {
            lat: point.0,
            lon: point.1,
        });
    }

    // The id must also exist within the bounding-box node set for it to be
    // usable as a routing endpoint; a candidate found only by the radius
    // query but missing from the bbox graph is effectively not found.
    if !bbox_nodes.iter().any(|n| n.id == id) {
        return Err(Error::NearestNodeNotFound {
            lat: point.0,
            lon: point.1,
        });
    }

    Ok(id)
}

fn index_of(nodes: &[butterfly_extract::RawNode], id: i64, point: (f64, f64)) -> Result<u32> {
    nodes
        .iter()
        .position(|n| n.id == id)
        .map(|i| i as u32)
        .ok_or(Error::NearestNodeNotFound {
            lat: point.0,
            lon: point.1,
        })
}
