//! `butterfly-route`: one-shot shortest-path requests against the Overpass
//! API, plus a `--serve` mode exposing the same pipeline over HTTP.

use anyhow::{bail, Context, Result};
use butterfly_common::Config;
use butterfly_plan::Algorithm;
use butterfly_routing::{RunRequest, RunResult};
use clap::Parser;
use serde_json::json;

/// High-performance OSM shortest-path routing over the Overpass API.
///
/// Positional arguments: `start_lat start_lon dest_lat dest_lon` followed
/// by at least 3 `bbox_lat bbox_lon` pairs describing the bounding polygon.
#[derive(Parser, Debug)]
#[command(name = "butterfly-route", version, about)]
struct Cli {
    /// start_lat start_lon dest_lat dest_lon bbox_lat_1 bbox_lon_1 ...
    #[arg(required_unless_present = "serve")]
    args: Vec<f64>,

    /// "serial" or "parallel"
    #[arg(long, default_value = "serial")]
    algorithm: String,

    /// Delta-stepping bucket width, in meters (default 40, valid 10-200).
    #[arg(long)]
    delta: Option<f64>,

    /// Overpass-compatible endpoint override.
    #[arg(long)]
    endpoint: Option<String>,

    /// Nearest-node search radius override, in meters.
    #[arg(long)]
    radius: Option<f64>,

    /// Start the HTTP server instead of running a one-shot request.
    #[arg(long)]
    serve: bool,

    /// Port for `--serve`.
    #[arg(long, default_value_t = 8080)]
    port: u16,
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let config = Config::default()
        .with_endpoint(cli.endpoint.clone())
        .with_radius(cli.radius);

    if cli.serve {
        return butterfly_serve::run_server(config, cli.port)
            .await
            .context("HTTP server failed");
    }

    let (start, dest, bbox) = parse_positional_args(&cli.args)?;
    let algorithm = match cli.algorithm.as_str() {
        "serial" => Algorithm::Serial,
        "parallel" => Algorithm::Parallel,
        other => bail!("unknown --algorithm '{other}', expected 'serial' or 'parallel'"),
    };

    let request = RunRequest {
        start,
        dest,
        bbox,
        algorithm,
        delta_m: cli.delta,
        config,
    };

    match butterfly_routing::run(request).await {
        Ok(result) => {
            print_success(&result);
            Ok(())
        }
        Err(e) => {
            print_failure(&e.to_string());
            std::process::exit(1);
        }
    }
}

/// Splits the flat positional arg list into `(start, dest, bbox)`,
/// validating the even-pair-count-of-at-least-3-vertices contract.
fn parse_positional_args(args: &[f64]) -> Result<((f64, f64), (f64, f64), Vec<(f64, f64)>)> {
    if args.len() < 10 {
        bail!(
            "expected start_lat start_lon dest_lat dest_lon followed by at least 3 bbox lat/lon pairs, got {} values",
            args.len()
        );
    }

    let bbox_scalars = &args[4..];
    if bbox_scalars.len() % 2 != 0 {
        bail!("bounding box coordinates must be given in lat/lon pairs (even count), got {}", bbox_scalars.len());
    }

    let start = (args[0], args[1]);
    let dest = (args[2], args[3]);
    let bbox = bbox_scalars.chunks_exact(2).map(|pair| (pair[0], pair[1])).collect();

    Ok((start, dest, bbox))
}

fn print_success(result: &RunResult) {
    println!("{}", serde_json::to_string_pretty(result).expect("RunResult is always serializable"));
}

fn print_failure(error: &str) {
    let body = json!({ "success": false, "error": error });
    println!("{}", serde_json::to_string_pretty(&body).expect("failure body is always serializable"));
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_too_few_arguments() {
        assert!(parse_positional_args(&[1.0, 2.0, 3.0, 4.0]).is_err());
    }

    #[test]
    fn rejects_odd_bbox_scalar_count() {
        let args = vec![1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0, 8.0, 9.0];
        assert!(parse_positional_args(&args).is_err());
    }

    #[test]
    fn accepts_minimum_three_vertex_bbox() {
        let args = vec![1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0, 8.0, 9.0, 10.0];
        let (start, dest, bbox) = parse_positional_args(&args).unwrap();
        assert_eq!(start, (1.0, 2.0));
        assert_eq!(dest, (3.0, 4.0));
        assert_eq!(bbox, vec![(5.0, 6.0), (7.0, 8.0), (9.0, 10.0)]);
    }
}
