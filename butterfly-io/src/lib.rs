//! Overpass API transport: query construction, the POST request, and the
//! JSON element model shared by ingestion and nearest-node resolution.

mod query;
mod response;

pub use query::{bbox_query, nearest_node_query};
pub use response::{OverpassElement, OverpassResponse};

use butterfly_common::{Error, Result};

/// POSTs `query` to `endpoint` and parses the response body into an
/// [`OverpassResponse`]. Single attempt, no retries, matching the source's
/// fetch policy — any non-success status or unparseable body is
/// [`Error::UpstreamUnavailable`].
pub async fn fetch(endpoint: &str, query: &str) -> Result<OverpassResponse> {
    let client = reqwest::Client::new();

    let response = client
        .post(endpoint)
        .body(query.to_string())
        .send()
        .await
        .map_err(|e| Error::UpstreamUnavailable(e.to_string()))?;

    if !response.status().is_success() {
        return Err(Error::UpstreamUnavailable(format!(
            "endpoint returned status {}",
            response.status()
        )));
    }

    let body = response
        .text()
        .await
        .map_err(|e| Error::UpstreamUnavailable(e.to_string()))?;

    serde_json::from_str(&body).map_err(|e| Error::UpstreamUnavailable(e.to_string()))
}
