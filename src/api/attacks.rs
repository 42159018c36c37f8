//! Attack endpoints.
//!
//! Submitting an attack is a single POST; retry and backpressure for the scan
//! itself live in the leech, not here.

use uuid::Uuid;

use crate::api::models::{ScanTcpPortsRequest, UuidResponse};
use crate::api::{ApiResult, post_json};

/// Start a TCP port scan and return the attack's uuid.
pub async fn scan_tcp_ports(request: &ScanTcpPortsRequest) -> ApiResult<Uuid> {
    let response: UuidResponse =
        post_json("/api/v1/attacks/scanTcpPorts".to_owned(), request).await?;
    Ok(response.uuid)
}
