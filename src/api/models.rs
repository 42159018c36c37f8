//! Wire models of the kraken backend API.
//!
//! The backend serializes with plain snake_case field names, so these structs
//! mirror the wire exactly and `serde` derives replace the generated
//! `FromJSON`/`ToJSON` converter pairs of the old client. Optional fields are
//! `Option<T>` and skipped when absent, which keeps `value -> json -> value`
//! and `json -> value -> json` round trips lossless.

#[cfg(test)]
#[path = "models_test.rs"]
mod models_test;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Response containing a single uuid, e.g. of a freshly created resource
/// or a started attack.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct UuidResponse {
    pub uuid: Uuid,
}

/// Error body the backend attaches to non-2xx responses.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApiErrorResponse {
    pub status_code: u16,
    pub message: String,
}

/// One page of a paginated list endpoint.
///
/// `total` is the number of matching items ignoring pagination and drives the
/// page count in the table controller.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Page<T> {
    pub items: Vec<T>,
    pub limit: u64,
    pub offset: u64,
    pub total: u64,
}

/// RGBA color attached to tags.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub alpha: u8,
}

/// A tag attached to aggregated data.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SimpleTag {
    pub uuid: Uuid,
    pub name: String,
    pub color: Color,
}

/// OS type detected for a host.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum OsType {
    #[default]
    Unknown,
    Linux,
    Windows,
    Apple,
    Android,
    FreeBSD,
}

/// How sure the backend is that a host exists.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum HostCertainty {
    /// 3rd party historical data
    Historical,
    /// 3rd party data
    SupposedTo,
    /// The host has responded to a scan
    Verified,
}

/// How sure the backend is that a port is open.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum PortCertainty {
    Historical,
    SupposedTo,
    Verified,
}

/// The certainty a service is detected with.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Certainty {
    Unknown,
    Maybe,
    Definitely,
}

/// How a domain entered the workspace.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum DomainCertainty {
    Unverified,
    Verified,
}

/// Transport protocol of a port.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum PortProtocol {
    #[default]
    Unknown,
    Tcp,
    Udp,
    Sctp,
}

/// Host representation embedded in other models.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SimpleHost {
    pub uuid: Uuid,
    pub ip_addr: String,
    pub os_type: OsType,
    pub comment: String,
}

/// A host of a workspace with its tags.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct FullHost {
    pub uuid: Uuid,
    pub ip_addr: String,
    pub os_type: OsType,
    /// Response time in ms, if the host ever answered.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub response_time: Option<i32>,
    pub certainty: HostCertainty,
    pub comment: String,
    pub tags: Vec<SimpleTag>,
}

/// Port representation embedded in other models.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SimplePort {
    pub uuid: Uuid,
    pub port: u16,
    pub protocol: PortProtocol,
    pub comment: String,
}

/// A port of a host with its tags.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct FullPort {
    pub uuid: Uuid,
    pub port: u16,
    pub protocol: PortProtocol,
    pub host: SimpleHost,
    pub certainty: PortCertainty,
    pub comment: String,
    pub tags: Vec<SimpleTag>,
}

/// A detected service with its tags.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct FullService {
    pub uuid: Uuid,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,
    pub host: SimpleHost,
    /// Services without a known port (e.g. detected via banners) have none.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub port: Option<SimplePort>,
    pub certainty: Certainty,
    pub comment: String,
    pub tags: Vec<SimpleTag>,
}

/// Domain representation embedded in other models.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SimpleDomain {
    pub uuid: Uuid,
    pub domain: String,
    pub comment: String,
}

/// A domain of a workspace with its tags.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct FullDomain {
    pub uuid: Uuid,
    pub domain: String,
    pub certainty: DomainCertainty,
    pub comment: String,
    pub tags: Vec<SimpleTag>,
}

/// User representation embedded in other models.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SimpleUser {
    pub uuid: Uuid,
    pub username: String,
    pub display_name: String,
}

/// A workspace in list views.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SimpleWorkspace {
    pub uuid: Uuid,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub owner: SimpleUser,
}

/// Request to create a new workspace.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreateWorkspaceRequest {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

/// Response listing all workspaces of the current user.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorkspacesResponse {
    pub workspaces: Vec<SimpleWorkspace>,
}

/// A workspace tag.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct FullWorkspaceTag {
    pub uuid: Uuid,
    pub name: String,
    pub color: Color,
    pub workspace: Uuid,
}

/// Response listing all tags of a workspace.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorkspaceTagsResponse {
    pub workspace_tags: Vec<FullWorkspaceTag>,
}

/// A leech registered with the backend.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SimpleLeech {
    pub uuid: Uuid,
    pub name: String,
    pub address: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

/// Request to register a new leech.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreateLeechRequest {
    pub name: String,
    pub address: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

/// Request to update an existing leech. `None` fields are left unchanged.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UpdateLeechRequest {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

/// Response listing all registered leeches.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct LeechesResponse {
    pub leeches: Vec<SimpleLeech>,
}

/// Request to start a TCP port scan.
///
/// All timing and concurrency parameters configure the scan the leech runs,
/// not the HTTP request carrying this body.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScanTcpPortsRequest {
    /// Explicit leech to run the scan on; the backend picks one if `None`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub leech_uuid: Option<Uuid>,
    /// IPs or networks in CIDR notation to scan.
    pub targets: Vec<String>,
    /// Single ports or inclusive ranges like `"1-65535"`.
    pub ports: Vec<String>,
    /// Time in ms to wait for a response per probe.
    pub timeout: u64,
    /// Upper bound on concurrently scanned targets.
    pub concurrent_limit: u32,
    /// How often an unanswered probe is retried.
    pub max_retries: u32,
    /// Time in ms between retries.
    pub retry_interval: u64,
    /// Scan hosts that did not answer an ICMP echo.
    pub skip_icmp_check: bool,
    pub workspace_uuid: Uuid,
}
