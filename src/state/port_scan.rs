//! Form state for the TCP port-scan attack.

#[cfg(test)]
#[path = "port_scan_test.rs"]
mod port_scan_test;

use uuid::Uuid;

use crate::api::models::ScanTcpPortsRequest;

/// State of the TCP port-scan form.
///
/// Numeric setters take the raw input string and silently ignore anything
/// that is not a positive integer (retries: non-negative), preserving the
/// last valid value. Matches the old form's behavior of rejecting bad input
/// without surfacing an error.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PortScanTcpForm {
    /// IP or network in CIDR notation to scan.
    pub target_input: String,
    pub show_advanced: bool,

    pub timeout: u64,
    pub task_limit: u32,
    pub retries: u32,
    pub interval: u64,
    pub skip_icmp_check: bool,
}

impl Default for PortScanTcpForm {
    fn default() -> Self {
        Self {
            target_input: String::new(),
            show_advanced: false,
            timeout: 1000,
            task_limit: 500,
            retries: 6,
            interval: 100,
            skip_icmp_check: false,
        }
    }
}

impl PortScanTcpForm {
    /// The form can only be submitted with a target.
    pub fn can_submit(&self) -> bool {
        !self.target_input.is_empty()
    }

    pub fn set_timeout(&mut self, raw: &str) {
        if let Some(n) = parse_positive(raw) {
            self.timeout = n;
        }
    }

    pub fn set_task_limit(&mut self, raw: &str) {
        if let Some(n) = parse_positive(raw) {
            self.task_limit = n;
        }
    }

    pub fn set_retries(&mut self, raw: &str) {
        if let Some(n) = parse_non_negative(raw) {
            self.retries = n;
        }
    }

    pub fn set_interval(&mut self, raw: &str) {
        if let Some(n) = parse_positive(raw) {
            self.interval = n;
        }
    }

    /// Build the attack request submitted to the backend. The whole port
    /// range is scanned; narrowing it is a backend-side concern of the scan.
    pub fn to_request(&self, workspace_uuid: Uuid) -> ScanTcpPortsRequest {
        ScanTcpPortsRequest {
            leech_uuid: None,
            targets: vec![self.target_input.clone()],
            ports: vec!["1-65535".to_owned()],
            timeout: self.timeout,
            concurrent_limit: self.task_limit,
            max_retries: self.retries,
            retry_interval: self.interval,
            skip_icmp_check: self.skip_icmp_check,
            workspace_uuid,
        }
    }
}

/// Parse a strictly positive integer, `None` for everything else.
fn parse_positive<N: TryFrom<u64>>(raw: &str) -> Option<N> {
    let n = parse_non_negative::<u64>(raw)?;
    if n == 0 { None } else { N::try_from(n).ok() }
}

/// Parse a non-negative integer, `None` for everything else (signs,
/// fractions, exponents, empty input).
fn parse_non_negative<N: TryFrom<u64>>(raw: &str) -> Option<N> {
    if raw.starts_with('+') {
        return None;
    }
    raw.parse::<u64>().ok().and_then(|n| N::try_from(n).ok())
}
