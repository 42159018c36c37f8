use serde_json::json;
use uuid::Uuid;

use super::*;

fn uuid(n: u128) -> Uuid {
    Uuid::from_u128(n)
}

fn tag() -> SimpleTag {
    SimpleTag {
        uuid: uuid(1),
        name: "critical".to_owned(),
        color: Color { r: 255, g: 0, b: 0, alpha: 255 },
    }
}

fn host() -> SimpleHost {
    SimpleHost {
        uuid: uuid(2),
        ip_addr: "10.13.37.1".to_owned(),
        os_type: OsType::Linux,
        comment: String::new(),
    }
}

/// `value -> json -> value` must be the identity for every model.
macro_rules! assert_round_trip {
    ($value:expr) => {{
        let value = $value;
        let json = serde_json::to_value(&value).expect("serialize");
        let back = serde_json::from_value(json).expect("deserialize");
        assert_eq!(value, back);
    }};
}

#[test]
fn full_host_round_trips() {
    assert_round_trip!(FullHost {
        uuid: uuid(3),
        ip_addr: "10.13.37.0/24".to_owned(),
        os_type: OsType::Windows,
        response_time: Some(23),
        certainty: HostCertainty::Verified,
        comment: "dc".to_owned(),
        tags: vec![tag()],
    });
    assert_round_trip!(FullHost {
        uuid: uuid(3),
        ip_addr: "fe80::1".to_owned(),
        os_type: OsType::Unknown,
        response_time: None,
        certainty: HostCertainty::Historical,
        comment: String::new(),
        tags: vec![],
    });
}

#[test]
fn full_port_round_trips() {
    assert_round_trip!(FullPort {
        uuid: uuid(4),
        port: 443,
        protocol: PortProtocol::Tcp,
        host: host(),
        certainty: PortCertainty::SupposedTo,
        comment: String::new(),
        tags: vec![tag()],
    });
}

#[test]
fn full_service_round_trips_with_and_without_port() {
    let service = FullService {
        uuid: uuid(5),
        name: "nginx".to_owned(),
        version: Some("1.25".to_owned()),
        host: host(),
        port: Some(SimplePort {
            uuid: uuid(6),
            port: 80,
            protocol: PortProtocol::Tcp,
            comment: String::new(),
        }),
        certainty: Certainty::Definitely,
        comment: String::new(),
        tags: vec![],
    };
    assert_round_trip!(service.clone());
    assert_round_trip!(FullService { version: None, port: None, certainty: Certainty::Maybe, ..service });
}

#[test]
fn full_domain_round_trips() {
    assert_round_trip!(FullDomain {
        uuid: uuid(7),
        domain: "example.com".to_owned(),
        certainty: DomainCertainty::Unverified,
        comment: "apex".to_owned(),
        tags: vec![tag()],
    });
}

#[test]
fn page_round_trips() {
    assert_round_trip!(Page {
        items: vec![SimpleDomain {
            uuid: uuid(8),
            domain: "example.com".to_owned(),
            comment: String::new(),
        }],
        limit: 50,
        offset: 100,
        total: 123,
    });
}

#[test]
fn leech_and_workspace_models_round_trip() {
    assert_round_trip!(SimpleLeech {
        uuid: uuid(9),
        name: "leech-01".to_owned(),
        address: "https://10.0.0.2:31337".to_owned(),
        description: None,
    });
    assert_round_trip!(CreateLeechRequest {
        name: "leech-01".to_owned(),
        address: "https://10.0.0.2:31337".to_owned(),
        description: Some("rack 3".to_owned()),
    });
    assert_round_trip!(SimpleWorkspace {
        uuid: uuid(10),
        name: "assessment".to_owned(),
        description: None,
        owner: SimpleUser {
            uuid: uuid(11),
            username: "alice".to_owned(),
            display_name: "Alice".to_owned(),
        },
    });
}

/// `json -> value -> json` must reproduce well-formed payloads byte for byte,
/// including absent optional fields staying absent.
#[test]
fn wire_payloads_reproduce_exactly() {
    let payloads = [
        json!({
            "uuid": "00000000-0000-0000-0000-000000000002",
            "ip_addr": "10.13.37.1",
            "os_type": "Linux",
            "certainty": "Verified",
            "comment": "",
            "tags": [],
        }),
        json!({
            "uuid": "00000000-0000-0000-0000-000000000002",
            "ip_addr": "10.13.37.1",
            "os_type": "FreeBSD",
            "response_time": 5,
            "certainty": "SupposedTo",
            "comment": "fw",
            "tags": [{
                "uuid": "00000000-0000-0000-0000-000000000001",
                "name": "critical",
                "color": {"r": 255, "g": 0, "b": 0, "alpha": 255},
            }],
        }),
    ];

    for payload in payloads {
        let value: FullHost = serde_json::from_value(payload.clone()).expect("deserialize");
        assert_eq!(serde_json::to_value(&value).expect("serialize"), payload);
    }
}

/// Field names on the wire stay snake_case, e.g. `workspace_tags`.
#[test]
fn workspace_tags_wire_name() {
    let response = WorkspaceTagsResponse {
        workspace_tags: vec![FullWorkspaceTag {
            uuid: uuid(12),
            name: "dmz".to_owned(),
            color: Color { r: 0, g: 255, b: 0, alpha: 128 },
            workspace: uuid(10),
        }],
    };
    let json = serde_json::to_value(&response).expect("serialize");
    assert!(json.get("workspace_tags").is_some());
}

#[test]
fn scan_tcp_ports_request_wire_shape() {
    let request = ScanTcpPortsRequest {
        leech_uuid: None,
        targets: vec!["10.0.0.0/24".to_owned()],
        ports: vec!["1-65535".to_owned()],
        timeout: 1000,
        concurrent_limit: 500,
        max_retries: 6,
        retry_interval: 100,
        skip_icmp_check: false,
        workspace_uuid: uuid(10),
    };

    let json = serde_json::to_value(&request).expect("serialize");
    assert_eq!(
        json,
        json!({
            "targets": ["10.0.0.0/24"],
            "ports": ["1-65535"],
            "timeout": 1000,
            "concurrent_limit": 500,
            "max_retries": 6,
            "retry_interval": 100,
            "skip_icmp_check": false,
            "workspace_uuid": "00000000-0000-0000-0000-00000000000a",
        })
    );
}
