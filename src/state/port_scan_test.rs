use uuid::Uuid;

use super::*;

#[test]
fn defaults_match_the_advanced_section() {
    let form = PortScanTcpForm::default();
    assert_eq!(form.timeout, 1000);
    assert_eq!(form.task_limit, 500);
    assert_eq!(form.retries, 6);
    assert_eq!(form.interval, 100);
    assert!(!form.skip_icmp_check);
    assert!(!form.can_submit());
}

#[test]
fn positive_fields_reject_zero_negative_and_garbage() {
    let mut form = PortScanTcpForm::default();

    for raw in ["0", "-1", "", "abc", "1.5", "1e3", "+5"] {
        form.set_timeout(raw);
        form.set_interval(raw);
        form.set_task_limit(raw);
        assert_eq!(form.timeout, 1000, "input {raw:?} must be ignored");
        assert_eq!(form.interval, 100, "input {raw:?} must be ignored");
        assert_eq!(form.task_limit, 500, "input {raw:?} must be ignored");
    }

    form.set_timeout("2500");
    assert_eq!(form.timeout, 2500);
}

#[test]
fn retries_accepts_zero_but_not_negative() {
    let mut form = PortScanTcpForm::default();

    form.set_retries("0");
    assert_eq!(form.retries, 0);

    form.set_retries("-3");
    assert_eq!(form.retries, 0);

    form.set_retries("12");
    assert_eq!(form.retries, 12);
}

#[test]
fn submit_requires_a_target() {
    let mut form = PortScanTcpForm::default();
    assert!(!form.can_submit());
    form.target_input = "10.0.0.0/24".to_owned();
    assert!(form.can_submit());
}

#[test]
fn to_request_carries_the_form_verbatim() {
    let workspace = Uuid::from_u128(42);
    let form = PortScanTcpForm {
        target_input: "10.0.0.0/24".to_owned(),
        ..PortScanTcpForm::default()
    };

    let request = form.to_request(workspace);
    assert_eq!(request.targets, ["10.0.0.0/24"]);
    assert_eq!(request.ports, ["1-65535"]);
    assert_eq!(request.timeout, 1000);
    assert_eq!(request.concurrent_limit, 500);
    assert_eq!(request.max_retries, 6);
    assert_eq!(request.retry_interval, 100);
    assert!(!request.skip_icmp_check);
    assert_eq!(request.workspace_uuid, workspace);
    assert_eq!(request.leech_uuid, None);
}
