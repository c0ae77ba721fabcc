use cfq::core::{QuotaFlags, UNLIMITED_APP_INSTANCES, build_request, parse_megabytes};
use cfq::test_utils::{TestCase, run_table_tests};

#[test]
fn size_strings_to_megabytes() -> Result<(), String> {
    let cases = vec![
        TestCase { name: "gigabytes", input: "50G", expected: Some(51200) },
        TestCase { name: "megabytes", input: "1024M", expected: Some(1024) },
        TestCase { name: "lowercase", input: "10g", expected: Some(10240) },
        TestCase { name: "unlimited", input: "-1", expected: Some(-1) },
        TestCase { name: "unlimited with unit", input: "-1G", expected: Some(-1) },
        TestCase { name: "no unit", input: "12", expected: None },
        TestCase { name: "word", input: "whoops", expected: None },
        TestCase { name: "terabytes", input: "1T", expected: None },
        TestCase { name: "other negative", input: "-5M", expected: None },
    ];

    run_table_tests(cases, |raw| parse_megabytes(raw).ok())
}

#[test]
fn request_defaults_resolve_sentinels() {
    let request = build_request("my-quota", &QuotaFlags::default()).unwrap();
    assert_eq!(request.name, "my-quota");
    assert_eq!(request.memory_limit_mb, None);
    assert_eq!(request.instance_memory_limit_mb, -1);
    assert_eq!(request.app_instance_limit, UNLIMITED_APP_INSTANCES);
    assert_eq!(request.reserved_route_ports, 0);
    assert!(!request.non_basic_services_allowed);
}
