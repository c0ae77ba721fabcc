use std::fs;
use std::path::PathBuf;

use cfq::config::Config;
use cfq::test_utils::{TestCase, run_table_tests};

fn fixture_path(relative: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join(relative)
}

#[test]
fn config_api_from_fixture() -> Result<(), String> {
    let cases = vec![
        TestCase {
            name: "default",
            input: "tests/fixtures/configs/default.toml",
            expected: ("https://api.example.com".to_string(), 30u64, false),
        },
        TestCase {
            name: "custom",
            input: "tests/fixtures/configs/custom.toml",
            expected: ("https://api.sys.example.org/".to_string(), 5u64, true),
        },
    ];

    run_table_tests(cases, |relative_path| {
        let path = fixture_path(relative_path);
        let content = fs::read_to_string(&path).expect("read fixture");
        let config: Config = toml::from_str(&content).expect("parse config");
        (
            config.api.endpoint,
            config.api.timeout_secs,
            config.api.skip_ssl_validation,
        )
    })
}

#[test]
fn config_session_from_fixture() -> Result<(), String> {
    let cases = vec![
        TestCase {
            name: "default",
            input: "tests/fixtures/configs/default.toml",
            expected: (None, None, None),
        },
        TestCase {
            name: "custom",
            input: "tests/fixtures/configs/custom.toml",
            expected: (
                Some("eyJhbGciOi".to_string()),
                Some("admin".to_string()),
                Some(semver::Version::new(2, 58, 0)),
            ),
        },
    ];

    run_table_tests(cases, |relative_path| {
        let path = fixture_path(relative_path);
        let content = fs::read_to_string(&path).expect("read fixture");
        let config: Config = toml::from_str(&content).expect("parse config");
        (
            config.session.access_token,
            config.session.username,
            config.session.api_version,
        )
    })
}

#[test]
fn config_load_reports_bad_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.toml");
    fs::write(&path, "[api]\ntimeout_secs = \"soon\"\n").unwrap();

    let err = Config::load(Some(&path)).unwrap_err();
    assert!(err.to_string().contains("parse config"));
}
