#![allow(clippy::unwrap_used)]
#![allow(missing_docs)]

use assert_cmd::cargo_bin_cmd;
use predicates::prelude::predicate;

/// Writes `config.toml` pointing the client at `base_url`.
fn write_config(dir: &std::path::Path, base_url: &str, format: &str) {
    std::fs::write(
        dir.join("config.toml"),
        format!("[client]\nformat = \"{format}\"\ntimeout_secs = 5\nbase_url = \"{base_url}\"\n"),
    )
    .unwrap();
}

#[test]
fn test_help_shows_flags() {
    // Arrange & Act & Assert
    let mut cmd = cargo_bin_cmd!("wmata");
    cmd.arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("--wmata_key"))
        .stdout(predicate::str::contains("--metro_line"));
}

#[test]
fn test_version() {
    // Arrange & Act & Assert
    let mut cmd = cargo_bin_cmd!("wmata");
    cmd.arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn test_missing_key() {
    // Arrange & Act & Assert
    let mut cmd = cargo_bin_cmd!("wmata");
    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("--wmata_key"));
}

#[test]
fn test_malformed_config() {
    // Arrange
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(dir.path().join("config.toml"), "[client\n").unwrap();

    // Act & Assert
    let mut cmd = cargo_bin_cmd!("wmata");
    cmd.args(["--wmata_key", "test-key", "--dir"])
        .arg(dir.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("failed to parse"));
}

#[test]
fn test_unreachable_api() {
    // Arrange
    let dir = tempfile::tempdir().unwrap();
    let port = {
        let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
        listener.local_addr().unwrap().port()
    };
    write_config(dir.path(), &format!("http://127.0.0.1:{port}/"), "json");

    // Act & Assert
    let mut cmd = cargo_bin_cmd!("wmata");
    cmd.args(["--wmata_key", "test-key", "--dir"])
        .arg(dir.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("failed to fetch stations"));
}

#[tokio::test]
async fn test_lists_stations_for_line() {
    // Arrange
    let mock_server = wiremock::MockServer::start().await;
    wiremock::Mock::given(wiremock::matchers::method("GET"))
        .and(wiremock::matchers::path("/Rail.svc/Stations"))
        .and(wiremock::matchers::query_param("LineCode", "RD"))
        .and(wiremock::matchers::header("api_key", "test-key"))
        .respond_with(wiremock::ResponseTemplate::new(200).set_body_string(include_str!(
            "../../../fixtures/rail/stations_rd.xml"
        )))
        .expect(1)
        .mount(&mock_server)
        .await;
    let dir = tempfile::tempdir().unwrap();
    write_config(dir.path(), &format!("{}/", mock_server.uri()), "xml");

    // Act & Assert
    let mut cmd = cargo_bin_cmd!("wmata");
    cmd.env("NO_COLOR", "1")
        .env_remove("RUST_LOG")
        .args(["--wmata_key", "test-key", "--metro_line", "RD", "--dir"])
        .arg(dir.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("A01\tMetro Center\tRD"))
        .stdout(predicate::str::contains("A02\tFarragut North\tRD"))
        .stdout(predicate::str::contains("Total: 2 stations"));
}

#[tokio::test]
async fn test_api_error_status_fails() {
    // Arrange
    let mock_server = wiremock::MockServer::start().await;
    wiremock::Mock::given(wiremock::matchers::path("/Rail.svc/json/jStations"))
        .respond_with(wiremock::ResponseTemplate::new(401).set_body_string(
            r#"{"statusCode":401,"message":"Access denied due to invalid subscription key."}"#,
        ))
        .expect(1)
        .mount(&mock_server)
        .await;
    let dir = tempfile::tempdir().unwrap();
    write_config(dir.path(), &format!("{}/", mock_server.uri()), "json");

    // Act & Assert
    let mut cmd = cargo_bin_cmd!("wmata");
    cmd.args(["--wmata_key", "bad-key", "--dir"])
        .arg(dir.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid subscription key"));
}
