use assert_cmd::Command;
use predicates::str::contains;
use serde_json::json;
use std::fs;
use std::path::PathBuf;

/// Helper to get a temporary config directory
fn temp_config_dir() -> tempfile::TempDir {
    tempfile::tempdir().expect("create temp dir")
}

/// Helper to get config file path in the temp dir
fn config_file_path(dir: &tempfile::TempDir) -> PathBuf {
    dir.path().join(".market-dashboard").join("config.json")
}

const BINARY_NAME: &str = "market-dashboard";

/// Command isolated from the caller's config and environment.
fn dashboard(home: &tempfile::TempDir) -> Command {
    let mut cmd = Command::cargo_bin(BINARY_NAME).unwrap();
    cmd.env("HOME", home.path()) // simulate different $HOME
        .env_remove("DASHBOARD_API_URL")
        .env_remove("DASHBOARD_ENVIRONMENT");
    cmd
}

#[test]
/// Help command should display usage information.
fn cli_help_displays_usage() {
    let tmp = temp_config_dir();
    dashboard(&tmp)
        .arg("--help")
        .assert()
        .success()
        .stdout(contains("Usage"))
        .stdout(contains("analyze"));
}

#[test]
/// A whitespace-only ticker is rejected before any request is made.
fn analyze_rejects_blank_ticker() {
    let tmp = temp_config_dir();
    dashboard(&tmp)
        .args(["--api-url", "http://127.0.0.1:9", "analyze", "--ticker", "   "])
        .assert()
        .failure()
        .stdout(contains("Please enter a stock ticker"));
}

#[test]
/// Unknown intervals are rejected by the argument parser.
fn analyze_rejects_unknown_interval() {
    let tmp = temp_config_dir();
    dashboard(&tmp)
        .args(["analyze", "--ticker", "AAPL", "--interval", "2d"])
        .assert()
        .failure();
}

#[test]
/// Successful analysis prints the stats and writes the requested artifacts.
fn analyze_prints_stats_and_writes_artifacts() {
    let mut server = mockito::Server::new();
    let mock = server
        .mock("POST", "/api/analyze")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(
            json!({
                "current_price": 187.25,
                "price_change": 2.3,
                "price_change_percent": 1.25,
                "signal": "BUY",
                "rsi": 55.0,
                "volume": 52_300_000,
                "chart_data": {
                    "dates": ["2024-01-02", "2024-01-03"],
                    "open": [185.0, 186.0],
                    "high": [188.0, 189.0],
                    "low": [184.0, 185.5],
                    "close": [186.0, 187.25]
                }
            })
            .to_string(),
        )
        .create();

    let tmp = temp_config_dir();
    let html_out = tmp.path().join("panel.html");
    let chart_out = tmp.path().join("chart.json");

    let url = server.url();
    dashboard(&tmp)
        .args(["--api-url", url.as_str(), "analyze", "--ticker", "aapl"])
        .arg("--html-out")
        .arg(&html_out)
        .arg("--chart-out")
        .arg(&chart_out)
        .assert()
        .success()
        .stdout(contains("$187.25"))
        .stdout(contains("+1.25% (+$2.30)"))
        .stdout(contains("BUY 🟢"))
        .stdout(contains("52.30M"));

    mock.assert();
    let html = fs::read_to_string(&html_out).unwrap();
    assert!(html.contains("Technical Indicators"));
    let figure: serde_json::Value =
        serde_json::from_str(&fs::read_to_string(&chart_out).unwrap()).unwrap();
    assert_eq!(figure["data"][0]["type"], "candlestick");
    assert_eq!(figure["layout"]["title"]["text"], "AAPL - Candlestick Chart");
}

#[test]
/// An error payload is shown verbatim and fails the command.
fn analyze_surfaces_error_payload() {
    let mut server = mockito::Server::new();
    server
        .mock("POST", "/api/analyze")
        .with_status(404)
        .with_body(json!({"error": "Failed to fetch data for ZZZZ"}).to_string())
        .create();

    let tmp = temp_config_dir();
    let url = server.url();
    dashboard(&tmp)
        .args(["--api-url", url.as_str(), "analyze", "--ticker", "ZZZZ"])
        .assert()
        .failure()
        .stdout(contains("Failed to fetch data for ZZZZ"));
}

#[test]
/// Config commands persist to the config file.
fn config_set_api_url_and_interval() {
    let tmp = temp_config_dir();
    let config_path = config_file_path(&tmp);

    dashboard(&tmp)
        .args(["config", "set-api-url", "http://analysis.internal:8080"])
        .assert()
        .success();
    dashboard(&tmp)
        .args(["config", "set-interval", "1wk"])
        .assert()
        .success();

    let saved: serde_json::Value =
        serde_json::from_str(&fs::read_to_string(&config_path).unwrap()).unwrap();
    assert_eq!(saved["api_url"], "http://analysis.internal:8080");
    assert_eq!(saved["default_interval"], "1wk");

    dashboard(&tmp)
        .args(["config", "show"])
        .assert()
        .success()
        .stdout(contains("http://analysis.internal:8080"));
}

#[test]
/// `local` clears a saved URL instead of storing the word itself.
fn config_set_api_url_local_clears_saved_url() {
    let tmp = temp_config_dir();
    let config_path = config_file_path(&tmp);

    dashboard(&tmp)
        .args(["config", "set-api-url", "http://analysis.internal:8080"])
        .assert()
        .success();
    dashboard(&tmp)
        .args(["config", "set-api-url", "local"])
        .assert()
        .success();

    let saved: serde_json::Value =
        serde_json::from_str(&fs::read_to_string(&config_path).unwrap()).unwrap();
    assert!(saved["api_url"].is_null());

    dashboard(&tmp)
        .args(["config", "show"])
        .assert()
        .success()
        .stdout(contains("http://localhost:5000"));
}

#[test]
/// Non-URL values are refused.
fn config_set_api_url_rejects_garbage() {
    let tmp = temp_config_dir();
    dashboard(&tmp)
        .args(["config", "set-api-url", "localhost"])
        .assert()
        .failure();
    assert!(!config_file_path(&tmp).exists());
}

#[test]
/// Reset command should delete an existing config file.
fn reset_deletes_config_file() {
    let tmp = temp_config_dir();
    let config_path = config_file_path(&tmp);
    fs::create_dir_all(config_path.parent().unwrap()).unwrap();
    fs::write(&config_path, "{}").unwrap();

    // Ensure the file exists
    assert!(config_path.exists());

    dashboard(&tmp)
        .arg("reset")
        .assert()
        .success()
        .stdout(contains("Clearing dashboard configuration"));

    // Confirm the file was deleted
    assert!(!config_path.exists());
}
