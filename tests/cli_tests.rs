use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

// Nothing listens here; a request reaching it fails loudly.
const UNREACHABLE_SERVICE: &str = "http://127.0.0.1:9";

fn setup_roster(contents: &str) -> TempDir {
    let temp_dir = TempDir::new().unwrap();
    fs::write(temp_dir.path().join("players.txt"), contents).unwrap();
    temp_dir
}

fn get_cmd(dir: &TempDir, base_url: &str) -> Command {
    let mut cmd = Command::cargo_bin("tdf_pool").unwrap();
    cmd.current_dir(dir.path())
        .env("TDF_POOL_BASE_URL", base_url)
        .env("RUST_LOG", "off");
    cmd
}

#[test]
fn test_invalid_date_exits_with_distinct_code() {
    let dir = setup_roster("Alice\nBob\n");

    get_cmd(&dir, UNREACHABLE_SERVICE)
        .args(["stage", "--date", "2024-13-40"])
        .assert()
        .failure()
        .code(2)
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("Invalid date"))
        .stderr(predicate::str::contains("YYYYMMDD"));
}

#[test]
fn test_invalid_date_checked_before_roster() {
    let dir = TempDir::new().unwrap();

    get_cmd(&dir, UNREACHABLE_SERVICE)
        .args(["overall", "-d", "20241340"])
        .assert()
        .failure()
        .code(2);
}

#[test]
fn test_missing_roster_file_fails() {
    let dir = TempDir::new().unwrap();

    get_cmd(&dir, UNREACHABLE_SERVICE)
        .args(["stage", "-d", "20240705"])
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("players.txt"));
}

#[test]
fn test_empty_roster_fails() {
    let dir = setup_roster("\n   \n");

    get_cmd(&dir, UNREACHABLE_SERVICE)
        .args(["teams", "-y", "2024"])
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("No participants"));
}

#[test]
fn test_unknown_report_type_is_usage_error() {
    let dir = setup_roster("Alice\n");

    get_cmd(&dir, UNREACHABLE_SERVICE)
        .arg("standings")
        .assert()
        .failure()
        .code(2);
}

#[tokio::test(flavor = "multi_thread")]
async fn test_pool_only_overall_from_custom_roster_file() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/cgi-bin/getlines.cgi"))
        .respond_with(ResponseTemplate::new(200).set_body_string(
            "<pre>Stand\nEtappe:\n  4. 12 Alice (USA)\nAlgemeen:\n  8.(8) 410(+12,35) Alice (USA)\n---\n</pre>",
        ))
        .expect(1)
        .mount(&server)
        .await;

    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("pool.txt"), "Alice\n").unwrap();

    get_cmd(&dir, &server.uri())
        .args(["--file", "pool.txt", "overall", "-d", "20240705", "--pool-only"])
        .assert()
        .success()
        .stdout(predicate::str::starts_with(
            "  Pool Rank    Overall Rank  Name      Points    Points Behind\n",
        ))
        .stdout(predicate::str::contains(
            "          1               8  Alice        410                0",
        ));
}
