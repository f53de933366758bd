use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn command(bin: &str, dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin(bin).unwrap();
    cmd.env_clear().current_dir(dir.path());
    cmd
}

#[test]
fn reporter_requires_configuration() {
    let dir = TempDir::new().unwrap();
    command("nest-thermostats", &dir)
        .assert()
        .code(2)
        .stderr(predicate::str::contains("PROJECT_ID is not set"));
}

#[test]
fn reporter_requires_refresh_token() {
    let dir = TempDir::new().unwrap();
    command("nest-thermostats", &dir)
        .env("PROJECT_ID", "project-1")
        .env("OAUTH_CLIENT_ID", "client-id")
        .env("OAUTH_CLIENT_SECRET", "client-secret")
        .assert()
        .code(2)
        .stderr(predicate::str::contains("OAUTH_REFRESH_TOKEN is not set"));
}

#[test]
fn reporter_json_errors_are_json() {
    let dir = TempDir::new().unwrap();
    let output = command("nest-thermostats", &dir)
        .arg("--json")
        .output()
        .unwrap();
    assert_eq!(output.status.code(), Some(2));

    let err: serde_json::Value = serde_json::from_slice(&output.stderr).unwrap();
    assert_eq!(err["error"], "config");
}

#[test]
fn reporter_reads_dotenv_file() {
    let dir = TempDir::new().unwrap();
    std::fs::write(
        dir.path().join(".env"),
        "PROJECT_ID=project-1\nOAUTH_CLIENT_ID=client-id\nOAUTH_CLIENT_SECRET=client-secret\n",
    )
    .unwrap();

    command("nest-thermostats", &dir)
        .assert()
        .code(2)
        .stderr(predicate::str::contains("OAUTH_REFRESH_TOKEN is not set"));
}

#[test]
fn log_filter_from_dotenv_is_applied() {
    let dir = TempDir::new().unwrap();
    std::fs::write(
        dir.path().join(".env"),
        "RUST_LOG=debug\nPROJECT_ID=project-1\nOAUTH_CLIENT_ID=client-id\n",
    )
    .unwrap();

    command("nest-authorize", &dir)
        .assert()
        .code(2)
        .stderr(predicate::str::contains("loaded .env file"))
        .stderr(predicate::str::contains("OAUTH_CLIENT_SECRET is not set"));
}

#[test]
fn authorizer_requires_configuration() {
    let dir = TempDir::new().unwrap();
    command("nest-authorize", &dir)
        .env("PROJECT_ID", "project-1")
        .assert()
        .code(2)
        .stderr(predicate::str::contains("OAUTH_CLIENT_ID is not set"));
}

#[test]
fn authorizer_prints_consent_url_and_exits_without_code() {
    let dir = TempDir::new().unwrap();
    command("nest-authorize", &dir)
        .env("PROJECT_ID", "project-1")
        .env("OAUTH_CLIENT_ID", "client-id")
        .env("OAUTH_CLIENT_SECRET", "client-secret")
        .write_stdin("\n")
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "https://nestservices.google.com/partnerconnections/project-1/auth?client_id=client-id",
        ))
        .stdout(predicate::str::contains("access_type=offline&prompt=consent"))
        .stdout(predicate::str::contains("No code entered. Exiting."));
}

#[test]
fn binaries_take_no_positional_arguments() {
    let dir = TempDir::new().unwrap();
    command("nest-thermostats", &dir)
        .arg("extra")
        .assert()
        .failure();
    command("nest-authorize", &dir)
        .arg("extra")
        .assert()
        .failure();
}
