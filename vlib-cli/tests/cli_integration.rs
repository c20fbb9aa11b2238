use assert_cmd::Command;
use predicates::str::contains;
use std::error::Error;

// Helper function to get the path to the compiled binary, with no
// connection settings leaking in from the environment
fn vlib_cmd() -> Command {
    let mut cmd = Command::cargo_bin("vlib").expect("Failed to find vlib binary");
    for var in ["VLIB_URL", "VLIB_USERNAME", "VLIB_PASSWORD", "VLIB_SESSION", "VLIB_INSECURE", "RUST_LOG"] {
        cmd.env_remove(var);
    }
    cmd
}

#[test]
fn test_copy_help_shows_usage() -> Result<(), Box<dyn Error>> {
    vlib_cmd()
        .args(["library.cp", "--help"])
        .assert()
        .success()
        .stdout(contains("Copy SRC library item to DST library"))
        .stdout(contains("<SRC>"))
        .stdout(contains("<DST>"));
    Ok(())
}

#[test]
fn test_copy_missing_destination_is_usage_error() -> Result<(), Box<dyn Error>> {
    vlib_cmd()
        .args(["library.cp", "/content-A/item-X"])
        .assert()
        .code(2)
        .stderr(contains("<DST>"));
    Ok(())
}

#[test]
fn test_copy_without_url_fails() -> Result<(), Box<dyn Error>> {
    vlib_cmd()
        .args(["library.cp", "/content-A/item-X", "/content-B"])
        .assert()
        .code(1)
        .stdout("")
        .stderr(contains("no server URL"));
    Ok(())
}

#[test]
fn test_cp_alias_is_accepted() -> Result<(), Box<dyn Error>> {
    vlib_cmd()
        .args(["cp", "-n", "item-Y", "/content-A/item-X", "/content-B"])
        .assert()
        .code(1)
        .stderr(contains("no server URL"));
    Ok(())
}

#[test]
fn test_copy_rejects_non_http_url() -> Result<(), Box<dyn Error>> {
    vlib_cmd()
        .args(["--url", "ftp://vc.example.com", "library.cp", "/a/b", "/c"])
        .assert()
        .code(1)
        .stderr(contains("must start with http:// or https://"));
    Ok(())
}

#[test]
fn test_copy_without_credentials_fails() -> Result<(), Box<dyn Error>> {
    vlib_cmd()
        .env("VLIB_URL", "https://vc.example.com")
        .args(["library.cp", "/a/b", "/c"])
        .assert()
        .code(1)
        .stderr(contains("no credentials"));
    Ok(())
}

#[test]
fn test_copy_with_unreachable_server_fails() -> Result<(), Box<dyn Error>> {
    vlib_cmd()
        .args([
            "--url", "http://127.0.0.1:1",
            "--session", "abc",
            "--timeout", "5",
            "library.cp", "/content-A/item-X", "/content-B",
        ])
        .assert()
        .code(1)
        .stdout("")
        .stderr(contains("Error:"));
    Ok(())
}

#[test]
fn test_zero_timeout_is_rejected() -> Result<(), Box<dyn Error>> {
    vlib_cmd()
        .args(["--timeout", "0", "library.cp", "/a/b", "/c"])
        .assert()
        .code(2);
    Ok(())
}
