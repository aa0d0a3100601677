use lambda_one::{Response, EXECUTED};
use serde_json::{json, Value};
use std::io::Write;
use std::process::{Command, Output, Stdio};

fn invoke(dir: &tempfile::TempDir, args: &[&str], stdin: &str) -> Output {
    let mut child = Command::new(env!("CARGO_BIN_EXE_lambda-one-invoke"))
        .args(args)
        .current_dir(dir.path())
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .unwrap();

    child
        .stdin
        .take()
        .unwrap()
        .write_all(stdin.as_bytes())
        .unwrap();
    child.wait_with_output().unwrap()
}

fn body_of(stdout: &[u8]) -> Value {
    // from_slice rejects anything after the first document
    let response: Response = serde_json::from_slice(stdout).unwrap();
    assert_eq!(response.status_code, 200);
    serde_json::from_str(&response.body).unwrap()
}

#[test]
fn stdout_holds_only_the_response() {
    let dir = tempfile::tempdir().unwrap();
    let output = invoke(&dir, &["--log-level", "trace"], r#"{"x": 1}"#);

    assert!(output.status.success());
    assert_eq!(
        body_of(&output.stdout),
        json!({"message": "Lambda One completed", "input": {"x": 1}})
    );

    let stderr = String::from_utf8(output.stderr).unwrap();
    assert_eq!(stderr.matches(EXECUTED).count(), 1);
}

#[test]
fn pretty_fixture_from_config() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(dir.path().join("Lambda.toml"), "[events.single]\nx = 1\n").unwrap();

    let output = invoke(&dir, &["--pretty", "single"], "");

    assert!(output.status.success());
    assert_eq!(
        body_of(&output.stdout),
        json!({"message": "Lambda One completed", "input": {"x": 1}})
    );
}

#[test]
fn bad_event_exits_with_failure() {
    let dir = tempfile::tempdir().unwrap();
    let output = invoke(&dir, &[], "{\"x\":");

    assert_eq!(output.status.code(), Some(1));
    assert!(output.stdout.is_empty());
    let stderr = String::from_utf8(output.stderr).unwrap();
    assert!(stderr.contains("Invalid event from stdin"));
}
