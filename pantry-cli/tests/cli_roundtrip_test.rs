//! Integration tests that run the real `pantry` binary and drive its
//! stdin/stdout contract.

use std::io::Write;
use std::process::{Command, Output, Stdio};

use serde_json::Value;
use tempfile::NamedTempFile;

/// Run the binary with the given args, feeding `input` on stdin.
fn run_pantry(args: &[&str], input: &str) -> Output {
    let mut child = Command::new(env!("CARGO_BIN_EXE_pantry"))
        .args(args)
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .expect("failed to spawn pantry");

    child
        .stdin
        .as_mut()
        .expect("stdin piped")
        .write_all(input.as_bytes())
        .expect("failed to write stdin");

    child.wait_with_output().expect("failed to wait for pantry")
}

fn stdout_lines(output: &Output) -> Vec<Value> {
    String::from_utf8(output.stdout.clone())
        .expect("stdout is utf-8")
        .lines()
        .map(|line| serde_json::from_str(line).expect("response line is JSON"))
        .collect()
}

#[test]
fn serve_round_trips_the_widget_scenario() {
    let script = r#"{"op": "create_item", "item": {"name": "Widget", "price": 9.99}}
{"op": "get_item", "index": 0}
{"op": "get_item", "index": 1}
"#;

    let output = run_pantry(&["serve"], script);
    assert!(output.status.success());

    let responses = stdout_lines(&output);
    assert_eq!(responses.len(), 3);
    assert_eq!(responses[0]["status"], 201);
    assert_eq!(
        responses[1]["body"],
        serde_json::json!({"name": "Widget", "description": null, "price": 9.99})
    );
    assert_eq!(
        responses[2]["body"],
        serde_json::json!({"error": "Item not found"})
    );
}

#[test]
fn eval_answers_one_request_and_exits_zero_on_4xx() {
    let output = run_pantry(&["eval"], r#"{"op": "get_item", "index": 0}"#);

    // Misses are payloads, not process failures.
    assert!(output.status.success());

    let responses = stdout_lines(&output);
    assert_eq!(responses.len(), 1);
    assert_eq!(responses[0]["status"], 404);
}

#[test]
fn seed_file_preloads_the_catalog() {
    let mut seed = NamedTempFile::new().expect("temp seed file");
    seed.write_all(br#"[{"name": "Widget", "price": 9.99}, {"name": "Gadget", "price": 3.5}]"#)
        .expect("write seed");

    let seed_path = seed.path().to_str().expect("utf-8 path");
    let output = run_pantry(
        &["serve", "--seed", seed_path],
        "{\"op\": \"list_items\"}\n",
    );
    assert!(output.status.success());

    let responses = stdout_lines(&output);
    let items = responses[0]["body"].as_array().expect("array body");
    assert_eq!(items.len(), 2);
    assert_eq!(items[0]["name"], "Widget");
    assert_eq!(items[1]["name"], "Gadget");
}

#[test]
fn invalid_seed_file_fails_startup() {
    let mut seed = NamedTempFile::new().expect("temp seed file");
    seed.write_all(br#"[{"name": "", "price": "free"}]"#)
        .expect("write seed");

    let seed_path = seed.path().to_str().expect("utf-8 path");
    let output = run_pantry(&["serve", "--seed", seed_path], "");

    assert!(!output.status.success());
    // Nothing reached the response stream.
    assert!(output.stdout.is_empty());
}

#[test]
fn logs_go_to_stderr_not_stdout() {
    let output = run_pantry(
        &["serve", "--log-level", "debug"],
        "{\"op\": \"create_item\", \"item\": {\"name\": \"Widget\", \"price\": 9.99}}\n",
    );
    assert!(output.status.success());

    // stdout holds exactly one JSON response line
    let responses = stdout_lines(&output);
    assert_eq!(responses.len(), 1);
    assert_eq!(responses[0]["status"], 201);

    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("storing item"), "stderr was: {stderr}");
}
