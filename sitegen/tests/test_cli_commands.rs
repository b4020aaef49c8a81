mod common;

use common::{Site, stderr, stdout};

#[test]
fn check_writes_nothing() {
    let site = Site::new();
    site.write("diary/2024-01-01_a.md", "a")
        .write("diary/bad.md", "x")
        .write("reviews/r.md", "no front-matter")
        .write("dialogue/d.md", "## A\n**Aki**: hi\n");

    let output = site.run(&["check"]);
    assert!(output.status.success(), "check failed: {}", stderr(&output));
    assert_eq!(site.list(""), ["dialogue", "diary", "reviews"]);

    let out = stdout(&output);
    assert!(out.contains("diary: 2 source file(s), 1 parsed, 1 skipped"), "{out}");
    assert!(out.contains("reviews: 1 source file(s), 0 parsed, 1 skipped"), "{out}");
}

#[test]
fn check_strict_fails_on_skips() {
    let site = Site::new();
    site.write("diary/bad.md", "x").mkdir("reviews").mkdir("dialogue");

    let output = site.run(&["check", "--strict"]);
    assert_eq!(output.status.code(), Some(1));
    assert!(stderr(&output).contains("skipped in strict mode"));
}

#[test]
fn check_json_summary() {
    let site = Site::new();
    site.mkdir("diary").mkdir("reviews").mkdir("dialogue");

    let output = site.run(&["check", "--format", "json"]);
    assert!(output.status.success(), "check failed: {}", stderr(&output));
    let summary: serde_json::Value = serde_json::from_str(&stdout(&output)).unwrap();
    assert_eq!(summary["skipped"], 0);
    assert_eq!(summary["targets"].as_array().map(Vec::len), Some(3));
    assert_eq!(summary["targets"][0]["target"], "diary");
}

#[test]
fn invalid_config_exits_with_config_error() {
    let site = Site::new();
    site.write("sitegen.yaml", "script:\n  video:\n    fps: 0\n");

    let output = site.run(&["check"]);
    assert_eq!(output.status.code(), Some(2));
    assert!(stderr(&output).contains("script.video.fps"));
}

#[test]
fn misspelled_script_key_exits_with_config_error() {
    let site = Site::new();
    site.write("sitegen.yaml", "script:\n  child_prefx: Kid\n");

    let output = site.run(&["check"]);
    assert_eq!(output.status.code(), Some(2));
    assert!(stderr(&output).contains("script.child_prefx"));
}

#[test]
fn malformed_config_exits_with_config_error() {
    let site = Site::new();
    site.write("sitegen.yaml", "diary: [unclosed\n");

    let output = site.run(&["check"]);
    assert_eq!(output.status.code(), Some(2));
}

#[test]
fn missing_explicit_config() {
    let site = Site::new();
    let output = site.run(&["--config", "nope.yaml", "check"]);
    assert_eq!(output.status.code(), Some(2));
    assert!(stderr(&output).contains("config file not found"));
}

#[test]
fn usage_error_exit_code() {
    let site = Site::new();
    let output = site.run(&["build", "nowhere"]);
    assert_eq!(output.status.code(), Some(64));
}

#[test]
fn version_json() {
    let site = Site::new();
    let output = site.run(&["version", "--format", "json"]);
    assert!(output.status.success());
    let parsed: serde_json::Value = serde_json::from_str(&stdout(&output)).unwrap();
    assert_eq!(parsed["name"], "sitegen");
}

#[test]
fn completions_bash() {
    let site = Site::new();
    let output = site.run(&["completions", "bash"]);
    assert!(output.status.success());
    assert!(stdout(&output).contains("sitegen"));
}
