#![forbid(unsafe_code)]
use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::tempdir;

fn cli() -> Command {
    Command::cargo_bin("calgen-cli").unwrap()
}

const CONFIG: &str = r#"
months_to_print: ["2025-02", "2025-03"]
events:
  single_events:
    - date: "2025-02-14"
      description: "Valentine's Day"
  recurring_events:
    - recurrence: "1w"
      start_date: "2025-02-03"
      description: "Sync"
"#;

#[test]
fn template_flag_writes_config() {
    let dir = tempdir().unwrap();
    cli()
        .current_dir(dir.path())
        .arg("--template")
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Template config file created: template_config.yaml",
        ));
    let yaml = fs::read_to_string(dir.path().join("template_config.yaml")).unwrap();
    assert!(yaml.contains("Weekly Meeting"));
}

#[test]
fn missing_config_is_a_usage_error() {
    cli()
        .assert()
        .failure()
        .code(2)
        .stderr(predicate::str::contains("You must specify a config file or use --template."));
}

#[test]
fn renders_html_to_output_path() {
    let dir = tempdir().unwrap();
    let config = dir.path().join("cal.yaml");
    fs::write(&config, CONFIG).unwrap();
    let out = dir.path().join("out.html");

    cli()
        .arg(&config)
        .arg("-o")
        .arg(&out)
        .assert()
        .success()
        .stdout(predicate::str::contains("Calendar generated:"));

    let html = fs::read_to_string(&out).unwrap();
    assert_eq!(html.matches("</svg>").count(), 2);
    assert!(html.contains("Valentine&#39;s Day"));
}

#[test]
fn default_output_name_depends_on_format() {
    let dir = tempdir().unwrap();
    fs::write(dir.path().join("cal.yaml"), CONFIG).unwrap();

    cli()
        .current_dir(dir.path())
        .args(["cal.yaml", "--format", "json"])
        .assert()
        .success()
        .stdout(predicate::str::contains("calendar.json"));

    let json: serde_json::Value =
        serde_json::from_str(&fs::read_to_string(dir.path().join("calendar.json")).unwrap()).unwrap();
    assert_eq!(json.as_array().unwrap().len(), 2);
}

#[test]
fn validation_errors_abort_without_output() {
    let dir = tempdir().unwrap();
    fs::write(
        dir.path().join("bad.yaml"),
        "months_to_print: [\"2025-99\"]\nevents:\n  recurring_events:\n    - recurrence: \"3x\"\n      start_date: \"2025-01-01\"\n      description: \"x\"\n",
    )
    .unwrap();

    cli()
        .current_dir(dir.path())
        .arg("bad.yaml")
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Errors in config file:"))
        .stderr(predicate::str::contains("- Invalid month format: '2025-99'. Use 'YYYY-MM'."))
        .stderr(predicate::str::contains("- Invalid recurrence format: '3x'."));

    assert!(!dir.path().join("calendar.html").exists());
}

#[test]
fn unreadable_config_fails() {
    let dir = tempdir().unwrap();
    cli()
        .current_dir(dir.path())
        .arg("missing.yaml")
        .assert()
        .failure()
        .stderr(predicate::str::contains("reading config file"));
}
