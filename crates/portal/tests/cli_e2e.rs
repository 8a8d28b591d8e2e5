#![allow(deprecated)]

use assert_cmd::cargo::cargo_bin;
use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

const DATASET: &str = r#"{
  "projects": [
    {
      "id": 1,
      "title": "Arabic OCR",
      "student": "Lina",
      "supervisor": "Dr. Noor",
      "department": "CS",
      "status": "pending",
      "priority": "high",
      "tags": ["vision", "nlp"],
      "progress": 10,
      "created_at": "2024-03-01T09:00:00Z"
    },
    {
      "id": 2,
      "title": "Clinic Scheduler",
      "student": "Omar",
      "supervisor": "Dr. Noor, Dr. Haddad",
      "department": "SE",
      "status": "in_progress",
      "priority": "medium",
      "progress": 65,
      "created_at": "2024-03-02T09:00:00Z",
      "deadline": "2024-03-28T09:00:00Z"
    },
    {
      "id": 3,
      "title": "Warehouse Robot",
      "student": "Sara",
      "supervisor": "Dr. Haddad",
      "department": "CS",
      "status": "completed",
      "priority": "critical",
      "tags": ["robotics"],
      "progress": 100,
      "created_at": "2024-03-03T09:00:00Z"
    }
  ],
  "users": [
    {
      "id": 1, "name": "Lina", "email": "lina@uni.edu", "role": "student",
      "department": "CS", "joined_at": "2023-09-01T00:00:00Z"
    },
    {
      "id": 2, "name": "Noor", "email": "noor@uni.edu", "role": "supervisor",
      "department": "CS", "joined_at": "2022-09-01T00:00:00Z"
    }
  ]
}"#;

struct Env {
    _temp: TempDir,
    data: PathBuf,
    config: PathBuf,
}

fn setup() -> Env {
    let temp = TempDir::new().unwrap();
    let data = temp.path().join("portal.json");
    fs::write(&data, DATASET).unwrap();
    let config = temp.path().join("portal.toml");
    Env {
        _temp: temp,
        data,
        config,
    }
}

fn portal_cmd(env: &Env) -> Command {
    let mut cmd = Command::new(cargo_bin("portal"));
    cmd.env_remove("PORTAL_LOCALE")
        .env_remove("PORTAL_SEARCH_DEBOUNCE_MS")
        .env_remove("PORTAL_DATA_FILE")
        .env_remove("PORTAL_LOG")
        .arg("--config")
        .arg(&env.config)
        .arg("--data")
        .arg(&env.data);
    cmd
}

fn json_titles(output: &[u8]) -> Vec<String> {
    let value: serde_json::Value = serde_json::from_slice(output).unwrap();
    value["rows"]
        .as_array()
        .unwrap()
        .iter()
        .map(|row| row["title"].as_str().unwrap().to_string())
        .collect()
}

#[test]
fn test_list_projects_as_table() {
    let env = setup();
    portal_cmd(&env)
        .args(["list", "projects"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Warehouse Robot"))
        .stdout(predicate::str::contains("3 of 3 projects"));
}

#[test]
fn test_list_json_applies_filters_and_sort() {
    let env = setup();
    let output = portal_cmd(&env)
        .args([
            "list",
            "projects",
            "--department",
            "CS",
            "--sort",
            "title",
            "--asc",
            "--output",
            "json",
        ])
        .output()
        .unwrap();

    assert!(output.status.success());
    assert_eq!(json_titles(&output.stdout), vec!["Arabic OCR", "Warehouse Robot"]);

    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(value["active_filters"], 2);
    assert_eq!(value["total"], 3);
}

#[test]
fn test_search_is_case_insensitive() {
    let env = setup();
    let output = portal_cmd(&env)
        .args(["list", "projects", "--search", "ROBOTICS", "--output", "json"])
        .output()
        .unwrap();
    assert_eq!(json_titles(&output.stdout), vec!["Warehouse Robot"]);
}

#[test]
fn test_supervisor_only_sees_their_projects() {
    let env = setup();
    let output = portal_cmd(&env)
        .args([
            "--role",
            "supervisor",
            "--user",
            "Dr. Haddad",
            "list",
            "projects",
            "--output",
            "json",
        ])
        .output()
        .unwrap();
    assert_eq!(
        json_titles(&output.stdout),
        vec!["Warehouse Robot", "Clinic Scheduler"]
    );
}

#[test]
fn test_unnamed_student_and_unknown_role_see_no_projects() {
    let env = setup();
    for role in ["student", "external_examiner"] {
        let output = portal_cmd(&env)
            .args(["--role", role, "list", "projects", "--output", "json"])
            .output()
            .unwrap();
        assert!(output.status.success());
        assert!(json_titles(&output.stdout).is_empty());
    }
}

#[test]
fn test_no_match_is_not_an_error() {
    let env = setup();
    portal_cmd(&env)
        .args(["list", "projects", "--status", "archived"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No projects match"));
}

#[test]
fn test_options_are_projected_by_role() {
    let env = setup();
    portal_cmd(&env)
        .args(["--role", "student", "options", "projects", "status"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Awaiting approval"))
        .stdout(predicate::str::contains("rejected").not());

    portal_cmd(&env)
        .args(["--role", "external_examiner", "options", "projects", "status"])
        .assert()
        .success()
        .stdout(predicate::str::contains("rejected"));
}

#[test]
fn test_derived_options_list_values_in_the_data() {
    let env = setup();
    portal_cmd(&env)
        .args(["options", "users", "department", "--output", "json"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"value\": \"all\""))
        .stdout(predicate::str::contains("\"value\": \"CS\""));
}

#[test]
fn test_sort_options_by_role() {
    let env = setup();
    portal_cmd(&env)
        .args(["--role", "student", "options", "projects", "sort"])
        .assert()
        .success()
        .stdout(predicate::str::contains("deadline"))
        .stdout(predicate::str::contains("progress").not());
}

#[test]
fn test_unknown_screen_fails() {
    let env = setup();
    portal_cmd(&env)
        .args(["list", "grades"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Unknown screen: grades"));
}

#[test]
fn test_unknown_dimension_fails() {
    let env = setup();
    portal_cmd(&env)
        .args(["options", "users", "priority"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("has no 'priority' filter"));
}

#[test]
fn test_missing_dataset_fails() {
    let env = setup();
    Command::new(cargo_bin("portal"))
        .env_remove("PORTAL_DATA_FILE")
        .args(["--config"])
        .arg(&env.config)
        .args(["--data", "/nonexistent/portal.json", "list", "users"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Dataset not found"));
}

#[test]
fn test_config_file_and_flags_shape_effective_config() {
    let env = setup();
    fs::write(&env.config, "locale = \"sv\"\nsearch_debounce_ms = 120\n").unwrap();

    portal_cmd(&env)
        .arg("config")
        .assert()
        .success()
        .stdout(predicate::str::contains("locale = sv"))
        .stdout(predicate::str::contains("search_debounce_ms = 120"));

    portal_cmd(&env)
        .args(["--locale", "ar", "config"])
        .assert()
        .success()
        .stdout(predicate::str::contains("locale = ar"));
}
