use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use std::path::{Path, PathBuf};

const FIXTURE: &str = r#"{
  "1": [
    {
      "id": "1a",
      "postId": 1,
      "author": "CodingWizard",
      "content": "Start with the basics and build small projects.",
      "timestamp": "2024-03-01T10:00:00Z",
      "votes": 1523,
      "replies": [
        {
          "id": "1a1",
          "postId": 1,
          "parentId": "1a",
          "author": "TechEnthusiast",
          "content": "Which language would you pick first?",
          "timestamp": "2024-03-01T11:00:00Z",
          "votes": 438,
          "replies": [
            {
              "id": "1a1a",
              "postId": 1,
              "parentId": "1a1",
              "author": "CodingWizard",
              "content": "Python! It reads like plain English.",
              "timestamp": "2024-03-01T12:00:00Z",
              "votes": 221
            }
          ]
        }
      ]
    },
    {
      "id": "1b",
      "postId": 1,
      "author": "LifeHacker42",
      "content": "Excel shortcuts saved me hours every week.",
      "timestamp": "2024-03-01T13:00:00Z",
      "votes": 892
    }
  ]
}"#;

fn write_fixture(dir: &Path) -> PathBuf {
    let path = dir.join("replies.json");
    fs::write(&path, FIXTURE).unwrap();
    path
}

fn threadline(dir: &Path) -> Command {
    let mut cmd = Command::cargo_bin("threadline").unwrap();
    cmd.arg("--no-color")
        .env("THREADLINE_CONFIG", dir.join("config.toml"))
        .env_remove("RUST_LOG");
    cmd
}

#[test]
fn test_thread_show_nests_replies() {
    let temp = tempfile::tempdir().unwrap();
    let fixture = write_fixture(temp.path());
    fs::write(temp.path().join("config.toml"), "").unwrap();

    threadline(temp.path())
        .args(["thread", "show"])
        .arg(&fixture)
        .args(["--post", "1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Replies to post 1 (4)"))
        .stdout(predicate::str::contains("TechEnthusiast"))
        .stdout(predicate::str::contains("LifeHacker42"));
}

#[test]
fn test_thread_show_empty_post() {
    let temp = tempfile::tempdir().unwrap();
    let fixture = write_fixture(temp.path());
    fs::write(temp.path().join("config.toml"), "").unwrap();

    threadline(temp.path())
        .args(["thread", "show"])
        .arg(&fixture)
        .args(["--post", "99"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Be the first to comment"));
}

#[test]
fn test_thread_search_finds_nested_reply() {
    let temp = tempfile::tempdir().unwrap();
    let fixture = write_fixture(temp.path());
    fs::write(
        temp.path().join("config.toml"),
        "[search]\ndebounce_ms = 0\n",
    )
    .unwrap();

    threadline(temp.path())
        .args(["thread", "search"])
        .arg(&fixture)
        .args(["--post", "1", "python", "--json"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"1a1a\""))
        .stdout(predicate::str::contains("Python!"));
}

#[test]
fn test_thread_search_no_match() {
    let temp = tempfile::tempdir().unwrap();
    let fixture = write_fixture(temp.path());
    fs::write(temp.path().join("config.toml"), "").unwrap();

    threadline(temp.path())
        .args(["thread", "search"])
        .arg(&fixture)
        .args(["--post", "1", "rustacean"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Search Results (0)"))
        .stdout(predicate::str::contains("No matching comments"));
}

#[test]
fn test_vote_presses_stay_within_one_of_baseline() {
    let temp = tempfile::tempdir().unwrap();
    let fixture = write_fixture(temp.path());
    fs::write(temp.path().join("config.toml"), "").unwrap();

    let output = threadline(temp.path())
        .arg("vote")
        .arg(&fixture)
        .args(["--post", "1", "--reply", "1a", "--json", "up", "up", "down"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let snapshots: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    let votes: Vec<i64> = snapshots
        .as_array()
        .unwrap()
        .iter()
        .map(|s| s["votes"].as_i64().unwrap())
        .collect();
    assert_eq!(votes, vec![1524, 1523, 1522]);
    assert_eq!(snapshots[2]["status"], "down");
}

#[test]
fn test_vote_unknown_reply_fails() {
    let temp = tempfile::tempdir().unwrap();
    let fixture = write_fixture(temp.path());
    fs::write(temp.path().join("config.toml"), "").unwrap();

    threadline(temp.path())
        .arg("vote")
        .arg(&fixture)
        .args(["--post", "1", "--reply", "zz", "up"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("zz"));
}

#[test]
fn test_vote_only_accepts_up_or_down() {
    let temp = tempfile::tempdir().unwrap();
    let fixture = write_fixture(temp.path());
    fs::write(temp.path().join("config.toml"), "").unwrap();

    threadline(temp.path())
        .arg("vote")
        .arg(&fixture)
        .args(["--post", "1", "--reply", "1a", "up", "none"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid value 'none'"));
}

#[test]
fn test_compose_over_limit_is_rejected() {
    let temp = tempfile::tempdir().unwrap();
    fs::write(
        temp.path().join("config.toml"),
        "[compose]\ncharacter_limit = 10\n",
    )
    .unwrap();

    threadline(temp.path())
        .args(["compose", "--text", "this text is far too long"])
        .assert()
        .failure()
        .stdout(predicate::str::contains("characters over the limit"));
}

#[test]
fn test_compose_within_limit() {
    let temp = tempfile::tempdir().unwrap();
    fs::write(temp.path().join("config.toml"), "").unwrap();

    threadline(temp.path())
        .args(["compose", "--text", "hello"])
        .assert()
        .success()
        .stdout(predicate::str::contains("315 characters left"));
}

#[test]
fn test_schedule_rejects_bad_interval() {
    let temp = tempfile::tempdir().unwrap();

    threadline(temp.path())
        .args(["schedule", "--repeat", "daily", "--every", "0"])
        .assert()
        .failure();
}

#[test]
fn test_config_init_then_path() {
    let temp = tempfile::tempdir().unwrap();

    threadline(temp.path())
        .args(["config", "init"])
        .assert()
        .success();
    assert!(temp.path().join("config.toml").exists());

    threadline(temp.path())
        .args(["config", "path"])
        .assert()
        .success()
        .stdout(predicate::str::contains("config.toml"));
}
