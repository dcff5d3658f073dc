mod common;

use common::{words_line, TestEnv, VOICE_LINE, VOICE_NOTE};
use predicates::prelude::*;

#[test]
fn run_merges_then_splits() {
    let chat = format!("[23.08.24, 11:00:00] Bob: hi\n{VOICE_LINE}");
    let env = TestEnv::with_chat(&chat);
    env.transcript(VOICE_NOTE, "Hello\nWorld");

    env.cmd()
        .arg("run")
        .assert()
        .success()
        .stdout(predicate::str::contains("Created chat_part001.txt with"));

    let merged = env.read("chat_2.txt");
    assert_eq!(
        merged,
        "[23.08.24, 11:00:00] Bob: hi\n\
         [23.08.24, 11:18:58] Alice: Hello\n\
         [23.08.24, 11:18:58] Alice: World\n"
    );
    assert_eq!(env.joined_parts(), merged);
}

#[test]
fn no_subcommand_runs_the_pipeline() {
    let env = TestEnv::with_chat("[23.08.24, 11:00:00] Bob: hi\n");

    env.cmd().assert().success();

    assert!(env.exists("chat_2.txt"));
    assert_eq!(env.part_files(), vec!["chat_part001.txt"]);
}

#[test]
fn run_stops_when_merge_fails() {
    let env = TestEnv::new();
    env.write("chat_2.txt", "left over from an earlier run\n");

    env.cmd()
        .arg("run")
        .assert()
        .failure()
        .stderr(predicate::str::contains("_chat.txt not found"));

    assert!(!env.exists("chats_divided"));
}

#[test]
fn run_with_empty_export_reports_empty_merge() {
    let env = TestEnv::with_chat("");

    env.cmd()
        .arg("run")
        .assert()
        .failure()
        .stderr(predicate::str::contains("chat_2.txt is empty"));

    assert_eq!(env.read("chat_2.txt"), "");
    assert!(!env.exists("chats_divided"));
}

#[test]
fn run_json_has_both_stages() {
    let mut chat = String::new();
    for _ in 0..3 {
        chat.push_str(&words_line(200_000));
    }
    let env = TestEnv::with_chat(&chat);

    let output = env.cmd_json().arg("run").output().unwrap();
    assert!(output.status.success());

    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(value["merge"]["lines_read"], 3);
    let parts = value["split"]["parts"].as_array().unwrap();
    assert_eq!(parts.len(), 2);
    assert_eq!(parts[0]["words"], 400_000);
    assert_eq!(parts[1]["words"], 200_000);
}

#[test]
fn run_json_still_reports_merge_when_split_fails() {
    let env = TestEnv::with_chat("");

    let output = env.cmd_json().arg("run").output().unwrap();
    assert!(!output.status.success());

    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(value["merge"]["lines_read"], 0);
    assert!(value["merge"]["output"].as_str().unwrap().ends_with("chat_2.txt"));
    assert!(value["split"].is_null());
    assert!(String::from_utf8_lossy(&output.stderr).contains("chat_2.txt is empty"));
}
