// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

#![allow(missing_docs)]
#![allow(clippy::unwrap_used)]
//! End-to-end runs of the `comboviz` binary.

use assert_cmd::Command;
use predicates::prelude::*;

fn comboviz() -> Command {
    Command::cargo_bin("comboviz").unwrap()
}

#[test]
fn show_five_choose_three() {
    comboviz()
        .args(["show", "--n", "5", "--r", "3"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Total Possibilities: 10"))
        .stdout(predicate::str::contains("Formula: C(5, 3) = 5! / (3! × (5-3)!)"))
        .stdout(predicate::str::contains("[1] [2] [3]  4   5 "));
}

#[test]
fn show_permutation() {
    comboviz()
        .args(["show", "--n", "5", "--r", "3", "--mode", "permutation"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Total Possibilities: 60"))
        .stdout(predicate::str::contains("order DOES matter"));
}

#[test]
fn show_clamps_requests() {
    comboviz()
        .args(["show", "--n", "15", "--r", "-2"])
        .assert()
        .success()
        .stdout(predicate::str::contains("n = 10   r = 0"))
        .stdout(predicate::str::contains("Total Possibilities: 1"));
}

#[test]
fn show_json_is_parseable() {
    let out = comboviz()
        .args(["show", "--n", "10", "--r", "10", "--mode", "p", "--json"])
        .output()
        .unwrap();
    assert!(out.status.success());
    let v: serde_json::Value = serde_json::from_slice(&out.stdout).unwrap();
    assert_eq!(v["result"], 3_628_800);
    assert_eq!(v["result_display"], "3,628,800");
    assert_eq!(v["mode"], "permutation");
    assert_eq!(v["items"].as_array().unwrap().len(), 10);
}

#[test]
fn table_lists_every_r() {
    let out = comboviz().args(["table", "--n", "4"]).output().unwrap();
    assert!(out.status.success());
    let text = String::from_utf8(out.stdout).unwrap();
    assert!(text.contains("P(4, r)"));

    // data rows are the ones whose first cell is a number
    let rows: Vec<Vec<String>> = text
        .lines()
        .map(|line| {
            line.split('|')
                .map(str::trim)
                .filter(|cell| !cell.is_empty())
                .map(str::to_owned)
                .collect::<Vec<_>>()
        })
        .filter(|cells| cells.len() == 3 && cells[0].parse::<u32>().is_ok())
        .collect();
    let expected: Vec<Vec<String>> = [
        ["0", "1", "1"],
        ["1", "4", "4"],
        ["2", "12", "6"],
        ["3", "24", "4"],
        ["4", "24", "1"],
    ]
    .iter()
    .map(|row| row.iter().map(|c| (*c).to_owned()).collect())
    .collect();
    assert_eq!(rows, expected);
}

#[test]
fn bad_mode_is_rejected() {
    comboviz()
        .args(["show", "--mode", "sideways"])
        .assert()
        .failure();
}

#[test]
fn interactive_session_saves_and_resumes() {
    let dir = tempfile::tempdir().unwrap();
    let dir_arg = dir.path().to_str().unwrap();

    comboviz()
        .args(["--config-dir", dir_arg, "interactive"])
        .write_stdin("n 8\nr 8\nn 3\np\nq\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Total Possibilities: 6"));

    let saved = std::fs::read_to_string(dir.path().join("comboviz_prefs.json")).unwrap();
    let v: serde_json::Value = serde_json::from_str(&saved).unwrap();
    assert_eq!(v["n"], 3);
    assert_eq!(v["r"], 3);
    assert_eq!(v["mode"], "permutation");

    // next session starts where the last one stopped
    comboviz()
        .args(["--config-dir", dir_arg])
        .write_stdin("q\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Permutation (P)   n = 3   r = 3"));
}

#[test]
fn interactive_reports_unknown_commands() {
    comboviz()
        .arg("--no-persist")
        .write_stdin("frobnicate\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("unknown command `frobnicate`"));
}

#[test]
fn unusable_config_dir_falls_back_to_memory() {
    let dir = tempfile::tempdir().unwrap();
    let blocker = dir.path().join("not-a-dir");
    std::fs::write(&blocker, b"").unwrap();
    let bad = blocker.join("prefs");

    comboviz()
        .args(["--config-dir", bad.to_str().unwrap()])
        .write_stdin("n 7\nq\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("prefs won't persist this session"))
        .stdout(predicate::str::contains("n = 7   r = 3"));
    assert!(!bad.exists());
}
