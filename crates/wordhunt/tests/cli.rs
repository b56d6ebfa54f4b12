//! End-to-end CLI integration tests
//!
//! These tests invoke the compiled binary as a subprocess to verify
//! that the CLI behaves correctly from a user's perspective.

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Returns a Command configured to run our binary.
///
/// Note: `cargo_bin` is marked deprecated for edge cases involving custom
/// cargo build directories, but works correctly for standard project layouts.
#[allow(deprecated)]
fn cmd() -> Command {
    Command::cargo_bin(env!("CARGO_PKG_NAME")).unwrap()
}

/// The sample text shared with the core crate's tests.
fn sample() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join("../wordhunt-core/tests/fixtures/sample.txt")
}

fn write_file(dir: &TempDir, name: &str, content: &str) -> PathBuf {
    let path = dir.path().join(name);
    fs::write(&path, content).unwrap();
    path
}

// =============================================================================
// Help & Version
// =============================================================================

#[test]
fn help_flag_shows_usage() {
    cmd()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Usage:"))
        .stdout(predicate::str::contains("Commands:"))
        .stdout(predicate::str::contains("find"));
}

#[test]
fn no_arguments_shows_help() {
    cmd()
        .assert()
        .failure()
        .stderr(predicate::str::contains("Usage:"));
}

#[test]
fn version_flag_shows_version() {
    cmd()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn version_only_prints_bare_version() {
    cmd()
        .arg("--version-only")
        .assert()
        .success()
        .stdout(predicate::str::diff(format!(
            "{}\n",
            env!("CARGO_PKG_VERSION")
        )));
}

// =============================================================================
// Find Command
// =============================================================================

#[test]
fn find_prints_count_and_sentences() {
    cmd()
        .arg("find")
        .arg(sample())
        .arg("word")
        .assert()
        .success()
        .stdout(predicate::str::starts_with("Occurrences of \"word\": 7\n"))
        .stdout(predicate::str::contains(" - Word.\n"))
        .stdout(predicate::str::contains(" - Test with two word word.\n"))
        .stdout(predicate::str::contains(" - Test with word question mark?\n"))
        .stdout(predicate::str::contains("Unrelated").not());
}

#[test]
fn find_cyrillic_word() {
    cmd()
        .arg("find")
        .arg(sample())
        .arg("СЛОВО")
        .assert()
        .success()
        .stdout(predicate::str::contains("Occurrences of \"СЛОВО\": 3"))
        .stdout(predicate::str::contains(" - Та знаходить слово, тут теж."));
}

#[test]
fn find_without_match_omits_list() {
    cmd()
        .arg("find")
        .arg(sample())
        .arg("somethingelse")
        .assert()
        .success()
        .stdout(predicate::str::diff(
            "Occurrences of \"somethingelse\": 0\nNo sentences contain \"somethingelse\".\n",
        ));
}

#[test]
fn find_sentence_count_mode() {
    cmd()
        .arg("find")
        .arg(sample())
        .arg("word")
        .args(["--count", "sentences"])
        .assert()
        .success()
        .stdout(predicate::str::starts_with("Sentences containing \"word\": 6\n"));
}

#[test]
fn find_json_output() {
    let output = cmd()
        .arg("--json")
        .arg("find")
        .arg(sample())
        .arg("word")
        .assert()
        .success();

    let stdout = String::from_utf8_lossy(&output.get_output().stdout);
    let json: serde_json::Value =
        serde_json::from_str(&stdout).expect("find --json should output valid JSON");

    assert_eq!(json["word"], "word");
    assert_eq!(json["word_count"], 7);
    assert_eq!(json["sentence_count"], 6);
    assert_eq!(json["matched_sentences"].as_array().unwrap().len(), 6);
}

#[test]
fn find_segmenter_flag_changes_splitting() {
    let tmp = TempDir::new().unwrap();
    let file = write_file(&tmp, "etc.txt", "Fruit, nuts, etc. and a word. Nothing else.");

    cmd()
        .arg("find")
        .arg(&file)
        .arg("word")
        .assert()
        .success()
        .stdout(predicate::str::contains(" - Fruit, nuts, etc. and a word.\n"));

    cmd()
        .arg("find")
        .arg(&file)
        .arg("word")
        .args(["--segmenter", "regex"])
        .assert()
        .success()
        .stdout(predicate::str::contains(" - and a word.\n"));
}

#[test]
fn find_keeps_wrapped_sentence_whole() {
    let tmp = TempDir::new().unwrap();
    let file = write_file(
        &tmp,
        "wrapped.txt",
        "Dr. Jones wrote the\nword on a wrapped line. Then he left.\n",
    );

    let output = cmd()
        .arg("--json")
        .arg("find")
        .arg(&file)
        .arg(" word ")
        .assert()
        .success();

    let stdout = String::from_utf8_lossy(&output.get_output().stdout);
    let json: serde_json::Value = serde_json::from_str(&stdout).unwrap();
    assert_eq!(json["word"], "word");
    assert_eq!(
        json["matched_sentences"],
        serde_json::json!(["Dr. Jones wrote the\nword on a wrapped line."])
    );
}

#[test]
fn find_appends_log() {
    let tmp = TempDir::new().unwrap();
    let log = tmp.path().join("hunt.jsonl");

    for _ in 0..2 {
        cmd()
            .arg("find")
            .arg(sample())
            .arg("two")
            .arg("--log")
            .arg(&log)
            .assert()
            .success();
    }

    let content = fs::read_to_string(&log).unwrap();
    assert_eq!(content.lines().count(), 2);
    let entry: serde_json::Value = serde_json::from_str(content.lines().next().unwrap()).unwrap();
    assert_eq!(entry["report"]["word_count"], 1);
}

#[test]
fn find_missing_file_fails() {
    cmd()
        .args(["find", "definitely-not-here.txt", "word"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("no such file"));
}

#[test]
fn find_directory_fails_with_read_error() {
    let tmp = TempDir::new().unwrap();
    cmd()
        .arg("find")
        .arg(tmp.path())
        .arg("word")
        .assert()
        .failure()
        .stderr(predicate::str::contains("read failure").or(predicate::str::contains("access denied")));
}

#[test]
fn find_empty_word_fails() {
    cmd()
        .arg("find")
        .arg(sample())
        .arg("")
        .assert()
        .failure()
        .stderr(predicate::str::contains("word must not be empty"));
}

#[test]
fn find_respects_input_limit() {
    let tmp = TempDir::new().unwrap();
    let file = write_file(&tmp, "big.txt", &"word. ".repeat(100));
    let config = write_file(&tmp, "limits.toml", "max_input_bytes = 16\n");

    cmd()
        .arg("--config")
        .arg(&config)
        .arg("find")
        .arg(&file)
        .arg("word")
        .assert()
        .failure()
        .stderr(predicate::str::contains("input too large"));
}

// =============================================================================
// Sentences Command
// =============================================================================

#[test]
fn sentences_lists_each_sentence() {
    let tmp = TempDir::new().unwrap();
    let file = write_file(&tmp, "s.txt", "First one. Second, with 3.14 pi! Third?");

    cmd()
        .args(["--color", "never", "sentences"])
        .arg(&file)
        .assert()
        .success()
        .stdout(predicate::str::contains("   1 First one.\n"))
        .stdout(predicate::str::contains("   2 Second, with 3.14 pi!\n"))
        .stdout(predicate::str::contains("   3 Third?\n"));
}

#[test]
fn sentences_json_with_words() {
    let tmp = TempDir::new().unwrap();
    let file = write_file(&tmp, "s.txt", "Hello, world. Bye!");

    let output = cmd()
        .args(["--json", "sentences", "--words"])
        .arg(&file)
        .assert()
        .success();

    let json: serde_json::Value = serde_json::from_slice(&output.get_output().stdout).unwrap();
    assert_eq!(json[0]["text"], "Hello, world.");
    assert_eq!(json[0]["words"], serde_json::json!(["Hello", "world"]));
    assert_eq!(json[1]["text"], "Bye!");
}

// =============================================================================
// Info Command & Global Flags
// =============================================================================

#[test]
fn info_shows_package_name_and_version() {
    cmd()
        .arg("info")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_NAME")))
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn info_json_outputs_valid_json() {
    let output = cmd().arg("info").arg("--json").assert().success();

    let stdout = String::from_utf8_lossy(&output.get_output().stdout);
    let json: serde_json::Value =
        serde_json::from_str(&stdout).expect("info --json should output valid JSON");

    assert_eq!(json["name"], env!("CARGO_PKG_NAME"));
    assert_eq!(json["version"], env!("CARGO_PKG_VERSION"));
}

#[test]
fn quiet_flag_accepted() {
    cmd().args(["--quiet", "info"]).assert().success();
}

#[test]
fn verbose_flag_accepted() {
    cmd().args(["-vv", "info"]).assert().success();
}

#[test]
fn color_never_accepted() {
    cmd().args(["--color", "never", "info"]).assert().success();
}
