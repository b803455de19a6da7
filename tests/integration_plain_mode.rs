// Drives the binary in --plain mode, where guesses arrive on stdin and every
// response is one JSON line on stdout.

use std::io::Write;

use assert_cmd::Command;
use serde_json::Value;
use tempfile::NamedTempFile;

fn word_file(words: &[&str]) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    for w in words {
        writeln!(file, "{w}").unwrap();
    }
    file
}

fn run_plain(args: &[&str], stdin: &str) -> Vec<Value> {
    let output = Command::cargo_bin("hangman")
        .unwrap()
        .arg("--plain")
        .args(args)
        .write_stdin(stdin)
        .output()
        .unwrap();

    assert!(output.status.success(), "{output:?}");
    String::from_utf8(output.stdout)
        .unwrap()
        .lines()
        .map(|l| serde_json::from_str(l).unwrap())
        .collect()
}

#[test]
fn plain_mode_plays_cat_round() {
    let words = word_file(&["cat"]);
    let path = words.path().to_str().unwrap();

    let out = run_plain(&["--words", path, "-m", "3"], "C\nX\nA\nT\n");

    assert_eq!(out.len(), 5);
    assert_eq!(out[0]["revealed"], "___");
    assert_eq!(out[1]["revealed"], "C__");
    assert_eq!(out[2]["error_count"], 1);
    assert_eq!(out[3]["revealed"], "CA_");
    assert_eq!(out[4]["revealed"], "CAT");
    assert_eq!(out[4]["state"], "won");
    assert_eq!(out[4]["secret_word"], "CAT");
}

#[test]
fn plain_mode_loses_with_single_attempt() {
    let words = word_file(&["dog"]);
    let path = words.path().to_str().unwrap();

    let out = run_plain(&["--words", path, "--max-errors", "1"], "z\nd\n");

    assert_eq!(out[1]["state"], "lost");
    assert_eq!(out[1]["error_count"], 1);
    assert_eq!(out[2]["state"], "lost");
    assert_eq!(out[2]["revealed"], "___");
    assert_eq!(out[2]["last_outcome"]["reason"], "round_over");
}

#[test]
fn plain_mode_falls_back_to_builtin_words() {
    let dir = tempfile::tempdir().unwrap();
    let missing = dir.path().join("nope.txt");

    let out = run_plain(&["--words", missing.to_str().unwrap(), "--seed", "4"], "");

    let len = out[0]["revealed"].as_str().unwrap().len();
    let builtin = ["PROGRAMMIERUNG", "JAVA", "SWING", "LERNZIELE", "KLASSEN"];
    assert!(builtin.iter().any(|w| w.len() == len));
}

#[test]
fn plain_mode_same_seed_same_words() {
    let words = word_file(&["alpha", "bravo", "charlie", "delta", "echo", "foxtrot"]);
    let path = words.path().to_str().unwrap();
    let script = ":new\n:new\n:new\n";

    let a = run_plain(&["--words", path, "--seed", "9"], script);
    let b = run_plain(&["--words", path, "--seed", "9"], script);

    let lens = |out: &[Value]| -> Vec<usize> {
        out.iter()
            .map(|v| v["revealed"].as_str().unwrap().len())
            .collect()
    };
    assert_eq!(lens(&a), lens(&b));
}

#[test]
fn invalid_max_errors_flag_is_rejected() {
    Command::cargo_bin("hangman")
        .unwrap()
        .args(["--plain", "-m", "9"])
        .assert()
        .failure();
}
