//! End-to-end tests for the `compile-mo` binary.

use std::fs;
use std::path::Path;
use std::process::{Command, Output};

use tempfile::tempdir;

fn compile_mo(args: &[&str], dir: &Path) -> Output {
    Command::new(env!("CARGO_BIN_EXE_compile-mo"))
        .args(["--color", "never"])
        .args(args)
        .arg(dir)
        .output()
        .unwrap()
}

fn stdout_lines(output: &Output) -> Vec<String> {
    String::from_utf8(output.stdout.clone())
        .unwrap()
        .lines()
        .map(str::to_owned)
        .collect()
}

#[test]
fn all_files_compiled() {
    let dir = tempdir().unwrap();
    fs::write(dir.path().join("de.po"), "msgid \"Yes\"\nmsgstr \"Ja\"\n").unwrap();
    fs::write(dir.path().join("fr.po"), "msgid \"Yes\"\nmsgstr \"Oui\"\n").unwrap();

    let output = compile_mo(&[], dir.path());
    assert_eq!(output.status.code(), Some(0));
    assert_eq!(
        stdout_lines(&output),
        [
            format!("OK {}", dir.path().join("de.po").display()),
            format!("OK {}", dir.path().join("fr.po").display()),
        ]
    );
    assert!(dir.path().join("de.mo").exists());
    assert!(dir.path().join("fr.mo").exists());
}

#[test]
fn failures_are_reported_and_exit_with_one() {
    let dir = tempdir().unwrap();
    fs::write(dir.path().join("a.po"), "msgid \"broken\n").unwrap();
    fs::write(dir.path().join("b.po"), "# nothing here\n").unwrap();
    fs::write(dir.path().join("c.po"), "msgid \"x\"\nmsgstr \"y\"\n").unwrap();

    let output = compile_mo(&[], dir.path());
    assert_eq!(output.status.code(), Some(1));
    assert_eq!(
        stdout_lines(&output),
        [
            format!(
                "ERROR {}: line 1: unterminated string literal",
                dir.path().join("a.po").display()
            ),
            format!("SKIP {}", dir.path().join("b.po").display()),
            format!("OK {}", dir.path().join("c.po").display()),
        ]
    );
    assert!(dir.path().join("c.mo").exists());
}

#[test]
fn missing_directory_exits_with_two() {
    let dir = tempdir().unwrap();
    let output = compile_mo(&[], &dir.path().join("missing"));
    assert_eq!(output.status.code(), Some(2));
    assert!(output.stdout.is_empty());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("cannot read directory"), "stderr: {stderr}");
}

#[test]
fn empty_directory_succeeds_quietly() {
    let dir = tempdir().unwrap();
    let output = compile_mo(&[], dir.path());
    assert_eq!(output.status.code(), Some(0));
    assert!(output.stdout.is_empty());
}

#[test]
fn json_report() {
    let dir = tempdir().unwrap();
    fs::write(
        dir.path().join("fr.po"),
        "msgid \"a\"\nmsgstr \"b\"\n\n#, fuzzy\nmsgid \"c\"\nmsgstr \"\"\n",
    )
    .unwrap();
    fs::write(dir.path().join("zz.po"), "msgstr \"oops\n").unwrap();

    let output = compile_mo(&["--json"], dir.path());
    assert_eq!(output.status.code(), Some(1));
    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    let files = json.as_array().unwrap();
    assert_eq!(files.len(), 2);
    assert_eq!(files[0]["outcome"], "written");
    assert_eq!(files[0]["stats"]["messages"], 2);
    assert_eq!(files[0]["stats"]["fuzzy"], 1);
    assert_eq!(files[0]["stats"]["untranslated"], 1);
    assert_eq!(files[1]["outcome"], "failed");
    assert_eq!(files[1]["error"], "line 1: unterminated string literal");
}

#[test]
fn big_endian_and_exclude_fuzzy_flags() {
    let dir = tempdir().unwrap();
    fs::write(
        dir.path().join("fr.po"),
        "msgid \"a\"\nmsgstr \"b\"\n\n#, fuzzy\nmsgid \"c\"\nmsgstr \"d\"\n",
    )
    .unwrap();

    let output = compile_mo(&["--big-endian", "--exclude-fuzzy", "--sort"], dir.path());
    assert_eq!(output.status.code(), Some(0));
    let bytes = fs::read(dir.path().join("fr.mo")).unwrap();
    assert_eq!(&bytes[..4], &[0x95, 0x04, 0x12, 0xde]);
    assert_eq!(&bytes[8..12], &[0, 0, 0, 1]);
}

#[test]
fn verbose_output_keeps_stdout_to_status_lines() {
    let dir = tempdir().unwrap();
    fs::write(dir.path().join("fr.po"), "msgid \"a\"\nmsgstr \"b\"\n").unwrap();
    fs::write(dir.path().join("xx.po"), "msgid \"a\"\nmsgstr \"b\n").unwrap();

    let output = compile_mo(&["--verbose"], dir.path());
    assert_eq!(output.status.code(), Some(1));
    assert_eq!(stdout_lines(&output).len(), 2);
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Untranslated"), "stderr: {stderr}");
    assert!(stderr.contains("unterminated string literal"), "stderr: {stderr}");
}
