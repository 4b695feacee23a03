//! CLI integration tests for rvdis.

use std::process::{Command, Output};

/// Get the path to the rvdis binary.
fn rvdis_bin() -> String {
    env!("CARGO_BIN_EXE_rvdis").to_string()
}

/// Run rvdis with the given arguments.
fn run_rvdis(args: &[&str]) -> Output {
    Command::new(rvdis_bin())
        .args(args)
        .current_dir(env!("CARGO_MANIFEST_DIR"))
        .output()
        .expect("Failed to execute rvdis")
}

fn stdout_of(args: &[&str]) -> String {
    let output = run_rvdis(args);
    assert!(
        output.status.success(),
        "rvdis {args:?} failed: {}",
        String::from_utf8_lossy(&output.stderr)
    );
    String::from_utf8_lossy(&output.stdout).into_owned()
}

#[test]
fn test_help() {
    let output = run_rvdis(&["--help"]);
    assert!(output.status.success(), "rvdis --help should succeed");
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("RISC-V disassembler"));
    assert!(stdout.contains("--xlen"));
}

#[test]
fn test_requires_input() {
    let output = run_rvdis(&[]);
    assert!(!output.status.success());
}

#[test]
fn test_word() {
    let stdout = stdout_of(&["--word", "0x00000013"]);
    assert_eq!(stdout, format!("{:8x}:\t{:<18}nop\n", 0, "00000013"));
}

#[test]
fn test_hex_stream_with_address() {
    let stdout = stdout_of(&["--hex", "41 11 13 05 a0 02", "--address", "0x1000"]);
    let lines: Vec<&str> = stdout.lines().collect();
    assert_eq!(lines.len(), 2);
    assert!(lines[0].starts_with("    1000:\t1141"));
    assert!(lines[0].ends_with("sp,sp,-16"));
    assert!(lines[1].starts_with("    1002:\t02a00513"));
    assert!(lines[1].ends_with("a0,42"));
}

#[test]
fn test_count_limits_output() {
    let stdout = stdout_of(&["--hex", "01000100010001000100", "--count", "3"]);
    assert_eq!(stdout.lines().count(), 3);
}

#[test]
fn test_extension_flag() {
    // th.addsl a0, a1, a2, 1
    let word = "0x02c5950b";
    assert!(stdout_of(&["--word", word]).contains("illegal"));
    assert!(stdout_of(&["--word", word, "--ext", "xtheadba"]).contains("th.addsl"));
}

#[test]
fn test_rejects_unknown_extension() {
    let output = run_rvdis(&["--word", "0x13", "--ext", "xfoo"]);
    assert!(!output.status.success());
}

#[test]
fn test_stops_at_unsupported_length() {
    let stdout = stdout_of(&["--hex", "0100 7f00 0100"]);
    assert_eq!(stdout.lines().count(), 1);
}
