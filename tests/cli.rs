//! End-to-end runs of the `matrix-anim` binary.

use std::fs;
use std::process::{Command, Output};

use tempfile::tempdir;

fn matrix_anim(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_matrix-anim"))
        .args(args)
        .env_remove("RUST_LOG")
        .output()
        .expect("binary runs")
}

#[test]
fn test_encode_warns_on_short_frame_by_default() {
    let dir = tempdir().unwrap();
    let sheet = dir.path().join("short.txt");
    fs::write(&sheet, "###\n#\n#\n#\n#\n").unwrap();

    let output = matrix_anim(&["encode", sheet.to_str().unwrap()]);
    assert!(output.status.success());

    let stdout = String::from_utf8_lossy(&output.stdout);
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stdout.contains("HeartAnim[][5]"));
    assert!(stderr.contains("frame has 5 rows"), "stderr was: {stderr}");
}

#[test]
fn test_encode_clean_sheet_is_quiet() {
    let dir = tempdir().unwrap();
    let sheet = dir.path().join("full.txt");
    fs::write(&sheet, "#############\n".repeat(8)).unwrap();

    let output = matrix_anim(&["encode", sheet.to_str().unwrap()]);
    assert!(output.status.success());
    assert!(output.stderr.is_empty());
}

#[test]
fn test_encode_whitespace_line_keeps_one_frame() {
    let dir = tempdir().unwrap();
    let sheet = dir.path().join("spaced.txt");
    fs::write(&sheet, "#\n   \n#\n").unwrap();

    let output = matrix_anim(&["encode", sheet.to_str().unwrap(), "-f", "json"]);
    assert!(output.status.success());

    let frames: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(frames.as_array().map(Vec::len), Some(1));
}

#[test]
fn test_play_single_loop_finishes() {
    let dir = tempdir().unwrap();
    let listing = dir.path().join("anim.h");
    fs::write(
        &listing,
        "const uint32_t HeartAnim[][5] = {\n    {0x80000000, 0x0, 0x0, 0x0, 10},\n};\n",
    )
    .unwrap();

    let output = matrix_anim(&["play", listing.to_str().unwrap(), "--loops", "1", "--ascii"]);
    assert!(output.status.success());

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Ctrl+C to stop"));
    assert!(!stdout.contains("Animation stopped."));
}
