use std::io::Write;
use std::process::{Command, Stdio};

fn beamsketch() -> Command {
    Command::new(env!("CARGO_BIN_EXE_beamsketch"))
}

#[test]
fn test_gallery_list() {
    let output = beamsketch().args(["gallery", "--list"]).output().unwrap();
    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).unwrap();
    assert!(stdout.lines().any(|l| l == "cantilever"));
    assert_eq!(stdout.lines().count(), 5);
}

#[test]
fn test_gallery_writes_pdf() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("figures").join("beam.pdf");
    let status = beamsketch()
        .args(["gallery", "simply-supported", "--out"])
        .arg(&path)
        .status()
        .unwrap();
    assert!(status.success());
    let bytes = std::fs::read(&path).unwrap();
    assert!(bytes.starts_with(b"%PDF"));
}

#[test]
fn test_unknown_figure_fails() {
    let output = beamsketch().args(["gallery", "truss", "--dump"]).output().unwrap();
    assert!(!output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr).contains("unknown figure"));
}

#[test]
fn test_render_from_stdin() {
    let example = beamsketch().arg("example-sheet").output().unwrap();
    assert!(example.status.success());

    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("sheet.svg");
    let mut child = beamsketch()
        .args(["render", "--legend", "--out"])
        .arg(&path)
        .stdin(Stdio::piped())
        .spawn()
        .unwrap();
    child.stdin.take().unwrap().write_all(&example.stdout).unwrap();
    assert!(child.wait().unwrap().success());

    let svg = std::fs::read_to_string(&path).unwrap();
    assert!(svg.contains("<svg"));
}

#[test]
fn test_dump_prints_drawing_json() {
    let output = beamsketch().args(["gallery", "supports", "--dump"]).output().unwrap();
    assert!(output.status.success());
    let drawing: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert!(!drawing["shapes"].as_array().unwrap().is_empty());
}

#[test]
fn test_render_rejects_bad_json() {
    let mut child = beamsketch()
        .args(["render", "--dump"])
        .stdin(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .unwrap();
    child.stdin.take().unwrap().write_all(b"{ not json").unwrap();
    let output = child.wait_with_output().unwrap();
    assert!(!output.status.success());
}
