use std::fs;
use std::path::Path;
use std::process::{Command, Output};
use tempfile::tempdir;

fn plotlog(args: &[&str], cwd: &Path) -> Output {
    Command::new(env!("CARGO_BIN_EXE_plotlog"))
        .args(args)
        .current_dir(cwd)
        .output()
        .expect("failed to run plotlog")
}

fn plotlog_sim(args: &[&str], cwd: &Path) -> Output {
    Command::new(env!("CARGO_BIN_EXE_plotlog-sim"))
        .args(args)
        .current_dir(cwd)
        .output()
        .expect("failed to run plotlog-sim")
}

fn stderr(output: &Output) -> String {
    String::from_utf8_lossy(&output.stderr).into_owned()
}

#[test]
fn plots_with_defaults() {
    let dir = tempdir().unwrap();
    fs::write(
        dir.path().join("log.csv"),
        "step,speed,state\n1,10,Idle\n2,12,Idle\n3,9,Running\n",
    )
    .unwrap();

    let output = plotlog(&["--dpi", "60"], dir.path());

    assert_eq!(output.status.code(), Some(0), "{}", stderr(&output));
    assert!(String::from_utf8_lossy(&output.stdout).contains("Wrote log.png"));
    assert!(dir.path().join("log.png").exists());
}

#[test]
fn explicit_output_path() {
    let dir = tempdir().unwrap();
    fs::write(dir.path().join("run.csv"), "1,10\n2,11\n").unwrap();

    let output = plotlog(&["run.csv", "-o", "chart.svg"], dir.path());

    assert_eq!(output.status.code(), Some(0), "{}", stderr(&output));
    assert!(dir.path().join("chart.svg").exists());
}

#[test]
fn unreadable_input_exits_2() {
    let dir = tempdir().unwrap();

    let output = plotlog(&["missing.csv"], dir.path());

    assert_eq!(output.status.code(), Some(2));
    assert!(stderr(&output).contains("Failed to read missing.csv"));
}

#[test]
fn empty_input_exits_3() {
    let dir = tempdir().unwrap();
    fs::write(dir.path().join("log.csv"), "").unwrap();

    let output = plotlog(&[], dir.path());

    assert_eq!(output.status.code(), Some(3));
    assert!(stderr(&output).contains("No data in log.csv"));
    assert!(!dir.path().join("log.png").exists());
}

#[test]
fn header_only_exits_3() {
    let dir = tempdir().unwrap();
    fs::write(dir.path().join("log.csv"), "step,speed,state\n").unwrap();

    let output = plotlog(&["log.csv"], dir.path());

    assert_eq!(output.status.code(), Some(3));
    assert!(stderr(&output).contains("No numeric data found in log.csv"));
}

#[test]
fn unwritable_output_exits_5() {
    let dir = tempdir().unwrap();
    fs::write(dir.path().join("log.csv"), "1,10,Idle\n2,12,Running\n").unwrap();

    let output = plotlog(&["-o", "no_such_dir/out.png", "--dpi", "40"], dir.path());

    assert_eq!(output.status.code(), Some(5));
    assert!(stderr(&output).contains("Failed to write no_such_dir/out.png"));
}

#[test]
fn unknown_extension_exits_5() {
    let dir = tempdir().unwrap();
    fs::write(dir.path().join("log.csv"), "1,10,Idle\n").unwrap();

    let output = plotlog(&["-o", "out.xyz"], dir.path());

    assert_eq!(output.status.code(), Some(5));
    assert!(!dir.path().join("out.xyz").exists());
}

#[test]
fn zero_dpi_is_rejected() {
    let dir = tempdir().unwrap();
    fs::write(dir.path().join("log.csv"), "1,10,Idle\n").unwrap();

    let output = plotlog(&["--dpi", "0"], dir.path());

    assert_eq!(output.status.code(), Some(2));
}

#[test]
fn simulate_then_plot() {
    let dir = tempdir().unwrap();

    let output = plotlog_sim(&["--steps", "200", "-o", "sim.csv"], dir.path());
    assert_eq!(output.status.code(), Some(0), "{}", stderr(&output));

    let text = fs::read_to_string(dir.path().join("sim.csv")).unwrap();
    assert_eq!(text.lines().count(), 201);
    assert!(text.starts_with("step,speed,state,events\n"));

    let output = plotlog(&["sim.csv", "-o", "sim.png", "--dpi", "40"], dir.path());
    assert_eq!(output.status.code(), Some(0), "{}", stderr(&output));
    assert!(dir.path().join("sim.png").exists());
}

#[test]
fn input_named_simulate_is_plotted() {
    let dir = tempdir().unwrap();
    fs::write(dir.path().join("simulate"), "1,10,Idle\n2,12,Running\n").unwrap();

    let output = plotlog(&["simulate", "-o", "chart.png", "--dpi", "40"], dir.path());

    assert_eq!(output.status.code(), Some(0), "{}", stderr(&output));
    let bytes = fs::read(dir.path().join("chart.png")).unwrap();
    assert_eq!(&bytes[..4], b"\x89PNG");
}

#[test]
fn high_dpi_renders() {
    let dir = tempdir().unwrap();
    fs::write(dir.path().join("log.csv"), "1,10,Idle\n2,12,Running\n").unwrap();

    let output = plotlog(&["--dpi", "4000", "-o", "big.svg"], dir.path());

    assert_eq!(output.status.code(), Some(0), "{}", stderr(&output));
    assert!(dir.path().join("big.svg").exists());
}

#[test]
fn oversized_image_exits_5() {
    let dir = tempdir().unwrap();
    fs::write(dir.path().join("log.csv"), "1,10,Idle\n2,12,Running\n").unwrap();

    let output = plotlog(&["--dpi", "10000"], dir.path());

    assert_eq!(output.status.code(), Some(5));
    assert!(stderr(&output).contains("Failed to write log.png"));
    assert!(!dir.path().join("log.png").exists());
}

#[test]
fn tiff_output() {
    let dir = tempdir().unwrap();
    fs::write(dir.path().join("log.csv"), "1,10,Idle\n2,12,Running\n").unwrap();

    let output = plotlog(&["-o", "chart.tif", "--dpi", "40"], dir.path());

    assert_eq!(output.status.code(), Some(0), "{}", stderr(&output));
    assert!(dir.path().join("chart.tif").exists());
}
