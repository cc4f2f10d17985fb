use std::collections::BTreeSet;
use std::path::{Path, PathBuf};
use std::process::{Command, Output, Stdio};
use std::time::{SystemTime, UNIX_EPOCH};

use corpus_encoder::CaseEncoder;
use corpus_types::Operator;
use corpus_wire::ArgSize;

fn bin_path() -> PathBuf {
    PathBuf::from(env!("CARGO_BIN_EXE_corpus-decode"))
}

fn tmp_dir(name: &str) -> PathBuf {
    let nanos = SystemTime::now().duration_since(UNIX_EPOCH).unwrap().as_nanos();
    let mut p = std::env::temp_dir();
    p.push(format!("corpus_cli_{}_{}_{}", std::process::id(), nanos, name));
    std::fs::create_dir_all(&p).unwrap();
    p
}

fn run(args: &[&str]) -> Output {
    Command::new(bin_path())
        .args(args)
        .env_remove("RUST_LOG")
        .output()
        .unwrap_or_else(|e| panic!("failed to run {:?} {:?}: {}", bin_path(), args, e))
}

fn stdout_lines(output: &Output) -> BTreeSet<String> {
    String::from_utf8_lossy(&output.stdout)
        .lines()
        .map(str::to_owned)
        .collect()
}

fn entry(op: Operator, x: u128, y: u128, arg_size: ArgSize) -> Vec<u8> {
    CaseEncoder::new(arg_size).operator(op).x(x).y(y).encode().unwrap()
}

/// One well-formed entry, one with arg_size 10, one with a reserved selector.
fn mixed_corpus(dir: &Path) {
    std::fs::write(dir.join("good"), entry(Operator::Shl, 1, 2, ArgSize::Bits256)).unwrap();
    std::fs::write(dir.join("short"), vec![0u8; 21]).unwrap();
    let reserved = CaseEncoder::new(ArgSize::Bits256).selector(4).encode().unwrap();
    std::fs::write(dir.join("reserved"), reserved).unwrap();
}

#[test]
fn missing_path_is_a_usage_error() {
    let out = run(&[]);
    assert_eq!(out.status.code(), Some(2));
    assert!(out.stdout.is_empty(), "no output may be produced before the usage error");
    assert!(String::from_utf8_lossy(&out.stderr).contains("<PATH>"));
}

#[test]
fn unknown_operator_flag_is_a_usage_error() {
    let dir = tmp_dir("bad_op");
    let out = run(&[dir.to_str().unwrap(), "--op", "%"]);
    assert_eq!(out.status.code(), Some(2));
    assert!(out.stdout.is_empty());
    std::fs::remove_dir_all(&dir).unwrap();
}

#[test]
fn mixed_directory_yields_exactly_one_case() {
    let dir = tmp_dir("mixed");
    mixed_corpus(&dir);

    let out = run(&[dir.to_str().unwrap()]);
    assert!(out.status.success(), "stderr: {}", String::from_utf8_lossy(&out.stderr));
    assert_eq!(stdout_lines(&out), BTreeSet::from(["1 << 2".to_string()]));

    let stderr = String::from_utf8_lossy(&out.stderr);
    assert!(stderr.contains("arg_size 10"), "malformed entry not reported: {stderr}");
    std::fs::remove_dir_all(&dir).unwrap();
}

#[test]
fn quiet_suppresses_malformed_diagnostics() {
    let dir = tmp_dir("quiet");
    mixed_corpus(&dir);

    let out = run(&[dir.to_str().unwrap(), "--quiet"]);
    assert!(out.status.success());
    assert_eq!(stdout_lines(&out), BTreeSet::from(["1 << 2".to_string()]));
    assert!(out.stderr.is_empty(), "stderr: {}", String::from_utf8_lossy(&out.stderr));
    std::fs::remove_dir_all(&dir).unwrap();
}

#[test]
fn operator_filter_limits_output() {
    let dir = tmp_dir("filter");
    std::fs::create_dir_all(dir.join("nested")).unwrap();
    std::fs::write(dir.join("div"), entry(Operator::Div, 10, 3, ArgSize::Bits256)).unwrap();
    std::fs::write(dir.join("mul"), entry(Operator::Mul, 6, 7, ArgSize::Bits512)).unwrap();
    std::fs::write(dir.join("nested/shl"), entry(Operator::Shl, 1, 255, ArgSize::Bits256)).unwrap();
    std::fs::write(dir.join("nested/shr"), entry(Operator::Shr, 256, 8, ArgSize::Bits512)).unwrap();

    let all = run(&[dir.to_str().unwrap()]);
    assert_eq!(
        stdout_lines(&all),
        BTreeSet::from([
            "10 / 3".to_string(),
            "6 * 7".to_string(),
            "1 << 255".to_string(),
            "256 >> 8".to_string(),
        ])
    );

    let shifts = run(&[dir.to_str().unwrap(), "--op", "<<,>>"]);
    assert_eq!(
        stdout_lines(&shifts),
        BTreeSet::from(["1 << 255".to_string(), "256 >> 8".to_string()])
    );

    let by_name = run(&[dir.to_str().unwrap(), "--op", "div", "--op", "mul"]);
    assert_eq!(
        stdout_lines(&by_name),
        BTreeSet::from(["10 / 3".to_string(), "6 * 7".to_string()])
    );
    std::fs::remove_dir_all(&dir).unwrap();
}

#[test]
fn single_file_in_detailed_mode() {
    let dir = tmp_dir("detailed");
    let path = dir.join("crash-1");
    std::fs::write(&path, entry(Operator::Shl, 1, 2, ArgSize::Bits256)).unwrap();

    let out = run(&[path.to_str().unwrap(), "--mode", "detailed"]);
    assert!(out.status.success());
    let stdout = String::from_utf8_lossy(&out.stdout);
    let lines: Vec<&str> = stdout.lines().collect();
    assert_eq!(lines[0], format!("{} [arg_size=32]", path.display()));
    assert_eq!(lines[1], "  1 << 2");
    assert_eq!(lines[2], format!("  x = 0x{}1", "0".repeat(63)));
    assert_eq!(lines[3], format!("  y = 0x{}2", "0".repeat(63)));
    std::fs::remove_dir_all(&dir).unwrap();
}

#[test]
fn nonexistent_path_exits_successfully() {
    let dir = tmp_dir("nonexistent");
    let out = run(&[dir.join("nope").to_str().unwrap()]);
    assert!(out.status.success());
    assert!(out.stdout.is_empty());
    std::fs::remove_dir_all(&dir).unwrap();
}

#[test]
fn verbose_reports_skips_and_summary() {
    let dir = tmp_dir("verbose");
    mixed_corpus(&dir);

    let out = run(&[dir.to_str().unwrap(), "-v"]);
    assert!(out.status.success());
    assert_eq!(stdout_lines(&out), BTreeSet::from(["1 << 2".to_string()]));

    let stderr = String::from_utf8_lossy(&out.stderr);
    assert!(stderr.contains("arg_size 10"), "stderr: {stderr}");
    assert!(stderr.contains("reserved operator selector"), "stderr: {stderr}");
    assert!(stderr.contains("corpus walk finished"), "stderr: {stderr}");
    std::fs::remove_dir_all(&dir).unwrap();
}

#[test]
fn verbose_reports_filtered_operators() {
    let dir = tmp_dir("verbose_filter");
    std::fs::write(dir.join("div"), entry(Operator::Div, 10, 3, ArgSize::Bits256)).unwrap();

    let out = run(&[dir.to_str().unwrap(), "--op", "<<", "-v"]);
    assert!(out.status.success());
    assert!(out.stdout.is_empty());
    let stderr = String::from_utf8_lossy(&out.stderr);
    assert!(stderr.contains("operator filtered out"), "stderr: {stderr}");
    std::fs::remove_dir_all(&dir).unwrap();
}

#[test]
fn default_level_hides_skips() {
    let dir = tmp_dir("default_level");
    mixed_corpus(&dir);

    let out = run(&[dir.to_str().unwrap()]);
    let stderr = String::from_utf8_lossy(&out.stderr);
    assert!(!stderr.contains("reserved operator selector"), "stderr: {stderr}");
    assert!(!stderr.contains("corpus walk finished"), "stderr: {stderr}");
    std::fs::remove_dir_all(&dir).unwrap();
}

#[test]
fn redirected_stderr_has_no_color_codes() {
    let dir = tmp_dir("no_ansi");
    mixed_corpus(&dir);

    let out = run(&[dir.to_str().unwrap(), "-v"]);
    assert!(!out.stderr.is_empty());
    assert!(!out.stderr.contains(&0x1b), "stderr: {:?}", String::from_utf8_lossy(&out.stderr));
    std::fs::remove_dir_all(&dir).unwrap();
}

#[test]
fn closed_stdout_is_not_an_error() {
    let dir = tmp_dir("closed_stdout");
    for i in 0..2000u32 {
        let bytes = entry(Operator::Mul, u128::from(i), u128::MAX, ArgSize::Bits512);
        std::fs::write(dir.join(format!("entry-{i}")), bytes).unwrap();
    }

    let mut child = Command::new(bin_path())
        .arg(&dir)
        .env_remove("RUST_LOG")
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .unwrap();
    drop(child.stdout.take());
    let out = child.wait_with_output().unwrap();

    assert!(out.status.success(), "stderr: {}", String::from_utf8_lossy(&out.stderr));
    assert!(!String::from_utf8_lossy(&out.stderr).contains("error:"));
    std::fs::remove_dir_all(&dir).unwrap();
}
