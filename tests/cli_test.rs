use std::process::{Command, Output};

fn run(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_lab-product"))
        .args(args)
        .env_remove("RUST_LOG")
        .output()
        .expect("failed to launch lab-product")
}

fn assert_prints(args: &[&str], expected: &str) {
    let output = run(args);
    assert!(output.status.success(), "{:?} exited with {:?}", args, output.status);
    assert_eq!(String::from_utf8_lossy(&output.stdout), expected);
}

fn assert_rejected(args: &[&str]) -> Output {
    let output = run(args);
    assert!(!output.status.success(), "{:?} should fail", args);
    assert!(output.stdout.is_empty(), "{:?} wrote to stdout", args);
    assert!(!output.stderr.is_empty(), "{:?} gave no diagnostic", args);
    output
}

#[test]
fn test_integer_product() {
    assert_prints(&["2", "2"], "4\n");
    assert_prints(&["-3", "7"], "-21\n");
    assert_prints(&["0", "-5"], "0\n");
}

#[test]
fn test_float_product() {
    assert_prints(&["2.5", "4"], "10.0\n");
    assert_prints(&["-.5", "-.5"], "0.25\n");
    assert_prints(&["1e10", "1e10"], "1e+20\n");
    assert_prints(&["0.1", "0.2"], "0.020000000000000004\n");
}

#[test]
fn test_large_integers_stay_exact() {
    assert_prints(
        &["9223372036854775807", "9223372036854775807"],
        "85070591730234615847396907784232501249\n",
    );
}

#[test]
fn test_wrong_argument_count() {
    for args in [&[][..], &["2"][..], &["1", "2", "3"][..]] {
        let output = assert_rejected(args);
        assert_eq!(output.status.code(), Some(2));
    }
}

#[test]
fn test_non_numeric_argument() {
    let output = assert_rejected(&["abc", "2"]);
    assert_eq!(output.status.code(), Some(1));
    assert!(String::from_utf8_lossy(&output.stderr).contains("abc"));

    assert_rejected(&["2", "nan"]);
}

#[test]
fn test_flag_shaped_arguments_are_counted_as_operands() {
    for args in [
        &["-h"][..],
        &["--help"][..],
        &["--version"][..],
        &["-v", "3", "3"][..],
        &["-v", "-5", "-2"][..],
        &["--log-format", "json", "2", "2"][..],
        &["--", "2", "2"][..],
    ] {
        let output = assert_rejected(args);
        assert_eq!(output.status.code(), Some(2), "{:?}", args);
    }
}

#[test]
fn test_flag_shaped_pair_is_a_parse_error() {
    let output = assert_rejected(&["-h", "2"]);
    assert_eq!(output.status.code(), Some(1));
}

#[test]
fn test_debug_diagnostics_stay_off_stdout() {
    let output = Command::new(env!("CARGO_BIN_EXE_lab-product"))
        .args(["3", "3"])
        .env("RUST_LOG", "lab_product=debug")
        .output()
        .expect("failed to launch lab-product");

    assert!(output.status.success());
    assert_eq!(String::from_utf8_lossy(&output.stdout), "9\n");
    assert!(String::from_utf8_lossy(&output.stderr).contains("Computed product"));
}

#[test]
fn test_successful_run_is_silent_on_stderr() {
    let output = run(&["2", "2"]);
    assert!(output.stderr.is_empty());
}

#[test]
fn test_repeated_runs_are_identical() {
    let first = run(&["2.5", "4"]);
    let second = run(&["2.5", "4"]);
    assert_eq!(first.stdout, second.stdout);
    assert_eq!(first.status.code(), second.status.code());
}
