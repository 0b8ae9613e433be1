use std::process::{Command, Output, Stdio};

/// Run the binary with stdout piped, so the terminal backend cannot open.
fn run_binary(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_led-sprite"))
        .args(args)
        .env_remove("RUST_LOG")
        .stdin(Stdio::null())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .output()
        .unwrap()
}

#[test]
fn terminal_init_failure_exits_one_with_single_error_line() {
    let output = run_binary(&["--frames", "1"]);

    assert_eq!(output.status.code(), Some(1));
    assert!(output.stdout.is_empty());

    let stderr = String::from_utf8(output.stderr).unwrap();
    let lines: Vec<&str> = stderr.lines().collect();
    assert_eq!(lines.len(), 1, "stderr: {stderr:?}");
    assert!(lines[0].starts_with("error: display surface failed to initialize"));
    assert!(!stderr.contains("Exiting"));
}

#[cfg(not(feature = "hardware"))]
#[test]
fn matrix_backend_without_hardware_exits_one() {
    let output = run_binary(&["--backend", "matrix"]);

    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8(output.stderr).unwrap();
    assert_eq!(stderr.lines().count(), 1);
    assert!(stderr.contains("requires the `hardware` feature"));
}

#[test]
fn oversized_panel_is_rejected_before_running() {
    let output = run_binary(&["--cols", "65535"]);

    // clap usage errors exit with 2, before any surface is touched.
    assert_eq!(output.status.code(), Some(2));
    assert!(output.stdout.is_empty());
}
