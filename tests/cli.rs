use std::io::Write;
use std::process::{Command, Stdio};

fn run_with_input(args: &[&str], input: &str) -> std::process::Output {
    let exe = env!("CARGO_BIN_EXE_laddersnake");
    let mut child = Command::new(exe)
        .args(args)
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .expect("spawn cli");
    child
        .stdin
        .take()
        .expect("stdin")
        .write_all(input.as_bytes())
        .expect("write stdin");
    child.wait_with_output().expect("run cli")
}

#[test]
fn cli_plays_a_seeded_game_to_the_end() {
    let input = format!("2\n1\n{}", "\n".repeat(5000));
    let output = run_with_input(&["--seed", "7", "--frames", "0", "--no-color"], &input);
    assert!(output.status.success());

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Welcome to Snake and Ladder Game!"));
    assert!(stdout.contains("Board:"));
    assert!(stdout.contains("Congratulations! Player"));
    assert!(!stdout.contains('\u{1b}'));
}

#[test]
fn cli_flags_skip_setup_prompts() {
    let input = "\n".repeat(5000);
    let output = run_with_input(
        &["-p", "4", "-d", "3", "--seed", "1", "--frames", "0", "--no-color"],
        &input,
    );
    assert!(output.status.success());

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(!stdout.contains("Enter the number of players"));
    assert!(stdout.contains("Player 4's turn."));
}

#[test]
fn cli_fails_when_input_closes() {
    let output = run_with_input(&["--frames", "0"], "9\n");
    assert!(!output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr).contains("input closed"));
}

#[test]
fn cli_logs_seed_when_verbose() {
    let input = "\n".repeat(5000);
    let output = run_with_input(
        &["-p", "2", "-d", "1", "--seed", "42", "--frames", "0", "--no-color", "-v"],
        &input,
    );
    assert!(output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("seed=42"));
    assert!(!String::from_utf8_lossy(&output.stdout).contains("seed=42"));
}
