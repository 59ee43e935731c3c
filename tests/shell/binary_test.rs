/*!
 * Binary Tests
 * Runs the allocator executable over piped stdin
 */

use pretty_assertions::assert_eq;
use std::io::Write;
use std::process::{Command, Output, Stdio};

const BANNER: &str = "Contiguous Memory Allocator Project\n";

fn run_binary(args: &[&str], stdin: &[u8]) -> Output {
    let mut child = Command::new(env!("CARGO_BIN_EXE_allocator"))
        .args(args)
        .env_remove("ALLOCATOR_MAX_MEMORY")
        .env_remove("ALLOCATOR_TRACE_JSON")
        .env("RUST_LOG", "off")
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .unwrap();

    // The child may exit before reading everything
    let _ = child.stdin.take().unwrap().write_all(stdin);
    child.wait_with_output().unwrap()
}

#[test]
fn test_undecodable_line_does_not_end_session() {
    let output = run_binary(&["100"], b"RQ P\xff 10 F\nRQ P1 10 F\nSTAT\nX\n");

    assert!(output.status.success());
    assert_eq!(
        String::from_utf8(output.stdout).unwrap(),
        format!(
            "{BANNER}\
allocator> Invalid command.
allocator> Allocated 10 bytes to P1 starting at address 0
allocator> Addresses [0: 9] P1
Addresses [10: 99] Unused
allocator> "
        )
    );
}

#[test]
fn test_exit_on_end_of_input() {
    let output = run_binary(&["100"], b"RQ P1 40 B\n");

    assert!(output.status.success());
    assert_eq!(
        String::from_utf8(output.stdout).unwrap(),
        format!(
            "{BANNER}\
allocator> Allocated 40 bytes to P1 starting at address 0
allocator> \n"
        )
    );
}

#[test]
fn test_exit_command_ignores_remaining_input() {
    let output = run_binary(&["100"], b"X\nRQ P1 40 F\n");

    assert!(output.status.success());
    assert_eq!(
        String::from_utf8(output.stdout).unwrap(),
        format!("{BANNER}allocator> ")
    );
}

#[test]
fn test_invalid_startup_size_fails() {
    let output = run_binary(&["0"], b"");

    assert!(!output.status.success());
    assert!(output.stdout.is_empty());
}
