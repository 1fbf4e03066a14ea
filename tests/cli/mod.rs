//! # Command line
//!
//! Runs the binary built for the integration tests.
use std::path::Path;
use std::process::{Command, Output};

fn run(arguments: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_northwest-corner"))
        .args(arguments)
        .output()
        .unwrap()
}

fn example_file() -> String {
    Path::new(file!()).parent().unwrap()
        .parent().unwrap()
        .join("import")
        .join("problem_files")
        .join("example.tp")
        .to_string_lossy()
        .to_string()
}

#[test]
fn built_in_example() {
    let output = run(&["--quiet"]);

    assert!(output.status.success());
    assert_eq!(String::from_utf8_lossy(&output.stdout), "255\n");
}

#[test]
fn problem_file_with_steps() {
    let path = example_file();
    let output = run(&[path.as_str(), "--steps"]);
    let stdout = String::from_utf8_lossy(&output.stdout);

    assert!(output.status.success());
    assert!(stdout.starts_with("Step 1: Allocate 15 units to cell (1, 1)\n"));
    assert!(stdout.contains("Step 5: Allocate 25 units to cell (3, 3)\n"));
    assert!(stdout.ends_with("Total cost: 255\n"));
}

#[test]
fn unbalanced_problem_fails() {
    let path = Path::new(&example_file()).with_file_name("unbalanced.tp");
    let path = path.to_string_lossy();
    let output = run(&[&*path]);

    assert!(!output.status.success());
    assert_eq!(
        String::from_utf8_lossy(&output.stderr),
        "The total supply (10) must equal the total demand (11)\n",
    );
}
