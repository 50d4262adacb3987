use std::path::{Path, PathBuf};
use std::process::Command;

fn fixture(name: &str) -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("tests/fixtures")
        .join(name)
}

fn run_in(dir: &Path, fixture_name: &str) -> (String, String, bool) {
    let output = Command::new(env!("CARGO_BIN_EXE_pizza-bill"))
        .arg(fixture(fixture_name))
        .current_dir(dir)
        .env("RUST_LOG", "warn")
        .output()
        .expect("failed to run binary");

    let stdout = String::from_utf8_lossy(&output.stdout).to_string();
    let stderr = String::from_utf8_lossy(&output.stderr).to_string();
    (stdout, stderr, output.status.success())
}

fn run(fixture_name: &str) -> (String, String, bool) {
    run_in(Path::new(env!("CARGO_MANIFEST_DIR")), fixture_name)
}

#[test]
fn valid_order() {
    let (stdout, stderr, success) = run("order.csv");

    assert!(success);
    assert!(stderr.is_empty());
    assert_eq!(
        stdout,
        "Current Order:\n\
         --------------------\n\
         Margherita (x2)\n\
         Pepperoni (x1)\n\
         Detailed Bill:\n\
         --------------------\n\
         Margherita (x2): ₹1900.00\n\
         Pepperoni (x1): ₹1100.00\n\
         --------------------\n\
         Total Bill: ₹3000.00\n"
    );
}

#[test]
fn errors_warn_but_do_not_block() {
    let dir = tempfile::tempdir().unwrap();
    let (stdout, stderr, success) = run_in(dir.path(), "with_errors.csv");

    assert!(success);
    assert!(stderr.contains("invalid quantity 'three'"));
    assert!(stderr.contains("unrecognized action"));
    assert!(stderr.contains("unknown pizza 'Hawaiian'"));
    assert!(stderr.contains("invalid quantity '0'"));
    assert!(stderr.contains("nothing to export"));

    assert!(stdout.contains("Veggie (x2): ₹1200.00\n"));
    assert!(stdout.ends_with("Total Bill: ₹1200.00\n"));
    assert_eq!(std::fs::read_dir(dir.path()).unwrap().count(), 0);
}

#[test]
fn save_writes_invoice() {
    let dir = tempfile::tempdir().unwrap();
    let (stdout, stderr, success) = run_in(dir.path(), "save.csv");

    assert!(success);
    assert!(stderr.is_empty());
    assert!(stdout.contains("Bill saved successfully to: receipt.txt"));

    let content = std::fs::read_to_string(dir.path().join("receipt.txt")).unwrap();
    assert!(content.starts_with("===================================\n       PIZZERIA PRO - INVOICE"));
    assert!(content.contains("Meat Lovers (x1): ₹1500.00\n"));
    assert!(content.contains("Veggie (x1): ₹900.00\n"));
    assert!(content.contains("Total Bill: ₹2400.00\n\n"));
    assert!(content.ends_with("THANK YOU FOR YOUR ORDER!    \n===================================\n"));
}

#[test]
fn missing_script_fails() {
    let (_, stderr, success) = run("does_not_exist.csv");

    assert!(!success);
    assert!(stderr.contains("failed to open script"));
}
