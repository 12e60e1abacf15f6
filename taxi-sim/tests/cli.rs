//! Integration tests for the taxisim binary.

use std::fs;

use assert_cmd::{cargo::cargo_bin_cmd, Command};
use predicates::prelude::*;
use tempfile::tempdir;

const SCENARIO: &str = "\
6
0 1 2 2 4 3 3
1 3 1 0 2
2 0 4 4 1
3 4 3 1 1
4 2 1
5
2
0 4
3
1 3 5
";

const REPORT: &str = "\
client 1
taxi 0
0 1
shop 0
1 0
client 3
taxi 0
multiple solutions cost 3
shop 0
3 1 0
shop 4
3 4
client 5
cannot be helped
";

fn taxisim() -> Command {
    cargo_bin_cmd!("taxisim")
}

#[test]
fn test_report_from_stdin() {
    taxisim()
        .write_stdin(SCENARIO)
        .assert()
        .success()
        .stdout(REPORT);
}

#[test]
fn test_report_from_file() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("scenario.txt");
    fs::write(&path, SCENARIO).unwrap();

    taxisim()
        .arg("--input")
        .arg(&path)
        .assert()
        .success()
        .stdout(REPORT);
}

#[test]
fn test_repeated_runs_are_identical() {
    let first = taxisim().write_stdin(SCENARIO).output().unwrap();
    let second = taxisim().write_stdin(SCENARIO).output().unwrap();
    assert_eq!(first.stdout, second.stdout);
}

#[test]
fn test_rounding_ties_need_tolerance() {
    let scenario = "4\nS X 0.1 Y 0.3\nX C 0.2\nY C 0\nC S 1\n1\nS\n1\nC\n";

    taxisim()
        .write_stdin(scenario)
        .assert()
        .success()
        .stdout("client C\ntaxi S\nS Y C\nshop S\nC S\n");

    taxisim()
        .args(["--tolerance", "1e-9"])
        .write_stdin(scenario)
        .assert()
        .success()
        .stdout("client C\ntaxi S\nmultiple solutions cost 0\nshop S\nC S\n");
}

#[test]
fn test_bad_input() {
    taxisim()
        .write_stdin("2\nA B -1\n")
        .assert()
        .failure()
        .stdout("")
        .stderr(predicate::str::contains("Error: Line 2: Invalid edge A -> B"));

    taxisim()
        .write_stdin("1\nA B 1\n")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Unexpected end of input, expected shop count"));
}

#[test]
fn test_bad_tolerance() {
    taxisim()
        .arg("--tolerance=-1")
        .write_stdin(SCENARIO)
        .assert()
        .failure()
        .stderr(predicate::str::contains("bad cost tolerance"));
}

#[test]
fn test_missing_input_file() {
    let dir = tempdir().unwrap();
    taxisim()
        .arg("--input")
        .arg(dir.path().join("nope.txt"))
        .assert()
        .failure()
        .stderr(predicate::str::contains("can't read"));
}
