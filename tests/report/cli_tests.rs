use std::fs;
use std::io::{BufRead, BufReader};
use std::path::Path;
use std::process::{Command, Output, Stdio};

use pretty_assertions::assert_eq;
use tempfile::tempdir;

const SCENARIO: &str = r#"{
  "cardCount": 200,
  "stats": {
    "totalCards": 200,
    "rarityBreakdown": {"Common": 100, "Rare": 20},
    "manaCurveByColor": {"W": {"1": 5, "2": 8, "3": 4, "4": 2, "5": 1, "6+": 0}}
  }
}"#;

/// Helper to write a statistics file at the conventional location
fn write_set_info(dir: &Path, content: &str) {
    let data_dir = dir.join("src").join("data");
    fs::create_dir_all(&data_dir).expect("Failed to create data directory");
    fs::write(data_dir.join("setInfo.json"), content).expect("Failed to write setInfo.json");
}

fn run_in(dir: &Path, args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_setreport"))
        .args(args)
        .current_dir(dir)
        .env("NO_COLOR", "1")
        .output()
        .expect("Failed to run setreport")
}

fn stdout_of(output: &Output) -> String {
    String::from_utf8(output.stdout.clone()).expect("stdout should be UTF-8")
}

#[test]
fn test_missing_input_prints_single_error_line() {
    let temp_dir = tempdir().expect("Failed to create temp directory");

    let output = run_in(temp_dir.path(), &[]);

    assert!(output.status.success());
    assert_eq!(stdout_of(&output), "Error: src/data/setInfo.json not found.\n");
    assert!(output.stderr.is_empty(), "unexpected stderr output");
}

#[test]
fn test_malformed_input_prints_single_error_line() {
    let temp_dir = tempdir().expect("Failed to create temp directory");
    write_set_info(temp_dir.path(), "{ \"cardCount\": ");

    let output = run_in(temp_dir.path(), &[]);
    let stdout = stdout_of(&output);

    assert!(!output.status.success());
    assert_eq!(stdout.lines().count(), 1, "{stdout}");
    assert!(
        stdout.starts_with("Error: src/data/setInfo.json is not a valid statistics document ("),
        "{stdout}"
    );
}

#[test]
fn test_non_object_input_prints_single_error_line() {
    let temp_dir = tempdir().expect("Failed to create temp directory");
    write_set_info(temp_dir.path(), "[1, 2, 3]");

    let output = run_in(temp_dir.path(), &[]);
    let stdout = stdout_of(&output);

    assert!(!output.status.success());
    assert_eq!(
        stdout,
        "Error: src/data/setInfo.json is not a valid statistics document \
         (expected an object at the top level, found an array).\n"
    );
}

#[test]
fn test_default_input_produces_report() {
    let temp_dir = tempdir().expect("Failed to create temp directory");
    write_set_info(temp_dir.path(), SCENARIO);

    let output = run_in(temp_dir.path(), &[]);
    let stdout = stdout_of(&output);

    assert!(output.status.success());
    assert!(stdout.starts_with("# Enhanced Set Metrics Report\nTotal Cards: 200\n"));
    assert!(stdout.contains("- Common: 100\n- Rare: 20\n"));
    assert!(stdout.contains("| W | 5 | 8 | 4 | 2 | 1 |\n"));
    assert!(stdout.ends_with("| G | 0 | 0 | 0 | 0 | 0 |\n"));
    assert!(output.stderr.is_empty(), "unexpected stderr output");
}

#[test]
fn test_repeated_runs_are_identical() {
    let temp_dir = tempdir().expect("Failed to create temp directory");
    write_set_info(temp_dir.path(), SCENARIO);

    let first = run_in(temp_dir.path(), &[]);
    let second = run_in(temp_dir.path(), &[]);

    assert!(first.status.success());
    assert_eq!(first.stdout, second.stdout);
}

#[test]
fn test_binary_output_matches_library_render() {
    let temp_dir = tempdir().expect("Failed to create temp directory");
    write_set_info(temp_dir.path(), SCENARIO);

    let output = run_in(temp_dir.path(), &[]);
    let document = setreport::StatisticsDocument::from_json(SCENARIO).unwrap();
    let expected = setreport::render(&document, &setreport::ReportOptions::default());

    assert_eq!(stdout_of(&output), expected);
}

#[test]
fn test_input_flag_and_cwd() {
    let temp_dir = tempdir().expect("Failed to create temp directory");
    fs::write(temp_dir.path().join("stats.json"), SCENARIO).expect("Failed to write stats.json");
    let cwd = temp_dir.path().to_string_lossy().to_string();

    let output = run_in(Path::new("."), &["--cwd", &cwd, "--input", "stats.json"]);

    assert!(output.status.success());
    assert!(stdout_of(&output).contains("Total Cards: 200\n"));
}

#[test]
fn test_config_file_sets_input_and_keywords() {
    let temp_dir = tempdir().expect("Failed to create temp directory");
    fs::write(
        temp_dir.path().join("stats.json"),
        r#"{"stats": {"keywords": {"Ward": 3, "Flying": 12}}}"#,
    )
    .expect("Failed to write stats.json");
    fs::write(
        temp_dir.path().join("setreport.toml"),
        "input = \"stats.json\"\nevasion_keywords = [\"Ward\"]\n",
    )
    .expect("Failed to write setreport.toml");

    let output = run_in(temp_dir.path(), &[]);
    let stdout = stdout_of(&output);

    assert!(output.status.success());
    assert!(stdout.contains("- Ward: 3\n"), "{stdout}");
    assert!(!stdout.contains("- Flying"), "{stdout}");
}

#[test]
fn test_keyword_flag_overrides_config() {
    let temp_dir = tempdir().expect("Failed to create temp directory");
    write_set_info(temp_dir.path(), r#"{"stats": {"keywords": {"Ward": 3, "Flying": 12}}}"#);
    fs::write(
        temp_dir.path().join("setreport.toml"),
        "evasion_keywords = [\"Ward\"]\n",
    )
    .expect("Failed to write setreport.toml");

    let output = run_in(temp_dir.path(), &["--evasion-keywords", "Flying,Menace"]);
    let stdout = stdout_of(&output);

    assert!(output.status.success());
    assert!(stdout.contains("- Flying: 12\n- Menace: 0\n"), "{stdout}");
    assert!(!stdout.contains("- Ward"), "{stdout}");
}

#[test]
fn test_closed_stdout_ends_quietly() {
    let temp_dir = tempdir().expect("Failed to create temp directory");
    let rarities: serde_json::Map<String, serde_json::Value> = (0..50_000)
        .map(|i| (format!("Rarity{i}"), serde_json::Value::from(i)))
        .collect();
    let document = serde_json::json!({ "stats": { "rarityBreakdown": rarities } });
    write_set_info(temp_dir.path(), &document.to_string());

    let mut child = Command::new(env!("CARGO_BIN_EXE_setreport"))
        .current_dir(temp_dir.path())
        .env("NO_COLOR", "1")
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .expect("Failed to run setreport");

    let stdout = child.stdout.take().expect("stdout should be piped");
    let mut reader = BufReader::new(stdout);
    let mut first_line = String::new();
    reader
        .read_line(&mut first_line)
        .expect("Failed to read first line");
    drop(reader);

    let output = child.wait_with_output().expect("Failed to wait for setreport");

    assert_eq!(first_line, "# Enhanced Set Metrics Report\n");
    assert!(output.status.success(), "status: {:?}", output.status);
    assert!(
        output.stderr.is_empty(),
        "unexpected stderr output: {}",
        String::from_utf8_lossy(&output.stderr)
    );
}
