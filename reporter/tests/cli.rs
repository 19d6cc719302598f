use assert_cmd::cargo::cargo_bin_cmd;
use assert_cmd::Command;
use predicates::str::contains;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

const HEADER: &str = "name,position,completed_tasks,performance,skills,team,experience_years";

/// Binary run inside `dir` with a clean environment.
fn cmd(dir: &TempDir) -> Command {
    let mut cmd = cargo_bin_cmd!("staff-report");
    cmd.env_clear().current_dir(dir.path());
    cmd
}

fn write_csv(dir: &Path, name: &str, rows: &[&str]) -> PathBuf {
    let path = dir.join(name);
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).expect("create parent");
    }
    let mut content = String::from(HEADER);
    for row in rows {
        content.push('\n');
        content.push_str(row);
    }
    content.push('\n');
    fs::write(&path, content).expect("write csv");
    path
}

fn team_csv(dir: &TempDir) -> PathBuf {
    write_csv(dir.path(), "employees.csv", &[
        "Alex Ivanov,Backend Developer,45,4.8,\"Python, Django, PostgreSQL\",API Team,5",
        "Maria Petrova,Frontend Developer,38,4.5,\"React, TypeScript\",Web Team,3",
        "John Smith,Data Scientist,29,4.6,\"Python, SQL\",AI Team,4",
        "Anna Lee,Frontend Developer,41,4.3,\"React, CSS\",Web Team,2",
    ])
}

fn stdout_of(cmd: &mut Command) -> String {
    let output = cmd.assert().success().get_output().stdout.clone();
    String::from_utf8(output).expect("utf-8 stdout")
}

#[test]
fn performance_report_sorted_descending() {
    let dir = TempDir::new().expect("temp dir");
    let csv = team_csv(&dir);

    let stdout = stdout_of(cmd(&dir).arg("--files").arg(&csv).args(["--report", "performance"]));

    let backend = stdout.find("Backend Developer").expect("backend row");
    let data = stdout.find("Data Scientist").expect("data row");
    let frontend = stdout.find("Frontend Developer").expect("frontend row");
    assert!(backend < data && data < frontend);
    assert!(stdout.contains("4.8"));
    assert!(stdout.contains("4.4"));
    assert!(stdout.contains("Avg performance"));
}

#[test]
fn ascending_order_from_env_file() {
    let dir = TempDir::new().expect("temp dir");
    let csv = team_csv(&dir);
    fs::write(dir.path().join("report.env"), "SORT_ORDER=asc\nTABLE_FORMAT=github\n").expect("env file");

    let stdout = stdout_of(
        cmd(&dir)
            .arg("--files")
            .arg(&csv)
            .args(["--report", "performance", "--env-file", "report.env"]),
    );

    assert!(stdout.starts_with("| #"));
    let backend = stdout.find("Backend Developer").expect("backend row");
    let frontend = stdout.find("Frontend Developer").expect("frontend row");
    assert!(frontend < backend);
}

#[test]
fn skills_report_from_folder() {
    let dir = TempDir::new().expect("temp dir");
    write_csv(&dir.path().join("data"), "a.csv", &[
        "Alex Ivanov,Backend Developer,45,4.8,\"Python, Django\",API Team,5",
    ]);
    write_csv(&dir.path().join("data/nested"), "b.csv", &[
        "John Smith,Data Scientist,29,4.6,\"Python, SQL, Pandas\",AI Team,4",
    ]);

    cmd(&dir)
        .args(["--folder", "data", "--report", "skills"])
        .assert()
        .success()
        .stdout(contains("=== EMPLOYEE SKILLS REPORT ==="))
        .stdout(contains("Python"))
        .stdout(contains("Alex Ivanov, John Smith"))
        .stdout(contains("Pandas"));
}

#[test]
fn default_env_file_in_working_directory() {
    let dir = TempDir::new().expect("temp dir");
    write_csv(&dir.path().join("exports"), "team.csv", &[
        "Alex Ivanov,Backend Developer,45,4.8,Python,API Team,5",
    ]);
    fs::write(
        dir.path().join(".env"),
        "CSV_FOLDER_PATH=exports\nAUTO_DISCOVER_FOLDER=true\nDEFAULT_REPORT_TYPE=performance\n",
    )
    .expect("env file");

    cmd(&dir)
        .assert()
        .success()
        .stdout(contains("Backend Developer"));
}

#[test]
fn log_level_from_env_file() {
    let dir = TempDir::new().expect("temp dir");
    let csv = team_csv(&dir);
    fs::write(dir.path().join(".env"), "RUST_LOG=staff_reporter=info\n").expect("env file");

    cmd(&dir)
        .arg("--files")
        .arg(&csv)
        .args(["--report", "performance"])
        .assert()
        .success()
        .stderr(contains("dataset loaded"));
}

#[test]
fn unknown_table_format_warns_and_falls_back() {
    let dir = TempDir::new().expect("temp dir");
    let csv = team_csv(&dir);

    cmd(&dir)
        .env("TABLE_FORMAT", "fancy_outline")
        .arg("--files")
        .arg(&csv)
        .args(["--report", "performance"])
        .assert()
        .success()
        .stdout(contains("+---"))
        .stderr(contains("unknown TABLE_FORMAT"));
}

#[test]
fn missing_file_exits_one() {
    let dir = TempDir::new().expect("temp dir");

    cmd(&dir)
        .args(["--files", "absent.csv", "--report", "performance"])
        .assert()
        .code(1)
        .stdout("")
        .stderr(contains("absent.csv"));
}

#[test]
fn invalid_row_exits_one_naming_field() {
    let dir = TempDir::new().expect("temp dir");
    let csv = write_csv(dir.path(), "bad.csv", &[
        "Alex Ivanov,Backend Developer,45,4.8,Python,API Team,5",
        "  ,Frontend Developer,38,4.5,React,Web Team,3",
    ]);

    cmd(&dir)
        .arg("--files")
        .arg(&csv)
        .args(["--report", "performance"])
        .assert()
        .code(1)
        .stdout("")
        .stderr(contains("row 2"))
        .stderr(contains("name"));
}

#[test]
fn out_of_range_performance_exits_one() {
    let dir = TempDir::new().expect("temp dir");
    let csv = write_csv(dir.path(), "bad.csv", &[
        "Alex Ivanov,Backend Developer,45,5.5,Python,API Team,5",
    ]);

    cmd(&dir)
        .arg("--files")
        .arg(&csv)
        .args(["--report", "performance"])
        .assert()
        .code(1)
        .stderr(contains("performance"));
}

#[test]
fn header_only_input_exits_one() {
    let dir = TempDir::new().expect("temp dir");
    let csv = write_csv(dir.path(), "empty.csv", &[]);

    cmd(&dir)
        .arg("--files")
        .arg(&csv)
        .args(["--report", "skills"])
        .assert()
        .code(1)
        .stderr(contains("no data"));
}

#[test]
fn unknown_report_type_exits_two() {
    let dir = TempDir::new().expect("temp dir");
    let csv = team_csv(&dir);

    cmd(&dir)
        .arg("--files")
        .arg(&csv)
        .args(["--report", "payroll"])
        .assert()
        .code(2);
}

#[test]
fn unknown_default_report_type_exits_two() {
    let dir = TempDir::new().expect("temp dir");
    let csv = team_csv(&dir);

    cmd(&dir)
        .env("DEFAULT_REPORT_TYPE", "payroll")
        .arg("--files")
        .arg(&csv)
        .assert()
        .code(2)
        .stderr(contains("payroll"));
}

#[test]
fn files_and_folder_are_exclusive() {
    let dir = TempDir::new().expect("temp dir");
    let csv = team_csv(&dir);

    cmd(&dir)
        .arg("--files")
        .arg(&csv)
        .args(["--folder", ".", "--report", "performance"])
        .assert()
        .code(2);
}

#[test]
fn no_input_is_usage_error() {
    let dir = TempDir::new().expect("temp dir");

    cmd(&dir)
        .args(["--report", "performance"])
        .assert()
        .code(2)
        .stderr(contains("--files"));
}

#[test]
fn invalid_setting_exits_one() {
    let dir = TempDir::new().expect("temp dir");
    let csv = team_csv(&dir);

    cmd(&dir)
        .env("MIN_EXPERIENCE_YEARS", "three")
        .arg("--files")
        .arg(&csv)
        .args(["--report", "performance"])
        .assert()
        .code(1)
        .stderr(contains("MIN_EXPERIENCE_YEARS"));
}

#[test]
fn show_config_prints_json() {
    let dir = TempDir::new().expect("temp dir");

    let stdout = stdout_of(cmd(&dir).env("MAX_PERFORMANCE", "10").arg("--show-config"));

    let settings: serde_json::Value = serde_json::from_str(&stdout).expect("json settings");
    assert_eq!(settings["max_performance"], 10.0);
    assert_eq!(settings["table_format"], "grid");
    assert_eq!(settings["sort_order"], "desc");
}
