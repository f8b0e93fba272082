use indoc::indoc;
use std::fs;
use std::path::Path;
use std::process::{Command, Output};
use tempfile::TempDir;

fn mroimpact(dir: &Path, args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_mroimpact"))
        .args(args)
        .current_dir(dir)
        .env("NO_COLOR", "1")
        .env_remove("RUST_LOG")
        .output()
        .expect("failed to run mroimpact")
}

fn stdout_json(output: &Output) -> serde_json::Value {
    assert!(
        output.status.success(),
        "command failed: {}",
        String::from_utf8_lossy(&output.stderr)
    );
    serde_json::from_slice(&output.stdout).expect("stdout is not JSON")
}

#[test]
fn test_analyze_json_reference_scenario() {
    let dir = TempDir::new().unwrap();
    let output = mroimpact(
        dir.path(),
        &[
            "analyze",
            "--duration",
            "18",
            "--region",
            "East Asia",
            "--vintage",
            "mid-life",
            "--stakeholder",
            "financier",
            "--format",
            "json",
        ],
    );
    let report = stdout_json(&output);

    let net = report["breakdown"]["net_impact"].as_f64().unwrap();
    assert!((net - 5_994_146.354).abs() < 0.01, "net impact {net}");
    assert_eq!(report["parameters"]["labor_rate_per_hour"], 105.0);
    assert_eq!(report["region"], "East Asia");
    assert_eq!(report["stakeholder"], "Financier");
    assert_eq!(
        report["insights"]["insights"][0]["message"],
        "Operational ROI based on downtime is approximately 76.68%."
    );
    assert_eq!(
        report["chart"]["residual_curve"].as_array().unwrap().len(),
        60
    );
    assert_eq!(
        report["chart"]["cost_slices"].as_array().unwrap().len(),
        5
    );
}

#[test]
fn test_analyze_uses_discovered_config() {
    let dir = TempDir::new().unwrap();
    fs::write(
        dir.path().join(".mroimpact.toml"),
        indoc! {r#"
            [aircraft]
            region = "USA"
            vintage = "Old (15+ yrs)"

            [prediction]
            fixed_duration_days = 12.0
        "#},
    )
    .unwrap();

    let report = stdout_json(&mroimpact(dir.path(), &["analyze", "--format", "json"]));
    assert_eq!(report["parameters"]["duration_days"], 12.0);
    assert_eq!(report["parameters"]["labor_rate_per_hour"], 130.0);
    assert_eq!(report["parameters"]["vintage"], "Old (15+ yrs)");
}

#[test]
fn test_unknown_region_flag_uses_default_labor_rate() {
    let dir = TempDir::new().unwrap();
    let report = stdout_json(&mroimpact(
        dir.path(),
        &["analyze", "--region", "Mars", "--format", "json"],
    ));
    assert_eq!(report["parameters"]["labor_rate_per_hour"], 100.0);
    assert_eq!(report["region"], "Mars");
}

#[test]
fn test_unknown_region_in_config_keeps_rest_of_file() {
    let dir = TempDir::new().unwrap();
    fs::write(
        dir.path().join(".mroimpact.toml"),
        indoc! {r#"
            [aircraft]
            region = "Mars"

            [financial]
            lease_rate_monthly = 42000.0
        "#},
    )
    .unwrap();

    let report = stdout_json(&mroimpact(dir.path(), &["analyze", "--format", "json"]));
    assert_eq!(report["parameters"]["labor_rate_per_hour"], 100.0);
    assert_eq!(report["parameters"]["lease_rate_monthly"], 42000.0);
    assert_eq!(report["region"], "Mars");
}

#[test]
fn test_redirected_diagnostics_have_no_ansi_escapes() {
    let dir = TempDir::new().unwrap();
    fs::write(
        dir.path().join(".mroimpact.toml"),
        "[financial]\nlease_rate_monthly = -1.0\n",
    )
    .unwrap();

    let output = mroimpact(dir.path(), &["analyze", "--format", "json"]);
    assert!(output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Using defaults"), "stderr: {stderr}");
    assert!(!stderr.contains('\u{1b}'));
}

#[test]
fn test_analyze_writes_markdown_file() {
    let dir = TempDir::new().unwrap();
    let output = mroimpact(
        dir.path(),
        &[
            "analyze",
            "--duration",
            "18",
            "--format",
            "markdown",
            "--output",
            "report.md",
        ],
    );
    assert!(output.status.success());
    let markdown = fs::read_to_string(dir.path().join("report.md")).unwrap();
    assert!(markdown.contains("| Lease Cost | $21,000 |"));
}

#[test]
fn test_unknown_stakeholder_fails_without_output() {
    let dir = TempDir::new().unwrap();
    let output = mroimpact(
        dir.path(),
        &["analyze", "--stakeholder", "regulator", "--format", "json"],
    );
    assert!(!output.status.success());
    assert!(output.stdout.is_empty());
    assert!(String::from_utf8_lossy(&output.stderr).contains("regulator"));
}

#[test]
fn test_undefined_ratio_fails_without_partial_report() {
    let dir = TempDir::new().unwrap();
    let output = mroimpact(
        dir.path(),
        &[
            "analyze",
            "--duration",
            "0",
            "--stakeholder",
            "mro-provider",
            "--output",
            "report.json",
            "--format",
            "json",
        ],
    );
    assert!(!output.status.success());
    assert!(output.stdout.is_empty());
    assert!(!dir.path().join("report.json").exists());
}

#[test]
fn test_explicit_invalid_config_is_an_error() {
    let dir = TempDir::new().unwrap();
    fs::write(
        dir.path().join("bad.toml"),
        "[financial]\nlease_rate_monthly = -5.0\n",
    )
    .unwrap();
    let output = mroimpact(dir.path(), &["analyze", "--config", "bad.toml"]);
    assert!(!output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr).contains("lease_rate_monthly"));
}

#[test]
fn test_curve_json_has_requested_days() {
    let dir = TempDir::new().unwrap();
    let curve = stdout_json(&mroimpact(
        dir.path(),
        &["curve", "--vintage", "new", "--days", "30", "--format", "json"],
    ));
    let points = curve["points"].as_array().unwrap();
    assert_eq!(points.len(), 30);
    assert_eq!(points[0]["day"], 0);
    assert_eq!(points[0]["residual_loss"], 0.0);
    assert_eq!(curve["vintage"], "New (0–5 yrs)");
}

#[test]
fn test_benchmarks_json() {
    let dir = TempDir::new().unwrap();
    let benchmarks = stdout_json(&mroimpact(dir.path(), &["benchmarks", "--format", "json"]));
    let days: Vec<u64> = benchmarks
        .as_array()
        .unwrap()
        .iter()
        .map(|b| b["avg_tat_days"].as_u64().unwrap())
        .collect();
    assert_eq!(days, vec![14, 18, 22, 19]);
}

#[test]
fn test_init_creates_config_once() {
    let dir = TempDir::new().unwrap();
    let output = mroimpact(dir.path(), &["init"]);
    assert!(output.status.success());
    assert!(dir.path().join(".mroimpact.toml").exists());

    let output = mroimpact(dir.path(), &["init"]);
    assert!(!output.status.success());

    let output = mroimpact(dir.path(), &["init", "--force"]);
    assert!(output.status.success());
}
