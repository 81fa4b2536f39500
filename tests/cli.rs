//! Integration tests for the `hubdigest` binary.

use std::path::Path;

use assert_cmd::Command;
use assert_cmd::cargo;
use tempfile::TempDir;

const REGION: &str = "us-east-1";

fn hubdigest_cmd() -> Command {
    let mut cmd = Command::new(cargo::cargo_bin!("hubdigest"));
    for var in ["AdditionalEmailFooterText", "SNSTopic"] {
        cmd.env_remove(var);
    }
    for n in 1..=7 {
        cmd.env_remove(format!("ARNInsight{n:02}"));
    }
    cmd
}

fn insight_arn(n: usize) -> String {
    format!("arn:aws:securityhub:{REGION}:111122223333:insight/111122223333/custom/{n}")
}

/// Captured responses for the seven standard insights
fn write_results(dir: &Path) -> std::path::PathBuf {
    let mut responses = Vec::new();
    for n in 1..=7 {
        let values = match n {
            1 => r#"[{"GroupByAttributeValue": "PASSED", "Count": 41}, {"GroupByAttributeValue": "FAILED", "Count": 9}]"#.to_string(),
            5 => r#"[{"GroupByAttributeValue": "LOW", "Count": 5}, {"GroupByAttributeValue": "HIGH", "Count": 2}]"#.to_string(),
            6 => "[]".to_string(),
            7 => {
                let rows: Vec<String> = (0..12)
                    .map(|i| format!(r#"{{"GroupByAttributeValue": "AwsType{i}", "Count": {}}}"#, 100 - i))
                    .collect();
                format!("[{}]", rows.join(","))
            }
            _ => r#"[{"GroupByAttributeValue": "MEDIUM", "Count": 1}]"#.to_string(),
        };
        responses.push(format!(
            r#"{{"InsightResults": {{"InsightArn": "{}", "GroupByAttribute": "SeverityLabel", "ResultValues": {}}}}}"#,
            insight_arn(n),
            values
        ));
    }

    let path = dir.join("results.json");
    std::fs::write(&path, format!("[{}]", responses.join(","))).unwrap();
    path
}

fn write_config(dir: &Path) -> std::path::PathBuf {
    let ids: Vec<String> = (1..=7).map(|n| format!("\"{}\"", insight_arn(n))).collect();
    let path = dir.join("digest.toml");
    std::fs::write(
        &path,
        format!(
            "footer_text = \"Contact the security team.\"\ndestination = \"arn:aws:sns:{REGION}:111122223333:weekly\"\nsection_identifiers = [{}]\n",
            ids.join(", ")
        ),
    )
    .unwrap();
    path
}

#[test]
fn render_prints_full_digest() {
    let td = TempDir::new().expect("temp");
    let results = write_results(td.path());
    let config = write_config(td.path());

    let output = hubdigest_cmd()
        .current_dir(td.path())
        .arg("render")
        .arg("--results")
        .arg(&results)
        .arg("--config")
        .arg(&config)
        .output()
        .unwrap();

    assert!(output.status.success(), "stderr: {}", String::from_utf8_lossy(&output.stderr));
    let stdout = String::from_utf8(output.stdout).unwrap();

    assert!(stdout.starts_with(&format!("{}\nWeekly Security Hub Report \n", "=".repeat(48))));
    assert!(stdout.contains("41\t - \tTOTAL PASSED CHECKS\n9\t - \tTOTAL FAILED CHECKS\n"));
    // Unresolved findings by severity is reversed
    assert!(stdout.contains("Unresolved findings by severity:\n"));
    assert!(stdout.contains("2\t - \tHIGH\n5\t - \tLOW\n"));
    assert!(stdout.contains("New findings in the last 7 days:\n"));
    assert!(stdout.contains("NO RESULTS \n"));
    assert!(stdout.contains("AwsType9\n"));
    assert!(!stdout.contains("AwsType10"));
    assert!(stdout.contains(&format!(
        "https://{REGION}.console.aws.amazon.com/securityhub/home?region={REGION}#/insights/{}",
        insight_arn(7)
    )));
    assert!(stdout.contains("Contact the security team.\n"));
    assert!(stdout.ends_with("https://console.aws.amazon.com/securityhub/home/standards#/standards"));
}

#[test]
fn render_stdout_matches_file_output() {
    let td = TempDir::new().expect("temp");
    let results = write_results(td.path());
    let config = write_config(td.path());
    let out = td.path().join("digest.txt");

    let output = hubdigest_cmd()
        .current_dir(td.path())
        .args(["render", "--results"])
        .arg(&results)
        .arg("--config")
        .arg(&config)
        .output()
        .unwrap();
    assert!(output.status.success());

    hubdigest_cmd()
        .current_dir(td.path())
        .args(["render", "--results"])
        .arg(&results)
        .arg("--config")
        .arg(&config)
        .arg("--out")
        .arg(&out)
        .assert()
        .success();

    let written = std::fs::read(&out).unwrap();
    assert_eq!(output.stdout, written);
}

#[test]
fn publish_to_stdout_emits_exactly_the_document() {
    let td = TempDir::new().expect("temp");
    let results = write_results(td.path());
    let config = write_config(td.path());
    let out = td.path().join("digest.txt");

    let published = hubdigest_cmd()
        .current_dir(td.path())
        .args(["publish", "--results"])
        .arg(&results)
        .arg("--config")
        .arg(&config)
        .output()
        .unwrap();
    assert!(published.status.success());

    hubdigest_cmd()
        .current_dir(td.path())
        .args(["render", "--results"])
        .arg(&results)
        .arg("--config")
        .arg(&config)
        .arg("--out")
        .arg(&out)
        .assert()
        .success();

    assert_eq!(published.stdout, std::fs::read(&out).unwrap());
}

#[test]
fn broken_discovered_config_fails_instead_of_using_environment() {
    let td = TempDir::new().expect("temp");
    let results = write_results(td.path());
    let outbox = td.path().join("outbox.txt");
    std::fs::write(td.path().join(".hubdigest.toml"), "destination = ").unwrap();

    let mut cmd = hubdigest_cmd();
    cmd.current_dir(td.path())
        .env("AdditionalEmailFooterText", "FROM ENV")
        .env("SNSTopic", format!("arn:aws:sns:{REGION}:111122223333:weekly"));
    for n in 1..=7 {
        cmd.env(format!("ARNInsight{n:02}"), insight_arn(n));
    }
    cmd.arg("publish")
        .arg("--results")
        .arg(&results)
        .arg("--outbox")
        .arg(&outbox);

    let output = cmd.output().unwrap();
    assert!(!output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr).contains(".hubdigest.toml"));
    assert!(!outbox.exists(), "nothing should be published");
}

#[test]
fn publish_reads_environment_and_writes_outbox() {
    let td = TempDir::new().expect("temp");
    let results = write_results(td.path());
    let outbox = td.path().join("outbox.txt");

    let mut cmd = hubdigest_cmd();
    cmd.current_dir(td.path())
        .env("AdditionalEmailFooterText", "From the environment.")
        .env("SNSTopic", format!("arn:aws:sns:{REGION}:111122223333:weekly"));
    for n in 1..=7 {
        cmd.env(format!("ARNInsight{n:02}"), insight_arn(n));
    }
    cmd.arg("publish")
        .arg("--results")
        .arg(&results)
        .arg("--outbox")
        .arg(&outbox);

    cmd.assert().success();

    let body = std::fs::read_to_string(&outbox).unwrap();
    assert!(body.contains("From the environment.\n"));
    assert_eq!(body.matches("console.aws.amazon.com/securityhub/home?region=").count(), 7);
}

#[test]
fn publish_fails_without_configuration() {
    let td = TempDir::new().expect("temp");
    let results = write_results(td.path());
    let outbox = td.path().join("outbox.txt");

    hubdigest_cmd()
        .current_dir(td.path())
        .arg("publish")
        .arg("--results")
        .arg(&results)
        .arg("--outbox")
        .arg(&outbox)
        .assert()
        .failure();

    assert!(!outbox.exists(), "nothing should be published");
}

#[test]
fn publish_fails_on_unknown_insight() {
    let td = TempDir::new().expect("temp");
    let config = write_config(td.path());
    let results = td.path().join("partial.json");
    std::fs::write(&results, "[]").unwrap();
    let outbox = td.path().join("outbox.txt");

    hubdigest_cmd()
        .current_dir(td.path())
        .arg("publish")
        .arg("--results")
        .arg(&results)
        .arg("--config")
        .arg(&config)
        .arg("--outbox")
        .arg(&outbox)
        .assert()
        .failure();

    assert!(!outbox.exists(), "nothing should be published");
}

#[test]
fn init_creates_default_config() {
    let td = TempDir::new().expect("temp");

    hubdigest_cmd().current_dir(td.path()).arg("init").assert().success();

    let content = std::fs::read_to_string(td.path().join(".hubdigest.toml")).unwrap();
    assert!(content.contains("section_identifiers"));
    assert!(content.contains("destination"));
}

#[test]
fn list_sections_uses_discovered_config() {
    let td = TempDir::new().expect("temp");
    hubdigest_cmd().current_dir(td.path()).arg("init").assert().success();

    let output = hubdigest_cmd()
        .current_dir(td.path())
        .arg("list-sections")
        .output()
        .unwrap();

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("GuardDuty threat detection findings by severity:"));
    assert!(stdout.contains("7 sections"));
}
