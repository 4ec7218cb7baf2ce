use std::fs;
use std::path::PathBuf;

use assert_cmd::Command;
use predicates::prelude::*;
use predicates::str::contains;
use serde_json::Value;
use tempfile::TempDir;

fn cmd() -> Command {
    Command::cargo_bin("riskgate").unwrap()
}

fn write_file(dir: &TempDir, name: &str, body: &str) -> PathBuf {
    let path = dir.path().join(name);
    fs::write(&path, body).expect("write fixture");
    path
}

fn run_json(args: &[&str]) -> Value {
    let out = cmd()
        .arg("--json")
        .args(args)
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();
    serde_json::from_slice(&out).expect("valid json output")
}

#[test]
fn tier_sample_catalog() {
    cmd()
        .arg("tier")
        .assert()
        .success()
        .stdout(contains("MODEL RISK TIERING"))
        .stdout(contains("Credit Default XGBoost"))
        .stdout(contains("Full validation + bias + XAI + committee approval + annual review"));
}

#[test]
fn tier_json_scores() {
    let tiers = run_json(&["tier"]);
    let rows = tiers.as_array().unwrap();
    assert_eq!(rows.len(), 6);
    assert_eq!(rows[0]["model"], "Credit Default XGBoost");
    assert_eq!(rows[0]["score"], 14);
    assert_eq!(rows[0]["tier"], 1);
    assert_eq!(rows[3]["score"], 6);
    assert_eq!(rows[3]["tier"], 2);
}

#[test]
fn tier_models_file() {
    let dir = TempDir::new().unwrap();
    let models = write_file(
        &dir,
        "models.json",
        r#"[{"model_name": "Chatbot", "decision_impact": "advisory",
             "autonomy_level": "fully_autonomous", "regulatory_exposure": "general",
             "client_facing": true, "financial_impact_usd": 2000000}]"#,
    );
    let tiers = run_json(&["tier", "--models", models.to_str().unwrap()]);
    // 2 + 5 + 1 + 2 + 2
    assert_eq!(tiers[0]["score"], 12);
    assert_eq!(tiers[0]["tier"], 1);
}

#[test]
fn tier_rejects_unknown_enum_value() {
    let dir = TempDir::new().unwrap();
    let models = write_file(
        &dir,
        "models.json",
        r#"[{"name": "X", "decision_impact": "catastrophic", "autonomy_level": "human_executes",
             "regulatory_exposure": "none", "client_facing": false, "financial_impact_usd": 0}]"#,
    );
    cmd()
        .args(["tier", "--models", models.to_str().unwrap()])
        .assert()
        .failure()
        .stderr(contains("catastrophic"));
}

#[test]
fn checklist_sample_model() {
    cmd()
        .args(["checklist", "--model", "Credit Default XGBoost"])
        .assert()
        .success()
        .stdout(contains("Score: 20.5/22 (93%) Grade: A"))
        .stdout(contains("GAPS TO ADDRESS (2):"))
        .stdout(contains("PILLAR COVERAGE"))
        .stdout(contains("DEPLOYMENT DECISION: Deployable with controls"));
}

#[test]
fn checklist_guardrail_blocks_trading_agent() {
    cmd()
        .args(["checklist", "--model", "Trading RL Agent"])
        .assert()
        .success()
        .stdout(contains("BLOCKED pending remediation (guardrail triggered)"))
        .stdout(contains("HARD STOP: Q2"));
}

#[test]
fn checklist_answers_file_and_override() {
    let dir = TempDir::new().unwrap();
    let answers = write_file(
        &dir,
        "answers.json",
        r#"{"1": "yes", "2": "no", "3": "yes", "4": "yes", "5": "yes",
            "6": "yes", "7": "yes", "8": "yes", "9": "yes", "10": "yes"}"#,
    );
    let out = run_json(&[
        "checklist",
        "--model",
        "Credit Default XGBoost",
        "--answers",
        answers.to_str().unwrap(),
    ]);
    assert_eq!(out["outcome"]["decision"], "blocked_by_guardrail");

    let out = run_json(&[
        "checklist",
        "--model",
        "Credit Default XGBoost",
        "--answers",
        answers.to_str().unwrap(),
        "--answer",
        "2=yes",
    ]);
    assert_eq!(out["checklist"]["raw_score"], 22.0);
    assert_eq!(out["outcome"]["decision"], "deployable_with_controls");
    assert_eq!(out["pillar_coverage"]["Security"]["question_count"], 0);
}

#[test]
fn checklist_rejects_bad_answer() {
    cmd()
        .args(["checklist", "--model", "X", "--answer", "3=maybe"])
        .assert()
        .failure()
        .stderr(contains("maybe"));
}

#[test]
fn checklist_unknown_model_is_untiered() {
    let out = run_json(&["checklist", "--model", "Unlisted", "--answer", "2=no"]);
    assert!(out["tier"].is_null());
    assert_eq!(out["checklist"]["grade"], "F");
    assert_eq!(out["outcome"]["decision"], "blocked");
}

#[test]
fn any_gap_policy_flag() {
    let credit = run_json(&[
        "--guardrail-policy",
        "any-gap",
        "checklist",
        "--model",
        "Credit Default XGBoost",
    ]);
    assert_eq!(credit["checklist"]["gaps_count"], 2);
    assert_eq!(credit["outcome"]["decision"], "deployable_with_controls");

    let trading = run_json(&[
        "--guardrail-policy",
        "any-gap",
        "checklist",
        "--model",
        "Trading RL Agent",
    ]);
    assert_eq!(trading["outcome"]["decision"], "blocked_by_guardrail");
    assert!(trading["outcome"]["hard_stops"][0]
        .as_str()
        .unwrap()
        .contains("8 open gap"));
}

#[test]
fn config_file_is_validated() {
    let dir = TempDir::new().unwrap();
    let config = write_file(
        &dir,
        "config.json",
        r#"{"tiering": {"tier1_min_score": 5, "tier2_min_score": 6}}"#,
    );
    cmd()
        .args(["--config", config.to_str().unwrap(), "tier"])
        .assert()
        .failure()
        .stderr(contains("tier1_min_score"));
}

#[test]
fn config_with_overflowing_points_is_rejected() {
    let dir = TempDir::new().unwrap();
    let config = write_file(
        &dir,
        "config.json",
        r#"{"tiering": {"client_facing_points": 4294967295}}"#,
    );
    cmd()
        .args(["--config", config.to_str().unwrap(), "tier"])
        .assert()
        .failure()
        .stderr(contains("overflow"));
}

#[test]
fn answers_file_bad_value_names_question() {
    let dir = TempDir::new().unwrap();
    let answers = write_file(&dir, "answers.json", r#"{"1": "yes", "4": "maybe"}"#);
    cmd()
        .args(["checklist", "--model", "X", "--answers", answers.to_str().unwrap()])
        .assert()
        .failure()
        .stderr(contains("question 4"));
}

#[test]
fn report_portfolio() {
    let dir = TempDir::new().unwrap();
    let answers = write_file(
        &dir,
        "portfolio.json",
        r#"{"ESG Research Agent": {"1": "yes", "2": "yes", "3": "yes", "4": "yes",
                                  "5": "yes", "6": "yes", "7": "yes", "8": "yes",
                                  "9": "yes", "10": "yes"},
            "Credit Default XGBoost": {"2": "no"}}"#,
    );
    let path = answers.to_str().unwrap();

    let summary = run_json(&["report", "--answers", path]);
    assert_eq!(summary["total_models"], 2);
    assert_eq!(summary["rows"][0]["model"], "Credit Default XGBoost");
    assert_eq!(summary["rows"][1]["decision"], "deployable");
    assert_eq!(summary["total_gaps"], 10);

    cmd()
        .args(["report", "--answers", path])
        .assert()
        .success()
        .stdout(contains("PORTFOLIO GOVERNANCE REPORT"))
        .stdout(contains("GAPS BY PILLAR"));
}

#[test]
fn report_rejects_unknown_model() {
    let dir = TempDir::new().unwrap();
    let answers = write_file(&dir, "portfolio.json", r#"{"Ghost": {"1": "yes"}}"#);
    cmd()
        .args(["report", "--answers", answers.to_str().unwrap()])
        .assert()
        .failure()
        .stderr(contains("Ghost"));
}

#[test]
fn reference_content() {
    cmd()
        .arg("oversight")
        .assert()
        .success()
        .stdout(contains("HUMAN IN THE LOOP:"));
    cmd()
        .arg("regulatory")
        .assert()
        .success()
        .stdout(contains("SR 11-7 (US Banking):"));
    cmd()
        .arg("policy")
        .assert()
        .success()
        .stdout(contains("AI MODEL GOVERNANCE POLICY v1.0"));
}

#[test]
fn demo_runs_end_to_end() {
    cmd()
        .arg("demo")
        .assert()
        .success()
        .stdout(contains("ETHICAL CHECKLIST: Trading RL Agent"))
        .stdout(contains("Score: 8.5/22 (39%) Grade: F"))
        .stdout(contains("APPROVED BY:").and(contains("REGULATORY COMPLIANCE MAPPING")));
}
