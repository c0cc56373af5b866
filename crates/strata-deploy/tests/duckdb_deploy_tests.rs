//! End-to-end deployment of the full plan against an in-memory DuckDB
//!
//! Each resource is a DuckDB-compatible stand-in for the Snowflake SQL, written
//! against the placeholder database so substitution is exercised for real.

use std::fs;
use std::io::Cursor;
use std::path::Path;
use std::sync::Arc;
use std::time::Duration;
use strata_core::DEPLOYMENT_PLAN;
use strata_db::DuckDbBackend;
use strata_deploy::{Deployer, LineConfirm, RunStatus, StepError, StepOutcome};
use tempfile::{tempdir, TempDir};

/// DuckDB SQL for a plan step, keyed by its position in the plan
fn sql_for(index: usize) -> String {
    match index {
        0 => "CREATE SCHEMA IF NOT EXISTS SAAS_ANALYTICS;".to_string(),
        // Archive schema must survive substitution untouched.
        1 => "CREATE SCHEMA IF NOT EXISTS SAAS_ANALYTICS_ARCHIVE;".to_string(),
        7 => "CREATE TABLE IF NOT EXISTS SAAS_ANALYTICS.bronze_events (event_id INTEGER, payload VARCHAR);".to_string(),
        11 => "CREATE TABLE IF NOT EXISTS SAAS_ANALYTICS.silver_events AS SELECT event_id FROM SAAS_ANALYTICS.bronze_events;".to_string(),
        15 => "CREATE OR REPLACE VIEW SAAS_ANALYTICS.gold_daily_metrics AS SELECT COUNT(*) AS events FROM SAAS_ANALYTICS.silver_events;".to_string(),
        _ => format!("-- step {} has no DuckDB equivalent\nSELECT 1;", index + 1),
    }
}

fn write_plan(root: &Path) {
    for (idx, step) in DEPLOYMENT_PLAN.iter().enumerate() {
        let path = root.join(step.path);
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(path, sql_for(idx)).unwrap();
    }
}

fn project() -> TempDir {
    let dir = tempdir().unwrap();
    write_plan(dir.path());
    dir
}

fn no_answer() -> LineConfirm<Cursor<&'static str>> {
    LineConfirm::new(Cursor::new(""))
}

#[tokio::test]
async fn test_full_plan_deploys_into_environment_schema() {
    let dir = project();
    let db = Arc::new(DuckDbBackend::in_memory().unwrap());
    let deployer = Deployer::new("qa", dir.path(), db.clone()).unwrap();

    let report = deployer.run_plan(false, &mut no_answer()).await;

    assert!(report.is_success(), "{report:?}");
    assert_eq!(report.succeeded, DEPLOYMENT_PLAN.len());
    assert!(db.schema_exists("SAAS_ANALYTICS_QA").unwrap());
    assert!(db.schema_exists("SAAS_ANALYTICS_ARCHIVE").unwrap());
    assert!(!db.schema_exists("SAAS_ANALYTICS").unwrap());
    assert!(db.relation_exists("SAAS_ANALYTICS_QA", "bronze_events").unwrap());
    assert!(db.relation_exists("SAAS_ANALYTICS_QA", "silver_events").unwrap());
    assert!(db.relation_exists("SAAS_ANALYTICS_QA", "gold_daily_metrics").unwrap());
}

#[tokio::test]
async fn test_dev_dry_run_prepares_whole_plan() {
    let dir = project();
    let db = Arc::new(DuckDbBackend::in_memory().unwrap());
    let deployer = Deployer::new("dev", dir.path(), db.clone()).unwrap();

    let report = deployer.run_plan(true, &mut no_answer()).await;

    assert!(report.is_success());
    assert_eq!(report.succeeded, report.total);
    assert_eq!(report.total, DEPLOYMENT_PLAN.len());
    assert_eq!(report.database, "SAAS_ANALYTICS_DEV");
    assert!(!db.schema_exists("SAAS_ANALYTICS_DEV").unwrap());
}

#[tokio::test]
async fn test_failing_statement_stops_the_run() {
    let dir = project();
    // Silver tables reference a bronze table that was never created.
    fs::write(dir.path().join(DEPLOYMENT_PLAN[7].path), "SELECT 1;").unwrap();
    let db = Arc::new(DuckDbBackend::in_memory().unwrap());
    let deployer = Deployer::new("dev", dir.path(), db.clone()).unwrap();

    let report = deployer.run_plan(false, &mut no_answer()).await;

    assert!(!report.is_success());
    assert_eq!(report.succeeded, 11);
    assert!(matches!(report.status, RunStatus::FailedAtStep { step: 12, .. }));
    assert!(!db.relation_exists("SAAS_ANALYTICS_DEV", "gold_daily_metrics").unwrap());
}

#[tokio::test]
async fn test_rerun_is_safe_for_idempotent_resources() {
    let dir = project();
    let db = Arc::new(DuckDbBackend::in_memory().unwrap());
    let deployer = Deployer::new("dev", dir.path(), db.clone()).unwrap();

    assert!(deployer.run_plan(false, &mut no_answer()).await.is_success());
    assert!(deployer.run_plan(false, &mut no_answer()).await.is_success());
}

#[tokio::test]
async fn test_slow_statement_times_out_and_stops_the_run() {
    let dir = project();
    fs::write(
        dir.path().join(DEPLOYMENT_PLAN[2].path),
        "SELECT COUNT(*) FROM range(100000000) t1, range(1000000) t2;",
    )
    .unwrap();
    let db = Arc::new(DuckDbBackend::in_memory().unwrap());
    let deployer = Deployer::new("dev", dir.path(), db.clone())
        .unwrap()
        .with_timeout(Duration::from_millis(200));

    let outcome = deployer.execute_step(&DEPLOYMENT_PLAN[2], false).await;
    assert!(matches!(
        outcome,
        StepOutcome::Failed(StepError::Timeout { .. })
    ));

    let report = deployer.run_plan(false, &mut no_answer()).await;
    assert!(!report.is_success());
    assert_eq!(report.succeeded, 2);
    assert!(matches!(report.status, RunStatus::FailedAtStep { step: 3, .. }));
    assert!(db.schema_exists("SAAS_ANALYTICS_DEV").unwrap());
}
