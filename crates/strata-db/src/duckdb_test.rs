use super::*;
use tempfile::tempdir;

#[tokio::test]
async fn test_in_memory() {
    let db = DuckDbBackend::in_memory().unwrap();
    assert_eq!(db.db_type(), "duckdb");
}

#[tokio::test]
async fn test_execute_batch() {
    let db = DuckDbBackend::in_memory().unwrap();
    db.execute_batch(
        "CREATE SCHEMA SAAS_ANALYTICS_DEV; CREATE TABLE SAAS_ANALYTICS_DEV.t1 (id INT); INSERT INTO SAAS_ANALYTICS_DEV.t1 VALUES (1);",
    )
    .await
    .unwrap();

    assert!(db.schema_exists("SAAS_ANALYTICS_DEV").unwrap());
    assert!(db.relation_exists("SAAS_ANALYTICS_DEV", "t1").unwrap());
}

#[tokio::test]
async fn test_relation_not_exists() {
    let db = DuckDbBackend::in_memory().unwrap();
    assert!(!db.relation_exists("main", "nonexistent").unwrap());
    assert!(!db.schema_exists("nonexistent").unwrap());
}

#[tokio::test]
async fn test_invalid_sql_is_execution_error() {
    let db = DuckDbBackend::in_memory().unwrap();
    let err = db.execute_batch("CREATE TABLE").await.unwrap_err();
    assert!(matches!(err, DbError::ExecutionError(_)));
}

#[tokio::test]
async fn test_failed_statement_reports_missing_object() {
    let db = DuckDbBackend::in_memory().unwrap();
    let err = db
        .execute_batch("INSERT INTO missing_schema.t VALUES (1);")
        .await
        .unwrap_err();
    assert!(err.to_string().starts_with("[D002]"));
}

#[tokio::test]
async fn test_file_backed_database_persists() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("warehouse.duckdb");

    {
        let db = DuckDbBackend::new(path.to_str().unwrap()).unwrap();
        db.execute_batch("CREATE TABLE kept (id INT);").await.unwrap();
    }

    let db = DuckDbBackend::from_path(&path).unwrap();
    assert!(db.relation_exists("main", "kept").unwrap());
}

#[tokio::test]
async fn test_execute_batch_yields_to_timeout() {
    let db = DuckDbBackend::in_memory().unwrap();
    let slow = "SELECT COUNT(*) FROM range(100000000) t1, range(1000000) t2;";

    let result =
        tokio::time::timeout(std::time::Duration::from_millis(200), db.execute_batch(slow)).await;
    assert!(result.is_err(), "slow batch finished before the timeout");

    // The dropped batch was interrupted, so the connection is free again.
    let next = tokio::time::timeout(
        std::time::Duration::from_secs(10),
        db.execute_batch("CREATE TABLE after_timeout (id INT);"),
    )
    .await;
    assert!(matches!(next, Ok(Ok(()))));
    assert!(db.relation_exists("main", "after_timeout").unwrap());
}
