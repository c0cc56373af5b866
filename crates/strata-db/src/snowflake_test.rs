use super::*;
use serial_test::serial;

#[test]
fn test_args_without_connection() {
    let db = SnowCliBackend::new("snow", None);
    assert_eq!(db.args("SELECT 1"), vec!["sql", "-q", "SELECT 1"]);
}

#[test]
fn test_args_with_connection() {
    let db = SnowCliBackend::new("snow", Some("deployer".to_string()));
    assert_eq!(
        db.args("SELECT 1"),
        vec!["sql", "-q", "SELECT 1", "--connection", "deployer"]
    );
}

#[tokio::test]
#[serial]
async fn test_missing_program_is_unavailable() {
    let db = SnowCliBackend::new("strata-test-no-such-snow-cli", None);
    let err = db.execute_batch("SELECT 1").await.unwrap_err();
    assert!(err.is_unavailable(), "got {err:?}");
    assert!(err.to_string().starts_with("[D003]"));
}

#[cfg(unix)]
mod unix {
    use super::*;
    use std::fs;
    use std::os::unix::fs::PermissionsExt;
    use std::path::{Path, PathBuf};
    use tempfile::tempdir;

    fn write_script(dir: &Path, body: &str) -> PathBuf {
        let path = dir.join("fake-snow");
        fs::write(&path, format!("#!/bin/sh\n{body}\n")).unwrap();
        fs::set_permissions(&path, fs::Permissions::from_mode(0o755)).unwrap();
        path
    }

    #[tokio::test]
    #[serial]
    async fn test_successful_batch_receives_sql() {
        let dir = tempdir().unwrap();
        let captured = dir.path().join("captured.txt");
        let script = write_script(
            dir.path(),
            &format!("printf '%s|' \"$@\" > '{}'", captured.display()),
        );

        let db = SnowCliBackend::new(script.to_str().unwrap(), Some("ci".to_string()));
        db.execute_batch("USE DATABASE SAAS_ANALYTICS_DEV;")
            .await
            .unwrap();

        let args = fs::read_to_string(&captured).unwrap();
        assert_eq!(args, "sql|-q|USE DATABASE SAAS_ANALYTICS_DEV;|--connection|ci|");
    }

    #[tokio::test]
    #[serial]
    async fn test_nonzero_exit_is_execution_error_with_stderr() {
        let dir = tempdir().unwrap();
        let script = write_script(
            dir.path(),
            "echo 'SQL compilation error: Object does not exist' >&2\nexit 1",
        );

        let db = SnowCliBackend::new(script.to_str().unwrap(), None);
        let err = db.execute_batch("SELECT 1").await.unwrap_err();
        match err {
            DbError::ExecutionError(msg) => {
                assert!(msg.contains("exited with 1"), "{msg}");
                assert!(msg.contains("Object does not exist"), "{msg}");
            }
            other => panic!("expected ExecutionError, got {other:?}"),
        }
    }

    #[tokio::test]
    #[serial]
    async fn test_stdout_used_when_stderr_empty() {
        let dir = tempdir().unwrap();
        let script = write_script(dir.path(), "echo 'failed on stdout'\nexit 2");

        let db = SnowCliBackend::new(script.to_str().unwrap(), None);
        let err = db.execute_batch("SELECT 1").await.unwrap_err();
        assert!(err.to_string().contains("failed on stdout"));
    }
}
