//! Workflow Integration Tests
//!
//! FileSendWorkflow の統合テスト
//!
//! ネットワークに出ないdry-runモードで、設定ファイルの読み込みから
//! ワークフロー実行までを通しで検証する。

use std::fs;
use std::path::Path;

use tempfile::TempDir;

use dingsend::adapter::config::Config;
use dingsend::driver::{resolve_send_config, Args, HttpFileSendWorkflow};

/// テスト用のConfigファイルを作成
fn create_test_config(dir: &Path, file_path: &str) -> String {
    let config_path = dir.join("test-config.json");
    let config_content = format!(
        r#"{{
  "app_key": "test-key",
  "app_secret": "test-secret",
  "robot_code": "robot-001",
  "open_conversation_id": "cid-xyz",
  "file_type": "txt",
  "file_path": "{}"
}}"#,
        file_path
    );
    fs::write(&config_path, config_content).unwrap();
    config_path.to_string_lossy().to_string()
}

/// テスト用の送信対象ファイルを作成
fn create_test_file(dir: &Path) -> String {
    let file_path = dir.join("report.txt");
    fs::write(&file_path, "test contents").unwrap();
    file_path.to_string_lossy().to_string()
}

#[tokio::test]
async fn test_workflow_execute_dry_run_success() {
    let temp_dir = TempDir::new().unwrap();

    let file_path = create_test_file(temp_dir.path());
    let config_path = create_test_config(temp_dir.path(), &file_path);

    let args = Args {
        config: Some(config_path.clone()),
        dry_run: true,
        ..Default::default()
    };

    let file_config = Config::load(&config_path).unwrap();
    let send_config = resolve_send_config(&args, &file_config).unwrap();

    let workflow = HttpFileSendWorkflow::new().unwrap();

    // dry-runではリモート呼び出しは行われない
    let result = workflow.execute(&send_config, args.dry_run).await;

    assert!(
        result.is_ok(),
        "Workflow should succeed in dry-run mode, but got: {:?}",
        result
    );
}

#[tokio::test]
async fn test_workflow_cli_options_override_config_file() {
    let temp_dir = TempDir::new().unwrap();

    let file_path = create_test_file(temp_dir.path());
    let config_path = create_test_config(temp_dir.path(), &file_path);

    let args = Args {
        config: Some(config_path.clone()),
        file_type: Some("pdf".to_string()),
        dry_run: true,
        ..Default::default()
    };

    let file_config = Config::load(&config_path).unwrap();
    let send_config = resolve_send_config(&args, &file_config).unwrap();

    // CLIの値が設定ファイルの "txt" を上書きする
    assert_eq!(send_config.file_type, "pdf");
    assert_eq!(send_config.app_key, "test-key");
}

#[test]
fn test_resolve_send_config_reports_missing_field() {
    let args = Args {
        app_key: Some("test-key".to_string()),
        app_secret: Some("test-secret".to_string()),
        robot_code: Some("robot-001".to_string()),
        open_conversation_id: Some("cid-xyz".to_string()),
        file_type: Some("txt".to_string()),
        ..Default::default()
    };

    let result = resolve_send_config(&args, &Config::default());

    let err = result.unwrap_err();
    assert!(
        err.to_string().contains("file_path"),
        "Error should name the missing field, but got: {}",
        err
    );
}
