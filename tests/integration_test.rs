//! Integration tests for dingsend
//!
//! 公開APIを通して、設定値からmsgParamペイロードまでの組み立てを検証する。
//! リモートAPIを叩くテストは含まない。

use dingsend::domain::entities::file_descriptor::FileDescriptor;
use dingsend::domain::entities::file_message::{FileMessageParam, MediaId, FILE_MSG_KEY};

#[test]
fn test_msg_key_identifies_file_share_message() {
    assert_eq!(FILE_MSG_KEY, "sampleFile");
}

#[test]
fn test_msg_param_assembly_from_full_path() {
    let descriptor =
        FileDescriptor::from_path("/data/reports/quarterly.xlsx", "xlsx".to_string()).unwrap();
    let param = FileMessageParam::new(&MediaId::new("@media123"), &descriptor).unwrap();

    let json = param.to_json().unwrap();
    let value: serde_json::Value = serde_json::from_str(&json).unwrap();

    assert_eq!(value["mediaId"], "@media123");
    assert_eq!(value["fileName"], "quarterly.xlsx");
    assert_eq!(value["fileType"], "xlsx");
}

#[test]
fn test_msg_param_survives_hostile_file_names() {
    // 引用符・バックスラッシュを含むファイル名でもmsgParamは正しいJSONのまま
    for file_name in [
        r#"my "quoted" file.txt"#,
        r"trailing-backslash\.txt",
        "日報 2024.xlsx",
    ] {
        let descriptor = FileDescriptor::from_path(
            &format!("/data/{}", file_name),
            "txt".to_string(),
        )
        .unwrap();
        let param = FileMessageParam::new(&MediaId::new("@media123"), &descriptor).unwrap();

        let json = param.to_json().unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["fileName"], *file_name);
    }
}
