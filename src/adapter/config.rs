//! # Config Adapter
//!
//! 設定ファイル（JSON）の読み込み

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;

/// 設定ファイルの内容
///
/// すべてのフィールドは任意。CLI引数に同名の値があればそちらが優先される。
/// 認証情報をコマンドラインに直接書きたくない場合の受け皿でもある。
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct Config {
    pub app_key: Option<String>,
    pub app_secret: Option<String>,
    pub robot_code: Option<String>,
    pub open_conversation_id: Option<String>,
    pub file_type: Option<String>,
    pub file_path: Option<String>,
}

impl Config {
    /// 設定ファイルを読み込む
    ///
    /// # Errors
    ///
    /// ファイルの読み込み、またはJSONのパースに失敗した場合にエラーを返す
    pub fn load(path: &str) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path))?;
        let config: Config = serde_json::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {}", path))?;
        Ok(config)
    }
}
