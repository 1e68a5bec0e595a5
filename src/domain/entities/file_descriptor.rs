//! # FileDescriptor Entity
//!
//! 送信対象のローカルファイルを表すバリューオブジェクト

use std::path::{Path, PathBuf};

use crate::domain::error::DingtalkError;

/// 送信対象ファイルの記述子
///
/// ディレクトリ・ファイル名・呼び出し元が申告したファイルタイプを保持する。
/// ファイルタイプは内容から推定せず、申告値をそのまま使う。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileDescriptor {
    directory: String,
    file_name: String,
    file_type: String,
}

impl FileDescriptor {
    /// フルパスをディレクトリとファイル名に分割して記述子を作成
    ///
    /// # Arguments
    ///
    /// * `full_path` - 送信するファイルのフルパス
    /// * `file_type` - 申告するファイルタイプ（例: "xlsx", "pdf"）
    ///
    /// # Errors
    ///
    /// パスからファイル名が取れない場合、またはファイルタイプが空の場合にエラーを返す
    pub fn from_path(full_path: &str, file_type: String) -> Result<Self, DingtalkError> {
        if file_type.is_empty() {
            return Err(DingtalkError::InvalidInput { field: "file_type" });
        }

        let path = Path::new(full_path);
        let file_name = path
            .file_name()
            .and_then(|name| name.to_str())
            .filter(|name| !name.is_empty())
            .ok_or(DingtalkError::InvalidInput { field: "file_path" })?
            .to_string();
        let directory = path
            .parent()
            .and_then(|dir| dir.to_str())
            .unwrap_or_default()
            .to_string();

        Ok(Self {
            directory,
            file_name,
            file_type,
        })
    }

    pub fn directory(&self) -> &str {
        &self.directory
    }

    pub fn file_name(&self) -> &str {
        &self.file_name
    }

    pub fn file_type(&self) -> &str {
        &self.file_type
    }

    /// ディレクトリとファイル名を結合したフルパス
    pub fn full_path(&self) -> PathBuf {
        if self.directory.is_empty() {
            PathBuf::from(&self.file_name)
        } else {
            Path::new(&self.directory).join(&self.file_name)
        }
    }
}
