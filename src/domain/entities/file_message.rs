//! # FileMessage Entities
//!
//! ファイル共有メッセージのバリューオブジェクト
//!
//! msgParamは型付きレコードをserde_jsonでシリアライズして生成する。
//! ファイル名に引用符やバックスラッシュが含まれていても正しくエスケープされる。

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::domain::entities::file_descriptor::FileDescriptor;
use crate::domain::error::DingtalkError;

/// ファイル共有メッセージを識別する固定のmsgKey
pub const FILE_MSG_KEY: &str = "sampleFile";

/// アップロード済みコンテンツを参照する不透明なハンドル
///
/// サーバー側でのみ有効。1回のnotify呼び出しでちょうど1度参照される。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MediaId(String);

impl MediaId {
    pub fn new(media_id: impl Into<String>) -> Self {
        Self(media_id.into())
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for MediaId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// メッセージの投稿先（ロボットと対象グループ）
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NotificationTarget {
    robot_code: String,
    open_conversation_id: String,
}

impl NotificationTarget {
    /// 新しい投稿先を作成
    ///
    /// # Errors
    ///
    /// いずれかの識別子が空の場合にエラーを返す
    pub fn new(
        robot_code: String,
        open_conversation_id: String,
    ) -> Result<Self, DingtalkError> {
        if robot_code.is_empty() {
            return Err(DingtalkError::InvalidInput { field: "robot_code" });
        }
        if open_conversation_id.is_empty() {
            return Err(DingtalkError::InvalidInput {
                field: "open_conversation_id",
            });
        }
        Ok(Self {
            robot_code,
            open_conversation_id,
        })
    }

    pub fn robot_code(&self) -> &str {
        &self.robot_code
    }

    pub fn open_conversation_id(&self) -> &str {
        &self.open_conversation_id
    }
}

/// ファイル共有メッセージのmsgParamペイロード
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct FileMessageParam {
    pub media_id: String,
    pub file_name: String,
    pub file_type: String,
}

impl FileMessageParam {
    /// アップロード結果とファイル記述子からペイロードを組み立てる
    ///
    /// # Errors
    ///
    /// メディアIDが空の場合にエラーを返す（アップロード成功前のnotifyは不正）
    pub fn new(media_id: &MediaId, descriptor: &FileDescriptor) -> Result<Self, DingtalkError> {
        if media_id.is_empty() {
            return Err(DingtalkError::InvalidInput { field: "media_id" });
        }
        Ok(Self {
            media_id: media_id.as_str().to_string(),
            file_name: descriptor.file_name().to_string(),
            file_type: descriptor.file_type().to_string(),
        })
    }

    /// msgParamとして送信するJSON文字列を生成
    ///
    /// # Errors
    ///
    /// シリアライズに失敗した場合にエラーを返す
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }
}
