//! # DingTalk API Models
//!
//! DingTalk APIのリクエスト・レスポンス型

use serde::{Deserialize, Serialize};

// v1.0系エンドポイント（api.dingtalk.com）はcamelCase、
// 旧oapi系エンドポイント（oapi.dingtalk.com）はsnake_caseを使う

/// アクセストークン取得リクエスト
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AccessTokenRequest {
    pub app_key: String,
    pub app_secret: String,
}

/// アクセストークン取得レスポンス
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AccessTokenResponse {
    /// トークン。欠落・空は認証失敗として扱う
    #[serde(default)]
    pub access_token: Option<String>,
    /// 有効期限（秒）。ローカルでは追跡しない
    #[serde(default)]
    pub expire_in: Option<i64>,
}

/// メディアアップロードレスポンス
///
/// このエンドポイントはHTTP 200でもerrcodeで失敗を表すことがある
#[derive(Debug, Clone, Deserialize)]
pub struct MediaUploadResponse {
    #[serde(default)]
    pub errcode: i64,
    #[serde(default)]
    pub errmsg: String,
    #[serde(default)]
    pub media_id: Option<String>,
    #[serde(rename = "type", default)]
    pub media_type: Option<String>,
    #[serde(default)]
    pub created_at: Option<i64>,
}

/// グループ送信リクエスト
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GroupSendRequest {
    /// msgParam（JSON文字列）
    pub msg_param: String,
    /// メッセージ種別を識別する固定キー
    pub msg_key: String,
    pub robot_code: String,
    pub open_conversation_id: String,
}

/// グループ送信レスポンス
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GroupSendResponse {
    #[serde(default)]
    pub process_query_key: Option<String>,
}
