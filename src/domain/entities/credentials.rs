//! # Credentials Entity
//!
//! アプリ認証情報のバリューオブジェクト

use std::fmt;

use crate::domain::error::DingtalkError;

/// DingTalkアプリの認証情報（AppKey / AppSecret）
///
/// シークレットはログに出してはならないため、Debug出力では伏せ字にする
#[derive(Clone)]
pub struct Credentials {
    app_key: String,
    app_secret: String,
}

impl Credentials {
    /// 新しい認証情報を作成
    ///
    /// # Errors
    ///
    /// いずれかのフィールドが空の場合にエラーを返す
    pub fn new(app_key: String, app_secret: String) -> Result<Self, DingtalkError> {
        if app_key.is_empty() {
            return Err(DingtalkError::InvalidInput { field: "app_key" });
        }
        if app_secret.is_empty() {
            return Err(DingtalkError::InvalidInput { field: "app_secret" });
        }
        Ok(Self {
            app_key,
            app_secret,
        })
    }

    pub fn app_key(&self) -> &str {
        &self.app_key
    }

    pub fn app_secret(&self) -> &str {
        &self.app_secret
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("app_key", &self.app_key)
            .field("app_secret", &"***")
            .finish()
    }
}

/// アクセストークン
///
/// 1回の実行で1度だけ使用する短命のベアラートークン。
/// 有効期限はリモート側が管理するため、ローカルでは追跡しない。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AccessToken(String);

impl AccessToken {
    pub fn new(token: impl Into<String>) -> Self {
        Self(token.into())
    }

    /// トークンが空かどうか
    ///
    /// 空のトークンは認証失敗として扱う（アップロード・通知には進まない）
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for AccessToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
