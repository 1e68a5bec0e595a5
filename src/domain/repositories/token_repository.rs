//! # Token Repository Trait
//!
//! アクセストークンの取得を抽象化

use anyhow::Result;
use async_trait::async_trait;

use crate::domain::entities::credentials::{AccessToken, Credentials};

/// トークンリポジトリ
///
/// 認証情報をアクセストークンに交換する
#[async_trait]
pub trait TokenRepository: Send + Sync {
    /// アクセストークンを取得する
    ///
    /// # Arguments
    ///
    /// * `credentials` - アプリの認証情報
    ///
    /// # Returns
    ///
    /// アクセストークン（空の可能性あり。空チェックは呼び出し側で行う）
    ///
    /// # Errors
    ///
    /// 認証エンドポイントへのリクエストに失敗した場合にエラーを返す
    async fn fetch_token(&self, credentials: &Credentials) -> Result<AccessToken>;
}
