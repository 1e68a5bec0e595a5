//! # Acquire Token Use Case
//!
//! アクセストークン取得ユースケース

use std::sync::Arc;

use anyhow::Result;

use crate::domain::entities::credentials::{AccessToken, Credentials};
use crate::domain::error::DingtalkError;
use crate::domain::repositories::token_repository::TokenRepository;

/// アクセストークン取得ユースケース
///
/// 認証情報をトークンに交換し、空トークンを明示的に検出する
pub struct AcquireTokenUseCase<T: TokenRepository> {
    token_repository: Arc<T>,
}

impl<T: TokenRepository> AcquireTokenUseCase<T> {
    /// 新しいユースケースを作成
    ///
    /// # Arguments
    ///
    /// * `token_repository` - トークンリポジトリ
    pub fn new(token_repository: Arc<T>) -> Self {
        Self { token_repository }
    }

    /// アクセストークンを取得する
    ///
    /// # Arguments
    ///
    /// * `credentials` - アプリの認証情報
    ///
    /// # Returns
    ///
    /// 空でないアクセストークン
    ///
    /// # Errors
    ///
    /// リクエストに失敗した場合、またはレスポンスに使用可能なトークンが
    /// 含まれない場合（`DingtalkError::EmptyToken`）にエラーを返す
    pub async fn execute(&self, credentials: &Credentials) -> Result<AccessToken> {
        let token = self.token_repository.fetch_token(credentials).await?;

        // 空トークンは認証失敗。後続のアップロード・通知には進ませない
        if token.is_empty() {
            return Err(DingtalkError::EmptyToken.into());
        }

        Ok(token)
    }
}
