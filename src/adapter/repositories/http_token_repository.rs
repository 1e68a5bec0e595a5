//! # HTTP Token Repository Implementation
//!
//! TokenRepositoryのDingTalk API実装

use anyhow::Result;
use async_trait::async_trait;
use log::debug;
use std::sync::Arc;

use crate::adapter::dingtalk::client::DingtalkApi;
use crate::adapter::dingtalk::models::AccessTokenRequest;
use crate::domain::entities::credentials::{AccessToken, Credentials};
use crate::domain::repositories::token_repository::TokenRepository;

/// DingTalk認証エンドポイントを使うトークンリポジトリ
pub struct HttpTokenRepository {
    api: Arc<dyn DingtalkApi>,
}

impl HttpTokenRepository {
    /// 新しいリポジトリを作成
    pub fn new(api: Arc<dyn DingtalkApi>) -> Self {
        Self { api }
    }
}

#[async_trait]
impl TokenRepository for HttpTokenRepository {
    async fn fetch_token(&self, credentials: &Credentials) -> Result<AccessToken> {
        let request = AccessTokenRequest {
            app_key: credentials.app_key().to_string(),
            app_secret: credentials.app_secret().to_string(),
        };

        let response = self.api.acquire_token(&request).await?;

        // 有効期限はローカルでは追跡しない（1回の実行で使い切る）
        if let Some(expire_in) = response.expire_in {
            debug!("Access token expires in {} seconds", expire_in);
        }

        // トークン欠落は空トークンとして返し、空チェックはユースケース側で行う
        Ok(AccessToken::new(response.access_token.unwrap_or_default()))
    }
}
