//! # HTTP Media Repository Implementation
//!
//! MediaRepositoryのDingTalk API実装

use anyhow::{anyhow, Context, Result};
use async_trait::async_trait;
use log::debug;
use std::sync::Arc;

use crate::adapter::dingtalk::client::DingtalkApi;
use crate::domain::entities::credentials::AccessToken;
use crate::domain::entities::file_descriptor::FileDescriptor;
use crate::domain::entities::file_message::MediaId;
use crate::domain::error::DingtalkError;
use crate::domain::repositories::media_repository::MediaRepository;

/// DingTalkメディアアップロードエンドポイントを使うメディアリポジトリ
pub struct HttpMediaRepository {
    api: Arc<dyn DingtalkApi>,
}

impl HttpMediaRepository {
    /// 新しいリポジトリを作成
    pub fn new(api: Arc<dyn DingtalkApi>) -> Self {
        Self { api }
    }
}

#[async_trait]
impl MediaRepository for HttpMediaRepository {
    async fn upload_file(
        &self,
        token: &AccessToken,
        descriptor: &FileDescriptor,
    ) -> Result<MediaId> {
        let path = descriptor.full_path();

        // tokio::fs::read はこの呼び出しの中でハンドルを開いて閉じる。
        // リクエスト送信時点でファイルは解放済み
        let bytes = tokio::fs::read(&path)
            .await
            .with_context(|| format!("Failed to read file: {}", path.display()))?;

        let response = self
            .api
            .upload_media(token.as_str(), descriptor.file_name(), bytes)
            .await?;

        // このエンドポイントはHTTP 200でもerrcodeで失敗を返すことがある
        if response.errcode != 0 {
            return Err(DingtalkError::Api {
                operation: "media upload",
                code: response.errcode,
                message: response.errmsg,
            }
            .into());
        }

        if let Some(media_type) = &response.media_type {
            debug!(
                "Media upload accepted: type={} created_at={:?}",
                media_type, response.created_at
            );
        }

        response
            .media_id
            .filter(|media_id| !media_id.is_empty())
            .map(MediaId::new)
            .ok_or_else(|| anyhow!("media upload response did not contain media_id"))
    }
}
