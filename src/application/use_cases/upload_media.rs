//! # Upload Media Use Case
//!
//! ファイルアップロードユースケース

use std::sync::Arc;

use anyhow::Result;

use crate::domain::entities::credentials::AccessToken;
use crate::domain::entities::file_descriptor::FileDescriptor;
use crate::domain::entities::file_message::MediaId;
use crate::domain::repositories::media_repository::MediaRepository;

/// ファイルアップロードユースケース
///
/// ローカルファイルをアップロードし、通知で参照するメディアIDを得る
pub struct UploadMediaUseCase<M: MediaRepository> {
    media_repository: Arc<M>,
}

impl<M: MediaRepository> UploadMediaUseCase<M> {
    /// 新しいユースケースを作成
    ///
    /// # Arguments
    ///
    /// * `media_repository` - メディアリポジトリ
    pub fn new(media_repository: Arc<M>) -> Self {
        Self { media_repository }
    }

    /// ファイルをアップロードする
    ///
    /// # Arguments
    ///
    /// * `token` - アクセストークン
    /// * `descriptor` - 送信対象ファイルの記述子
    ///
    /// # Returns
    ///
    /// アップロードされたコンテンツのメディアID
    ///
    /// # Errors
    ///
    /// ファイルの読み込み、またはアップロードに失敗した場合にエラーを返す
    pub async fn execute(
        &self,
        token: &AccessToken,
        descriptor: &FileDescriptor,
    ) -> Result<MediaId> {
        self.media_repository.upload_file(token, descriptor).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;

    struct MockMediaRepository {
        media_id: String,
    }

    #[async_trait]
    impl MediaRepository for MockMediaRepository {
        async fn upload_file(
            &self,
            _token: &AccessToken,
            _descriptor: &FileDescriptor,
        ) -> Result<MediaId> {
            Ok(MediaId::new(self.media_id.clone()))
        }
    }

    struct FailingMediaRepository;

    #[async_trait]
    impl MediaRepository for FailingMediaRepository {
        async fn upload_file(
            &self,
            _token: &AccessToken,
            _descriptor: &FileDescriptor,
        ) -> Result<MediaId> {
            Err(anyhow::anyhow!("upload endpoint returned status 500"))
        }
    }

    fn descriptor() -> FileDescriptor {
        FileDescriptor::from_path("/data/report.xlsx", "xlsx".to_string()).unwrap()
    }

    #[tokio::test]
    async fn test_upload_media_success() {
        let mock_repo = Arc::new(MockMediaRepository {
            media_id: "@media123".to_string(),
        });
        let use_case = UploadMediaUseCase::new(mock_repo);

        let result = use_case
            .execute(&AccessToken::new("token-123"), &descriptor())
            .await;

        assert!(result.is_ok());
        assert_eq!(result.unwrap().as_str(), "@media123");
    }

    #[tokio::test]
    async fn test_upload_media_failure_propagates() {
        let use_case = UploadMediaUseCase::new(Arc::new(FailingMediaRepository));

        let result = use_case
            .execute(&AccessToken::new("token-123"), &descriptor())
            .await;

        assert!(result.is_err());
    }
}
