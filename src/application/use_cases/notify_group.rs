//! # Notify Group Use Case
//!
//! グループ通知ユースケース

use std::sync::Arc;

use anyhow::Result;

use crate::domain::entities::credentials::AccessToken;
use crate::domain::entities::file_descriptor::FileDescriptor;
use crate::domain::entities::file_message::{FileMessageParam, MediaId, NotificationTarget};
use crate::domain::repositories::message_repository::MessageRepository;

/// グループ通知ユースケース
///
/// アップロード済みメディアを参照するファイル共有メッセージを組み立てて投稿する
pub struct NotifyGroupUseCase<S: MessageRepository> {
    message_repository: Arc<S>,
}

impl<S: MessageRepository> NotifyGroupUseCase<S> {
    /// 新しいユースケースを作成
    ///
    /// # Arguments
    ///
    /// * `message_repository` - メッセージリポジトリ
    pub fn new(message_repository: Arc<S>) -> Self {
        Self { message_repository }
    }

    /// ファイル共有メッセージを投稿する
    ///
    /// # Arguments
    ///
    /// * `token` - アクセストークン
    /// * `media_id` - アップロード成功で得たメディアID
    /// * `descriptor` - 送信対象ファイルの記述子
    /// * `target` - 投稿先（ロボットと対象グループ）
    ///
    /// # Errors
    ///
    /// メディアIDが空の場合、または送信に失敗した場合にエラーを返す
    pub async fn execute(
        &self,
        token: &AccessToken,
        media_id: &MediaId,
        descriptor: &FileDescriptor,
        target: &NotificationTarget,
    ) -> Result<()> {
        let param = FileMessageParam::new(media_id, descriptor)?;
        self.message_repository
            .send_file_message(token, &param, target)
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use std::sync::Mutex;

    struct MockMessageRepository {
        sent: Mutex<Vec<FileMessageParam>>,
    }

    impl MockMessageRepository {
        fn new() -> Self {
            Self {
                sent: Mutex::new(Vec::new()),
            }
        }
    }

    #[async_trait]
    impl MessageRepository for MockMessageRepository {
        async fn send_file_message(
            &self,
            _token: &AccessToken,
            param: &FileMessageParam,
            _target: &NotificationTarget,
        ) -> Result<()> {
            self.sent.lock().unwrap().push(param.clone());
            Ok(())
        }
    }

    struct FailingMessageRepository;

    #[async_trait]
    impl MessageRepository for FailingMessageRepository {
        async fn send_file_message(
            &self,
            _token: &AccessToken,
            _param: &FileMessageParam,
            _target: &NotificationTarget,
        ) -> Result<()> {
            Err(anyhow::anyhow!("group send rejected"))
        }
    }

    fn descriptor() -> FileDescriptor {
        FileDescriptor::from_path("/data/report.xlsx", "xlsx".to_string()).unwrap()
    }

    fn target() -> NotificationTarget {
        NotificationTarget::new("robot-001".to_string(), "cid-xyz".to_string()).unwrap()
    }

    #[tokio::test]
    async fn test_notify_group_sends_built_param() {
        let mock_repo = Arc::new(MockMessageRepository::new());
        let use_case = NotifyGroupUseCase::new(mock_repo.clone());

        let result = use_case
            .execute(
                &AccessToken::new("token-123"),
                &MediaId::new("@media123"),
                &descriptor(),
                &target(),
            )
            .await;

        assert!(result.is_ok());
        let sent = mock_repo.sent.lock().unwrap();
        assert_eq!(sent.len(), 1);
        assert_eq!(sent[0].media_id, "@media123");
        assert_eq!(sent[0].file_name, "report.xlsx");
        assert_eq!(sent[0].file_type, "xlsx");
    }

    #[tokio::test]
    async fn test_notify_group_rejects_empty_media_id() {
        let mock_repo = Arc::new(MockMessageRepository::new());
        let use_case = NotifyGroupUseCase::new(mock_repo.clone());

        let result = use_case
            .execute(
                &AccessToken::new("token-123"),
                &MediaId::new(""),
                &descriptor(),
                &target(),
            )
            .await;

        assert!(result.is_err());
        // 不正なパラメータでは送信そのものが行われない
        assert_eq!(mock_repo.sent.lock().unwrap().len(), 0);
    }

    #[tokio::test]
    async fn test_notify_group_failure_propagates() {
        let use_case = NotifyGroupUseCase::new(Arc::new(FailingMessageRepository));

        let result = use_case
            .execute(
                &AccessToken::new("token-123"),
                &MediaId::new("@media123"),
                &descriptor(),
                &target(),
            )
            .await;

        assert!(result.is_err());
    }
}
