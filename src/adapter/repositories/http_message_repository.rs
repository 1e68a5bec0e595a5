//! # HTTP Message Repository Implementation
//!
//! MessageRepositoryのDingTalk API実装

use anyhow::{Context, Result};
use async_trait::async_trait;
use log::{debug, error};
use std::sync::Arc;

use crate::adapter::dingtalk::client::DingtalkApi;
use crate::adapter::dingtalk::models::GroupSendRequest;
use crate::domain::entities::credentials::AccessToken;
use crate::domain::entities::file_message::{FileMessageParam, NotificationTarget, FILE_MSG_KEY};
use crate::domain::error::DingtalkError;
use crate::domain::repositories::message_repository::MessageRepository;

/// DingTalkグループ送信エンドポイントを使うメッセージリポジトリ
pub struct HttpMessageRepository {
    api: Arc<dyn DingtalkApi>,
}

impl HttpMessageRepository {
    /// 新しいリポジトリを作成
    pub fn new(api: Arc<dyn DingtalkApi>) -> Self {
        Self { api }
    }
}

#[async_trait]
impl MessageRepository for HttpMessageRepository {
    async fn send_file_message(
        &self,
        token: &AccessToken,
        param: &FileMessageParam,
        target: &NotificationTarget,
    ) -> Result<()> {
        let msg_param = param
            .to_json()
            .context("Failed to serialize file message param")?;

        let request = GroupSendRequest {
            msg_param,
            msg_key: FILE_MSG_KEY.to_string(),
            robot_code: target.robot_code().to_string(),
            open_conversation_id: target.open_conversation_id().to_string(),
        };

        match self.api.group_send(token.as_str(), &request).await {
            Ok(response) => {
                if let Some(process_query_key) = response.process_query_key {
                    debug!("Group send accepted: process_query_key={}", process_query_key);
                }
                Ok(())
            }
            Err(err) => {
                // 診断ログを残した上で、元の原因を保持した型付きエラーとして返す
                error!("Failed to send file message: {:#}", err);
                Err(DingtalkError::Send(err.into()).into())
            }
        }
    }
}
