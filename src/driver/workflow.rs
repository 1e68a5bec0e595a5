//! # Workflow Orchestration
//!
//! ワークフローのオーケストレーション
//!
//! 認証 → アップロード → 通知 の3ステップを固定順序で実行する。
//! 状態は一切持たず、どのステップの失敗も実行全体を中断させる。

use anyhow::Result;
use log::info;

use std::sync::Arc;

use crate::adapter::config::Config;
use crate::adapter::dingtalk::client::{DingtalkApi, RealDingtalkClient};
use crate::adapter::repositories::http_media_repository::HttpMediaRepository;
use crate::adapter::repositories::http_message_repository::HttpMessageRepository;
use crate::adapter::repositories::http_token_repository::HttpTokenRepository;
use crate::application::dto::send_config::SendConfig;
use crate::application::use_cases::acquire_token::AcquireTokenUseCase;
use crate::application::use_cases::notify_group::NotifyGroupUseCase;
use crate::application::use_cases::upload_media::UploadMediaUseCase;
use crate::domain::entities::credentials::{AccessToken, Credentials};
use crate::domain::entities::file_descriptor::FileDescriptor;
use crate::domain::entities::file_message::{MediaId, NotificationTarget};
use crate::domain::error::DingtalkError;
use crate::domain::repositories::media_repository::MediaRepository;
use crate::domain::repositories::message_repository::MessageRepository;
use crate::domain::repositories::token_repository::TokenRepository;

use super::cli::Args;

/// CLI引数と設定ファイルをマージして送信設定を作る
///
/// CLI引数が設定ファイルより優先される。必須フィールドが
/// どちらにも無い（または空の）場合は明示的なエラーになる。
pub fn resolve_send_config(args: &Args, file_config: &Config) -> Result<SendConfig, DingtalkError> {
    fn pick(
        cli: &Option<String>,
        file: &Option<String>,
        field: &'static str,
    ) -> Result<String, DingtalkError> {
        cli.clone()
            .filter(|value| !value.is_empty())
            .or_else(|| file.clone().filter(|value| !value.is_empty()))
            .ok_or(DingtalkError::InvalidInput { field })
    }

    Ok(SendConfig::new(
        pick(&args.app_key, &file_config.app_key, "app_key")?,
        pick(&args.app_secret, &file_config.app_secret, "app_secret")?,
        pick(&args.robot_code, &file_config.robot_code, "robot_code")?,
        pick(
            &args.open_conversation_id,
            &file_config.open_conversation_id,
            "open_conversation_id",
        )?,
        pick(&args.file_type, &file_config.file_type, "file_type")?,
        pick(&args.file, &file_config.file_path, "file_path")?,
    ))
}

/// 後続処理向けのサマリー行（stdoutに出すのはこの1行だけ）
pub fn format_summary(
    token: &AccessToken,
    descriptor: &FileDescriptor,
    media_id: &MediaId,
) -> String {
    format!(
        "{},{},{},{}",
        token.as_str(),
        descriptor.directory(),
        descriptor.file_name(),
        media_id.as_str()
    )
}

/// File Send Workflow
pub struct FileSendWorkflow<T: TokenRepository, M: MediaRepository, S: MessageRepository> {
    acquire_token_use_case: AcquireTokenUseCase<T>,
    upload_media_use_case: UploadMediaUseCase<M>,
    notify_group_use_case: NotifyGroupUseCase<S>,
}

/// 本番用のHTTPリポジトリ実装で構成されたワークフロー
pub type HttpFileSendWorkflow =
    FileSendWorkflow<HttpTokenRepository, HttpMediaRepository, HttpMessageRepository>;

impl HttpFileSendWorkflow {
    /// Create a new workflow instance with dependency injection
    pub fn new() -> Result<Self> {
        let api: Arc<dyn DingtalkApi> = Arc::new(RealDingtalkClient::new()?);

        Ok(Self::with_repositories(
            Arc::new(HttpTokenRepository::new(api.clone())),
            Arc::new(HttpMediaRepository::new(api.clone())),
            Arc::new(HttpMessageRepository::new(api)),
        ))
    }
}

impl<T: TokenRepository, M: MediaRepository, S: MessageRepository> FileSendWorkflow<T, M, S> {
    /// リポジトリ実装を差し替えてワークフローを作成（テスト用）
    pub fn with_repositories(
        token_repository: Arc<T>,
        media_repository: Arc<M>,
        message_repository: Arc<S>,
    ) -> Self {
        Self {
            acquire_token_use_case: AcquireTokenUseCase::new(token_repository),
            upload_media_use_case: UploadMediaUseCase::new(media_repository),
            notify_group_use_case: NotifyGroupUseCase::new(message_repository),
        }
    }

    /// Execute the send workflow
    pub async fn execute(&self, config: &SendConfig, dry_run: bool) -> Result<()> {
        info!("Starting DingTalk file sender...");
        info!("Dry run: {}", dry_run);

        // 入力の検証はリモート呼び出しより前に全て終わらせる
        let credentials = Credentials::new(config.app_key.clone(), config.app_secret.clone())?;
        let target = NotificationTarget::new(
            config.robot_code.clone(),
            config.open_conversation_id.clone(),
        )?;
        let file_path = shellexpand::tilde(&config.file_path).to_string();
        let descriptor = FileDescriptor::from_path(&file_path, config.file_type.clone())?;

        if dry_run {
            println!("✓ Dry-run mode (not actually sending)");
            println!(
                "  Would send {} ({}) to conversation {} via robot {}",
                descriptor.file_name(),
                descriptor.file_type(),
                target.open_conversation_id(),
                target.robot_code()
            );
            return Ok(());
        }

        let token = self.acquire_token_use_case.execute(&credentials).await?;
        info!("Acquired access token");

        let media_id = self
            .upload_media_use_case
            .execute(&token, &descriptor)
            .await?;
        info!("Uploaded {} as media {}", descriptor.file_name(), media_id);

        self.notify_group_use_case
            .execute(&token, &media_id, &descriptor, &target)
            .await?;
        info!(
            "Posted file message to conversation {}",
            target.open_conversation_id()
        );

        println!("{}", format_summary(&token, &descriptor, &media_id));

        Ok(())
    }
}
