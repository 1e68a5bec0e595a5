//! # Message Repository Trait
//!
//! ファイル共有メッセージの送信を抽象化

use anyhow::Result;
use async_trait::async_trait;

use crate::domain::entities::credentials::AccessToken;
use crate::domain::entities::file_message::{FileMessageParam, NotificationTarget};

/// メッセージリポジトリ
///
/// グループチャットへのファイル共有メッセージ投稿を担当する
#[async_trait]
pub trait MessageRepository: Send + Sync {
    /// ファイル共有メッセージを送信する
    ///
    /// # Arguments
    ///
    /// * `token` - アクセストークン
    /// * `param` - msgParamペイロード
    /// * `target` - 投稿先（ロボットと対象グループ）
    ///
    /// # Errors
    ///
    /// 送信に失敗した場合、元の原因を保持した`DingtalkError::Send`を返す
    async fn send_file_message(
        &self,
        token: &AccessToken,
        param: &FileMessageParam,
        target: &NotificationTarget,
    ) -> Result<()>;
}
