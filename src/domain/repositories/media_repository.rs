//! # Media Repository Trait
//!
//! ファイルのアップロードを抽象化

use anyhow::Result;
use async_trait::async_trait;

use crate::domain::entities::credentials::AccessToken;
use crate::domain::entities::file_descriptor::FileDescriptor;
use crate::domain::entities::file_message::MediaId;

/// メディアリポジトリ
///
/// ローカルファイルをアップロードし、メディアIDを受け取る
#[async_trait]
pub trait MediaRepository: Send + Sync {
    /// ファイルをアップロードする
    ///
    /// # Arguments
    ///
    /// * `token` - アクセストークン
    /// * `descriptor` - 送信対象ファイルの記述子
    ///
    /// # Returns
    ///
    /// アップロードされたコンテンツを参照するメディアID
    ///
    /// # Errors
    ///
    /// ファイルの読み込み、またはアップロードに失敗した場合にエラーを返す
    async fn upload_file(&self, token: &AccessToken, descriptor: &FileDescriptor)
        -> Result<MediaId>;
}
