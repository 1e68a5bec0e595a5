//! # Use Cases
//!
//! アプリケーションのビジネスフロー（ユースケース）
//!
//! ## ユースケース
//!
//! - **AcquireTokenUseCase**: アクセストークンの取得と空トークン検出
//! - **UploadMediaUseCase**: ファイルのアップロード
//! - **NotifyGroupUseCase**: ファイル共有メッセージの投稿

pub mod acquire_token;
pub mod notify_group;
pub mod upload_media;
