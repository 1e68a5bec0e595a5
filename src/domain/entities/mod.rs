//! # Domain Entities
//!
//! ビジネスエンティティとバリューオブジェクトを定義するモジュール
//!
//! ## エンティティ
//!
//! - **Credentials / AccessToken**: 認証情報とベアラートークン
//! - **FileDescriptor**: 送信対象のローカルファイル
//! - **MediaId / NotificationTarget / FileMessageParam**: ファイル共有メッセージの構成要素

pub mod credentials;
pub mod file_descriptor;
pub mod file_message;
