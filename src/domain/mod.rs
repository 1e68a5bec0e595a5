//! # Domain Layer
//!
//! このモジュールはビジネスの核心的なルールとエンティティを定義します。
//!
//! ## 特徴
//!
//! - 外部依存を持たない（Rust標準ライブラリと最小限の依存のみ）
//! - HTTPやDingTalk APIの詳細について何も知らない
//! - 純粋なビジネスロジック
//!
//! ## 構成要素
//!
//! - **entities**: ビジネスエンティティ（Credentials, FileDescriptorなど）
//! - **repositories**: Repository trait（インターフェース定義のみ）
//! - **error**: エラー分類

pub mod entities;
pub mod error;
pub mod repositories;
