//! # Dingsend
//!
//! DingTalkのロボット経由でローカルファイルをグループチャットへ送信するツール
//!
//! 認証 → アップロード → 通知 の3つのリモート呼び出しを固定順序で実行する、
//! 状態を持たない単発実行のパイプライン。
//!
//! このプロジェクトはクリーンアーキテクチャを採用しており、以下の4層で構成されています：
//!
//! - **Domain層**: ビジネスの核心的なルールとエンティティ（外部依存なし）
//! - **Application層**: アプリケーション固有のビジネスフロー（ユースケース）
//! - **Adapter層**: 外部システムとの統合（DingTalk API, 設定ファイル等）
//! - **Driver層**: CLI/UI、依存性注入

// coverage_nightly cfg が設定されている場合のみ coverage_attribute を有効化
// カバレッジ計測時に外部サービス依存コードを除外するために使用
#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

// Domain層（純粋なビジネスロジック）
pub mod domain;

// Application層（ユースケース）
pub mod application;

// Adapter層（Infrastructure）
pub mod adapter;

// Driver層（Presentation）
pub mod driver;
