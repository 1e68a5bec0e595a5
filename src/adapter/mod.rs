//! # Adapter Layer
//!
//! 外部システム（DingTalk API, ファイルシステム）との統合

pub mod config;
pub mod dingtalk;
pub mod repositories;
