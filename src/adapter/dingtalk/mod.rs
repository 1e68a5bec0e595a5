//! # DingTalk API Integration
//!
//! DingTalk APIクライアントとモデル定義

pub mod client;
pub mod models;
