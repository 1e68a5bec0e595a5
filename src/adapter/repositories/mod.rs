//! # Adapter Repositories
//!
//! Domain層のRepository traitに対するDingTalk API実装

pub mod http_media_repository;
pub mod http_message_repository;
pub mod http_token_repository;
