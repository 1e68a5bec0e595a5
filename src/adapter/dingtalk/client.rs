//! # DingTalk Client Abstractions
//!
//! クライアントの抽象化と実装

use anyhow::{Context, Result};
use async_trait::async_trait;
use reqwest::{multipart, Client, Response};
use std::time::Duration;

#[cfg(test)]
use mockall::automock;

use crate::domain::error::DingtalkError;

use super::models::{
    AccessTokenRequest, AccessTokenResponse, GroupSendRequest, GroupSendResponse,
    MediaUploadResponse,
};

/// v1.0系エンドポイントのベースURL
pub const DEFAULT_API_BASE: &str = "https://api.dingtalk.com";
/// 旧oapi系エンドポイントのベースURL（メディアアップロード用）
pub const DEFAULT_OAPI_BASE: &str = "https://oapi.dingtalk.com";

// 無応答のエンドポイントでプロセスが無期限に待たないようにする
const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Trait for DingTalk API operations
/// This enables mocking in tests while using the real client in production
#[cfg_attr(test, automock)]
#[async_trait]
pub trait DingtalkApi: Send + Sync {
    /// アクセストークンを取得する
    async fn acquire_token(&self, request: &AccessTokenRequest) -> Result<AccessTokenResponse>;

    /// ファイルのバイト列をメディアとしてアップロードする
    async fn upload_media(
        &self,
        access_token: &str,
        file_name: &str,
        bytes: Vec<u8>,
    ) -> Result<MediaUploadResponse>;

    /// グループチャットへメッセージを送信する
    async fn group_send(
        &self,
        access_token: &str,
        request: &GroupSendRequest,
    ) -> Result<GroupSendResponse>;
}

/// Real DingTalk client implementing DingtalkApi over HTTP
pub struct RealDingtalkClient {
    http: Client,
    api_base: String,
    oapi_base: String,
}

impl RealDingtalkClient {
    /// 本番エンドポイントを使うクライアントを作成
    pub fn new() -> Result<Self> {
        Self::with_base_urls(DEFAULT_API_BASE, DEFAULT_OAPI_BASE)
    }

    /// ベースURLを指定してクライアントを作成（テスト用）
    pub fn with_base_urls(api_base: &str, oapi_base: &str) -> Result<Self> {
        let http = Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .context("Failed to build HTTP client")?;

        Ok(Self {
            http,
            api_base: api_base.trim_end_matches('/').to_string(),
            oapi_base: oapi_base.trim_end_matches('/').to_string(),
        })
    }

    /// 非2xxレスポンスを型付きのTransportエラーに変換する
    async fn check_status(operation: &'static str, response: Response) -> Result<Response> {
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }

        let body = response
            .text()
            .await
            .unwrap_or_else(|_| "Unknown error".to_string());
        Err(DingtalkError::Transport {
            operation,
            status: status.as_u16(),
            body,
        }
        .into())
    }
}

#[async_trait]
impl DingtalkApi for RealDingtalkClient {
    async fn acquire_token(&self, request: &AccessTokenRequest) -> Result<AccessTokenResponse> {
        let url = format!("{}/v1.0/oauth2/accessToken", self.api_base);

        let response = self
            .http
            .post(&url)
            .json(request)
            .send()
            .await
            .context("Access token request failed")?;

        let response = Self::check_status("access token request", response).await?;
        response
            .json()
            .await
            .context("Failed to parse access token response")
    }

    async fn upload_media(
        &self,
        access_token: &str,
        file_name: &str,
        bytes: Vec<u8>,
    ) -> Result<MediaUploadResponse> {
        let url = format!("{}/media/upload", self.oapi_base);

        // 固定のメディア種別 "file" とファイル本体のmultipartフォーム
        let part = multipart::Part::bytes(bytes).file_name(file_name.to_string());
        let form = multipart::Form::new().text("type", "file").part("media", part);

        let response = self
            .http
            .post(&url)
            .query(&[("access_token", access_token)])
            .multipart(form)
            .send()
            .await
            .context("Media upload request failed")?;

        let response = Self::check_status("media upload", response).await?;
        response
            .json()
            .await
            .context("Failed to parse media upload response")
    }

    async fn group_send(
        &self,
        access_token: &str,
        request: &GroupSendRequest,
    ) -> Result<GroupSendResponse> {
        let url = format!("{}/v1.0/robot/groupMessages/send", self.api_base);

        let response = self
            .http
            .post(&url)
            .header("x-acs-dingtalk-access-token", access_token)
            .json(request)
            .send()
            .await
            .context("Group send request failed")?;

        let response = Self::check_status("group send", response).await?;
        response
            .json()
            .await
            .context("Failed to parse group send response")
    }
}
