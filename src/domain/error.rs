//! # Domain Errors
//!
//! 実行を中断させるエラー分類
//!
//! リトライは行わない。すべてのエラーは1回の実行に対して致命的であり、
//! 再実行の判断は呼び出し元（スケジューラやCI）に委ねる。

use thiserror::Error;

/// DingTalkファイル送信のエラー分類
#[derive(Debug, Error)]
pub enum DingtalkError {
    /// 必須フィールドが欠落または空
    #[error("invalid input: {field} must not be empty")]
    InvalidInput { field: &'static str },

    /// トークン取得のレスポンスは返ったが、使用可能なトークンが含まれない
    #[error("access token response contained no usable token")]
    EmptyToken,

    /// HTTPレベルの失敗（非2xxステータス）
    #[error("{operation} failed with status {status}: {body}")]
    Transport {
        operation: &'static str,
        status: u16,
        body: String,
    },

    /// DingTalk APIがエラーコードを返した（HTTPは2xx）
    #[error("{operation} rejected by API (errcode {code}): {message}")]
    Api {
        operation: &'static str,
        code: i64,
        message: String,
    },

    /// ファイル共有メッセージの送信失敗（元の原因を保持する）
    #[error("failed to send file message")]
    Send(#[source] Box<dyn std::error::Error + Send + Sync>),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_input_display() {
        let err = DingtalkError::InvalidInput { field: "app_key" };
        assert_eq!(err.to_string(), "invalid input: app_key must not be empty");
    }

    #[test]
    fn test_transport_display() {
        let err = DingtalkError::Transport {
            operation: "media upload",
            status: 403,
            body: "forbidden".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "media upload failed with status 403: forbidden"
        );
    }

    #[test]
    fn test_send_carries_source() {
        use std::error::Error;

        let cause: Box<dyn std::error::Error + Send + Sync> = "connection reset".into();
        let err = DingtalkError::Send(cause);
        assert!(err.source().is_some());
        assert_eq!(err.source().unwrap().to_string(), "connection reset");
    }
}
