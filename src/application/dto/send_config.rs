//! # SendConfig DTO
//!
//! ファイル送信に必要な設定値のData Transfer Object

/// ファイル送信設定
///
/// CLI引数と設定ファイルをマージした、検証済みの実行時設定。
/// 元の「カンマ区切り6フィールド文字列」の置き換えであり、
/// 全フィールドが名前付きで必須。
#[derive(Debug, Clone)]
pub struct SendConfig {
    /// DingTalkアプリのAppKey
    pub app_key: String,
    /// DingTalkアプリのAppSecret
    pub app_secret: String,
    /// メッセージを投稿するロボットのコード
    pub robot_code: String,
    /// 投稿先グループチャットのオープン会話ID
    pub open_conversation_id: String,
    /// 申告するファイルタイプ（内容からは推定しない）
    pub file_type: String,
    /// 送信するファイルのフルパス
    pub file_path: String,
}

impl SendConfig {
    /// 新しい送信設定を作成
    pub fn new(
        app_key: String,
        app_secret: String,
        robot_code: String,
        open_conversation_id: String,
        file_type: String,
        file_path: String,
    ) -> Self {
        Self {
            app_key,
            app_secret,
            robot_code,
            open_conversation_id,
            file_type,
            file_path,
        }
    }
}
