//! # CLI Argument Parsing
//!
//! CLIの引数解析
//!
//! 旧来の「カンマ区切り6フィールドの位置引数」は廃止し、
//! 名前付きオプションと設定ファイルで同じ値を受け取る。

use clap::Parser;

/// DingTalkのロボット経由でファイルをグループチャットへ送信するCLI
#[derive(Parser, Debug, Clone, Default)]
#[command(name = "dingsend")]
#[command(about = "Upload a file to DingTalk and post it into a group chat", long_about = None)]
pub struct Args {
    /// DingTalk application key
    #[arg(long)]
    pub app_key: Option<String>,

    /// DingTalk application secret
    #[arg(long)]
    pub app_secret: Option<String>,

    /// Robot code of the posting bot
    #[arg(long)]
    pub robot_code: Option<String>,

    /// Open conversation ID of the target group chat
    #[arg(long)]
    pub open_conversation_id: Option<String>,

    /// Declared file type tag (e.g. xlsx, pdf); not derived from file content
    #[arg(long)]
    pub file_type: Option<String>,

    /// Path of the file to send
    #[arg(long)]
    pub file: Option<String>,

    /// Config file path (JSON with the same fields; CLI options take precedence)
    #[arg(short, long)]
    pub config: Option<String>,

    /// Dry run mode - don't actually send
    #[arg(long)]
    pub dry_run: bool,
}
