//! Dingsend - DingTalk Robot File Sender
//!
//! ローカルファイルをDingTalkにアップロードし、グループチャットへファイル共有メッセージを投稿

// coverage_nightly cfg が設定されている場合のみ coverage_attribute を有効化
#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

use anyhow::Result;
use clap::Parser;

use dingsend::adapter::config::Config;
use dingsend::driver::{resolve_send_config, Args, HttpFileSendWorkflow};

#[cfg_attr(coverage_nightly, coverage(off))]
#[tokio::main]
async fn main() -> Result<()> {
    env_logger::init();

    let args = Args::parse();

    // Load configuration file if given; CLI options take precedence
    let file_config = match &args.config {
        Some(path) => Config::load(path)?,
        None => Config::default(),
    };
    let send_config = resolve_send_config(&args, &file_config)?;

    // Create workflow with injected dependencies
    let workflow = HttpFileSendWorkflow::new()?;

    workflow.execute(&send_config, args.dry_run).await
}
