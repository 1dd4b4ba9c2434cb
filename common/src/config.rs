//! クライアント設定
//!
//! Web版はページ内の `<script id="app-config">`、CLI版は設定ファイルから読み込む。
//! すべての項目に既定値があり、省略した項目は既定値で補われる。

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};

pub const DEFAULT_EXPORT_FILE_NAME: &str = "matching_results.xlsx";
pub const DEFAULT_MESSAGE_TIMEOUT_MS: u32 = 5000;
pub const DEFAULT_TIMEOUT_SECONDS: u64 = 120;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ClientConfig {
    /// APIのベースURL（空文字は同一オリジン）
    pub api_base: String,
    /// エクスポートファイル名
    pub export_file_name: String,
    /// 成功メッセージを自動で消すまでの時間
    pub message_timeout_ms: u32,
    /// ヘッダー行の初期値
    pub default_header_row: u32,
    /// リクエストタイムアウト（CLIのみ）
    pub timeout_seconds: u64,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            api_base: String::new(),
            export_file_name: DEFAULT_EXPORT_FILE_NAME.to_string(),
            message_timeout_ms: DEFAULT_MESSAGE_TIMEOUT_MS,
            default_header_row: 1,
            timeout_seconds: DEFAULT_TIMEOUT_SECONDS,
        }
    }
}

impl ClientConfig {
    pub fn from_json(content: &str) -> Result<Self> {
        let config: ClientConfig = serde_json::from_str(content)
            .map_err(|e| Error::Config(format!("設定の解析に失敗: {}", e)))?;
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<()> {
        if self.export_file_name.trim().is_empty() {
            return Err(Error::Config("export_file_name が空です".into()));
        }
        if self.default_header_row == 0 {
            return Err(Error::Config("default_header_row は1以上で指定してください".into()));
        }
        Ok(())
    }

    /// エンドポイントの完全なURL
    pub fn endpoint(&self, path: &str) -> String {
        format!("{}{}", self.api_base.trim_end_matches('/'), path)
    }
}
