//! エラー型定義
//!
//! 入力検証エラー・サーバー報告エラー・通信エラーを区別する。
//! 画面上は Server と Transport を同じように表示するが、
//! 表示文言（「エラー: 」接頭辞の有無）が異なる。

use thiserror::Error;

/// サーバーが error 文字列を返さなかった場合の表示
pub const UNKNOWN_SERVER_ERROR: &str = "不明なエラー";

/// 共通エラー型
#[derive(Error, Debug)]
pub enum Error {
    /// 入力検証エラー（ネットワークには到達しない）
    #[error("{0}")]
    Validation(String),

    /// サーバーが `success: false` で返したエラー（そのまま表示）
    #[error("{0}")]
    Server(String),

    /// 通信エラー
    #[error("エラー: {0}")]
    Transport(String),

    /// レスポンスのJSON解析エラー
    #[error("エラー: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Config error: {0}")]
    Config(String),
}

impl Error {
    /// サーバーのerror文字列からエラーを作る（欠落時は既定文言）
    pub fn server(message: Option<String>) -> Self {
        match message {
            Some(text) if !text.trim().is_empty() => Error::Server(text),
            _ => Error::Server(UNKNOWN_SERVER_ERROR.to_string()),
        }
    }
}

/// Result型エイリアス
pub type Result<T> = std::result::Result<T, Error>;
