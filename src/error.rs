use thiserror::Error;

#[derive(Error, Debug)]
pub enum PartsMasterError {
    #[error("設定エラー: {0}")]
    Config(String),

    #[error("ファイルが見つかりません: {0}")]
    FileNotFound(String),

    /// 画面表示と同じ文言で失敗を伝える
    #[error("{0}")]
    Failed(String),

    #[error(transparent)]
    Client(#[from] parts_master_common::Error),

    #[error("HTTPクライアントの初期化に失敗: {0}")]
    Http(#[from] reqwest::Error),

    #[error("JSON解析エラー: {0}")]
    JsonParse(#[from] serde_json::Error),

    #[error("IOエラー: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, PartsMasterError>;
