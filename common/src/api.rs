//! サーバーAPIとの契約
//!
//! エンドポイント・フォーム項目名・レスポンス形状を定義する。
//! 元サーバーはエラー時に HTTP 400 と `{"error": ...}` を返し `success` を含めないため、
//! `success` 欠落は失敗として扱い、ステータスコードに関わらず本文を読む。

use crate::error::{Error, Result};
use crate::message::{self, SELECT_FILE};
use crate::types::{MasterDataset, MasterItem, MatchResult};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

pub const UPLOAD_MASTER: &str = "/api/upload-master";
pub const MASTER_DATA: &str = "/api/master-data";
pub const MATCHING: &str = "/api/matching";
pub const EXPORT_MATCHING: &str = "/api/export-matching";

/// multipartのファイル項目名
pub const FIELD_FILE: &str = "file";
/// multipartのヘッダー行項目名
pub const FIELD_HEADER_ROW: &str = "header_row";

/// サーバーが受け付けるヘッダー行の範囲
pub const HEADER_ROW_MIN: u32 = 1;
pub const HEADER_ROW_MAX: u32 = 10;

/// アップロード可能な拡張子（ファイル選択の accept 属性）
pub const ACCEPTED_EXTENSIONS: &str = ".xlsx,.xls,.csv";

/// ヘッダー行入力を解釈する
///
/// 先頭の数字列だけを読み（`+` 符号は許す）、読めない・0以下の場合は `default` を使う。
pub fn parse_header_row(text: &str, default: u32) -> u32 {
    let trimmed = text.trim();
    let digits: String = trimmed
        .strip_prefix('+')
        .unwrap_or(trimmed)
        .chars()
        .take_while(|c| c.is_ascii_digit())
        .collect();

    match digits.parse::<u32>() {
        Ok(n) if n >= 1 => n,
        _ => default,
    }
}

/// ファイル未選択なら入力エラー
pub fn require_file<F>(file: Option<F>) -> Result<F> {
    file.ok_or_else(|| Error::Validation(SELECT_FILE.to_string()))
}

/// マスタアップロード要求（検証済み）
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MasterUpload<F> {
    pub file: F,
    pub header_row: u32,
}

impl<F> MasterUpload<F> {
    /// 入力を検証する。ファイル未選択はここで止まり、通信は発生しない。
    pub fn prepare(
        file: Option<F>,
        header_row_text: &str,
        default_header_row: u32,
    ) -> Result<Self> {
        let file = require_file(file)?;
        Ok(Self {
            file,
            header_row: parse_header_row(header_row_text, default_header_row),
        })
    }
}

/// レスポンス本文をパース
pub fn parse_response<T: DeserializeOwned>(body: &str) -> Result<T> {
    Ok(serde_json::from_str(body)?)
}

/// `/api/upload-master` のレスポンス
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct UploadMasterResponse {
    pub success: bool,
    pub message: Option<String>,
    pub count: Option<usize>,
    pub error: Option<String>,
}

impl UploadMasterResponse {
    /// 成功時はサーバーのメッセージを返す（無ければ件数から作る）
    pub fn into_result(self) -> Result<String> {
        if !self.success {
            return Err(Error::server(self.error));
        }
        match self.message {
            Some(text) if !text.trim().is_empty() => Ok(text),
            _ => Ok(message::master_uploaded(self.count)),
        }
    }
}

/// マスタ取得結果
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MasterLoad {
    Loaded(MasterDataset),
    /// 成功したがデータが空
    Empty,
}

/// `/api/master-data` のレスポンス
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct MasterDataResponse {
    pub success: bool,
    pub data: Option<Vec<MasterItem>>,
    pub total_finished_products: Option<usize>,
    pub error: Option<String>,
}

impl MasterDataResponse {
    pub fn into_load(self) -> Result<MasterLoad> {
        if !self.success {
            return Err(Error::server(self.error));
        }

        match self.data {
            Some(items) if !items.is_empty() => {
                let total = self.total_finished_products.unwrap_or(items.len());
                Ok(MasterLoad::Loaded(MasterDataset::new(items, total)))
            }
            _ => Ok(MasterLoad::Empty),
        }
    }
}

/// 照合結果（サーバー報告の件数つき）
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MatchingOutcome {
    pub matched: usize,
    pub unmatched: usize,
    pub total: usize,
    pub results: Vec<MatchResult>,
}

/// `/api/matching` のレスポンス
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct MatchingResponse {
    pub success: bool,
    pub matched: Option<usize>,
    pub unmatched: Option<usize>,
    pub total: Option<usize>,
    pub results: Vec<MatchResult>,
    pub error: Option<String>,
}

impl MatchingResponse {
    pub fn into_outcome(self) -> Result<MatchingOutcome> {
        if !self.success {
            return Err(Error::server(self.error));
        }

        let matched = self
            .matched
            .unwrap_or_else(|| self.results.iter().filter(|r| r.matched).count());
        let unmatched = self
            .unmatched
            .unwrap_or_else(|| self.results.iter().filter(|r| !r.matched).count());
        let total = self.total.unwrap_or(self.results.len());

        Ok(MatchingOutcome {
            matched,
            unmatched,
            total,
            results: self.results,
        })
    }
}

/// `/api/export-matching` のリクエスト本文
#[derive(Debug, Serialize)]
pub struct ExportRequest<'a> {
    pub results: &'a [MatchResult],
}

/// エクスポート要求のJSON本文
pub fn export_body(results: &[MatchResult]) -> Result<String> {
    Ok(serde_json::to_string(&ExportRequest { results })?)
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct ExportErrorResponse {
    error: Option<String>,
}

/// エクスポート失敗（2xx以外）のエラー
///
/// 本文が `{"error": ...}` ならその文言、それ以外はステータスコード。
pub fn export_error(status: u16, body: &str) -> Error {
    match serde_json::from_str::<ExportErrorResponse>(body) {
        Ok(ExportErrorResponse { error: Some(text) }) if !text.trim().is_empty() => {
            Error::Server(text)
        }
        _ => Error::Transport(format!("HTTP {}", status)),
    }
}
