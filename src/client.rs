//! サーバーAPIクライアント
//!
//! コマンドは `MasterApi` 越しにサーバーへアクセスする。
//! エラーはWeb版と同じ `parts_master_common::Error` で返す。

use parts_master_common::api::{
    self, MasterDataResponse, MasterLoad, MasterUpload, MatchingOutcome, MatchingResponse,
    UploadMasterResponse,
};
use parts_master_common::{ClientConfig, Error, MatchResult, Result};
use reqwest::multipart::{Form, Part};
use std::path::{Path, PathBuf};
use std::time::Duration;

#[allow(async_fn_in_trait)]
pub trait MasterApi {
    /// マスタをアップロードし、サーバーのメッセージを返す
    async fn upload_master(&self, upload: &MasterUpload<PathBuf>) -> Result<String>;

    async fn fetch_master(&self) -> Result<MasterLoad>;

    async fn run_matching(&self, file: &Path) -> Result<MatchingOutcome>;

    /// 照合結果をエクスポートし、Excelファイルの中身を返す
    async fn export_matching(&self, results: &[MatchResult]) -> Result<Vec<u8>>;
}

/// reqwestによる実装
pub struct HttpClient {
    http: reqwest::Client,
    config: ClientConfig,
    verbose: bool,
}

impl HttpClient {
    pub fn new(config: ClientConfig, verbose: bool) -> crate::error::Result<Self> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_seconds))
            .build()?;
        Ok(Self { http, config, verbose })
    }

    fn log(&self, line: String) {
        if self.verbose {
            eprintln!("  → {}", line);
        }
    }

    async fn file_part(path: &Path) -> Result<Part> {
        let bytes = tokio::fs::read(path)
            .await
            .map_err(|e| Error::Transport(format!("{}: {}", path.display(), e)))?;
        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| "upload".to_string());
        Ok(Part::bytes(bytes).file_name(name))
    }

    /// multipartを送り、ステータスに関わらず本文を返す
    async fn post_form(&self, path: &str, form: Form) -> Result<String> {
        let url = self.config.endpoint(path);
        self.log(format!("POST {}", url));

        let resp = self
            .http
            .post(&url)
            .multipart(form)
            .send()
            .await
            .map_err(transport)?;
        self.log(format!("HTTP {}", resp.status()));
        resp.text().await.map_err(transport)
    }
}

fn transport(error: reqwest::Error) -> Error {
    Error::Transport(error.to_string())
}

impl MasterApi for HttpClient {
    async fn upload_master(&self, upload: &MasterUpload<PathBuf>) -> Result<String> {
        let form = Form::new()
            .part(api::FIELD_FILE, Self::file_part(&upload.file).await?)
            .text(api::FIELD_HEADER_ROW, upload.header_row.to_string());

        let body = self.post_form(api::UPLOAD_MASTER, form).await?;
        api::parse_response::<UploadMasterResponse>(&body)?.into_result()
    }

    async fn fetch_master(&self) -> Result<MasterLoad> {
        let url = self.config.endpoint(api::MASTER_DATA);
        self.log(format!("GET {}", url));

        let resp = self
            .http
            .get(&url)
            .header(reqwest::header::ACCEPT, "application/json")
            .send()
            .await
            .map_err(transport)?;
        self.log(format!("HTTP {}", resp.status()));

        let body = resp.text().await.map_err(transport)?;
        api::parse_response::<MasterDataResponse>(&body)?.into_load()
    }

    async fn run_matching(&self, file: &Path) -> Result<MatchingOutcome> {
        let form = Form::new().part(api::FIELD_FILE, Self::file_part(file).await?);
        let body = self.post_form(api::MATCHING, form).await?;
        api::parse_response::<MatchingResponse>(&body)?.into_outcome()
    }

    async fn export_matching(&self, results: &[MatchResult]) -> Result<Vec<u8>> {
        let url = self.config.endpoint(api::EXPORT_MATCHING);
        self.log(format!("POST {} ({}件)", url, results.len()));

        let resp = self
            .http
            .post(&url)
            .header(reqwest::header::CONTENT_TYPE, "application/json")
            .body(api::export_body(results)?)
            .send()
            .await
            .map_err(transport)?;

        let status = resp.status();
        if !status.is_success() {
            let body = resp.text().await.unwrap_or_default();
            return Err(api::export_error(status.as_u16(), &body));
        }

        let bytes = resp.bytes().await.map_err(transport)?;
        Ok(bytes.to_vec())
    }
}
