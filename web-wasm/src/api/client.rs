//! サーバーAPI呼び出し（fetch）
//!
//! レスポンスはステータスに関わらず本文を読み、`success` の有無で判定する。
//! 本文がJSONでない場合は通信エラー扱い。

use gloo::console;
use parts_master_common::api::{
    self, MasterDataResponse, MasterLoad, MasterUpload, MatchingOutcome, MatchingResponse,
    UploadMasterResponse,
};
use parts_master_common::{ClientConfig, Error, MatchResult, Result};
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::JsFuture;
use web_sys::{Blob, File, FormData, Request, RequestInit, RequestMode, Response};

/// JsValue を通信エラーに変換
pub fn js_error(value: JsValue) -> Error {
    let message = value
        .dyn_ref::<js_sys::Error>()
        .map(|e| String::from(e.message()))
        .or_else(|| value.as_string())
        .unwrap_or_else(|| format!("{:?}", value));
    Error::Transport(message)
}

async fn send(request: &Request) -> Result<Response> {
    let window = web_sys::window().ok_or_else(|| Error::Transport("window がありません".into()))?;
    let resp_value = JsFuture::from(window.fetch_with_request(request))
        .await
        .map_err(js_error)?;
    resp_value.dyn_into::<Response>().map_err(js_error)
}

async fn response_text(resp: &Response) -> Result<String> {
    let text = JsFuture::from(resp.text().map_err(js_error)?)
        .await
        .map_err(js_error)?;
    text.as_string()
        .ok_or_else(|| Error::Transport("レスポンスを文字列に変換できません".into()))
}

fn post_form(url: &str, form: &FormData) -> Result<Request> {
    let opts = RequestInit::new();
    opts.set_method("POST");
    opts.set_mode(RequestMode::Cors);
    opts.set_body(form);
    Request::new_with_str_and_init(url, &opts).map_err(js_error)
}

fn file_form(file: &File) -> Result<FormData> {
    let form = FormData::new().map_err(js_error)?;
    form.append_with_blob(api::FIELD_FILE, file)
        .map_err(js_error)?;
    Ok(form)
}

/// マスタをアップロードし、サーバーのメッセージを返す
pub async fn upload_master(config: &ClientConfig, upload: MasterUpload<File>) -> Result<String> {
    let url = config.endpoint(api::UPLOAD_MASTER);
    console::log!(format!("POST {} (header_row={})", url, upload.header_row));

    let form = file_form(&upload.file)?;
    form.append_with_str(api::FIELD_HEADER_ROW, &upload.header_row.to_string())
        .map_err(js_error)?;

    let resp = send(&post_form(&url, &form)?).await?;
    let body = response_text(&resp).await?;
    api::parse_response::<UploadMasterResponse>(&body)?.into_result()
}

/// マスタ全件を取得
pub async fn fetch_master(config: &ClientConfig) -> Result<MasterLoad> {
    let url = config.endpoint(api::MASTER_DATA);
    console::log!(format!("GET {}", url));

    let opts = RequestInit::new();
    opts.set_method("GET");
    opts.set_mode(RequestMode::Cors);
    let request = Request::new_with_str_and_init(&url, &opts).map_err(js_error)?;
    request
        .headers()
        .set("Accept", "application/json")
        .map_err(js_error)?;

    let resp = send(&request).await?;
    let body = response_text(&resp).await?;
    api::parse_response::<MasterDataResponse>(&body)?.into_load()
}

/// 照合ファイルをアップロード
pub async fn run_matching(config: &ClientConfig, file: File) -> Result<MatchingOutcome> {
    let url = config.endpoint(api::MATCHING);
    console::log!(format!("POST {} ({})", url, file.name()));

    let form = file_form(&file)?;
    let resp = send(&post_form(&url, &form)?).await?;
    let body = response_text(&resp).await?;
    api::parse_response::<MatchingResponse>(&body)?.into_outcome()
}

/// 照合結果をエクスポートし、Excelファイル本体を返す
pub async fn export_matching(config: &ClientConfig, results: &[MatchResult]) -> Result<Blob> {
    let url = config.endpoint(api::EXPORT_MATCHING);
    console::log!(format!("POST {} ({}件)", url, results.len()));

    let body = api::export_body(results)?;
    let opts = RequestInit::new();
    opts.set_method("POST");
    opts.set_mode(RequestMode::Cors);
    opts.set_body(&JsValue::from_str(&body));

    let request = Request::new_with_str_and_init(&url, &opts).map_err(js_error)?;
    request
        .headers()
        .set("Content-Type", "application/json")
        .map_err(js_error)?;

    let resp = send(&request).await?;
    if !resp.ok() {
        let body = response_text(&resp).await.unwrap_or_default();
        return Err(api::export_error(resp.status(), &body));
    }

    let blob = JsFuture::from(resp.blob().map_err(js_error)?)
        .await
        .map_err(js_error)?;
    blob.dyn_into::<Blob>().map_err(js_error)
}

#[cfg(all(target_arch = "wasm32", test))]
mod wasm_tests {
    use super::*;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    fn wasm_js_error_uses_error_message() {
        let value: JsValue = js_sys::Error::new("Failed to fetch").into();
        let error = js_error(value);
        assert_eq!(error.to_string(), "エラー: Failed to fetch");
    }

    #[wasm_bindgen_test]
    fn wasm_js_error_from_string() {
        let error = js_error(JsValue::from_str("boom"));
        assert!(matches!(error, Error::Transport(ref m) if m == "boom"));
    }
}
