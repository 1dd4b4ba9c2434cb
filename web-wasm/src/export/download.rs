//! ファイルダウンロード
//!
//! Blob から一時URLを作り、非表示のリンクをクリックして保存させる。

use crate::api::client::js_error;
use parts_master_common::{Error, Result};
use wasm_bindgen::JsCast;
use web_sys::{Blob, HtmlAnchorElement, Url};

pub fn download_blob(blob: &Blob, file_name: &str) -> Result<()> {
    let document = web_sys::window()
        .and_then(|w| w.document())
        .ok_or_else(|| Error::Transport("document がありません".into()))?;
    let body = document
        .body()
        .ok_or_else(|| Error::Transport("body がありません".into()))?;

    let url = Url::create_object_url_with_blob(blob).map_err(js_error)?;

    let anchor: HtmlAnchorElement = document
        .create_element("a")
        .map_err(js_error)?
        .dyn_into()
        .map_err(|e| js_error(e.into()))?;
    anchor.set_href(&url);
    anchor.set_download(file_name);

    body.append_child(&anchor).map_err(js_error)?;
    anchor.click();
    body.remove_child(&anchor).map_err(js_error)?;

    Url::revoke_object_url(&url).map_err(js_error)
}
