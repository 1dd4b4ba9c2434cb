//! マスタアップロードコンポーネント

use gloo::console;
use leptos::html::Input;
use leptos::prelude::*;
use leptos::task::spawn_local;
use parts_master_common::api::{self, MasterUpload};
use parts_master_common::{ClientConfig, StatusMessage};

use crate::api::client;
use crate::components::status_line::{MessageSlot, StatusLine};

#[component]
pub fn UploadPanel<F>(config: StoredValue<ClientConfig>, on_uploaded: F) -> impl IntoView
where
    F: Fn() + 'static + Clone,
{
    let file_input: NodeRef<Input> = NodeRef::new();
    let header_input: NodeRef<Input> = NodeRef::new();
    let slot = MessageSlot::new(config.with_value(|c| c.message_timeout_ms));
    let default_header_row = config.with_value(|c| c.default_header_row);

    let on_upload = move |_| {
        let file = file_input
            .get()
            .and_then(|input| input.files())
            .and_then(|files| files.get(0));
        let header_text = header_input.get().map(|i| i.value()).unwrap_or_default();

        let upload = match MasterUpload::prepare(file, &header_text, default_header_row) {
            Ok(upload) => upload,
            Err(e) => {
                slot.show(StatusMessage::from(&e));
                return;
            }
        };

        let on_uploaded = on_uploaded.clone();
        spawn_local(async move {
            let cfg = config.get_value();
            match client::upload_master(&cfg, upload).await {
                Ok(message) => {
                    slot.show(StatusMessage::success(message));
                    if let Some(input) = file_input.get() {
                        input.set_value("");
                    }
                    // マスタ閲覧タブのデータを更新
                    on_uploaded();
                }
                Err(e) => {
                    console::error!(format!("マスタアップロード失敗: {}", e));
                    slot.show(StatusMessage::from(&e));
                }
            }
        });
    };

    view! {
        <div class="upload-section">
            <h2>"部品展開マスタのアップロード"</h2>
            <div class="form-group">
                <label for="master-file">"マスタファイル（Excel / CSV）"</label>
                <input
                    type="file"
                    id="master-file"
                    accept=api::ACCEPTED_EXTENSIONS
                    node_ref=file_input
                />
            </div>
            <div class="form-group">
                <label for="header-row">"ヘッダー行"</label>
                <input
                    type="number"
                    id="header-row"
                    min=api::HEADER_ROW_MIN.to_string()
                    max=api::HEADER_ROW_MAX.to_string()
                    value=default_header_row.to_string()
                    node_ref=header_input
                />
            </div>
            <button id="upload-btn" class="btn btn-primary" on:click=on_upload>
                "アップロード"
            </button>
            <StatusLine slot=slot id="upload-message" />
        </div>
    }
}
