//! ページ埋め込み設定の読み込み
//!
//! `<script id="app-config" type="application/json">` があればその内容を使う。
//! 無い・空・不正な場合は既定値。

use gloo::console;
use parts_master_common::ClientConfig;

pub const CONFIG_ELEMENT_ID: &str = "app-config";

pub fn load_config() -> ClientConfig {
    let content = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.get_element_by_id(CONFIG_ELEMENT_ID))
        .and_then(|e| e.text_content());

    match content {
        Some(text) if !text.trim().is_empty() => match ClientConfig::from_json(&text) {
            Ok(config) => config,
            Err(e) => {
                console::error!(format!("設定を読み込めません（既定値を使用）: {}", e));
                ClientConfig::default()
            }
        },
        _ => ClientConfig::default(),
    }
}

#[cfg(all(target_arch = "wasm32", test))]
mod wasm_tests {
    use super::*;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    fn wasm_load_config_defaults_without_element() {
        let config = load_config();
        assert_eq!(config, ClientConfig::default());
    }

    #[wasm_bindgen_test]
    fn wasm_load_config_from_script_element() {
        let document = web_sys::window().unwrap().document().unwrap();
        let script = document.create_element("script").unwrap();
        script.set_id(CONFIG_ELEMENT_ID);
        script.set_text_content(Some(r#"{"message_timeout_ms": 1000}"#));
        document.body().unwrap().append_child(&script).unwrap();

        let config = load_config();
        assert_eq!(config.message_timeout_ms, 1000);

        script.remove();
    }
}
