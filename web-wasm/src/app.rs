//! メインアプリケーションコンポーネント

use gloo::console;
use leptos::prelude::*;
use leptos::task::spawn_local;
use parts_master_common::tabs::{select_by_panel_id, Tab};
use parts_master_common::{MasterPanel, MasterState};

use crate::api::client;
use crate::components::{
    header::Header,
    master_view::MasterView,
    matching_panel::MatchingPanel,
    tab_bar::{tab_class, TabBar},
    upload_panel::UploadPanel,
};
use crate::config::load_config;

/// メインアプリケーションコンポーネント
#[component]
pub fn App() -> impl IntoView {
    let config = StoredValue::new(load_config());

    // アプリケーション状態
    let (active_tab, set_active_tab) = signal(Tab::default());
    let master_state = RwSignal::new(MasterState::new());
    let master_panel = RwSignal::new(MasterPanel::default());

    // タブ切り替えハンドラ
    let on_select_tab = move |id: String| {
        set_active_tab.update(|current| *current = select_by_panel_id(*current, &id));
    };

    // マスタ再読込ハンドラ（キャッシュの書き込みはここだけ）
    let reload_master = move || {
        spawn_local(async move {
            let cfg = config.get_value();
            let result = client::fetch_master(&cfg).await;
            if let Err(e) = &result {
                console::error!(format!("マスタ取得失敗: {}", e));
            }
            if let Some(panel) = master_state.try_update(|state| state.apply_load(result)) {
                master_panel.set(panel);
            }
        });
    };

    let panel_class = move |tab: Tab| tab_class("tab-content", active_tab.get() == tab);

    view! {
        <div class="container">
            <Header />

            <TabBar active_tab=active_tab on_select=on_select_tab />

            <div id=Tab::Upload.panel_id() class=move || panel_class(Tab::Upload)>
                <UploadPanel config=config on_uploaded=reload_master />
            </div>

            <div id=Tab::MasterView.panel_id() class=move || panel_class(Tab::MasterView)>
                <MasterView panel=master_panel state=master_state />
            </div>

            <div id=Tab::Matching.panel_id() class=move || panel_class(Tab::Matching)>
                <MatchingPanel config=config />
            </div>
        </div>
    }
}
