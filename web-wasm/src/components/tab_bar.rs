//! タブ切り替えコンポーネント

use leptos::prelude::*;
use parts_master_common::tabs::Tab;

/// 選択中なら `active` を付けたクラス
pub fn tab_class(base: &str, active: bool) -> String {
    if active {
        format!("{} active", base)
    } else {
        base.to_string()
    }
}

#[component]
pub fn TabBar<F>(active_tab: ReadSignal<Tab>, on_select: F) -> impl IntoView
where
    F: Fn(String) + 'static + Clone,
{
    view! {
        <div class="tabs">
            {Tab::ALL
                .into_iter()
                .map(|tab| {
                    let on_select = on_select.clone();
                    view! {
                        <button
                            class=move || tab_class("tab-button", active_tab.get() == tab)
                            data-tab=tab.panel_id()
                            on:click=move |ev| {
                                let target = event_target::<web_sys::Element>(&ev);
                                if let Some(id) = target.get_attribute("data-tab") {
                                    on_select(id);
                                }
                            }
                        >
                            {tab.label()}
                        </button>
                    }
                })
                .collect_view()}
        </div>
    }
}
