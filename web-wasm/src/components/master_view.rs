//! マスタ閲覧コンポーネント
//!
//! 一覧は `MasterPanel` が更新されるたびに作り直すため、
//! 展開状態は再描画（検索・解除・再読込）で必ず折りたたみに戻る。

use leptos::ev::KeyboardEvent;
use leptos::html::Input;
use leptos::prelude::*;
use parts_master_common::message::MASTER_PLACEHOLDER;
use parts_master_common::{MasterEntryView, MasterListView, MasterPanel, MasterState, StatusMessage};

#[component]
pub fn MasterView(
    panel: RwSignal<MasterPanel>,
    state: RwSignal<MasterState>,
) -> impl IntoView {
    let search_input: NodeRef<Input> = NodeRef::new();
    let search_info = RwSignal::new(None::<StatusMessage>);

    let run_search = move || {
        let input = search_input.get().map(|i| i.value()).unwrap_or_default();
        let display = state.with_untracked(|s| s.search_display(&input));
        if let Some(next) = display.panel {
            panel.set(next);
        }
        search_info.set(Some(display.info));
    };

    let clear_search = move |_| {
        if let Some(input) = search_input.get() {
            input.set_value("");
        }
        search_info.set(None);
        if let Some(full) = state.with_untracked(|s| s.clear_display()) {
            panel.set(full);
        }
    };

    view! {
        <div class="search-section">
            <input
                type="text"
                id="search-input"
                placeholder="完成品コードまたは商品名で検索..."
                node_ref=search_input
                on:keydown=move |ev: KeyboardEvent| {
                    if ev.key() == "Enter" {
                        run_search();
                    }
                }
            />
            <button id="search-btn" class="btn btn-primary" on:click=move |_| run_search()>
                "検索"
            </button>
            <button id="clear-search-btn" class="btn btn-secondary" on:click=clear_search>
                "クリア"
            </button>
        </div>
        <div
            id="search-results-info"
            class=move || match search_info.get() {
                Some(info) => format!("search-info {}", info.kind.as_str()),
                None => "search-info".to_string(),
            }
        >
            {move || search_info.get().map(|info| info.text).unwrap_or_default()}
        </div>
        <div id="master-view-container">
            {move || match panel.get() {
                MasterPanel::Placeholder => {
                    view! { <p class="info-message">{MASTER_PLACEHOLDER}</p> }.into_any()
                }
                MasterPanel::Info(text) => view! { <p class="info-message">{text}</p> }.into_any(),
                MasterPanel::Error(text) => {
                    view! { <p class="info-message error">{text}</p> }.into_any()
                }
                MasterPanel::List(list) => view! { <MasterList list=list /> }.into_any(),
            }}
        </div>
    }
}

#[component]
fn MasterList(list: MasterListView) -> impl IntoView {
    view! {
        <div class="matching-summary">
            <div class="summary-item">
                <div class="summary-label">"完成品総数"</div>
                <div class="summary-value total">{list.total}</div>
            </div>
        </div>
        <div class="master-list">
            {list
                .entries
                .into_iter()
                .map(|entry| view! { <MasterEntry entry=entry /> })
                .collect_view()}
        </div>
    }
}

#[component]
fn MasterEntry(entry: MasterEntryView) -> impl IntoView {
    let (expanded, set_expanded) = signal(false);
    let parts_summary = entry.parts_summary();
    let code_label = format!("コード: {}", entry.finished_code);

    view! {
        <div class="master-item">
            <div
                class="master-item-header"
                class:expanded=move || expanded.get()
                on:click=move |_| set_expanded.update(|open| *open = !*open)
            >
                <div>
                    <h3>{entry.finished_name}</h3>
                    <div class="master-item-code">{code_label}</div>
                </div>
                <div class="toggle-icon">"▶"</div>
            </div>
            <div class="parts-list" class:show=move || expanded.get()>
                <p class="parts-summary">{parts_summary}</p>
                <div class="parts-container">
                    {entry
                        .parts
                        .into_iter()
                        .map(|part| {
                            let stock = part.stock_label();
                            view! {
                                <div class="part-item">
                                    <div>
                                        <div class="part-code">{part.code}</div>
                                        <div class="part-stock">{stock}</div>
                                    </div>
                                    <div class="part-qty">{format!("数量: {}個", part.qty)}</div>
                                </div>
                            }
                        })
                        .collect_view()}
                </div>
            </div>
        </div>
    }
}
