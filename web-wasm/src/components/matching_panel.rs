//! 完成品照合コンポーネント

use gloo::console;
use gloo::dialogs::alert;
use leptos::html::Input;
use leptos::prelude::*;
use leptos::task::spawn_local;
use parts_master_common::api::{self, require_file};
use parts_master_common::message::{self, MATCHING_IN_PROGRESS};
use parts_master_common::{
    matching_display, ClientConfig, MatchEntryView, MatchingView, PartRowView, StatusMessage,
};

use crate::api::client;
use crate::components::status_line::{MessageSlot, StatusLine};
use crate::export;

#[component]
pub fn MatchingPanel(config: StoredValue<ClientConfig>) -> impl IntoView {
    let file_input: NodeRef<Input> = NodeRef::new();
    let (is_matching, set_is_matching) = signal(false);
    let results = RwSignal::new(None::<MatchingView>);
    let slot = MessageSlot::new(config.with_value(|c| c.message_timeout_ms));

    let on_match = move |_| {
        let file = file_input
            .get()
            .and_then(|input| input.files())
            .and_then(|files| files.get(0));
        let file = match require_file(file) {
            Ok(file) => file,
            Err(e) => {
                slot.show(StatusMessage::from(&e));
                return;
            }
        };

        set_is_matching.set(true);
        slot.show(StatusMessage::success(MATCHING_IN_PROGRESS));

        spawn_local(async move {
            let cfg = config.get_value();
            let outcome = client::run_matching(&cfg, file).await;
            let succeeded = outcome.is_ok();
            if let Err(e) = &outcome {
                console::error!(format!("照合失敗: {}", e));
            }

            let (status, matching) = matching_display(outcome);
            slot.show(status);
            results.set(matching);

            if succeeded {
                if let Some(input) = file_input.get() {
                    input.set_value("");
                }
            }
            set_is_matching.set(false);
        });
    };

    view! {
        <div class="upload-section">
            <h2>"完成品照合"</h2>
            <div class="form-group">
                <label for="matching-file">"照合ファイル（A列に完成品コード）"</label>
                <input
                    type="file"
                    id="matching-file"
                    accept=api::ACCEPTED_EXTENSIONS
                    node_ref=file_input
                />
            </div>
            <button
                id="matching-btn"
                class="btn btn-primary"
                disabled=move || is_matching.get()
                on:click=on_match
            >
                "照合開始"
            </button>
            <StatusLine slot=slot id="matching-message" />
        </div>
        <div id="matching-results-container">
            {move || {
                results
                    .get()
                    .map(|matching| view! { <MatchingResults matching=matching config=config /> })
            }}
        </div>
    }
}

#[component]
fn MatchingResults(matching: MatchingView, config: StoredValue<ClientConfig>) -> impl IntoView {
    let summary = matching.summary;
    // 描画時点の結果をそのままエクスポートに使う
    let payload = matching.results;

    let on_export = move |_| {
        let payload = payload.clone();
        spawn_local(async move {
            let cfg = config.get_value();
            if let Err(e) = export::export_results(&cfg, &payload).await {
                console::error!(format!("エクスポート失敗: {}", e));
                alert(&message::export_failed(&e));
            }
        });
    };

    view! {
        <div class="matching-summary results-summary">
            <div class="summary-item">
                <div class="summary-label">"マッチ件数"</div>
                <div class="summary-value matched">{summary.matched}</div>
            </div>
            <div class="summary-item">
                <div class="summary-label">"未マッチ件数"</div>
                <div class="summary-value unmatched">{summary.unmatched}</div>
            </div>
            <div class="summary-item">
                <div class="summary-label">"合計"</div>
                <div class="summary-value total">{summary.total}</div>
            </div>
        </div>

        <div class="results-toolbar">
            <h3>"詳細結果"</h3>
            <button class="btn export-button" on:click=on_export>
                "📊 Excelで出力"
            </button>
        </div>

        <div class="matching-results">
            {matching
                .entries
                .into_iter()
                .map(|entry| view! { <MatchEntry entry=entry /> })
                .collect_view()}
        </div>
    }
}

#[component]
fn MatchEntry(entry: MatchEntryView) -> impl IntoView {
    let heading = entry.heading();

    match entry {
        MatchEntryView::Matched {
            finished_product_name,
            total_qty,
            parts,
            ..
        } => view! {
            <div class="result-item">
                <div class="result-header">
                    <div>
                        <div class="result-code">{heading}</div>
                        <div class="result-details">
                            <p><strong>"完成品名:"</strong>" "{finished_product_name}</p>
                        </div>
                        {(!parts.is_empty())
                            .then(|| view! { <PartsBreakdown parts=parts total_qty=total_qty /> })}
                    </div>
                    <span class="result-status matched">"✓ マッチ"</span>
                </div>
            </div>
        }
        .into_any(),
        MatchEntryView::Unmatched { .. } => view! {
            <div class="result-item unmatched">
                <div class="result-header">
                    <div class="result-code">{heading}</div>
                    <span class="result-status unmatched">"✗ 未マッチ"</span>
                </div>
            </div>
        }
        .into_any(),
    }
}

#[component]
fn PartsBreakdown(parts: Vec<PartRowView>, total_qty: i64) -> impl IntoView {
    let title = format!("構成部品 ({}個) / 合計数量: {}", parts.len(), total_qty);

    view! {
        <div class="result-parts">
            <div class="result-parts-title">
                <strong>{title}</strong>
            </div>
            <div class="result-parts-grid">
                {parts
                    .into_iter()
                    .map(|part| {
                        let stock = part.stock_label();
                        view! {
                            <div class="result-part">
                                <div>
                                    <div class="result-part-code">{format!("コード: {}", part.code)}</div>
                                    <div class="part-stock">{stock}</div>
                                </div>
                                <div class="result-part-qty">{format!("構成数量: {}個", part.qty)}</div>
                            </div>
                        }
                    })
                    .collect_view()}
            </div>
        </div>
    }
}
