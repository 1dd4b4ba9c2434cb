//! ビューモデルのテキスト描画
//!
//! Web版のコンポーネントと同じ見出し・文言を使う。

use parts_master_common::message::MASTER_PLACEHOLDER;
use parts_master_common::{
    MasterEntryView, MasterListView, MasterPanel, MatchEntryView, MatchingView, MessageKind,
    PartRowView, StatusMessage,
};
use std::fmt::Write;

pub fn status(message: &StatusMessage) -> String {
    match message.kind {
        MessageKind::Success => format!("✔ {}", message.text),
        MessageKind::Error => format!("✗ {}", message.text),
    }
}

pub fn master_panel(panel: &MasterPanel, expand: bool) -> String {
    match panel {
        MasterPanel::Placeholder => format!("{}\n", MASTER_PLACEHOLDER),
        MasterPanel::Info(text) => format!("{}\n", text),
        MasterPanel::Error(text) => format!("✗ {}\n", text),
        MasterPanel::List(list) => master_list(list, expand),
    }
}

/// 折りたたみ時は見出し行のみ
pub fn master_list(list: &MasterListView, expand: bool) -> String {
    let mut out = format!("完成品総数: {}\n", list.total);
    for entry in &list.entries {
        master_entry(&mut out, entry, expand);
    }
    out
}

fn master_entry(out: &mut String, entry: &MasterEntryView, expand: bool) {
    let icon = if expand { "▼" } else { "▶" };
    let _ = writeln!(out, "{} {} (コード: {})", icon, entry.finished_name, entry.finished_code);
    if !expand {
        return;
    }

    let _ = writeln!(out, "    {}", entry.parts_summary());
    for part in &entry.parts {
        let _ = writeln!(
            out,
            "    - {}  {}  数量: {}個",
            part.code,
            part.stock_label(),
            part.qty
        );
    }
}

pub fn matching(view: &MatchingView) -> String {
    let summary = view.summary;
    let mut out = format!(
        "マッチ件数: {} / 未マッチ件数: {} / 合計: {}\n",
        summary.matched, summary.unmatched, summary.total
    );

    for entry in &view.entries {
        match entry {
            MatchEntryView::Matched {
                finished_product_name,
                total_qty,
                parts,
                ..
            } => {
                let _ = writeln!(out, "{}  ✓ マッチ", entry.heading());
                let _ = writeln!(out, "    完成品名: {}", finished_product_name);
                if !parts.is_empty() {
                    parts_breakdown(&mut out, parts, *total_qty);
                }
            }
            MatchEntryView::Unmatched { .. } => {
                let _ = writeln!(out, "{}  ✗ 未マッチ", entry.heading());
            }
        }
    }
    out
}

fn parts_breakdown(out: &mut String, parts: &[PartRowView], total_qty: i64) {
    let _ = writeln!(out, "    構成部品 ({}個) / 合計数量: {}", parts.len(), total_qty);
    for part in parts {
        let _ = writeln!(
            out,
            "    - コード: {}  {}  構成数量: {}個",
            part.code,
            part.stock_label(),
            part.qty
        );
    }
}
