//! 表示用ビューモデル
//!
//! データ整形と描画を分離する。Web版はLeptosコンポーネント、
//! CLI版はテキスト出力でこれらを描画する。

use crate::api::MatchingOutcome;
use crate::error::{Error, Result};
use crate::message::{self, StatusMessage};
use crate::types::{total_qty, MasterItem, MatchResult, PartRef};

/// 構成部品1行
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PartRowView {
    pub code: String,
    pub input_qty: i64,
    pub box_qty: i64,
    pub qty: i64,
}

impl PartRowView {
    /// 「入数: {input_qty} / 箱数: {box_qty}」
    pub fn stock_label(&self) -> String {
        format!("入数: {} / 箱数: {}", self.input_qty, self.box_qty)
    }
}

impl From<&PartRef> for PartRowView {
    fn from(part: &PartRef) -> Self {
        Self {
            code: part.code.clone(),
            input_qty: part.input_qty,
            box_qty: part.box_qty,
            qty: part.qty,
        }
    }
}

/// マスタ一覧の1エントリ（折りたたみ可能）
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MasterEntryView {
    pub finished_code: String,
    pub finished_name: String,
    pub total_qty: i64,
    pub parts: Vec<PartRowView>,
}

impl MasterEntryView {
    pub fn part_count(&self) -> usize {
        self.parts.len()
    }

    /// 展開時の見出し「構成部品数: {n} / 合計数量: {sum}」
    pub fn parts_summary(&self) -> String {
        format!("構成部品数: {} / 合計数量: {}", self.part_count(), self.total_qty)
    }
}

impl From<&MasterItem> for MasterEntryView {
    fn from(item: &MasterItem) -> Self {
        Self {
            finished_code: item.finished_code.clone(),
            finished_name: item.finished_name.clone(),
            total_qty: item.total_qty(),
            parts: item.parts.iter().map(PartRowView::from).collect(),
        }
    }
}

/// マスタ一覧（総数 + エントリ）
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MasterListView {
    /// 表示する総数（全件表示ではサーバー報告値、検索時はヒット件数）
    pub total: usize,
    pub entries: Vec<MasterEntryView>,
}

impl MasterListView {
    pub fn new<'a, I>(items: I, total: usize) -> Self
    where
        I: IntoIterator<Item = &'a MasterItem>,
    {
        Self {
            total,
            entries: items.into_iter().map(MasterEntryView::from).collect(),
        }
    }
}

/// マスタ閲覧エリアの表示内容
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum MasterPanel {
    /// 未読込
    #[default]
    Placeholder,
    /// 情報メッセージ
    Info(String),
    /// エラー色の情報メッセージ
    Error(String),
    List(MasterListView),
}

impl MasterPanel {
    /// マスタ取得失敗時の表示（サーバー報告は通常色、通信エラーはエラー色）
    pub fn from_load_error(error: &Error) -> Self {
        match error {
            Error::Server(_) | Error::Validation(_) => MasterPanel::Info(error.to_string()),
            _ => MasterPanel::Error(error.to_string()),
        }
    }
}

/// 照合結果の件数（結果の matched フラグから再計算）
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct MatchSummary {
    pub matched: usize,
    pub unmatched: usize,
    pub total: usize,
}

impl MatchSummary {
    pub fn from_results(results: &[MatchResult]) -> Self {
        let matched = results.iter().filter(|r| r.matched).count();
        Self {
            matched,
            unmatched: results.len() - matched,
            total: results.len(),
        }
    }
}

/// 照合結果の1行
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MatchEntryView {
    Matched {
        row: u32,
        product_code: String,
        finished_product_name: String,
        total_qty: i64,
        parts: Vec<PartRowView>,
    },
    Unmatched {
        row: u32,
        product_code: String,
    },
}

impl MatchEntryView {
    /// 「行{row}: {product_code}」
    pub fn heading(&self) -> String {
        let (row, code) = match self {
            MatchEntryView::Matched { row, product_code, .. }
            | MatchEntryView::Unmatched { row, product_code } => (row, product_code),
        };
        format!("行{}: {}", row, code)
    }
}

impl From<&MatchResult> for MatchEntryView {
    fn from(result: &MatchResult) -> Self {
        if result.matched {
            MatchEntryView::Matched {
                row: result.row,
                product_code: result.product_code.clone(),
                finished_product_name: result.finished_product_name.clone().unwrap_or_default(),
                total_qty: total_qty(result.parts()),
                parts: result.parts().iter().map(PartRowView::from).collect(),
            }
        } else {
            MatchEntryView::Unmatched {
                row: result.row,
                product_code: result.product_code.clone(),
            }
        }
    }
}

/// 照合結果の表示内容
///
/// `results` はエクスポートにそのまま渡す（画面から読み戻さない）。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MatchingView {
    pub summary: MatchSummary,
    pub entries: Vec<MatchEntryView>,
    pub results: Vec<MatchResult>,
}

impl MatchingView {
    pub fn new(results: Vec<MatchResult>) -> Self {
        Self {
            summary: MatchSummary::from_results(&results),
            entries: results.iter().map(MatchEntryView::from).collect(),
            results,
        }
    }
}

/// 照合レスポンスからメッセージと結果表示を作る
///
/// 失敗時は結果表示を消す（None）。
pub fn matching_display(result: Result<MatchingOutcome>) -> (StatusMessage, Option<MatchingView>) {
    match result {
        Ok(outcome) => {
            let text =
                message::matching_complete(outcome.matched, outcome.unmatched, outcome.total);
            (StatusMessage::success(text), Some(MatchingView::new(outcome.results)))
        }
        Err(e) => (StatusMessage::from(&e), None),
    }
}
