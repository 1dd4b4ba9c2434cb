//! マスタ・照合結果の型定義
//!
//! CLIとWeb(WASM)で共有される型:
//! - PartRef / MasterItem: 部品展開マスタ（完成品 → 構成部品）
//! - MasterDataset: `/api/master-data` から取得したマスタ全体
//! - MatchResult: `/api/matching` の1行分の照合結果

use serde::{Deserialize, Serialize};

/// 構成部品
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PartRef {
    pub code: String,

    #[serde(default)]
    pub input_qty: i64, // 入数

    #[serde(default)]
    pub box_qty: i64, // 箱数

    #[serde(default)]
    pub qty: i64, // 構成数量
}

/// 構成数量の合計
pub fn total_qty(parts: &[PartRef]) -> i64 {
    parts.iter().map(|p| p.qty).sum()
}

/// 完成品（マスタの1エントリ）
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MasterItem {
    pub finished_code: String,
    pub finished_name: String,
    #[serde(default)]
    pub parts: Vec<PartRef>,
}

impl MasterItem {
    /// 構成数量の合計
    pub fn total_qty(&self) -> i64 {
        total_qty(&self.parts)
    }

    /// 小文字化済みクエリがコードまたは名称に含まれるか
    pub fn matches_query(&self, lowered_query: &str) -> bool {
        self.finished_code.to_lowercase().contains(lowered_query)
            || self.finished_name.to_lowercase().contains(lowered_query)
    }
}

/// マスタ全体
///
/// `total_finished_products` はサーバー報告値で、`items.len()` と一致するとは限らない。
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MasterDataset {
    pub items: Vec<MasterItem>,
    pub total_finished_products: usize,
}

impl MasterDataset {
    pub fn new(items: Vec<MasterItem>, total_finished_products: usize) -> Self {
        Self {
            items,
            total_finished_products,
        }
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

/// 照合結果（1行分）
///
/// 未マッチ行は `finished_product_name` / `parts_count` / `parts` を持たない。
/// エクスポート時にそのままサーバーへ送り返すため、欠けている項目は出力しない。
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchResult {
    pub row: u32,
    pub product_code: String,
    pub matched: bool,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub finished_product_name: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parts_count: Option<usize>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parts: Option<Vec<PartRef>>,
}

impl MatchResult {
    /// 構成部品（未マッチ・欠落時は空）
    pub fn parts(&self) -> &[PartRef] {
        self.parts.as_deref().unwrap_or(&[])
    }
}

#[cfg(test)]
impl MatchResult {
    pub(crate) fn unmatched(row: u32, product_code: &str) -> Self {
        Self {
            row,
            product_code: product_code.to_string(),
            matched: false,
            ..Default::default()
        }
    }
}
