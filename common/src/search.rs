//! マスタ検索
//!
//! キャッシュ済みマスタに対する部分一致フィルタ。サーバーには問い合わせない。
//! 完成品コード・完成品名のどちらかに、大文字小文字を区別せずクエリを含めばヒット。

use crate::error::{Error, Result};
use crate::message::{ENTER_KEYWORD, MASTER_NOT_LOADED};
use crate::types::{MasterDataset, MasterItem};

/// 検索クエリ（前後空白除去・小文字化済み）
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchQuery(String);

impl SearchQuery {
    pub fn parse(input: &str) -> Result<Self> {
        let query = input.trim().to_lowercase();
        if query.is_empty() {
            return Err(Error::Validation(ENTER_KEYWORD.to_string()));
        }
        Ok(Self(query))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// クエリに一致する完成品を元の順序のまま返す
pub fn filter_items<'a>(items: &'a [MasterItem], query: &SearchQuery) -> Vec<&'a MasterItem> {
    items
        .iter()
        .filter(|item| item.matches_query(query.as_str()))
        .collect()
}

/// 検索結果
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchOutcome {
    pub query: SearchQuery,
    pub items: Vec<MasterItem>,
}

impl SearchOutcome {
    pub fn count(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

/// キャッシュを検索する
///
/// 空クエリの判定はキャッシュ有無より先に行う。
pub fn search(cache: Option<&MasterDataset>, input: &str) -> Result<SearchOutcome> {
    let query = SearchQuery::parse(input)?;
    let dataset = cache.ok_or_else(|| Error::Validation(MASTER_NOT_LOADED.to_string()))?;

    let items = filter_items(&dataset.items, &query)
        .into_iter()
        .cloned()
        .collect();

    Ok(SearchOutcome { query, items })
}
