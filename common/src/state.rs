//! マスタキャッシュの状態
//!
//! マスタ取得成功時に丸ごと置き換えられ、検索は読み取りのみ。
//! 書き込みは `apply_load` だけで、呼び出し側が単一の所有者になる。

use crate::api::MasterLoad;
use crate::error::Result;
use crate::message::{self, StatusMessage, NO_MASTER_DATA, NO_SEARCH_RESULTS};
use crate::search;
use crate::types::MasterDataset;
use crate::view::{MasterListView, MasterPanel};

/// 検索実行後の表示
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchDisplay {
    /// 一覧エリアの新しい内容（入力エラー時は変更しない）
    pub panel: Option<MasterPanel>,
    /// 検索件数欄
    pub info: StatusMessage,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MasterState {
    dataset: Option<MasterDataset>,
}

impl MasterState {
    pub fn new() -> Self {
        Self::default()
    }

    /// マスタ取得結果を反映し、一覧エリアの表示を返す
    ///
    /// キャッシュを置き換えるのは取得成功かつデータありの場合だけ。
    pub fn apply_load(&mut self, result: Result<MasterLoad>) -> MasterPanel {
        match result {
            Ok(MasterLoad::Loaded(dataset)) => {
                let panel = MasterPanel::List(MasterListView::new(
                    &dataset.items,
                    dataset.total_finished_products,
                ));
                self.dataset = Some(dataset);
                panel
            }
            Ok(MasterLoad::Empty) => MasterPanel::Info(NO_MASTER_DATA.to_string()),
            Err(e) => MasterPanel::from_load_error(&e),
        }
    }

    /// キャッシュ全件の一覧（サーバー報告の総数つき）
    pub fn full_view(&self) -> Option<MasterListView> {
        self.dataset
            .as_ref()
            .map(|d| MasterListView::new(&d.items, d.total_finished_products))
    }

    /// 検索して表示内容を作る
    pub fn search_display(&self, input: &str) -> SearchDisplay {
        match search::search(self.dataset.as_ref(), input) {
            Ok(outcome) => {
                let count = outcome.count();
                let info_text = message::search_count(outcome.query.as_str(), count);

                if outcome.is_empty() {
                    SearchDisplay {
                        panel: Some(MasterPanel::Error(NO_SEARCH_RESULTS.to_string())),
                        info: StatusMessage::error(info_text),
                    }
                } else {
                    SearchDisplay {
                        panel: Some(MasterPanel::List(MasterListView::new(&outcome.items, count))),
                        info: StatusMessage::success(info_text),
                    }
                }
            }
            Err(e) => SearchDisplay {
                panel: None,
                info: StatusMessage::from(&e),
            },
        }
    }

    /// 検索解除時の一覧（キャッシュがなければ変更しない）
    pub fn clear_display(&self) -> Option<MasterPanel> {
        self.full_view().map(MasterPanel::List)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use crate::message::{ENTER_KEYWORD, MASTER_NOT_LOADED, MessageKind};
    use crate::types::{MasterItem, PartRef};

    fn loaded_state() -> MasterState {
        let items = vec![
            MasterItem {
                finished_code: "A1".into(),
                finished_name: "Widget".into(),
                parts: vec![PartRef {
                    code: "P1".into(),
                    input_qty: 10,
                    box_qty: 2,
                    qty: 5,
                }],
            },
            MasterItem {
                finished_code: "B2".into(),
                finished_name: "Gadget".into(),
                parts: vec![],
            },
        ];
        let mut state = MasterState::new();
        state.apply_load(Ok(MasterLoad::Loaded(MasterDataset::new(items, 10))));
        state
    }

    #[test]
    fn test_apply_load_replaces_cache() {
        let state = loaded_state();
        match state.full_view() {
            Some(view) => {
                assert_eq!(view.total, 10);
                assert_eq!(view.entries.len(), 2);
            }
            None => panic!("一覧があるはず"),
        }
    }

    #[test]
    fn test_failed_load_keeps_cache() {
        let mut state = loaded_state();
        let before = state.clone();

        let panel = state.apply_load(Err(Error::Transport("Failed to fetch".into())));
        assert_eq!(panel, MasterPanel::Error("エラー: Failed to fetch".into()));

        let panel = state.apply_load(Ok(MasterLoad::Empty));
        assert_eq!(panel, MasterPanel::Info(NO_MASTER_DATA.into()));
        assert_eq!(state, before);
    }

    #[test]
    fn test_search_without_cache() {
        let display = MasterState::new().search_display("widget");
        assert!(display.panel.is_none());
        assert_eq!(display.info, StatusMessage::error(MASTER_NOT_LOADED));
    }

    #[test]
    fn test_search_empty_query() {
        let display = loaded_state().search_display("  ");
        assert!(display.panel.is_none());
        assert_eq!(display.info, StatusMessage::error(ENTER_KEYWORD));
    }

    #[test]
    fn test_search_uses_filtered_total() {
        let display = loaded_state().search_display("WIDGET");
        assert_eq!(display.info.kind, MessageKind::Success);
        assert_eq!(display.info.text, "「widget」の検索結果: 1件");

        match display.panel {
            Some(MasterPanel::List(view)) => {
                assert_eq!(view.total, 1);
                assert_eq!(view.entries[0].finished_code, "A1");
            }
            other => panic!("一覧のはず: {:?}", other),
        }
    }

    #[test]
    fn test_search_zero_results() {
        let display = loaded_state().search_display("zz");
        assert_eq!(display.info, StatusMessage::error("「zz」の検索結果: 0件"));
        assert_eq!(display.panel, Some(MasterPanel::Error(NO_SEARCH_RESULTS.into())));
    }

    #[test]
    fn test_clear_restores_original_total() {
        let state = loaded_state();
        let _ = state.search_display("gadget");

        match state.clear_display() {
            Some(MasterPanel::List(view)) => {
                assert_eq!(view.total, 10);
                assert_eq!(view.entries.len(), 2);
            }
            other => panic!("全件一覧のはず: {:?}", other),
        }

        assert!(MasterState::new().clear_display().is_none());
    }
}
