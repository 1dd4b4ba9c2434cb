//! タブ定義

/// 画面のタブ
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Tab {
    #[default]
    Upload,
    MasterView,
    Matching,
}

impl Tab {
    pub const ALL: [Tab; 3] = [Tab::Upload, Tab::MasterView, Tab::Matching];

    /// パネルのid（ボタンの data-tab 属性と同じ）
    pub fn panel_id(&self) -> &'static str {
        match self {
            Tab::Upload => "upload",
            Tab::MasterView => "master-view",
            Tab::Matching => "matching",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Tab::Upload => "マスタアップロード",
            Tab::MasterView => "マスタ閲覧",
            Tab::Matching => "完成品照合",
        }
    }

    pub fn from_panel_id(id: &str) -> Option<Tab> {
        Tab::ALL.into_iter().find(|tab| tab.panel_id() == id)
    }
}

/// パネルidでタブを切り替える
///
/// 存在しないidの場合はパネルもボタンも変更しない。
pub fn select_by_panel_id(current: Tab, id: &str) -> Tab {
    Tab::from_panel_id(id).unwrap_or(current)
}
