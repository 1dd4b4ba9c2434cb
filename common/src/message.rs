//! 画面メッセージ
//!
//! 各メッセージ欄に表示する文言と表示種別。

use crate::error::Error;

pub const SELECT_FILE: &str = "ファイルを選択してください";
pub const ENTER_KEYWORD: &str = "検索キーワードを入力してください";
pub const MASTER_NOT_LOADED: &str = "マスタが読み込まれていません";
pub const NO_MASTER_DATA: &str = "マスタデータがありません";
pub const NO_SEARCH_RESULTS: &str = "検索結果がありません";
pub const MATCHING_IN_PROGRESS: &str = "照合中...";
pub const MASTER_PLACEHOLDER: &str = "マスタをアップロードすると一覧が表示されます";
pub const MASTER_UPLOADED: &str = "マスタを読み込みました";

/// 表示種別
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageKind {
    Success,
    Error,
}

impl MessageKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            MessageKind::Success => "success",
            MessageKind::Error => "error",
        }
    }
}

/// メッセージ欄の内容
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusMessage {
    pub text: String,
    pub kind: MessageKind,
}

impl StatusMessage {
    pub fn success(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            kind: MessageKind::Success,
        }
    }

    pub fn error(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            kind: MessageKind::Error,
        }
    }

    /// 表示用CSSクラス（`message show success` など）
    pub fn css_class(&self) -> String {
        format!("message show {}", self.kind.as_str())
    }

    /// 成功メッセージは一定時間後に自動で消える
    pub fn auto_hides(&self) -> bool {
        self.kind == MessageKind::Success
    }
}

impl From<&Error> for StatusMessage {
    fn from(error: &Error) -> Self {
        StatusMessage::error(error.to_string())
    }
}

/// 検索件数の表示: 「{query}」の検索結果: {n}件
pub fn search_count(query: &str, count: usize) -> String {
    format!("「{}」の検索結果: {}件", query, count)
}

/// サーバーがメッセージを返さなかった場合のアップロード完了表示
pub fn master_uploaded(count: Option<usize>) -> String {
    match count {
        Some(n) => format!("{}（{}件）", MASTER_UPLOADED, n),
        None => MASTER_UPLOADED.to_string(),
    }
}

/// 照合完了の表示（サーバー報告の件数を使う）
pub fn matching_complete(matched: usize, unmatched: usize, total: usize) -> String {
    format!(
        "照合完了: {}件マッチ / {}件未マッチ (合計: {}件)",
        matched, unmatched, total
    )
}

/// エクスポート失敗のアラート文言
pub fn export_failed(error: &Error) -> String {
    let detail = match error {
        Error::Transport(msg)
        | Error::Server(msg)
        | Error::Validation(msg)
        | Error::Config(msg) => msg.clone(),
        Error::Json(e) => e.to_string(),
    };
    format!("エクスポートエラー: {}", detail)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_css_class() {
        assert_eq!(StatusMessage::success("ok").css_class(), "message show success");
        assert_eq!(StatusMessage::error("ng").css_class(), "message show error");
    }

    #[test]
    fn test_auto_hides_only_success() {
        assert!(StatusMessage::success("ok").auto_hides());
        assert!(!StatusMessage::error("ng").auto_hides());
    }

    #[test]
    fn test_from_transport_error_keeps_prefix() {
        let message = StatusMessage::from(&Error::Transport("Failed to fetch".into()));
        assert_eq!(message.kind, MessageKind::Error);
        assert_eq!(message.text, "エラー: Failed to fetch");
    }

    #[test]
    fn test_search_count() {
        assert_eq!(search_count("widget", 0), "「widget」の検索結果: 0件");
    }

    #[test]
    fn test_master_uploaded() {
        assert_eq!(master_uploaded(Some(4)), "マスタを読み込みました（4件）");
        assert_eq!(master_uploaded(None), "マスタを読み込みました");
    }

    #[test]
    fn test_matching_complete() {
        assert_eq!(
            matching_complete(1, 1, 2),
            "照合完了: 1件マッチ / 1件未マッチ (合計: 2件)"
        );
    }

    #[test]
    fn test_export_failed_is_not_double_prefixed() {
        let text = export_failed(&Error::Transport("Failed to fetch".into()));
        assert_eq!(text, "エクスポートエラー: Failed to fetch");
    }
}
