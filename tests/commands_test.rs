//! サブコマンドのテスト
//!
//! サーバーの代わりに呼び出し回数を数えるフェイクを使う

use parts_master::client::MasterApi;
use parts_master::commands;
use parts_master::error::PartsMasterError;
use parts_master_common::api::{MasterLoad, MasterUpload, MatchingOutcome};
use parts_master_common::{
    ClientConfig, Error, MasterDataset, MasterItem, MatchResult, PartRef, Result,
};
use std::cell::Cell;
use std::path::{Path, PathBuf};
use tempfile::tempdir;

#[derive(Default)]
struct FakeApi {
    requests: Cell<usize>,
    master: Option<MasterDataset>,
    upload_error: Option<fn() -> Error>,
    matching_error: Option<String>,
    export_error: bool,
    uploaded_header_row: Cell<Option<u32>>,
}

impl FakeApi {
    fn hit(&self) {
        self.requests.set(self.requests.get() + 1);
    }
}

impl MasterApi for FakeApi {
    async fn upload_master(&self, upload: &MasterUpload<PathBuf>) -> Result<String> {
        self.hit();
        self.uploaded_header_row.set(Some(upload.header_row));
        if let Some(make_error) = self.upload_error {
            return Err(make_error());
        }
        Ok("マスタデータを読み込みました (1件)".to_string())
    }

    async fn fetch_master(&self) -> Result<MasterLoad> {
        self.hit();
        Ok(match &self.master {
            Some(dataset) => MasterLoad::Loaded(dataset.clone()),
            None => MasterLoad::Empty,
        })
    }

    async fn run_matching(&self, _file: &Path) -> Result<MatchingOutcome> {
        self.hit();
        if let Some(text) = &self.matching_error {
            return Err(Error::Server(text.clone()));
        }
        let widget = widget();
        Ok(MatchingOutcome {
            matched: 1,
            unmatched: 1,
            total: 2,
            results: vec![
                MatchResult {
                    row: 2,
                    product_code: widget.finished_code.clone(),
                    matched: true,
                    finished_product_name: Some(widget.finished_name.clone()),
                    parts_count: Some(widget.parts.len()),
                    parts: Some(widget.parts.clone()),
                },
                MatchResult {
                    row: 3,
                    product_code: "ZZ".into(),
                    ..MatchResult::default()
                },
            ],
        })
    }

    async fn export_matching(&self, results: &[MatchResult]) -> Result<Vec<u8>> {
        self.hit();
        if self.export_error {
            return Err(Error::Transport("HTTP 500".into()));
        }
        Ok(format!("xlsx:{}", results.len()).into_bytes())
    }
}

fn widget() -> MasterItem {
    MasterItem {
        finished_code: "A1".into(),
        finished_name: "Widget".into(),
        parts: vec![
            PartRef {
                code: "P1".into(),
                input_qty: 10,
                box_qty: 2,
                qty: 2,
            },
            PartRef {
                code: "P2".into(),
                input_qty: 5,
                box_qty: 1,
                qty: 3,
            },
        ],
    }
}

fn loaded_api() -> FakeApi {
    FakeApi {
        master: Some(MasterDataset::new(
            vec![
                widget(),
                MasterItem {
                    finished_code: "B2".into(),
                    finished_name: "Gadget".into(),
                    parts: vec![],
                },
            ],
            2,
        )),
        ..FakeApi::default()
    }
}

fn master_file(dir: &Path) -> PathBuf {
    let file = dir.join("master.csv");
    std::fs::write(&file, "完成品コード,完成品名\nA1,Widget\n").unwrap();
    file
}

fn output(buf: Vec<u8>) -> String {
    String::from_utf8(buf).expect("UTF-8ではない出力")
}

/// ファイルがなければ通信しない
#[tokio::test]
async fn test_upload_without_file_sends_nothing() {
    let api = FakeApi::default();
    let mut out = Vec::new();

    let result = commands::upload_master(
        &api,
        &ClientConfig::default(),
        Path::new("/nonexistent/master-12345.xlsx"),
        None,
        &mut out,
    )
    .await;

    assert!(matches!(result, Err(PartsMasterError::FileNotFound(_))));
    assert_eq!(api.requests.get(), 0);
    assert!(out.is_empty());
}

#[tokio::test]
async fn test_match_without_file_sends_nothing() {
    let api = FakeApi::default();
    let mut out = Vec::new();

    let result = commands::run_matching(
        &api,
        &ClientConfig::default(),
        Path::new("/nonexistent/codes.csv"),
        None,
        &mut out,
    )
    .await;

    assert!(matches!(result, Err(PartsMasterError::FileNotFound(_))));
    assert_eq!(api.requests.get(), 0);
}

/// アップロード成功後にマスタを再取得する
#[tokio::test]
async fn test_upload_then_reload() {
    let dir = tempdir().expect("Failed to create temp dir");
    let file = master_file(dir.path());

    let api = loaded_api();
    let mut out = Vec::new();
    commands::upload_master(&api, &ClientConfig::default(), &file, None, &mut out)
        .await
        .unwrap();

    assert_eq!(api.requests.get(), 2);
    assert_eq!(api.uploaded_header_row.get(), Some(1));

    let text = output(out);
    assert!(text.starts_with("✔ マスタデータを読み込みました (1件)\n"));
    assert!(text.contains("完成品総数: 2"));
    assert!(text.contains("▶ Gadget (コード: B2)"));
}

/// サーバーが拒否した場合は文言をそのまま表示し、再取得しない
#[tokio::test]
async fn test_upload_server_error_is_shown_verbatim() {
    let dir = tempdir().expect("Failed to create temp dir");
    let file = master_file(dir.path());

    let api = FakeApi {
        upload_error: Some(|| Error::Server("ヘッダー行は1～10の数値で指定してください".into())),
        ..loaded_api()
    };
    let mut out = Vec::new();
    let result =
        commands::upload_master(&api, &ClientConfig::default(), &file, None, &mut out).await;

    match result {
        Err(PartsMasterError::Failed(text)) => {
            assert_eq!(text, "ヘッダー行は1～10の数値で指定してください")
        }
        other => panic!("想定外の結果: {:?}", other),
    }
    assert_eq!(api.requests.get(), 1);
    assert_eq!(output(out), "✗ ヘッダー行は1～10の数値で指定してください\n");
}

#[tokio::test]
async fn test_upload_transport_error_has_prefix() {
    let dir = tempdir().expect("Failed to create temp dir");
    let file = master_file(dir.path());

    let api = FakeApi {
        upload_error: Some(|| Error::Transport("connection refused".into())),
        ..loaded_api()
    };
    let mut out = Vec::new();
    let result =
        commands::upload_master(&api, &ClientConfig::default(), &file, None, &mut out).await;

    match result {
        Err(PartsMasterError::Failed(text)) => assert_eq!(text, "エラー: connection refused"),
        other => panic!("想定外の結果: {:?}", other),
    }
    assert_eq!(api.requests.get(), 1);
    let text = output(out);
    assert_eq!(text, "✗ エラー: connection refused\n");
    assert!(!text.contains("完成品総数"));
}

#[tokio::test]
async fn test_upload_uses_header_row_argument() {
    let dir = tempdir().expect("Failed to create temp dir");
    let file = dir.path().join("master.xlsx");
    std::fs::write(&file, b"dummy").unwrap();

    let api = loaded_api();
    let mut out = Vec::new();
    commands::upload_master(&api, &ClientConfig::default(), &file, Some(4), &mut out)
        .await
        .unwrap();

    assert_eq!(api.uploaded_header_row.get(), Some(4));
}

#[tokio::test]
async fn test_master_search() {
    let api = loaded_api();
    let mut out = Vec::new();
    commands::show_master(&api, Some("  WIDG "), false, &mut out)
        .await
        .unwrap();

    let text = output(out);
    assert!(text.contains("✔ 「widg」の検索結果: 1件"));
    assert!(text.contains("完成品総数: 1"));
    assert!(text.contains("Widget (コード: A1)"));
    assert!(!text.contains("Gadget"));
}

#[tokio::test]
async fn test_master_search_without_hits() {
    let api = loaded_api();
    let mut out = Vec::new();
    commands::show_master(&api, Some("zzz"), false, &mut out)
        .await
        .unwrap();

    let text = output(out);
    assert!(text.contains("✗ 「zzz」の検索結果: 0件"));
    assert!(text.contains("検索結果がありません"));
}

#[tokio::test]
async fn test_master_empty() {
    let api = FakeApi::default();
    let mut out = Vec::new();
    commands::show_master(&api, None, true, &mut out).await.unwrap();

    assert_eq!(output(out), "マスタデータがありません\n");
}

/// 2件の照合結果（1件マッチ・1件未マッチ）
#[tokio::test]
async fn test_matching_two_results() {
    let dir = tempdir().expect("Failed to create temp dir");
    let file = dir.path().join("codes.csv");
    std::fs::write(&file, "A1\nZZ\n").unwrap();

    let api = loaded_api();
    let mut out = Vec::new();
    commands::run_matching(&api, &ClientConfig::default(), &file, None, &mut out)
        .await
        .unwrap();

    let text = output(out);
    assert!(text.contains("✔ 照合完了: 1件マッチ / 1件未マッチ (合計: 2件)"));
    assert!(text.contains("マッチ件数: 1 / 未マッチ件数: 1 / 合計: 2"));
    assert!(text.contains("行2: A1  ✓ マッチ"));
    assert!(text.contains("構成部品 (2個) / 合計数量: 5"));
    assert!(text.contains("行3: ZZ  ✗ 未マッチ"));
    assert_eq!(api.requests.get(), 1);
}

#[tokio::test]
async fn test_matching_server_error() {
    let dir = tempdir().expect("Failed to create temp dir");
    let file = dir.path().join("codes.csv");
    std::fs::write(&file, "A1\n").unwrap();

    let api = FakeApi {
        matching_error: Some("マスタデータが読み込まれていません".into()),
        ..FakeApi::default()
    };
    let mut out = Vec::new();
    let result =
        commands::run_matching(&api, &ClientConfig::default(), &file, None, &mut out).await;

    match result {
        Err(PartsMasterError::Failed(text)) => {
            assert_eq!(text, "マスタデータが読み込まれていません")
        }
        other => panic!("想定外の結果: {:?}", other),
    }
    assert!(!output(out).contains("マッチ件数"));
}

/// エクスポートはパス省略時に設定のファイル名を使う
#[tokio::test]
async fn test_matching_export_default_name() {
    let dir = tempdir().expect("Failed to create temp dir");
    let file = dir.path().join("codes.csv");
    std::fs::write(&file, "A1\nZZ\n").unwrap();
    let export_name = dir.path().join("matching_results.xlsx");

    let config = ClientConfig {
        export_file_name: export_name.display().to_string(),
        ..ClientConfig::default()
    };
    let api = loaded_api();
    let mut out = Vec::new();
    commands::run_matching(&api, &config, &file, Some(None), &mut out)
        .await
        .unwrap();

    assert_eq!(std::fs::read(&export_name).unwrap(), b"xlsx:2");
    assert_eq!(api.requests.get(), 2);
}

#[tokio::test]
async fn test_matching_export_failure() {
    let dir = tempdir().expect("Failed to create temp dir");
    let file = dir.path().join("codes.csv");
    std::fs::write(&file, "A1\n").unwrap();
    let target = dir.path().join("out.xlsx");

    let api = FakeApi {
        export_error: true,
        ..loaded_api()
    };
    let mut out = Vec::new();
    let result = commands::run_matching(
        &api,
        &ClientConfig::default(),
        &file,
        Some(Some(target.clone())),
        &mut out,
    )
    .await;

    match result {
        Err(PartsMasterError::Failed(text)) => assert_eq!(text, "エクスポートエラー: HTTP 500"),
        other => panic!("想定外の結果: {:?}", other),
    }
    assert!(!target.exists());
}
