//! サブコマンドの処理
//!
//! 出力先とAPIを引数で受け取り、画面版と同じ手順・文言で結果を書き出す。

use crate::client::MasterApi;
use crate::error::{PartsMasterError, Result};
use crate::progress;
use crate::render;
use parts_master_common::api::MasterUpload;
use parts_master_common::message::{self, MATCHING_IN_PROGRESS};
use parts_master_common::{matching_display, ClientConfig, MasterPanel, MasterState, StatusMessage};
use std::io::Write;
use std::path::{Path, PathBuf};

/// 存在するファイルだけを通す（通信前に止める）
pub fn existing_file(path: &Path) -> Result<PathBuf> {
    if !path.is_file() {
        return Err(PartsMasterError::FileNotFound(path.display().to_string()));
    }
    Ok(path.to_path_buf())
}

/// マスタを取得してキャッシュに反映し、一覧の表示内容を返す
pub async fn load_master<A: MasterApi>(api: &A, state: &mut MasterState) -> MasterPanel {
    let pb = progress::spinner("マスタを取得中...");
    let result = api.fetch_master().await;
    pb.finish_and_clear();
    state.apply_load(result)
}

pub async fn upload_master<A: MasterApi, W: Write>(
    api: &A,
    config: &ClientConfig,
    file: &Path,
    header_row: Option<u32>,
    out: &mut W,
) -> Result<()> {
    let upload = MasterUpload {
        file: existing_file(file)?,
        header_row: header_row.unwrap_or(config.default_header_row),
    };

    let pb = progress::spinner("マスタをアップロード中...");
    let result = api.upload_master(&upload).await;
    pb.finish_and_clear();

    let status = match result {
        Ok(text) => StatusMessage::success(text),
        Err(e) => {
            let status = StatusMessage::from(&e);
            writeln!(out, "{}", render::status(&status))?;
            return Err(PartsMasterError::Failed(status.text));
        }
    };
    writeln!(out, "{}", render::status(&status))?;

    let mut state = MasterState::new();
    let panel = load_master(api, &mut state).await;
    write!(out, "{}", render::master_panel(&panel, false))?;
    Ok(())
}

pub async fn show_master<A: MasterApi, W: Write>(
    api: &A,
    search: Option<&str>,
    expand: bool,
    out: &mut W,
) -> Result<()> {
    let mut state = MasterState::new();
    let panel = load_master(api, &mut state).await;

    let Some(query) = search else {
        write!(out, "{}", render::master_panel(&panel, expand))?;
        return Ok(());
    };

    let display = state.search_display(query);
    let panel = display.panel.unwrap_or(panel);
    writeln!(out, "{}", render::status(&display.info))?;
    write!(out, "{}", render::master_panel(&panel, expand))?;
    Ok(())
}

pub async fn run_matching<A: MasterApi, W: Write>(
    api: &A,
    config: &ClientConfig,
    file: &Path,
    export: Option<Option<PathBuf>>,
    out: &mut W,
) -> Result<()> {
    let file = existing_file(file)?;

    let pb = progress::spinner(MATCHING_IN_PROGRESS);
    let outcome = api.run_matching(&file).await;
    pb.finish_and_clear();

    let (status, matching) = matching_display(outcome);
    writeln!(out, "{}", render::status(&status))?;
    let Some(matching) = matching else {
        return Err(PartsMasterError::Failed(status.text));
    };
    write!(out, "{}", render::matching(&matching))?;

    if let Some(path) = export {
        let path = path.unwrap_or_else(|| PathBuf::from(&config.export_file_name));
        let bytes = api
            .export_matching(&matching.results)
            .await
            .map_err(|e| PartsMasterError::Failed(message::export_failed(&e)))?;
        std::fs::write(&path, bytes)?;
        writeln!(out, "✔ 結果を保存: {}", path.display())?;
    }
    Ok(())
}

pub fn show_config<W: Write>(config: &ClientConfig, path: &Path, out: &mut W) -> Result<()> {
    writeln!(out, "設定ファイル: {}", path.display())?;
    writeln!(out, "  サーバー: {}", config.api_base)?;
    writeln!(out, "  出力ファイル名: {}", config.export_file_name)?;
    writeln!(out, "  ヘッダー行の既定値: {}", config.default_header_row)?;
    writeln!(out, "  タイムアウト: {}秒", config.timeout_seconds)?;
    Ok(())
}
