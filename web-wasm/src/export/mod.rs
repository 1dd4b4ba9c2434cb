//! 照合結果のExcel出力
//!
//! 生成はサーバー側。クライアントは結果を送り、返ってきたファイルを保存する。

pub mod download;

use crate::api::client;
use gloo::console;
use parts_master_common::{ClientConfig, MatchResult, Result};

/// 照合結果をエクスポートしてダウンロードさせる
pub async fn export_results(config: &ClientConfig, results: &[MatchResult]) -> Result<()> {
    let blob = client::export_matching(config, results).await?;
    download::download_blob(&blob, &config.export_file_name)?;
    console::log!(format!("エクスポート完了: {}", config.export_file_name));
    Ok(())
}
