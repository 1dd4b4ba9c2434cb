use clap::{Parser, Subcommand};
use parts_master_common::api::{HEADER_ROW_MAX, HEADER_ROW_MIN};
use std::path::PathBuf;

const HEADER_ROW_RANGE: std::ops::RangeInclusive<i64> =
    HEADER_ROW_MIN as i64..=HEADER_ROW_MAX as i64;

#[derive(Parser)]
#[command(name = "parts-master")]
#[command(about = "部品展開マスタ照合ツール", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// 詳細ログを出力
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// 接続先サーバー（設定ファイル・環境変数より優先）
    #[arg(long, global = true)]
    pub server: Option<String>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// マスタファイルをアップロード
    UploadMaster {
        /// マスタファイル (.xlsx/.xls/.csv)
        #[arg(required = true)]
        file: PathBuf,

        /// ヘッダー行（省略時は設定の既定値）
        #[arg(long, value_parser = clap::value_parser!(u32).range(HEADER_ROW_RANGE))]
        header_row: Option<u32>,
    },

    /// マスタ一覧を表示
    Master {
        /// 完成品コードまたは商品名で絞り込み
        #[arg(short, long)]
        search: Option<String>,

        /// 構成部品も表示
        #[arg(short, long)]
        expand: bool,
    },

    /// 完成品コードをマスタと照合
    Match {
        /// 照合ファイル（A列に完成品コード）
        #[arg(required = true)]
        file: PathBuf,

        /// 照合結果をExcelに出力（パス省略時は設定のファイル名）
        #[arg(long)]
        export: Option<Option<PathBuf>>,
    },

    /// 設定を管理
    Config {
        /// 接続先サーバーを保存
        #[arg(long)]
        set_server: Option<String>,

        /// 現在の設定を表示
        #[arg(long)]
        show: bool,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_upload_master() {
        let cli = Cli::parse_from([
            "parts-master",
            "upload-master",
            "master.xlsx",
            "--header-row",
            "3",
        ]);
        match cli.command {
            Commands::UploadMaster { file, header_row } => {
                assert_eq!(file, PathBuf::from("master.xlsx"));
                assert_eq!(header_row, Some(3));
            }
            _ => panic!("UploadMasterではない"),
        }
    }

    #[test]
    fn test_header_row_out_of_range() {
        for row in ["0", "11"] {
            let args = ["parts-master", "upload-master", "m.xlsx", "--header-row", row];
            assert!(Cli::try_parse_from(args).is_err(), "{}行目は範囲外", row);
        }
    }

    #[test]
    fn test_parse_match_export_without_path() {
        let cli = Cli::parse_from(["parts-master", "match", "codes.csv", "--export"]);
        match cli.command {
            Commands::Match { export, .. } => assert_eq!(export, Some(None)),
            _ => panic!("Matchではない"),
        }
    }

    #[test]
    fn test_global_server_flag() {
        let cli =
            Cli::parse_from(["parts-master", "master", "--server", "http://example:5000", "-e"]);
        assert_eq!(cli.server.as_deref(), Some("http://example:5000"));
        assert!(matches!(cli.command, Commands::Master { expand: true, search: None }));
    }
}
