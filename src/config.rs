use crate::error::{PartsMasterError, Result};
use parts_master_common::ClientConfig;
use std::path::{Path, PathBuf};

/// 接続先を上書きする環境変数
pub const SERVER_ENV: &str = "PARTS_MASTER_SERVER";
pub const DEFAULT_SERVER: &str = "http://localhost:5000";

/// CLIの設定（中身はWeb版と同じ `ClientConfig`）
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub client: ClientConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            client: ClientConfig {
                api_base: DEFAULT_SERVER.into(),
                ..ClientConfig::default()
            },
        }
    }
}

impl Config {
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::config_path()?)
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(path)?;
        let mut client = ClientConfig::from_json(&content)?;
        if client.api_base.trim().is_empty() {
            client.api_base = DEFAULT_SERVER.into();
        }
        Ok(Self { client })
    }

    pub fn save(&self) -> Result<()> {
        self.save_to(&Self::config_path()?)
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = serde_json::to_string_pretty(&self.client)?;
        std::fs::write(path, content)?;
        Ok(())
    }

    pub fn config_path() -> Result<PathBuf> {
        let home = dirs::home_dir()
            .ok_or_else(|| PartsMasterError::Config("ホームディレクトリが見つかりません".into()))?;
        Ok(home.join(".config").join("parts-master").join("config.json"))
    }

    pub fn set_server(&mut self, url: &str) -> Result<()> {
        self.client.api_base = normalize_server(url)?;
        Ok(())
    }

    /// `--server` > 環境変数 > 設定ファイル の順で接続先を決める
    pub fn with_server_override(mut self, flag: Option<&str>, env: Option<&str>) -> Result<Self> {
        if let Some(url) = flag.or(env).filter(|u| !u.trim().is_empty()) {
            self.set_server(url)?;
        }
        Ok(self)
    }
}

fn normalize_server(url: &str) -> Result<String> {
    let url = url.trim();
    if !(url.starts_with("http://") || url.starts_with("https://")) {
        return Err(PartsMasterError::Config(format!(
            "サーバーURLは http:// または https:// で始めてください: {}",
            url
        )));
    }
    Ok(url.trim_end_matches('/').to_string())
}
