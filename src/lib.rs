//! 部品展開マスタ照合 CLIクライアント

pub mod cli;
pub mod client;
pub mod commands;
pub mod config;
pub mod error;
pub mod progress;
pub mod render;
