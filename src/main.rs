use clap::Parser;
use parts_master::cli::{Cli, Commands};
use parts_master::client::HttpClient;
use parts_master::commands;
use parts_master::config::{self, Config};
use parts_master::error::Result;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = Config::load()?;
    let mut stdout = std::io::stdout();

    if let Commands::Config { set_server, show } = &cli.command {
        let mut config = config;
        if let Some(url) = set_server {
            config.set_server(url)?;
            config.save()?;
            println!("✔ 接続先を保存しました: {}", config.client.api_base);
        }
        if *show || set_server.is_none() {
            commands::show_config(&config.client, &Config::config_path()?, &mut stdout)?;
        }
        return Ok(());
    }

    let env_server = std::env::var(config::SERVER_ENV).ok();
    let config = config.with_server_override(cli.server.as_deref(), env_server.as_deref())?;
    if cli.verbose {
        eprintln!("接続先: {}", config.client.api_base);
    }
    let api = HttpClient::new(config.client.clone(), cli.verbose)?;

    match cli.command {
        Commands::UploadMaster { file, header_row } => {
            println!("📤 マスタアップロード\n");
            commands::upload_master(&api, &config.client, &file, header_row, &mut stdout).await?;
        }

        Commands::Master { search, expand } => {
            println!("📋 マスタ閲覧\n");
            commands::show_master(&api, search.as_deref(), expand, &mut stdout).await?;
        }

        Commands::Match { file, export } => {
            println!("🔍 完成品照合\n");
            commands::run_matching(&api, &config.client, &file, export, &mut stdout).await?;
        }

        Commands::Config { .. } => {}
    }

    Ok(())
}
