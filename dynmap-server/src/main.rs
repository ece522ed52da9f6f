use std::path::PathBuf;
use std::sync::Arc;

use clap::Parser;
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing::{error, info};
use tracing_subscriber::{fmt, EnvFilter};

use dynmap_common::traits::{ConfigRepository, StatusSource};
use dynmap_core::{CommandService, ConfigStore, DynmapClient};

/// Each stdin line is one chat message; replies go to stdout, logs to stderr.
#[derive(Parser, Debug, Clone)]
#[command(name = "dynmap-stats")]
#[command(author, version, about = "Dynmap-Stats - Minecraft server status over Dynmap for chat bots")]
struct Args {
    /// Directory holding config.toml and default_configs/config.toml
    #[arg(long, env = "DYNMAP_CONFIG_DIR", default_value = "configs")]
    config_dir: PathBuf,

    /// Channel name attached to replies
    #[arg(long, env = "DYNMAP_CHANNEL", default_value = "console")]
    channel: String,

    /// Name of the user sending the messages
    #[arg(long, env = "DYNMAP_USER", default_value = "console")]
    user: String,

    /// Roles of the sending user; pass `--role master` to allow URL changes
    #[arg(long = "role")]
    roles: Vec<String>,

    /// Handle a single message and exit instead of reading stdin
    #[arg(long)]
    once: Option<String>,
}

fn init_tracing() {
    let filter = EnvFilter::from_default_env()
        .add_directive("dynmap=info".parse().unwrap_or_default());
    let sub = fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .finish();
    tracing::subscriber::set_global_default(sub)
        .expect("Failed to set global subscriber");
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    init_tracing();
    let args = Args::parse();
    info!(
        "Dynmap-Stats starting. config_dir={:?}, channel={}, user={}, roles={:?}",
        args.config_dir, args.channel, args.user, args.roles
    );

    let config_repo: Arc<dyn ConfigRepository> = Arc::new(ConfigStore::open(&args.config_dir));
    let status_source: Arc<dyn StatusSource> = Arc::new(DynmapClient::with_default_client());
    let service = CommandService::new(config_repo, status_source)?;

    if let Some(message) = args.once.as_deref() {
        handle_line(&service, &args, message).await;
        return Ok(());
    }

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    loop {
        tokio::select! {
            line = lines.next_line() => {
                match line? {
                    Some(text) => handle_line(&service, &args, &text).await,
                    None => break,
                }
            }
            _ = tokio::signal::ctrl_c() => {
                info!("Ctrl-C received, shutting down.");
                break;
            }
        }
    }

    info!("Dynmap-Stats stopped.");
    Ok(())
}

async fn handle_line(service: &CommandService, args: &Args, text: &str) {
    match service
        .handle_chat_line(&args.channel, &args.user, &args.roles, text)
        .await
    {
        Ok(Some(resp)) => {
            for reply in resp.texts {
                println!("{}", reply);
            }
        }
        Ok(None) => {}
        Err(e) => error!("Error handling message '{}': {}", text, e),
    }
}
