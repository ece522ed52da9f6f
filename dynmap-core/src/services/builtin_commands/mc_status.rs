use tracing::{info, warn};
use crate::Error;
use crate::services::command_service::CommandContext;
use crate::services::dynmap::{format_status, Messages};

/// `#MC状态`: fetch the configured Dynmap and describe the server.
pub async fn handle_mc_status(ctx: &CommandContext<'_>) -> Result<String, Error> {
    // Snapshot; no lock is held while the request is in flight.
    let config = ctx.config_repo.current();
    let m = Messages::for_locale(config.locale);

    let base_url = match config.base_url() {
        Some(url) => url,
        None => {
            info!("Status requested by '{}' but no Dynmap URL is configured", ctx.user_name);
            return Ok(m.not_configured());
        }
    };

    match ctx.status_source.fetch(base_url).await {
        Ok(status) => {
            info!(
                "Dynmap at {} reports {} player(s) online",
                base_url,
                status.players.len()
            );
            Ok(format_status(&status, &config))
        }
        Err(e) => {
            warn!("Could not get status from {}: {}", base_url, e);
            Ok(m.server_unreachable())
        }
    }
}
