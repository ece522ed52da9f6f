use tracing::{error, info, warn};
use crate::Error;
use crate::services::command_service::CommandContext;
use crate::services::dynmap::{status_endpoint, Messages};

/// `#Dynmap设置网址 <url>`: store a new base URL and write it to disk.
///
/// Empty or non-URL arguments leave the config and the file untouched.
pub async fn handle_set_url(ctx: &CommandContext<'_>, raw_args: &str) -> Result<String, Error> {
    let m = Messages::for_locale(ctx.config_repo.current().locale);
    let param = raw_args.trim();

    if param.is_empty() {
        return Ok(m.set_url_usage());
    }

    if let Err(e) = status_endpoint(param) {
        warn!("Rejected Dynmap URL from '{}': {}", ctx.user_name, e);
        return Ok(m.invalid_url(param));
    }

    match ctx.config_repo.set_url(param) {
        Ok(_) => {
            info!("Dynmap URL set to {} by '{}' in '{}'", param, ctx.user_name, ctx.channel);
            Ok(m.url_set(param))
        }
        Err(e) => {
            error!("Failed to save Dynmap URL {}: {}", param, e);
            Ok(m.save_failed())
        }
    }
}
