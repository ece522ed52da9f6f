//! Built-in commands: the status query and the URL setter. Each lives in its
//! own file; `handle_builtin_command` is the single entry point the
//! CommandService calls.

pub mod mc_status;
pub mod set_url;

use dynmap_common::models::CommandKind;
use crate::Error;
use crate::services::builtin_commands::{mc_status::handle_mc_status, set_url::handle_set_url};
use crate::services::command_service::CommandContext;

pub async fn handle_builtin_command(
    kind: CommandKind,
    ctx: &CommandContext<'_>,
    raw_args: &str,
) -> Result<String, Error> {
    match kind {
        CommandKind::QueryStatus => handle_mc_status(ctx).await,
        CommandKind::SetUrl => handle_set_url(ctx, raw_args).await,
    }
}
