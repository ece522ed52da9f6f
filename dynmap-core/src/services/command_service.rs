use std::sync::Arc;

use regex::Regex;
use tracing::{debug, info};

use dynmap_common::models::{CommandKind, Permission};
use dynmap_common::traits::{ConfigRepository, StatusSource};
use crate::Error;
use crate::services::builtin_commands::handle_builtin_command;
use crate::services::dynmap::Messages;

/// `#MC状态` plus its synonyms, with an ASCII or full-width hash.
pub const QUERY_STATUS_PATTERN: &str = r"^(＃|#)\s?(mc|MC|我的世界|minecraft)状态$";

/// `#Dynmap设置网址`; whatever follows is the new URL.
pub const SET_URL_PATTERN: &str = r"^(＃|#)Dynmap设置网址";

/// Context passed to built-in command handlers.
pub struct CommandContext<'a> {
    pub channel: &'a str,
    pub user_name: &'a str,
    pub user_roles: &'a [String],

    pub config_repo: &'a Arc<dyn ConfigRepository>,
    pub status_source: &'a Arc<dyn StatusSource>,
}

/// Reply lines for the channel a command came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandResponse {
    pub texts: Vec<String>,
    pub channel: String,
}

struct CommandRule {
    kind: CommandKind,
    pattern: Regex,
    permission: Permission,
}

/// Matches incoming chat lines against the registered rules and runs the
/// first one that matches.
pub struct CommandService {
    pub config_repo: Arc<dyn ConfigRepository>,
    pub status_source: Arc<dyn StatusSource>,
    rules: Vec<CommandRule>,
}

impl CommandService {
    pub fn new(
        config_repo: Arc<dyn ConfigRepository>,
        status_source: Arc<dyn StatusSource>,
    ) -> Result<Self, Error> {
        debug!("Initializing CommandService");

        let rules = vec![
            CommandRule {
                kind: CommandKind::QueryStatus,
                pattern: Regex::new(QUERY_STATUS_PATTERN)?,
                permission: Permission::Everyone,
            },
            CommandRule {
                kind: CommandKind::SetUrl,
                pattern: Regex::new(SET_URL_PATTERN)?,
                permission: Permission::Master,
            },
        ];

        Ok(Self {
            config_repo,
            status_source,
            rules,
        })
    }

    /// Which command `message_text` invokes, and the argument text after the
    /// matched prefix.
    pub fn match_command<'t>(&self, message_text: &'t str) -> Option<(CommandKind, Permission, &'t str)> {
        let text = message_text.trim();
        self.rules.iter().find_map(|rule| {
            rule.pattern
                .find(text)
                .map(|m| (rule.kind, rule.permission, text[m.end()..].trim()))
        })
    }

    /// Processes a chat message and returns a reply if it matched a command.
    pub async fn handle_chat_line(
        &self,
        channel: &str,
        user_name: &str,
        user_roles: &[String],
        message_text: &str,
    ) -> Result<Option<CommandResponse>, Error> {
        debug!("handle_chat_line() received message: '{}'", message_text);

        let (kind, permission, raw_args) = match self.match_command(message_text) {
            Some(found) => found,
            None => return Ok(None),
        };

        if !permission.is_satisfied_by(user_roles) {
            info!(
                "User '{}' lacks role '{}' for {:?} in channel '{}'",
                user_name,
                permission.role_name(),
                kind,
                channel
            );
            let m = Messages::for_locale(self.config_repo.current().locale);
            return Ok(Some(CommandResponse {
                texts: vec![m.permission_denied()],
                channel: channel.to_string(),
            }));
        }

        let ctx = CommandContext {
            channel,
            user_name,
            user_roles,
            config_repo: &self.config_repo,
            status_source: &self.status_source,
        };

        let text = handle_builtin_command(kind, &ctx, raw_args).await?;
        Ok(Some(CommandResponse {
            texts: vec![text],
            channel: channel.to_string(),
        }))
    }
}
