use serenity::all::{ChannelId, RoleId};

use crate::error::{config::ConfigError, AppError};
use crate::util::parse::parse_u64_from_string;

/// Default port for the liveness HTTP endpoint.
const DEFAULT_PORT: u16 = 3000;

/// Application configuration loaded from the environment.
///
/// All identifiers are Discord snowflakes supplied as decimal strings. A
/// missing required variable is fatal at startup.
#[derive(Clone)]
pub struct Config {
    /// Bot credential used to authenticate against the Discord gateway.
    pub discord_bot_token: String,

    /// Parent channel under which relay threads are created.
    pub relay_channel_id: ChannelId,

    /// Role applied to users by the `/mute` command.
    pub muted_role_id: RoleId,

    /// Channel receiving member-join announcements, if configured.
    pub invite_log_channel_id: Option<ChannelId>,

    /// Whether archiving a relay thread also drops its user binding. When
    /// unset the binding survives archival and the thread is reused on the
    /// next message.
    pub unbind_on_archive: bool,

    /// Port for the liveness HTTP endpoint.
    pub port: u16,
}

impl Config {
    pub fn from_env() -> Result<Self, AppError> {
        let relay_channel_id = ChannelId::new(parse_u64_from_string(require_env(
            "RELAY_CHANNEL_ID",
        )?)?);
        let muted_role_id = RoleId::new(parse_u64_from_string(require_env("MUTED_ROLE_ID")?)?);

        let invite_log_channel_id = match std::env::var("INVITE_LOG_CHANNEL_ID") {
            Ok(value) => Some(ChannelId::new(parse_u64_from_string(value)?)),
            Err(_) => None,
        };

        let unbind_on_archive = std::env::var("RELAY_UNBIND_ON_ARCHIVE")
            .map(|value| matches!(value.trim(), "1" | "true" | "yes"))
            .unwrap_or(false);

        let port = match std::env::var("PORT") {
            Ok(value) => value
                .parse::<u16>()
                .map_err(|_| ConfigError::InvalidEnvVar {
                    name: "PORT".to_string(),
                    value,
                })?,
            Err(_) => DEFAULT_PORT,
        };

        Ok(Self {
            discord_bot_token: require_env("DISCORD_BOT_TOKEN")?,
            relay_channel_id,
            muted_role_id,
            invite_log_channel_id,
            unbind_on_archive,
            port,
        })
    }
}

fn require_env(name: &str) -> Result<String, AppError> {
    std::env::var(name).map_err(|_| ConfigError::MissingEnvVar(name.to_string()).into())
}
