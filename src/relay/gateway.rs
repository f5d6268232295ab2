//! Platform boundary for the relay.
//!
//! Every Discord call the relay router makes goes through [`RelayGateway`].
//! The production implementation, [`DiscordGateway`], wraps serenity's HTTP
//! client; tests substitute an in-memory fake to assert routing invariants
//! without a live gateway connection.

use std::sync::Arc;

use serenity::all::{
    AutoArchiveDuration, ChannelId, ChannelType, CreateEmbed, CreateMessage, CreateThread,
    MessageId, ReactionType, Timestamp, UserId,
};
use serenity::async_trait;
use serenity::http::Http;

use crate::error::AppError;

/// Emoji used to acknowledge receipt of a relayed direct message.
const ACK_EMOJI: &str = "\u{2705}";

/// Minimal view of a thread as returned by the platform's thread listings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ThreadRef {
    pub id: ChannelId,
    pub name: String,
}

/// Lifecycle transition notices delivered to the bound user as an embed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ThreadNotice {
    /// The thread was archived by the support team.
    Closed,
    /// The thread was brought back out of the archive.
    Reopened,
    /// The thread was deleted outright.
    Deleted,
}

impl ThreadNotice {
    fn description(self) -> &'static str {
        match self {
            Self::Closed => "The support team has closed this thread.",
            Self::Reopened => "The support team has reopened this thread.",
            Self::Deleted => "The support team has deleted this thread.",
        }
    }

    fn colour(self) -> u32 {
        match self {
            Self::Closed => 0xff0000,
            Self::Reopened => 0x00ff00,
            Self::Deleted => 0x95a5a6,
        }
    }
}

/// Outbound platform operations used by the relay router.
#[async_trait]
pub trait RelayGateway: Send + Sync {
    /// Creates a new public thread named `name` under `parent`.
    async fn create_thread(&self, parent: ChannelId, name: &str) -> Result<ThreadRef, AppError>;

    /// Lists the active threads under `parent`.
    async fn active_threads(&self, parent: ChannelId) -> Result<Vec<ThreadRef>, AppError>;

    /// Lists the archived public threads under `parent`.
    async fn archived_threads(&self, parent: ChannelId) -> Result<Vec<ThreadRef>, AppError>;

    /// Sends a text message into a thread.
    async fn send_in_thread(&self, thread: ChannelId, content: &str) -> Result<(), AppError>;

    /// Sends a plain direct message to a user.
    async fn send_dm(&self, user: UserId, content: &str) -> Result<(), AppError>;

    /// Sends a thread lifecycle notice to a user as an embed.
    async fn send_notice(&self, user: UserId, notice: ThreadNotice) -> Result<(), AppError>;

    /// Acknowledges receipt of a message with a checkmark reaction.
    async fn acknowledge(&self, channel: ChannelId, message: MessageId) -> Result<(), AppError>;
}

/// Serenity-backed gateway used in production.
///
/// Constructed per event from the handler context's HTTP client.
pub struct DiscordGateway {
    http: Arc<Http>,
}

impl DiscordGateway {
    pub fn new(http: Arc<Http>) -> Self {
        Self { http }
    }
}

#[async_trait]
impl RelayGateway for DiscordGateway {
    async fn create_thread(&self, parent: ChannelId, name: &str) -> Result<ThreadRef, AppError> {
        let builder = CreateThread::new(name)
            .kind(ChannelType::PublicThread)
            .auto_archive_duration(AutoArchiveDuration::OneHour);
        let thread = parent.create_thread(&self.http, builder).await?;

        Ok(ThreadRef {
            id: thread.id,
            name: thread.name,
        })
    }

    async fn active_threads(&self, parent: ChannelId) -> Result<Vec<ThreadRef>, AppError> {
        // Active threads are listed per guild, so resolve the parent channel
        // to its guild first and filter the listing back down to the parent.
        let channel = self.http.get_channel(parent).await?;
        let Some(channel) = channel.guild() else {
            return Ok(Vec::new());
        };

        let listing = channel.guild_id.get_active_threads(&self.http).await?;
        Ok(listing
            .threads
            .into_iter()
            .filter(|thread| thread.parent_id == Some(parent))
            .map(|thread| ThreadRef {
                id: thread.id,
                name: thread.name,
            })
            .collect())
    }

    async fn archived_threads(&self, parent: ChannelId) -> Result<Vec<ThreadRef>, AppError> {
        let listing = parent
            .get_archived_public_threads(&self.http, None, None)
            .await?;
        Ok(listing
            .threads
            .into_iter()
            .map(|thread| ThreadRef {
                id: thread.id,
                name: thread.name,
            })
            .collect())
    }

    async fn send_in_thread(&self, thread: ChannelId, content: &str) -> Result<(), AppError> {
        thread.say(&self.http, content).await?;
        Ok(())
    }

    async fn send_dm(&self, user: UserId, content: &str) -> Result<(), AppError> {
        let dm_channel = user.create_dm_channel(&self.http).await?;
        dm_channel.say(&self.http, content).await?;
        Ok(())
    }

    async fn send_notice(&self, user: UserId, notice: ThreadNotice) -> Result<(), AppError> {
        let embed = CreateEmbed::new()
            .title("Support Team")
            .description(notice.description())
            .colour(notice.colour())
            .timestamp(Timestamp::now());

        let dm_channel = user.create_dm_channel(&self.http).await?;
        dm_channel
            .id
            .send_message(&self.http, CreateMessage::new().embed(embed))
            .await?;
        Ok(())
    }

    async fn acknowledge(&self, channel: ChannelId, message: MessageId) -> Result<(), AppError> {
        self.http
            .create_reaction(channel, message, &ReactionType::Unicode(ACK_EMOJI.to_string()))
            .await?;
        Ok(())
    }
}
