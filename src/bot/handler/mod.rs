use serenity::all::{
    ChannelId, Context, EventHandler, GuildChannel, Interaction, Member, Message,
    PartialGuildChannel, Ready, RoleId,
};
use serenity::async_trait;

pub mod interaction;
pub mod member;
pub mod message;
pub mod ready;
pub mod thread;

use crate::config::Config;
use crate::relay::RelayRouter;

/// Discord bot event handler
pub struct Handler {
    /// Router owning the user-to-thread bindings.
    pub router: RelayRouter,
    /// Channel receiving member-join announcements, if configured.
    pub invite_log_channel: Option<ChannelId>,
    /// Role applied by the `/mute` command.
    pub muted_role: RoleId,
}

impl Handler {
    pub fn new(config: &Config) -> Self {
        Self {
            router: RelayRouter::new(config.relay_channel_id, config.unbind_on_archive),
            invite_log_channel: config.invite_log_channel_id,
            muted_role: config.muted_role_id,
        }
    }
}

#[async_trait]
impl EventHandler for Handler {
    /// Called when the bot is ready and connected to Discord
    async fn ready(&self, ctx: Context, ready: Ready) {
        ready::handle_ready(ctx, ready).await;
    }

    /// Called when a message is sent in any channel the bot can see,
    /// including direct messages
    async fn message(&self, ctx: Context, message: Message) {
        message::handle_message(&self.router, ctx, message).await;
    }

    /// Called when a thread is updated, including archive state changes
    async fn thread_update(&self, ctx: Context, old: Option<GuildChannel>, new: GuildChannel) {
        thread::handle_thread_update(&self.router, ctx, old, new).await;
    }

    /// Called when a thread is deleted
    async fn thread_delete(
        &self,
        ctx: Context,
        thread: PartialGuildChannel,
        full_thread_data: Option<GuildChannel>,
    ) {
        thread::handle_thread_delete(&self.router, ctx, thread, full_thread_data).await;
    }

    /// Called when a member joins a guild
    async fn guild_member_addition(&self, ctx: Context, new_member: Member) {
        member::handle_guild_member_addition(self.invite_log_channel, ctx, new_member).await;
    }

    /// Called when an interaction is created, such as a slash command
    async fn interaction_create(&self, ctx: Context, interaction: Interaction) {
        interaction::handle_interaction_create(&self.router, self.muted_role, ctx, interaction)
            .await;
    }
}
