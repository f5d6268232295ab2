//! Member event handlers.

use serenity::all::{ChannelId, Context, CreateEmbed, CreateMessage, Member, Timestamp};

/// Handles the guild_member_addition event when a member joins a guild.
///
/// Posts a short announcement embed to the invite log channel when one is
/// configured. Without a configured channel the event is ignored.
///
/// # Arguments
/// - `invite_log_channel` - Destination channel for announcements, if any
/// - `ctx` - Discord context providing the HTTP client
/// - `new_member` - The member who joined
pub async fn handle_guild_member_addition(
    invite_log_channel: Option<ChannelId>,
    ctx: Context,
    new_member: Member,
) {
    let Some(channel) = invite_log_channel else {
        return;
    };

    let embed = CreateEmbed::new()
        .title("Member Joined")
        .description(format!("**{}** joined the server", new_member.user.tag()))
        .colour(0x0099ff)
        .timestamp(Timestamp::now());

    if let Err(e) = channel
        .send_message(&ctx.http, CreateMessage::new().embed(embed))
        .await
    {
        tracing::error!(
            "Failed to announce member {} in invite log: {:?}",
            new_member.user.tag(),
            e
        );
    }
}
