//! Message event handler feeding the relay router.
//!
//! Every non-bot message is considered for relaying. Direct messages go
//! through the inbound path, which resolves or creates the sender's thread.
//! Guild messages go through the reply path, which is a no-op unless the
//! message was posted inside a bound relay thread.

use serenity::all::{Context, Message};

use crate::relay::{DiscordGateway, RelayRouter};

/// Handles message creation in any channel, including direct messages.
///
/// Relay failures are logged and otherwise dropped: the passive relay has no
/// user-facing error surface.
///
/// # Arguments
/// - `router` - Relay router owning the bindings
/// - `ctx` - Discord context providing the HTTP client
/// - `message` - The newly created message
pub async fn handle_message(router: &RelayRouter, ctx: Context, message: Message) {
    // Ignore messages from bots, including our own forwarded messages
    if message.author.bot {
        return;
    }

    let gateway = DiscordGateway::new(ctx.http.clone());

    if message.guild_id.is_none() {
        let user_tag = message.author.tag();
        if let Err(e) = router
            .route_inbound_dm(
                &gateway,
                message.author.id,
                &user_tag,
                message.channel_id,
                message.id,
                &message.content,
            )
            .await
        {
            tracing::error!("Failed to relay DM from {}: {:?}", user_tag, e);
        }
    } else if let Err(e) = router
        .route_thread_reply(&gateway, message.channel_id, &message.content)
        .await
    {
        tracing::error!(
            "Failed to relay reply from thread {}: {:?}",
            message.channel_id,
            e
        );
    }
}
