//! Thread lifecycle event handlers.
//!
//! Archive transitions and deletions of bound relay threads are forwarded to
//! the router, which notifies the affected user. Events for threads without a
//! binding are ignored.

use serenity::all::{Context, GuildChannel, PartialGuildChannel};

use crate::relay::{DiscordGateway, RelayRouter};

/// Handles the thread_update event.
///
/// Derives the previous archived state from the event's `old` snapshot when
/// the thread was cached, falling back to the registry's mirrored state
/// otherwise.
///
/// # Arguments
/// - `router` - Relay router owning the bindings
/// - `ctx` - Discord context providing the HTTP client
/// - `old` - Previous thread state, if it was cached
/// - `new` - Updated thread state from Discord
pub async fn handle_thread_update(
    router: &RelayRouter,
    ctx: Context,
    old: Option<GuildChannel>,
    new: GuildChannel,
) {
    let Some(now_archived) = new.thread_metadata.as_ref().map(|meta| meta.archived) else {
        // Not a thread; nothing to mirror
        return;
    };

    let was_archived = match old
        .as_ref()
        .and_then(|thread| thread.thread_metadata.as_ref())
    {
        Some(meta) => meta.archived,
        None => match router.registry().find_by_thread(new.id).await {
            Some(binding) => binding.archived,
            None => return,
        },
    };

    let gateway = DiscordGateway::new(ctx.http.clone());
    if let Err(e) = router
        .on_thread_archive_changed(&gateway, new.id, was_archived, now_archived)
        .await
    {
        tracing::error!(
            "Failed to handle archive change for thread {}: {:?}",
            new.id,
            e
        );
    }
}

/// Handles the thread_delete event.
///
/// # Arguments
/// - `router` - Relay router owning the bindings
/// - `ctx` - Discord context providing the HTTP client
/// - `thread` - Partial data of the deleted thread
/// - `_full_thread_data` - Full thread state if it was cached (unused)
pub async fn handle_thread_delete(
    router: &RelayRouter,
    ctx: Context,
    thread: PartialGuildChannel,
    _full_thread_data: Option<GuildChannel>,
) {
    let gateway = DiscordGateway::new(ctx.http.clone());
    if let Err(e) = router.on_thread_deleted(&gateway, thread.id).await {
        tracing::error!(
            "Failed to handle deletion of thread {}: {:?}",
            thread.id,
            e
        );
    }
}
