//! Ready event handler for bot initialization.
//!
//! This module handles the `ready` event which is fired when the bot
//! successfully connects to Discord's gateway and completes the initial
//! handshake. The handler logs connection information, sets the bot's
//! activity, and registers the application's slash commands globally.

use serenity::all::{ActivityData, Command, Context, Ready};

use crate::bot::commands;

/// Handles the ready event when the bot connects to Discord.
///
/// Registers the global slash commands on every connect. Registration is
/// idempotent on Discord's side, so reconnects simply refresh the command
/// set.
///
/// # Arguments
/// - `ctx` - Discord context for setting activity and registering commands
/// - `ready` - Ready event data containing bot user information
pub async fn handle_ready(ctx: Context, ready: Ready) {
    tracing::info!("{} is connected to Discord", ready.user.name);

    ctx.set_activity(Some(ActivityData::watching("your DMs")));

    match Command::set_global_commands(&ctx.http, commands::create_commands()).await {
        Ok(registered) => {
            tracing::info!("Registered {} application commands", registered.len());
        }
        Err(e) => {
            tracing::error!("Failed to register application commands: {:?}", e);
        }
    }
}
