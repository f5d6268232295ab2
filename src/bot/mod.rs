//! Discord bot integration for the DM relay.
//!
//! The bot receives direct messages, relays them into per-user threads under
//! the configured staff channel, and carries the moderation slash commands.
//! It is started during process startup and runs in a separate tokio task so
//! it does not block the liveness HTTP server.
//!
//! # Gateway Intents
//!
//! The bot requires the following gateway intents:
//! - `GUILDS` - Thread create/update/delete events under the relay channel
//! - `GUILD_MESSAGES` - Staff replies inside relay threads
//! - `DIRECT_MESSAGES` - Inbound user DMs to relay
//! - `MESSAGE_CONTENT` - Access to message text for relaying (privileged)
//! - `GUILD_MEMBERS` - Member-join announcements (privileged)
//!
//! Note: privileged intents must be explicitly enabled in the Discord
//! Developer Portal for the bot application.

pub mod commands;
pub mod handler;
pub mod start;
