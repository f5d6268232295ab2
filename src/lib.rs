//! DM-to-thread relay bot for Discord.
//!
//! Users who direct-message the bot get a dedicated thread under a configured
//! staff channel; staff replies inside that thread are relayed back to the
//! user as direct messages. The bot also carries a set of moderation slash
//! commands and a minimal liveness HTTP endpoint for uptime monitoring.

pub mod bot;
pub mod config;
pub mod error;
pub mod http;
pub mod relay;
pub mod util;
