use serenity::all::{Client, GatewayIntents};

use crate::bot::handler::Handler;
use crate::config::Config;
use crate::error::AppError;

/// Starts the Discord bot in a blocking manner
///
/// This function creates and starts the Discord bot client. It should be
/// called from within a tokio::spawn task since it will block until the bot
/// shuts down.
///
/// # Arguments
/// - `config` - Application configuration
///
/// # Returns
/// - `Ok(())` if the bot starts and runs successfully
/// - `Err(AppError)` if bot initialization or connection fails
pub async fn start_bot(config: &Config) -> Result<(), AppError> {
    // Configure gateway intents - what events the bot will receive.
    // MESSAGE_CONTENT and GUILD_MEMBERS are privileged intents - they must be
    // enabled in the Discord Developer Portal.
    let intents = GatewayIntents::GUILDS
        | GatewayIntents::GUILD_MESSAGES
        | GatewayIntents::DIRECT_MESSAGES
        | GatewayIntents::MESSAGE_CONTENT
        | GatewayIntents::GUILD_MEMBERS;

    let handler = Handler::new(config);

    let mut client = Client::builder(&config.discord_bot_token, intents)
        .event_handler(handler)
        .await?;

    tracing::info!("Starting Discord bot...");

    // Start the bot (this blocks until shutdown)
    client.start().await?;

    Ok(())
}
