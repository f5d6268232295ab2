//! Informational commands.

use serenity::all::{CommandInteraction, Context, CreateEmbed, Timestamp};

use crate::bot::commands::{respond_embed, respond_ephemeral, user_option};
use crate::error::AppError;

/// Embed colour shared by the info commands.
const INFO_COLOUR: u32 = 0x0099ff;

/// Displays basic information about the invoking guild.
pub async fn server_info(ctx: &Context, command: &CommandInteraction) -> Result<(), AppError> {
    let Some(guild_id) = command.guild_id else {
        return respond_ephemeral(ctx, command, "This command can only be used in a server.").await;
    };

    let guild = guild_id.to_partial_guild_with_counts(&ctx.http).await?;
    let member_count = guild
        .approximate_member_count
        .map(|count| count.to_string())
        .unwrap_or_else(|| "unknown".to_string());

    let embed = CreateEmbed::new()
        .colour(INFO_COLOUR)
        .title("Server Information")
        .field("Server Name", guild.name, true)
        .field("Total Members", member_count, true)
        .timestamp(Timestamp::now());

    respond_embed(ctx, command, embed).await
}

/// Displays basic information about a guild member.
pub async fn user_info(ctx: &Context, command: &CommandInteraction) -> Result<(), AppError> {
    let Some(guild_id) = command.guild_id else {
        return respond_ephemeral(ctx, command, "This command can only be used in a server.").await;
    };
    let Some(user) = user_option(command, "user") else {
        return respond_ephemeral(ctx, command, "Invalid user provided.").await;
    };

    let member = guild_id.member(&ctx.http, user.id).await?;
    let joined = member
        .joined_at
        .map(|timestamp| format!("<t:{}:D>", timestamp.unix_timestamp()))
        .unwrap_or_else(|| "unknown".to_string());

    let embed = CreateEmbed::new()
        .colour(INFO_COLOUR)
        .title("User Information")
        .field("Username", user.tag(), true)
        .field("Joined Server", joined, true)
        .timestamp(Timestamp::now());

    respond_embed(ctx, command, embed).await
}
