//! Moderation commands.
//!
//! Each command validates its options, performs a single Discord API call (or
//! two for the timed variants), and confirms with an ephemeral reply. Timed
//! actions (`mute` with a duration, `tempban`) schedule their reversal on a
//! detached tokio task; a restart in the interim loses the timer, matching
//! the in-memory scope of the rest of the bot.

use serenity::all::{
    CommandInteraction, Context, EditMember, GetMessages, PermissionOverwrite,
    PermissionOverwriteType, Permissions, RoleId,
};

use crate::bot::commands::{
    integer_option, respond_ephemeral, role_option, string_option, user_option,
};
use crate::error::AppError;
use crate::util::parse::parse_duration;

/// Default mute duration when none is supplied.
const DEFAULT_MUTE_DURATION: &str = "1h";

/// Days of message history removed by a softban.
const SOFTBAN_DELETE_DAYS: u8 = 7;

pub async fn add_role(ctx: &Context, command: &CommandInteraction) -> Result<(), AppError> {
    let Some(guild_id) = command.guild_id else {
        return respond_ephemeral(ctx, command, "This command can only be used in a server.").await;
    };
    let (Some(user), Some(role)) = (user_option(command, "user"), role_option(command, "role")) else {
        return respond_ephemeral(ctx, command, "Invalid user or role provided.").await;
    };

    let member = guild_id.member(&ctx.http, user.id).await?;
    member.add_role(&ctx.http, role.id).await?;

    respond_ephemeral(
        ctx,
        command,
        &format!("Role {} has been added to {}", role.name, user.tag()),
    )
    .await
}

pub async fn remove_role(ctx: &Context, command: &CommandInteraction) -> Result<(), AppError> {
    let Some(guild_id) = command.guild_id else {
        return respond_ephemeral(ctx, command, "This command can only be used in a server.").await;
    };
    let (Some(user), Some(role)) = (user_option(command, "user"), role_option(command, "role")) else {
        return respond_ephemeral(ctx, command, "Invalid user or role provided.").await;
    };

    let member = guild_id.member(&ctx.http, user.id).await?;
    member.remove_role(&ctx.http, role.id).await?;

    respond_ephemeral(
        ctx,
        command,
        &format!("Role {} has been removed from {}", role.name, user.tag()),
    )
    .await
}

/// Applies the muted role to a user and schedules its removal.
pub async fn mute(
    muted_role: RoleId,
    ctx: &Context,
    command: &CommandInteraction,
) -> Result<(), AppError> {
    let Some(guild_id) = command.guild_id else {
        return respond_ephemeral(ctx, command, "This command can only be used in a server.").await;
    };
    let Some(user) = user_option(command, "user") else {
        return respond_ephemeral(ctx, command, "Invalid user provided.").await;
    };

    let time = string_option(command, "time").unwrap_or(DEFAULT_MUTE_DURATION);
    let duration = parse_duration(time)?;

    let member = guild_id.member(&ctx.http, user.id).await?;
    if member.roles.contains(&muted_role) {
        return respond_ephemeral(ctx, command, &format!("{} is already muted.", user.tag()))
            .await;
    }

    member.add_role(&ctx.http, muted_role).await?;
    respond_ephemeral(
        ctx,
        command,
        &format!("{} has been muted for {}.", user.tag(), time),
    )
    .await?;

    let http = ctx.http.clone();
    let user_id = user.id;
    let user_tag = user.tag();
    tokio::spawn(async move {
        tokio::time::sleep(duration).await;
        if let Err(e) = http
            .remove_member_role(guild_id, user_id, muted_role, Some("Mute expired"))
            .await
        {
            tracing::error!("Failed to unmute {} after mute expiry: {:?}", user_tag, e);
        }
    });

    Ok(())
}

pub async fn unmute(
    muted_role: RoleId,
    ctx: &Context,
    command: &CommandInteraction,
) -> Result<(), AppError> {
    let Some(guild_id) = command.guild_id else {
        return respond_ephemeral(ctx, command, "This command can only be used in a server.").await;
    };
    let Some(user) = user_option(command, "user") else {
        return respond_ephemeral(ctx, command, "Invalid user provided.").await;
    };

    let member = guild_id.member(&ctx.http, user.id).await?;
    if !member.roles.contains(&muted_role) {
        return respond_ephemeral(ctx, command, &format!("{} is not muted.", user.tag())).await;
    }

    member.remove_role(&ctx.http, muted_role).await?;
    respond_ephemeral(ctx, command, &format!("{} has been unmuted.", user.tag())).await
}

pub async fn warn(ctx: &Context, command: &CommandInteraction) -> Result<(), AppError> {
    let Some(user) = user_option(command, "user") else {
        return respond_ephemeral(ctx, command, "Invalid user provided.").await;
    };
    let reason = string_option(command, "reason").unwrap_or("No reason provided");

    respond_ephemeral(
        ctx,
        command,
        &format!("{} has been warned. Reason: {}", user.tag(), reason),
    )
    .await
}

/// Bulk-deletes recent messages in the invoking channel.
pub async fn clear(ctx: &Context, command: &CommandInteraction) -> Result<(), AppError> {
    if command.guild_id.is_none() {
        return respond_ephemeral(ctx, command, "This command can only be used in a server.").await;
    }

    let amount = integer_option(command, "amount").unwrap_or(0);
    if !(1..=100).contains(&amount) {
        return respond_ephemeral(ctx, command, "Amount must be between 1 and 100.").await;
    }

    let messages = command
        .channel_id
        .messages(&ctx.http, GetMessages::new().limit(amount as u8))
        .await?;
    command
        .channel_id
        .delete_messages(&ctx.http, messages.iter().map(|message| message.id))
        .await?;

    respond_ephemeral(ctx, command, &format!("Cleared {} messages.", messages.len())).await
}

/// Bans a user and schedules the unban.
pub async fn tempban(ctx: &Context, command: &CommandInteraction) -> Result<(), AppError> {
    let Some(guild_id) = command.guild_id else {
        return respond_ephemeral(ctx, command, "This command can only be used in a server.").await;
    };
    let (Some(user), Some(time)) = (user_option(command, "user"), string_option(command, "time"))
    else {
        return respond_ephemeral(ctx, command, "Invalid user or duration provided.").await;
    };

    let duration = parse_duration(time)?;

    guild_id
        .ban_with_reason(&ctx.http, user.id, 0, "Temporary ban")
        .await?;
    respond_ephemeral(
        ctx,
        command,
        &format!("{} has been temporarily banned for {}.", user.tag(), time),
    )
    .await?;

    let http = ctx.http.clone();
    let user_id = user.id;
    let user_tag = user.tag();
    tokio::spawn(async move {
        tokio::time::sleep(duration).await;
        if let Err(e) = guild_id.unban(&http, user_id).await {
            tracing::error!("Failed to unban {} after tempban expiry: {:?}", user_tag, e);
        }
    });

    Ok(())
}

/// Bans and immediately unbans a user to purge their recent messages.
pub async fn softban(ctx: &Context, command: &CommandInteraction) -> Result<(), AppError> {
    let Some(guild_id) = command.guild_id else {
        return respond_ephemeral(ctx, command, "This command can only be used in a server.").await;
    };
    let Some(user) = user_option(command, "user") else {
        return respond_ephemeral(ctx, command, "Invalid user provided.").await;
    };
    let reason = string_option(command, "reason").unwrap_or("No reason provided");

    guild_id
        .ban_with_reason(&ctx.http, user.id, SOFTBAN_DELETE_DAYS, reason)
        .await?;
    guild_id.unban(&ctx.http, user.id).await?;

    respond_ephemeral(
        ctx,
        command,
        &format!("{} has been softbanned. Reason: {}", user.tag(), reason),
    )
    .await
}

/// Denies SEND_MESSAGES for @everyone in the invoking channel.
pub async fn lock(ctx: &Context, command: &CommandInteraction) -> Result<(), AppError> {
    let Some(guild_id) = command.guild_id else {
        return respond_ephemeral(ctx, command, "This command can only be used in a server.").await;
    };

    // The @everyone role id equals the guild id
    let overwrite = PermissionOverwrite {
        allow: Permissions::empty(),
        deny: Permissions::SEND_MESSAGES,
        kind: PermissionOverwriteType::Role(RoleId::new(guild_id.get())),
    };
    command
        .channel_id
        .create_permission(&ctx.http, overwrite)
        .await?;

    respond_ephemeral(
        ctx,
        command,
        &format!("Channel <#{}> has been locked.", command.channel_id),
    )
    .await
}

/// Restores SEND_MESSAGES for @everyone in the invoking channel.
pub async fn unlock(ctx: &Context, command: &CommandInteraction) -> Result<(), AppError> {
    let Some(guild_id) = command.guild_id else {
        return respond_ephemeral(ctx, command, "This command can only be used in a server.").await;
    };

    let overwrite = PermissionOverwrite {
        allow: Permissions::SEND_MESSAGES,
        deny: Permissions::empty(),
        kind: PermissionOverwriteType::Role(RoleId::new(guild_id.get())),
    };
    command
        .channel_id
        .create_permission(&ctx.http, overwrite)
        .await?;

    respond_ephemeral(
        ctx,
        command,
        &format!("Channel <#{}> has been unlocked.", command.channel_id),
    )
    .await
}

pub async fn nick(ctx: &Context, command: &CommandInteraction) -> Result<(), AppError> {
    let Some(guild_id) = command.guild_id else {
        return respond_ephemeral(ctx, command, "This command can only be used in a server.").await;
    };
    let (Some(user), Some(new_nickname)) = (
        user_option(command, "user"),
        string_option(command, "new_nickname"),
    ) else {
        return respond_ephemeral(ctx, command, "Invalid user or nickname provided.").await;
    };

    guild_id
        .edit_member(&ctx.http, user.id, EditMember::new().nickname(new_nickname))
        .await?;

    respond_ephemeral(
        ctx,
        command,
        &format!(
            "Nickname for {} has been changed to {}",
            user.tag(),
            new_nickname
        ),
    )
    .await
}

pub async fn reset_nick(ctx: &Context, command: &CommandInteraction) -> Result<(), AppError> {
    let Some(guild_id) = command.guild_id else {
        return respond_ephemeral(ctx, command, "This command can only be used in a server.").await;
    };
    let Some(user) = user_option(command, "user") else {
        return respond_ephemeral(ctx, command, "Invalid user provided.").await;
    };

    // An empty nickname clears the override on Discord's side
    guild_id
        .edit_member(&ctx.http, user.id, EditMember::new().nickname(String::new()))
        .await?;

    respond_ephemeral(
        ctx,
        command,
        &format!("Nickname for {} has been reset.", user.tag()),
    )
    .await
}
