//! Slash command definitions and dispatch.
//!
//! Commands are registered globally on ready and dispatched by name from the
//! interaction handler. Each command is a thin request/response wrapper over
//! serenity; the heavy lifting (permissions, rate limits) stays on Discord's
//! side.

pub mod info;
pub mod moderation;
pub mod relay;

use serenity::all::{
    CommandInteraction, CommandOptionType, Context, CreateCommand, CreateCommandOption,
    CreateEmbed, CreateInteractionResponse, CreateInteractionResponseMessage, ResolvedValue, Role,
    RoleId, User,
};

use crate::error::AppError;
use crate::relay::RelayRouter;

/// Create all slash commands for registration
pub fn create_commands() -> Vec<CreateCommand> {
    vec![
        CreateCommand::new("add_user")
            .description("Create a relay thread with the mentioned user")
            .add_option(
                CreateCommandOption::new(CommandOptionType::User, "user", "The user to add")
                    .required(true),
            ),
        CreateCommand::new("add_role")
            .description("Add a role to a user")
            .add_option(
                CreateCommandOption::new(
                    CommandOptionType::User,
                    "user",
                    "The user to give the role",
                )
                .required(true),
            )
            .add_option(
                CreateCommandOption::new(CommandOptionType::Role, "role", "The role to assign")
                    .required(true),
            ),
        CreateCommand::new("remove_role")
            .description("Remove a role from a user")
            .add_option(
                CreateCommandOption::new(
                    CommandOptionType::User,
                    "user",
                    "The user to remove the role from",
                )
                .required(true),
            )
            .add_option(
                CreateCommandOption::new(CommandOptionType::Role, "role", "The role to remove")
                    .required(true),
            ),
        CreateCommand::new("mute")
            .description("Mute a user")
            .add_option(
                CreateCommandOption::new(CommandOptionType::User, "user", "The user to mute")
                    .required(true),
            )
            .add_option(
                CreateCommandOption::new(
                    CommandOptionType::String,
                    "time",
                    "Duration to mute the user (e.g., 10m, 1h)",
                )
                .required(false),
            ),
        CreateCommand::new("unmute")
            .description("Unmute a user")
            .add_option(
                CreateCommandOption::new(CommandOptionType::User, "user", "The user to unmute")
                    .required(true),
            ),
        CreateCommand::new("warn")
            .description("Warn a user")
            .add_option(
                CreateCommandOption::new(CommandOptionType::User, "user", "The user to warn")
                    .required(true),
            )
            .add_option(
                CreateCommandOption::new(
                    CommandOptionType::String,
                    "reason",
                    "Reason for warning",
                )
                .required(false),
            ),
        CreateCommand::new("clear")
            .description("Clear messages")
            .add_option(
                CreateCommandOption::new(
                    CommandOptionType::Integer,
                    "amount",
                    "Number of messages to clear",
                )
                .required(true),
            ),
        CreateCommand::new("tempban")
            .description("Temporarily ban a user")
            .add_option(
                CreateCommandOption::new(CommandOptionType::User, "user", "The user to tempban")
                    .required(true),
            )
            .add_option(
                CreateCommandOption::new(
                    CommandOptionType::String,
                    "time",
                    "Duration of the tempban (e.g., 10m, 1h)",
                )
                .required(true),
            ),
        CreateCommand::new("softban")
            .description("Softban a user")
            .add_option(
                CreateCommandOption::new(CommandOptionType::User, "user", "The user to softban")
                    .required(true),
            )
            .add_option(
                CreateCommandOption::new(
                    CommandOptionType::String,
                    "reason",
                    "Reason for softbanning",
                )
                .required(false),
            ),
        CreateCommand::new("serverinfo").description("Displays server information"),
        CreateCommand::new("userinfo")
            .description("Displays information about a user")
            .add_option(
                CreateCommandOption::new(
                    CommandOptionType::User,
                    "user",
                    "The user to show info about",
                )
                .required(true),
            ),
        CreateCommand::new("lock").description("Lock a channel"),
        CreateCommand::new("unlock").description("Unlock a channel"),
        CreateCommand::new("nick")
            .description("Change a user's nickname")
            .add_option(
                CreateCommandOption::new(
                    CommandOptionType::User,
                    "user",
                    "The user to change nickname",
                )
                .required(true),
            )
            .add_option(
                CreateCommandOption::new(
                    CommandOptionType::String,
                    "new_nickname",
                    "New nickname",
                )
                .required(true),
            ),
        CreateCommand::new("resetnick")
            .description("Reset a user's nickname")
            .add_option(
                CreateCommandOption::new(
                    CommandOptionType::User,
                    "user",
                    "The user to reset nickname",
                )
                .required(true),
            ),
    ]
}

/// Dispatches a slash command by name.
pub async fn dispatch(
    router: &RelayRouter,
    muted_role: RoleId,
    ctx: &Context,
    command: &CommandInteraction,
) -> Result<(), AppError> {
    match command.data.name.as_str() {
        "add_user" => relay::add_user(router, ctx, command).await,
        "add_role" => moderation::add_role(ctx, command).await,
        "remove_role" => moderation::remove_role(ctx, command).await,
        "mute" => moderation::mute(muted_role, ctx, command).await,
        "unmute" => moderation::unmute(muted_role, ctx, command).await,
        "warn" => moderation::warn(ctx, command).await,
        "clear" => moderation::clear(ctx, command).await,
        "tempban" => moderation::tempban(ctx, command).await,
        "softban" => moderation::softban(ctx, command).await,
        "serverinfo" => info::server_info(ctx, command).await,
        "userinfo" => info::user_info(ctx, command).await,
        "lock" => moderation::lock(ctx, command).await,
        "unlock" => moderation::unlock(ctx, command).await,
        "nick" => moderation::nick(ctx, command).await,
        "resetnick" => moderation::reset_nick(ctx, command).await,
        _ => respond_ephemeral(ctx, command, "Unknown command!").await,
    }
}

/// Replies to an interaction with an ephemeral text message.
pub(crate) async fn respond_ephemeral(
    ctx: &Context,
    command: &CommandInteraction,
    content: &str,
) -> Result<(), AppError> {
    let message = CreateInteractionResponseMessage::new()
        .content(content)
        .ephemeral(true);
    command
        .create_response(&ctx.http, CreateInteractionResponse::Message(message))
        .await?;
    Ok(())
}

/// Replies to an interaction with an ephemeral embed.
pub(crate) async fn respond_embed(
    ctx: &Context,
    command: &CommandInteraction,
    embed: CreateEmbed,
) -> Result<(), AppError> {
    let message = CreateInteractionResponseMessage::new()
        .embed(embed)
        .ephemeral(true);
    command
        .create_response(&ctx.http, CreateInteractionResponse::Message(message))
        .await?;
    Ok(())
}

/// Extracts a user option by name.
pub(crate) fn user_option<'a>(command: &'a CommandInteraction, name: &str) -> Option<&'a User> {
    command
        .data
        .options()
        .into_iter()
        .find(|option| option.name == name)
        .and_then(|option| match option.value {
            ResolvedValue::User(user, _) => Some(user),
            _ => None,
        })
}

/// Extracts a role option by name.
pub(crate) fn role_option<'a>(command: &'a CommandInteraction, name: &str) -> Option<&'a Role> {
    command
        .data
        .options()
        .into_iter()
        .find(|option| option.name == name)
        .and_then(|option| match option.value {
            ResolvedValue::Role(role) => Some(role),
            _ => None,
        })
}

/// Extracts a string option by name.
pub(crate) fn string_option<'a>(command: &'a CommandInteraction, name: &str) -> Option<&'a str> {
    command
        .data
        .options()
        .into_iter()
        .find(|option| option.name == name)
        .and_then(|option| match option.value {
            ResolvedValue::String(value) => Some(value),
            _ => None,
        })
}

/// Extracts an integer option by name.
pub(crate) fn integer_option(command: &CommandInteraction, name: &str) -> Option<i64> {
    command
        .data
        .options()
        .into_iter()
        .find(|option| option.name == name)
        .and_then(|option| match option.value {
            ResolvedValue::Integer(value) => Some(value),
            _ => None,
        })
}
