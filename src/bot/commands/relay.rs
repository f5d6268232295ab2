//! Relay management commands.

use serenity::all::{CommandInteraction, Context};

use crate::bot::commands::{respond_ephemeral, user_option};
use crate::error::AppError;
use crate::relay::{DiscordGateway, OpenOutcome, RelayRouter};

/// Opens a relay thread with the mentioned user.
///
/// Reuses the router's resolve-or-create path, so invoking the command for a
/// user who already has a thread reports the existing one instead of
/// shadowing it with a duplicate.
pub async fn add_user(
    router: &RelayRouter,
    ctx: &Context,
    command: &CommandInteraction,
) -> Result<(), AppError> {
    let Some(user) = user_option(command, "user") else {
        return respond_ephemeral(ctx, command, "Invalid user provided.").await;
    };

    let user_tag = user.tag();
    let gateway = DiscordGateway::new(ctx.http.clone());

    match router.open_thread(&gateway, user.id, &user_tag).await? {
        OpenOutcome::Created(_) => {
            respond_ephemeral(ctx, command, &format!("Thread created with {user_tag}.")).await
        }
        OpenOutcome::Existing(thread_id) => {
            respond_ephemeral(
                ctx,
                command,
                &format!("A thread with {user_tag} already exists: <#{thread_id}>."),
            )
            .await
        }
    }
}
