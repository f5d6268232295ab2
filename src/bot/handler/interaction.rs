//! Interaction event handler dispatching slash commands.

use serenity::all::{
    Context, CreateInteractionResponse, CreateInteractionResponseMessage, Interaction, RoleId,
};

use crate::bot::commands;
use crate::relay::RelayRouter;

/// Handles the interaction_create event for slash commands.
///
/// Dispatches the command by name. A failing command is logged and answered
/// with a generic ephemeral error message; the error reply itself failing
/// (for example when the command already acknowledged the interaction) is
/// logged and dropped.
///
/// # Arguments
/// - `router` - Relay router, used by the `add_user` command
/// - `muted_role` - Role applied by the `mute` command
/// - `ctx` - Discord context
/// - `interaction` - The interaction received from Discord
pub async fn handle_interaction_create(
    router: &RelayRouter,
    muted_role: RoleId,
    ctx: Context,
    interaction: Interaction,
) {
    let Interaction::Command(command) = interaction else {
        return;
    };

    if let Err(e) = commands::dispatch(router, muted_role, &ctx, &command).await {
        tracing::error!("Error executing /{}: {:?}", command.data.name, e);

        let reply = CreateInteractionResponseMessage::new()
            .content("There was an error executing the command.")
            .ephemeral(true);
        if let Err(e) = command
            .create_response(&ctx.http, CreateInteractionResponse::Message(reply))
            .await
        {
            tracing::error!("Failed to send error response: {:?}", e);
        }
    }
}
