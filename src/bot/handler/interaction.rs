use dioxus_logger::tracing;
use serenity::all::{
    CommandInteraction, Context, CreateInteractionResponse, CreateInteractionResponseMessage,
    EditInteractionResponse, Interaction,
};

use crate::{bot::command, state::AppState};

/// Shown in place of a command's reply when its handler failed.
pub const GENERIC_ERROR_MESSAGE: &str = "Something went wrong while running this command.";

/// Routes slash commands to their handlers.
///
/// Component presses are not handled here; paginators collect their own
/// button presses for the message they own.
pub async fn handle_interaction_create(state: &AppState, ctx: Context, interaction: Interaction) {
    let Interaction::Command(command) = interaction else {
        return;
    };

    tracing::debug!(
        "Command /{} invoked by {} in channel {}",
        command.data.name,
        command.user.id,
        command.channel_id
    );

    if let Err(e) = command::dispatch(state, &ctx, &command).await {
        tracing::error!("Command /{} failed: {}", command.data.name, e);
        report_failure(&ctx, &command).await;
    }
}

/// Tells the user the command failed.
///
/// The interaction may or may not have been acknowledged yet, so a fresh
/// response is tried first and the deferred response is edited otherwise.
async fn report_failure(ctx: &Context, command: &CommandInteraction) {
    let response = CreateInteractionResponse::Message(
        CreateInteractionResponseMessage::new()
            .content(GENERIC_ERROR_MESSAGE)
            .ephemeral(true),
    );

    if command.create_response(&ctx.http, response).await.is_ok() {
        return;
    }

    let edit = EditInteractionResponse::new()
        .content(GENERIC_ERROR_MESSAGE)
        .embeds(Vec::new())
        .components(Vec::new());

    if let Err(e) = command.edit_response(&ctx.http, edit).await {
        tracing::warn!(
            "Failed to report error for /{}: {:?}",
            command.data.name,
            e
        );
    }
}
