use dioxus_logger::tracing;
use serenity::all::{
    ChannelType, CommandInteraction, CommandOptionType, Context, CreateCommand,
    CreateCommandOption, CreateInteractionResponse, CreateInteractionResponseMessage,
    ResolvedValue, UserId,
};

use crate::{
    bot::command::{delete_response_after, string_option, ACKNOWLEDGEMENT_LIFETIME},
    config::Config,
    error::AppError,
    state::AppState,
};

pub const COMMAND: &str = "send";

pub const UNAUTHORIZED_MESSAGE: &str = "You are not authorized to use this command.";
pub const SENT_MESSAGE: &str = "Message Sent Successfully";

pub fn register() -> CreateCommand {
    CreateCommand::new(COMMAND)
        .description("Sends a message as the bot")
        .add_option(
            CreateCommandOption::new(CommandOptionType::String, "message", "Message to send")
                .required(true),
        )
        .add_option(
            CreateCommandOption::new(CommandOptionType::Channel, "channel", "Channel to send to")
                .channel_types(vec![ChannelType::Text, ChannelType::News])
                .required(true),
        )
}

/// Whether `user_id` may relay messages through the bot.
pub fn is_authorized(config: &Config, user_id: UserId) -> bool {
    user_id.get() == config.relay_operator_id
}

/// Handles `/send`.
///
/// The acknowledgement is sent before the relayed message and removed after
/// `ACKNOWLEDGEMENT_LIFETIME`, as is the refusal for other users.
pub async fn run(
    state: &AppState,
    ctx: &Context,
    command: &CommandInteraction,
) -> Result<(), AppError> {
    if !is_authorized(&state.config, command.user.id) {
        tracing::warn!("User {} attempted to use /send", command.user.id);

        respond(ctx, command, UNAUTHORIZED_MESSAGE).await?;
        delete_response_after(ctx, command, ACKNOWLEDGEMENT_LIFETIME).await;

        return Ok(());
    }

    let options = command.data.options();
    let message = string_option(&options, "message")?;
    let channel_id = options
        .iter()
        .find_map(|option| match option.value {
            ResolvedValue::Channel(channel) if option.name == "channel" => Some(channel.id),
            _ => None,
        })
        .ok_or_else(|| AppError::BadRequest("Missing option 'channel'".to_string()))?;

    respond(ctx, command, SENT_MESSAGE).await?;
    channel_id.say(&ctx.http, message).await?;

    tracing::info!("Relayed message to channel {}", channel_id);

    delete_response_after(ctx, command, ACKNOWLEDGEMENT_LIFETIME).await;

    Ok(())
}

async fn respond(ctx: &Context, command: &CommandInteraction, content: &str) -> Result<(), AppError> {
    let response =
        CreateInteractionResponse::Message(CreateInteractionResponseMessage::new().content(content));
    command.create_response(&ctx.http, response).await?;

    Ok(())
}
