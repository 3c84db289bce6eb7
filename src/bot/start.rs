use dioxus_logger::tracing;
use serenity::all::{Client, GatewayIntents};

use crate::{bot::handler::Handler, error::AppError, state::AppState};

/// Builds the Discord client without connecting.
///
/// # Arguments
/// - `state` - Application state shared with every command handler
///
/// # Returns
/// - `Ok(Client)` - Client ready to be started
/// - `Err(AppError::DiscordErr)` - Token rejected or client construction failed
pub async fn init_bot(state: AppState) -> Result<Client, AppError> {
    let intents = GatewayIntents::GUILDS;
    let token = state.config.discord_bot_token.clone();

    let client = Client::builder(&token, intents)
        .event_handler(Handler::new(state))
        .await?;

    Ok(client)
}

/// Connects to the gateway and processes events until the client shuts down.
///
/// # Returns
/// - `Ok(())` - The shard manager stopped cleanly
/// - `Err(AppError::DiscordErr)` - Connection failed or was lost irrecoverably
pub async fn start_bot(mut client: Client) -> Result<(), AppError> {
    tracing::info!("Starting Discord bot...");

    client.start().await?;

    Ok(())
}
