//! Slash command registration and dispatch.
//!
//! - `status` - `/status`, `/pstatus` and `/xstatus`
//! - `search` - `/search ps3` and `/search xbox360`
//! - `send` - Operator message relay

pub mod search;
pub mod send;
pub mod status;

use std::time::Duration;

use dioxus_logger::tracing;
use serenity::all::{CommandInteraction, Context, CreateCommand, ResolvedOption, ResolvedValue};

use crate::{error::AppError, state::AppState};

/// How long short-lived acknowledgements stay visible.
pub const ACKNOWLEDGEMENT_LIFETIME: Duration = Duration::from_secs(5);

/// Every global command the bot registers, in registration order.
pub fn create_commands() -> Vec<CreateCommand> {
    vec![
        status::register_status(),
        status::register_pstatus(),
        status::register_xstatus(),
        search::register(),
        send::register(),
    ]
}

/// Runs the handler for the invoked command.
///
/// # Returns
/// - `Ok(())` - Command handled, including user-facing refusals
/// - `Err(AppError)` - Handler failed; the caller reports it to the user
pub async fn dispatch(
    state: &AppState,
    ctx: &Context,
    command: &CommandInteraction,
) -> Result<(), AppError> {
    match command.data.name.as_str() {
        status::STATUS_COMMAND => status::run_status(state, ctx, command).await,
        status::PSTATUS_COMMAND => {
            status::run_platform_status(state, ctx, command, &state.catalog.playstation).await
        }
        status::XSTATUS_COMMAND => {
            status::run_platform_status(state, ctx, command, &state.catalog.xbox).await
        }
        search::COMMAND => search::run(state, ctx, command).await,
        send::COMMAND => send::run(state, ctx, command).await,
        other => {
            tracing::warn!("Received unknown command /{}", other);
            Ok(())
        }
    }
}

/// Deletes the command's response once `delay` has passed.
///
/// Failure is only logged; the response may already have been dismissed.
pub async fn delete_response_after(ctx: &Context, command: &CommandInteraction, delay: Duration) {
    tokio::time::sleep(delay).await;

    if let Err(e) = command.delete_response(&ctx.http).await {
        tracing::warn!(
            "Failed to delete response to /{}: {:?}",
            command.data.name,
            e
        );
    }
}

/// Looks up a required string option.
fn string_option<'a>(options: &[ResolvedOption<'a>], name: &str) -> Result<&'a str, AppError> {
    options
        .iter()
        .find_map(|option| match option.value {
            ResolvedValue::String(value) if option.name == name => Some(value),
            _ => None,
        })
        .ok_or_else(|| AppError::BadRequest(format!("Missing option '{}'", name)))
}
