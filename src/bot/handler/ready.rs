//! Ready event handler for bot initialization.
//!
//! The ready event fires once per gateway connection after authentication. The
//! bot uses it to (re)register its global slash commands so the command list
//! Discord shows always matches this build.

use dioxus_logger::tracing;
use serenity::all::{Command, Context, Ready};

use crate::bot::command::create_commands;

/// Handles the ready event when the bot connects to Discord.
///
/// Registration failures are logged; the bot stays connected so commands
/// registered by a previous run keep working.
///
/// # Arguments
/// - `ctx` - Discord context for the HTTP client
/// - `ready` - Ready event data containing bot user information
pub async fn handle_ready(ctx: Context, ready: Ready) {
    tracing::info!("{} is connected to Discord", ready.user.name);

    match Command::set_global_commands(&ctx.http, create_commands()).await {
        Ok(commands) => tracing::info!("Registered {} global commands", commands.len()),
        Err(e) => tracing::error!("Failed to register global commands: {:?}", e),
    }
}
