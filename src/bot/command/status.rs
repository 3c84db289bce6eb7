use dioxus_logger::tracing;
use serenity::all::{CommandInteraction, Context, CreateCommand, EditInteractionResponse};

use crate::{
    bot::embed::{build_platform_status_embed, build_status_embed},
    error::AppError,
    model::status::EndpointCheck,
    service::status::StatusReportService,
    state::AppState,
};

pub const STATUS_COMMAND: &str = "status";
pub const PSTATUS_COMMAND: &str = "pstatus";
pub const XSTATUS_COMMAND: &str = "xstatus";

pub const STATUS_TITLE: &str = "Current Status";

/// Edited into the response when a status page yielded nothing to report.
pub const NO_STATUS_MESSAGE: &str = "No status information is currently available.";

pub fn register_status() -> CreateCommand {
    CreateCommand::new(STATUS_COMMAND).description("Shows the status of Arisen Studio services")
}

pub fn register_pstatus() -> CreateCommand {
    CreateCommand::new(PSTATUS_COMMAND).description("Shows the status of PlayStation Network")
}

pub fn register_xstatus() -> CreateCommand {
    CreateCommand::new(XSTATUS_COMMAND).description("Shows the status of Xbox Live")
}

/// Handles `/status`.
///
/// Defers first since the checks run for up to the HTTP timeout.
pub async fn run_status(
    state: &AppState,
    ctx: &Context,
    command: &CommandInteraction,
) -> Result<(), AppError> {
    command.defer(&ctx.http).await?;

    let service = StatusReportService::new(state.fetcher.as_ref(), state.browser.clone());
    let report = service
        .build_report(STATUS_TITLE, &state.catalog.services)
        .await;

    let embed = build_status_embed(&report, state.config.embed_color)?;
    command
        .edit_response(&ctx.http, EditInteractionResponse::new().embed(embed))
        .await?;

    Ok(())
}

/// Handles `/pstatus` and `/xstatus`.
///
/// # Arguments
/// - `state` - Application state
/// - `ctx` - Discord context
/// - `command` - Invoking interaction
/// - `endpoint` - Scrape endpoint for the platform's status page
pub async fn run_platform_status(
    state: &AppState,
    ctx: &Context,
    command: &CommandInteraction,
    endpoint: &EndpointCheck,
) -> Result<(), AppError> {
    command.defer(&ctx.http).await?;

    let service = StatusReportService::new(state.fetcher.as_ref(), state.browser.clone());
    let title = format!("{} Status", endpoint.name);
    let report = service
        .build_report(&title, std::slice::from_ref(endpoint))
        .await;

    if report.is_empty() {
        tracing::warn!("No status could be scraped for {}", endpoint.name);
    }

    let response = match build_platform_status_embed(&report, state.config.embed_color)? {
        Some(embed) => EditInteractionResponse::new().embed(embed),
        None => EditInteractionResponse::new().content(NO_STATUS_MESSAGE),
    };
    command.edit_response(&ctx.http, response).await?;

    Ok(())
}
